//! Page components, one per resolvable view

mod affiliate;
mod blog;
mod debug;
mod features;
mod gallery;
mod information;
mod landing;
mod team;

pub use affiliate::AffiliatePage;
pub use blog::{BlogIndexPage, BlogPostPage};
pub use debug::{DebugFeaturesPage, DebugLandingPage, DebugPage};
pub use features::{FeaturesIndexPage, FeaturesPage};
pub use gallery::GalleryPage;
pub use information::{AboutIndexPage, InformationPage};
pub use landing::LandingPage;
pub use team::TeamPage;
