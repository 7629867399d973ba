//! Reusable UI components for the brochure frontend

pub mod blocks;
mod cards;
mod error_state;
mod footer;
mod nav;
pub mod sections;
mod spinner;

pub use blocks::DynamicBlocks;
pub use cards::CardGrid;
pub use error_state::ErrorState;
pub use footer::Footer;
pub use nav::SiteNav;
pub use spinner::Spinner;
