pub use blocks::*;
pub use items::*;
pub use nav::*;
pub use pages::*;
pub use sections::*;
pub use theme::*;
pub use widgets::*;

mod blocks;
mod items;
mod nav;
mod pages;
mod sections;
mod theme;
mod widgets;
