pub mod axis;
pub mod filter;
pub mod format;
pub mod histogram;
pub mod listing;
pub mod stats;
pub mod strip;
pub mod view;

pub use filter::{FilterState, Page};
pub use view::{render, render_home, HomeView, PageView};
