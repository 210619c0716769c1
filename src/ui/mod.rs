// UI module
// Host chrome (header, footer) around the tab set

pub mod app_view;
pub mod styles;

pub use app_view::{app_layout, render_app, AppAreas};
pub use styles::Styles;
