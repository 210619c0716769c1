// Core infrastructure module
// Application state and event mapping

pub mod app;
pub mod events;

pub use app::App;
pub use events::{AppEvent, EventHandler};
