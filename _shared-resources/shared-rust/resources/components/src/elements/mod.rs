// GUI Elements module
// Visual components that render UI elements

pub mod tab_strip;

pub use tab_strip::*;
