// Utilities module
// Animation, style tables and helpers shared by the tab components

pub mod animation;
pub mod helpers;
pub mod styles;

pub use animation::{AnimatedValue, Easing, Motion, Sequence};
pub use helpers::{hex_color, parse_color};
pub use styles::{
    size_metrics, SizeMetrics, StyleDescriptor, StyleOverrides, TabVisualState,
};
