// Core module
// Tab set model, layout registry and the interaction controller

pub mod controller;
pub mod layout;
pub mod tabs;

pub use controller::{
    scroll_target_for, IndicatorGeometry, InteractionState, TabChangeCallback, TabsController,
};
pub use layout::{LayoutRegistry, TabLayoutRecord};
pub use tabs::{
    Badge, LayoutMode, TabDescriptor, TabKey, TabSetConfig, TabSize, TabVariant,
    BADGE_COUNT_LIMIT, DEFAULT_INDICATOR_COLOR,
};
