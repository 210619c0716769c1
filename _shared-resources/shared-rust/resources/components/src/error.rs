// Component Errors
// Errors raised while converting configuration into component data

use thiserror::Error;

/// Errors produced when turning YAML configuration into a tab set
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A color string could not be parsed (expects `#RRGGBB`, `#RGB` or a named color)
    #[error("invalid color '{value}' for {field}")]
    InvalidColor { field: String, value: String },

    /// A tab id appears more than once in the same tab set
    #[error("duplicate tab id '{0}'")]
    DuplicateTabId(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
