//! Column configuration errors.

use thiserror::Error;

use crate::column::ColumnKey;

/// Invalid column configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("column {index} has an empty key")]
    EmptyKey { index: usize },

    #[error("column key '{key}' is used more than once")]
    DuplicateKey { key: ColumnKey },

    #[error("column '{key}' has negative width {width}")]
    NegativeWidth { key: ColumnKey, width: i32 },

    #[error("column '{key}' has negative minimum width {min_width}")]
    NegativeMinWidth { key: ColumnKey, min_width: i32 },

    #[error("scrollbar gutter at index {index} must be the only gutter and the last cell")]
    MisplacedGutter { index: usize },
}
