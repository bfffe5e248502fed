//! Serializable column configuration.
//!
//! Hosts usually keep columns in a config file or their own state and build
//! [`ColumnDescriptor`]s from it for every render. Validation happens here so
//! the runtime components can assume a well-formed header.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::column::{with_scrollbar_gutter, ColumnDescriptor, ColumnKey, Fixed};
use crate::context::Direction;
use crate::error::ConfigError;
use crate::registry::ColumnWidth;

/// One column as the host configures it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnConfig {
    pub key: ColumnKey,
    #[serde(default)]
    pub title: Option<String>,
    pub width: i32,
    #[serde(default)]
    pub min_width: Option<i32>,
    #[serde(default)]
    pub resizable: bool,
    #[serde(default)]
    pub fixed: Option<Fixed>,
}

impl ColumnConfig {
    pub fn new(key: impl Into<ColumnKey>, width: i32) -> Self {
        Self {
            key: key.into(),
            title: None,
            width,
            min_width: None,
            resizable: false,
            fixed: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn resizable(mut self) -> Self {
        self.resizable = true;
        self
    }

    pub fn min_width(mut self, min_width: i32) -> Self {
        self.min_width = Some(min_width);
        self
    }

    pub fn fixed(mut self, side: Fixed) -> Self {
        self.fixed = Some(side);
        self
    }

    /// Header text, falling back to the key.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(self.key.as_str())
    }

    pub fn descriptor(&self) -> ColumnDescriptor {
        ColumnDescriptor {
            key: self.key.clone(),
            width: self.width,
            min_width: self.min_width,
            resizable: self.resizable,
            fixed: self.fixed,
            is_scrollbar_gutter: false,
        }
    }
}

/// Table-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableConfig {
    pub columns: Vec<ColumnConfig>,
    #[serde(default)]
    pub direction: Direction,
    /// Width of the scrollbar gutter; 0 reserves none.
    #[serde(default)]
    pub scrollbar_size: i32,
}

impl TableConfig {
    pub fn new(columns: Vec<ColumnConfig>) -> Self {
        Self {
            columns,
            ..Default::default()
        }
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn scrollbar_size(mut self, size: i32) -> Self {
        self.scrollbar_size = size;
        self
    }

    /// Full header row: configured columns plus the gutter, validated.
    pub fn header_cells(&self) -> Result<Vec<ColumnDescriptor>, ConfigError> {
        let columns = self.columns.iter().map(ColumnConfig::descriptor).collect();
        let cells = with_scrollbar_gutter(columns, self.scrollbar_size);
        validate(&cells)?;
        Ok(cells)
    }

    /// Store the widths of a completed resize back into the configuration.
    pub fn apply_widths(&mut self, widths: &[ColumnWidth]) {
        for entry in widths {
            if let Some(column) = self.columns.iter_mut().find(|c| c.key == entry.column_key) {
                column.width = entry.width;
            }
        }
    }
}

/// Check that a header row is well formed.
pub fn validate(cells: &[ColumnDescriptor]) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for (index, cell) in cells.iter().enumerate() {
        if cell.is_scrollbar_gutter {
            if index + 1 != cells.len() {
                return Err(ConfigError::MisplacedGutter { index });
            }
            continue;
        }
        if cell.key.as_str().is_empty() {
            return Err(ConfigError::EmptyKey { index });
        }
        if !seen.insert(&cell.key) {
            return Err(ConfigError::DuplicateKey {
                key: cell.key.clone(),
            });
        }
        if cell.width < 0 {
            return Err(ConfigError::NegativeWidth {
                key: cell.key.clone(),
                width: cell.width,
            });
        }
        if let Some(min_width) = cell.min_width.filter(|m| *m < 0) {
            return Err(ConfigError::NegativeMinWidth {
                key: cell.key.clone(),
                min_width,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gutter_must_be_last() {
        let cells = vec![
            ColumnDescriptor::scrollbar_gutter(1, None),
            ColumnDescriptor::new("a", 10),
        ];
        assert_eq!(validate(&cells), Err(ConfigError::MisplacedGutter { index: 0 }));
    }

    #[test]
    fn duplicate_keys_are_rejected() {
        let config = TableConfig::new(vec![ColumnConfig::new("a", 1), ColumnConfig::new("a", 2)]);
        assert_eq!(
            config.header_cells(),
            Err(ConfigError::DuplicateKey { key: "a".into() })
        );
    }

    #[test]
    fn title_falls_back_to_key() {
        assert_eq!(ColumnConfig::new("id", 4).display_title(), "id");
        assert_eq!(ColumnConfig::new("id", 4).title("ID").display_title(), "ID");
    }
}
