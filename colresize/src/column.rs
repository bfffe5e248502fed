//! Column identity and per-render column descriptors.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identity of a column across renders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnKey(String);

impl ColumnKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColumnKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ColumnKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

impl From<String> for ColumnKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

/// Physical table edge a column is pinned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Fixed {
    Left,
    Right,
}

/// Key used for the synthetic scrollbar cell appended to the header.
pub const SCROLLBAR_GUTTER_KEY: &str = "__scrollbar_gutter";

/// One rendered header cell.
///
/// `fixed` and `is_scrollbar_gutter` are layout facts for the current render
/// pass and never change while a drag is running.
///
/// # Examples
///
/// ```
/// use colresize::{ColumnDescriptor, Fixed};
///
/// let columns = vec![
///     ColumnDescriptor::new("name", 30).resizable().min_width(8),
///     ColumnDescriptor::new("status", 12).fixed(Fixed::Right),
/// ];
/// assert!(columns[0].resizable);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDescriptor {
    pub key: ColumnKey,
    /// Configured width in cells.
    pub width: i32,
    pub min_width: Option<i32>,
    pub resizable: bool,
    pub fixed: Option<Fixed>,
    pub is_scrollbar_gutter: bool,
}

impl ColumnDescriptor {
    /// Create a non-resizable, unpinned column.
    pub fn new(key: impl Into<ColumnKey>, width: i32) -> Self {
        Self {
            key: key.into(),
            width,
            min_width: None,
            resizable: false,
            fixed: None,
            is_scrollbar_gutter: false,
        }
    }

    /// Synthetic trailing cell reserving room for the vertical scrollbar.
    ///
    /// The gutter follows the pinning of the last data column so that a
    /// right-pinned table edge stays pinned through the gutter.
    pub fn scrollbar_gutter(width: i32, last_column: Option<&ColumnDescriptor>) -> Self {
        Self {
            key: ColumnKey::new(SCROLLBAR_GUTTER_KEY),
            width,
            min_width: None,
            resizable: false,
            fixed: last_column.and_then(|c| c.fixed),
            is_scrollbar_gutter: true,
        }
    }

    /// Allow the user to drag this column's boundary.
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

    pub fn is_fixed(&self, side: Fixed) -> bool {
        self.fixed == Some(side)
    }

    /// Lower bound for a dragged width; absent means 0.
    pub fn effective_min_width(&self) -> i32 {
        self.min_width.unwrap_or(0)
    }
}

/// Append a scrollbar gutter cell to `columns` when the layout reserves one.
pub fn with_scrollbar_gutter(
    mut columns: Vec<ColumnDescriptor>,
    gutter_width: i32,
) -> Vec<ColumnDescriptor> {
    if gutter_width > 0 {
        let gutter = ColumnDescriptor::scrollbar_gutter(gutter_width, columns.last());
        columns.push(gutter);
    }
    columns
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gutter_inherits_last_column_pin() {
        let columns = with_scrollbar_gutter(
            vec![
                ColumnDescriptor::new("a", 10),
                ColumnDescriptor::new("b", 10).fixed(Fixed::Right),
            ],
            1,
        );
        let gutter = columns.last().unwrap();
        assert!(gutter.is_scrollbar_gutter);
        assert_eq!(gutter.fixed, Some(Fixed::Right));
    }

    #[test]
    fn zero_width_gutter_is_not_reserved() {
        let columns = with_scrollbar_gutter(vec![ColumnDescriptor::new("a", 10)], 0);
        assert_eq!(columns.len(), 1);
    }
}
