//! Table-wide state shared by every resize component.
//!
//! One [`TableContext`] exists per table instance and is passed by reference
//! to the pieces that need it. Field ownership:
//!
//! | field             | written by                      | read by                  |
//! |-------------------|---------------------------------|--------------------------|
//! | `direction`       | host                            | handle resolver          |
//! | `sticky`          | host                            | handle resolver          |
//! | `component_width` | host (container resize)         | redistributor            |
//! | `scrollbar_size`  | host (constant per table)       | redistributor            |
//! | `table_bounds`    | host (every layout)             | drag controller          |
//! | `registry`        | measurer, drag controller commit| everything               |

use serde::{Deserialize, Serialize};

use crate::column::{ColumnDescriptor, Fixed};
use crate::layout::Rect;
use crate::registry::WidthRegistry;

/// Text direction of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

impl Direction {
    pub fn is_rtl(self) -> bool {
        self == Direction::Rtl
    }
}

/// Precomputed offsets of pinned cells from the edge they stick to.
///
/// A cell only counts as pinned when it has an offset on that side; layouts
/// without sticky positioning supply [`StickyOffsets::none`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StickyOffsets {
    left: Vec<Option<i32>>,
    right: Vec<Option<i32>>,
}

impl StickyOffsets {
    /// No cell is sticky.
    pub fn none(len: usize) -> Self {
        Self {
            left: vec![None; len],
            right: vec![None; len],
        }
    }

    /// Offsets for `cells` as the header layout positions them: left-pinned
    /// cells accumulate from the left edge, right-pinned cells from the right.
    pub fn from_columns(cells: &[ColumnDescriptor]) -> Self {
        let mut left = vec![None; cells.len()];
        let mut right = vec![None; cells.len()];

        let mut acc: i32 = 0;
        for (i, cell) in cells.iter().enumerate() {
            if cell.is_fixed(Fixed::Left) {
                left[i] = Some(acc);
                acc = acc.saturating_add(cell.width);
            }
        }

        let mut acc: i32 = 0;
        for (i, cell) in cells.iter().enumerate().rev() {
            if cell.is_fixed(Fixed::Right) {
                right[i] = Some(acc);
                acc = acc.saturating_add(cell.width);
            }
        }

        Self { left, right }
    }

    pub fn left(&self, index: usize) -> Option<i32> {
        self.left.get(index).copied().flatten()
    }

    pub fn right(&self, index: usize) -> Option<i32> {
        self.right.get(index).copied().flatten()
    }

    pub fn is_fixed_left(&self, index: usize) -> bool {
        self.left(index).is_some()
    }

    pub fn is_fixed_right(&self, index: usize) -> bool {
        self.right(index).is_some()
    }
}

/// Shared state of one table instance.
#[derive(Debug, Clone, Default)]
pub struct TableContext {
    pub direction: Direction,
    pub sticky: StickyOffsets,
    /// Width of the table's container.
    pub component_width: i32,
    /// Width reserved for the vertical scrollbar.
    pub scrollbar_size: i32,
    /// Bounding box of the table root, used to anchor the guide line.
    pub table_bounds: Rect,
    registry: WidthRegistry,
}

impl TableContext {
    pub fn new(component_width: i32) -> Self {
        Self {
            component_width,
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

    pub fn sticky(mut self, sticky: StickyOffsets) -> Self {
        self.sticky = sticky;
        self
    }

    pub fn table_bounds(mut self, bounds: Rect) -> Self {
        self.table_bounds = bounds;
        self
    }

    pub fn with_registry(mut self, registry: WidthRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn registry(&self) -> &WidthRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut WidthRegistry {
        &mut self.registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_accumulate_from_pinned_edges() {
        let cells = vec![
            ColumnDescriptor::new("a", 10).fixed(Fixed::Left),
            ColumnDescriptor::new("b", 20).fixed(Fixed::Left),
            ColumnDescriptor::new("c", 30),
            ColumnDescriptor::new("d", 40).fixed(Fixed::Right),
            ColumnDescriptor::scrollbar_gutter(
                2,
                Some(&ColumnDescriptor::new("d", 40).fixed(Fixed::Right)),
            ),
        ];
        let sticky = StickyOffsets::from_columns(&cells);

        assert_eq!(sticky.left(0), Some(0));
        assert_eq!(sticky.left(1), Some(10));
        assert!(!sticky.is_fixed_left(2));
        assert!(!sticky.is_fixed_right(2));
        assert_eq!(sticky.right(3), Some(2));
        assert_eq!(sticky.right(4), Some(0));
    }

    #[test]
    fn out_of_range_cells_are_not_pinned() {
        let sticky = StickyOffsets::none(1);
        assert!(!sticky.is_fixed_left(5));
        assert!(!sticky.is_fixed_right(0));
    }
}
