//! Resize handle placement for a header row.

use crate::column::{ColumnDescriptor, ColumnKey, Fixed};
use crate::context::{Direction, StickyOffsets};

/// Which edge of a header cell hosts the resize handle.
///
/// `Trailing` is the cell's right-hand edge on screen: moving the pointer
/// right grows the column. `Leading` is the left-hand edge, where moving the
/// pointer left grows the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleEdge {
    Leading,
    Trailing,
}

impl HandleEdge {
    /// Edge for a cell with the given sticky state.
    pub fn for_cell(direction: Direction, is_fixed_left: bool, is_fixed_right: bool) -> Self {
        let is_trailing = if direction.is_rtl() {
            is_fixed_left
        } else {
            !is_fixed_right
        };
        if is_trailing {
            HandleEdge::Trailing
        } else {
            HandleEdge::Leading
        }
    }

    /// Width change caused by a pointer moving `offset` cells to the right.
    pub fn signed(self, offset: i32) -> i32 {
        match self {
            HandleEdge::Trailing => offset,
            HandleEdge::Leading => offset.saturating_neg(),
        }
    }
}

/// Handle decision for one rendered header cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlePlan {
    pub cell_index: usize,
    /// Key of the cell the handle is drawn in.
    pub cell_key: ColumnKey,
    /// Key of the column the handle resizes. Differs from `cell_key` when the
    /// scrollbar gutter hosts the handle of the column before it.
    pub target_column_key: ColumnKey,
    pub edge: HandleEdge,
    pub visible: bool,
    /// Minimum width of the target column.
    pub min_width: i32,
}

/// Decide, for every header cell, whether and where a resize handle renders.
///
/// `cells` is the full header row, ending with the scrollbar gutter when the
/// layout reserves one.
pub fn resolve(
    cells: &[ColumnDescriptor],
    sticky: &StickyOffsets,
    direction: Direction,
) -> Vec<HandlePlan> {
    let len = cells.len();
    let gutter_last = cells.last().is_some_and(|c| c.is_scrollbar_gutter);
    let before_gutter = if gutter_last && len >= 2 {
        Some(&cells[len - 2])
    } else {
        None
    };

    // A right-pinned neighbour keeps its own handle on its leading edge, so
    // the gutter has nothing to host.
    let gutter_hosts = gutter_last
        && cells.last().is_some_and(|gutter| !gutter.is_fixed(Fixed::Right))
        && before_gutter.is_some_and(|prev| prev.resizable && !prev.is_fixed(Fixed::Right));

    cells
        .iter()
        .enumerate()
        .map(|(index, cell)| {
            let hosts_for_prev = cell.is_scrollbar_gutter && gutter_hosts;

            let visible = if before_gutter.is_some() && index == len - 2 {
                cell.resizable && !gutter_hosts
            } else {
                hosts_for_prev || (cell.resizable && !cell.is_scrollbar_gutter)
            };

            let target = match before_gutter {
                Some(prev) if hosts_for_prev => prev,
                _ => cell,
            };

            HandlePlan {
                cell_index: index,
                cell_key: cell.key.clone(),
                target_column_key: target.key.clone(),
                edge: HandleEdge::for_cell(
                    direction,
                    sticky.is_fixed_left(index),
                    sticky.is_fixed_right(index),
                ),
                visible,
                min_width: target.effective_min_width(),
            }
        })
        .collect()
}
