use crate::column::{ColumnDescriptor, ColumnKey};
use crate::context::Direction;
use crate::registry::WidthRegistry;

use super::Rect;

/// A laid-out header cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    pub key: ColumnKey,
    pub rect: Rect,
    pub is_scrollbar_gutter: bool,
}

/// Bounding boxes of one header row, in cell order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderLayout {
    cells: Vec<HeaderCell>,
}

impl HeaderLayout {
    pub fn new(cells: Vec<HeaderCell>) -> Self {
        Self { cells }
    }

    /// Lay `columns` out side by side starting at `origin`.
    ///
    /// Widths come from `registry` when it knows the column, from the
    /// descriptor otherwise. Right-to-left tables place the first column at
    /// the right end of the row.
    pub fn compute(
        columns: &[ColumnDescriptor],
        registry: &WidthRegistry,
        origin: Rect,
        direction: Direction,
    ) -> Self {
        let widths = columns
            .iter()
            .map(|c| registry.get(&c.key).unwrap_or(c.width));
        Self::place(columns, widths, origin, direction)
    }

    /// Lay `columns` out at their descriptor widths, ignoring any registry.
    pub fn from_columns(columns: &[ColumnDescriptor], origin: Rect, direction: Direction) -> Self {
        Self::place(columns, columns.iter().map(|c| c.width), origin, direction)
    }

    fn place(
        columns: &[ColumnDescriptor],
        widths: impl Iterator<Item = i32>,
        origin: Rect,
        direction: Direction,
    ) -> Self {
        let widths: Vec<i32> = widths.map(|w| w.max(0)).collect();
        let total = widths.iter().fold(0i32, |sum, w| sum.saturating_add(*w));

        let mut x = match direction {
            Direction::Ltr => origin.x,
            Direction::Rtl => origin.x.saturating_add(total),
        };

        let cells = columns
            .iter()
            .zip(widths)
            .map(|(column, width)| {
                let left = match direction {
                    Direction::Ltr => {
                        let left = x;
                        x = x.saturating_add(width);
                        left
                    }
                    Direction::Rtl => {
                        x = x.saturating_sub(width);
                        x
                    }
                };
                HeaderCell {
                    key: column.key.clone(),
                    rect: Rect::new(left, origin.y, width, origin.height),
                    is_scrollbar_gutter: column.is_scrollbar_gutter,
                }
            })
            .collect();

        Self { cells }
    }

    pub fn cells(&self) -> &[HeaderCell] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<&HeaderCell> {
        self.cells.get(index)
    }

    /// Box enclosing every cell.
    pub fn bounds(&self) -> Rect {
        let Some(first) = self.cells.first() else {
            return Rect::default();
        };
        let left = self.cells.iter().map(|c| c.rect.left()).min().unwrap_or(first.rect.x);
        let right = self.cells.iter().map(|c| c.rect.right()).max().unwrap_or(first.rect.x);
        Rect::new(left, first.rect.y, right.saturating_sub(left), first.rect.height)
    }
}
