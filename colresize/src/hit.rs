use crate::handle::{HandleEdge, HandlePlan};
use crate::layout::{HeaderLayout, Rect};

/// Zone a handle occupies inside its cell: the outermost column of cells on
/// the handle's edge.
pub fn handle_zone(cell: Rect, edge: HandleEdge) -> Rect {
    let x = match edge {
        HandleEdge::Trailing => cell.right() - 1,
        HandleEdge::Leading => cell.left(),
    };
    Rect::new(x, cell.y, 1.min(cell.width.max(0)), cell.height)
}

/// Find the visible handle at the given coordinates.
/// Returns the plan and the bounding box of the cell hosting it.
pub fn hit_test_handle<'a>(
    layout: &HeaderLayout,
    plans: &'a [HandlePlan],
    x: i32,
    y: i32,
) -> Option<(&'a HandlePlan, Rect)> {
    // Check cells in reverse order (later cells draw on top)
    plans.iter().rev().find_map(|plan| {
        if !plan.visible {
            return None;
        }
        let cell = layout.get(plan.cell_index)?;
        handle_zone(cell.rect, plan.edge)
            .contains(x, y)
            .then_some((plan, cell.rect))
    })
}

/// Find the header cell index at the given coordinates.
pub fn hit_test_cell(layout: &HeaderLayout, x: i32, y: i32) -> Option<usize> {
    layout.cells().iter().rposition(|cell| cell.rect.contains(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zone_is_one_cell_on_the_edge() {
        let cell = Rect::new(10, 0, 8, 1);
        assert_eq!(handle_zone(cell, HandleEdge::Trailing), Rect::new(17, 0, 1, 1));
        assert_eq!(handle_zone(cell, HandleEdge::Leading), Rect::new(10, 0, 1, 1));
    }

    #[test]
    fn empty_cell_has_no_zone() {
        let zone = handle_zone(Rect::new(4, 0, 0, 1), HandleEdge::Leading);
        assert!(zone.is_empty());
    }
}
