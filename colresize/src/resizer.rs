//! Per-table facade wiring measurement, handle placement and dragging.

use crate::capture::PointerCapture;
use crate::column::ColumnDescriptor;
use crate::context::TableContext;
use crate::drag::{DragController, GuideLine, ResizeListener};
use crate::event::{EventResult, PointerEvent};
use crate::handle::{self, HandlePlan};
use crate::hit::hit_test_handle;
use crate::layout::HeaderLayout;
use crate::measure::WidthMeasurer;

/// Column resizing for one table instance.
///
/// The host feeds it the header row for each render pass
/// ([`set_columns`](Self::set_columns)), the laid-out cell boxes
/// ([`set_layout`](Self::set_layout)) and pointer events
/// ([`handle_event`](Self::handle_event)).
#[derive(Debug)]
pub struct ColumnResizer {
    cells: Vec<ColumnDescriptor>,
    context: TableContext,
    measurer: WidthMeasurer,
    drag: DragController,
    plans: Vec<HandlePlan>,
    layout: HeaderLayout,
}

impl ColumnResizer {
    pub fn new(
        cells: Vec<ColumnDescriptor>,
        context: TableContext,
        capture: PointerCapture,
    ) -> Self {
        let mut resizer = Self {
            cells: Vec::new(),
            context,
            measurer: WidthMeasurer::new(),
            drag: DragController::new(capture),
            plans: Vec::new(),
            layout: HeaderLayout::default(),
        };
        resizer.set_columns(cells);
        resizer
    }

    /// Start a render pass with a new header row.
    pub fn set_columns(&mut self, cells: Vec<ColumnDescriptor>) {
        self.context.registry_mut().sync_columns(&cells);
        self.measurer.observe(&cells);
        self.cells = cells;
        self.resolve_handles();
    }

    /// Recompute handle plans, e.g. after the host changed direction or
    /// sticky offsets in the context.
    pub fn resolve_handles(&mut self) {
        self.plans = handle::resolve(&self.cells, &self.context.sticky, self.context.direction);
    }

    /// Record where the header cells were rendered and measure them.
    ///
    /// Returns the number of widths the measurement batch wrote.
    pub fn set_layout(&mut self, layout: HeaderLayout) -> usize {
        self.measurer.measure_header(&layout);
        self.layout = layout;
        self.measurer.flush_into(self.context.registry_mut())
    }

    pub fn cells(&self) -> &[ColumnDescriptor] {
        &self.cells
    }

    pub fn plans(&self) -> &[HandlePlan] {
        &self.plans
    }

    pub fn layout(&self) -> &HeaderLayout {
        &self.layout
    }

    pub fn context(&self) -> &TableContext {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut TableContext {
        &mut self.context
    }

    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    pub fn is_resizing(&self) -> bool {
        self.drag.is_resizing()
    }

    /// Overlay slot for the host: the live guide line.
    pub fn guide_line(&self) -> Option<GuideLine> {
        self.drag.guide_line()
    }

    /// Route a pointer event.
    ///
    /// Presses only start a drag over a visible handle. While a drag runs,
    /// every move and the release belong to it regardless of position.
    pub fn handle_event(
        &mut self,
        event: &PointerEvent,
        listener: &mut dyn ResizeListener,
    ) -> EventResult {
        match *event {
            PointerEvent::Down { x, y } => {
                if self.drag.is_resizing() {
                    return EventResult::Ignored;
                }
                let Some((plan, cell)) = hit_test_handle(&self.layout, &self.plans, x, y) else {
                    return EventResult::Ignored;
                };
                self.drag.press(&self.context, plan, cell, x, listener)
            }
            PointerEvent::Move { x, .. } => self.drag.pointer_move(x),
            PointerEvent::Up { x, .. } => {
                if !self.drag.is_resizing() {
                    return EventResult::Ignored;
                }
                if let Some(outcome) = self.drag.release(&mut self.context, x, listener) {
                    // The registry now holds widths nothing has rendered yet.
                    let keys = outcome.column_widths.iter().map(|w| &w.column_key);
                    self.measurer.invalidate(keys);
                }
                EventResult::Consumed
            }
        }
    }

    /// Tear down: end any running drag and release the page capture.
    pub fn teardown(&mut self, listener: &mut dyn ResizeListener) {
        self.drag.cancel(listener);
    }
}
