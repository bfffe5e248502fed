//! Pointer-driven column resize state machine.
//!
//! One [`DragController`] exists per table. It is idle until a press lands on
//! a visible handle, follows the pointer while the button is held, and on
//! release commits the redistributed widths to the table's registry:
//!
//! ```text
//! Idle --press--> Dragging --move--> Dragging --release--> Idle
//!                     \----------------cancel------------> Idle
//! ```

use crate::capture::{CaptureGuard, PointerCapture};
use crate::column::ColumnKey;
use crate::context::TableContext;
use crate::event::EventResult;
use crate::handle::{HandleEdge, HandlePlan};
use crate::layout::Rect;
use crate::redistribute::{ResizeOutcome, WidthRedistributor};

/// Host callbacks for resize progress. All methods default to no-ops.
pub trait ResizeListener {
    /// A drag started (`true`) or ended (`false`). Hosts use this to
    /// suppress other header interactions, such as sort clicks, mid-drag.
    fn on_resizing_change(&mut self, _is_resizing: bool) {}

    /// A drag completed. Fired exactly once per drag, on release.
    fn on_column_resize_complete(&mut self, _outcome: &ResizeOutcome) {}
}

impl ResizeListener for () {}

/// Overlay output: the vertical guide marking the prospective column edge.
///
/// `offset` is measured from the table's left edge. The host draws it at
/// table-root level, above the header cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuideLine {
    pub offset: i32,
}

/// State of the drag in progress.
#[derive(Debug)]
pub struct DragSession {
    pub column_key: ColumnKey,
    pub is_active: bool,
    pub start_width: i32,
    pub start_pointer_x: i32,
    pub guide_line_offset: i32,
    start_guide_offset: i32,
    current_width: i32,
    edge: HandleEdge,
    min_width: i32,
    capture: Option<CaptureGuard>,
}

impl DragSession {
    /// Width the column would have with the pointer at `pointer_x`.
    pub fn candidate_width(&self, pointer_x: i32) -> i32 {
        let offset = pointer_x.saturating_sub(self.start_pointer_x);
        self.start_width
            .saturating_add(self.edge.signed(offset))
            .max(self.min_width)
    }

    /// Latest candidate width.
    pub fn current_width(&self) -> i32 {
        self.current_width
    }

    pub fn edge(&self) -> HandleEdge {
        self.edge
    }

    fn track(&mut self, pointer_x: i32) -> i32 {
        let width = self.candidate_width(pointer_x);
        let delta = width.saturating_sub(self.start_width);
        self.guide_line_offset = match self.edge {
            HandleEdge::Trailing => self.start_guide_offset.saturating_add(delta),
            HandleEdge::Leading => self.start_guide_offset.saturating_sub(delta),
        };
        self.current_width = width;
        width
    }
}

/// Owns the single drag session of a table.
#[derive(Debug)]
pub struct DragController {
    capture: PointerCapture,
    session: Option<DragSession>,
}

impl DragController {
    /// Create an idle controller that registers with `capture` while dragging.
    pub fn new(capture: PointerCapture) -> Self {
        Self {
            capture,
            session: None,
        }
    }

    pub fn is_resizing(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.is_active)
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Overlay slot: the guide line, present only while resizing.
    pub fn guide_line(&self) -> Option<GuideLine> {
        self.session
            .as_ref()
            .filter(|s| s.is_active)
            .map(|s| GuideLine {
                offset: s.guide_line_offset,
            })
    }

    /// Whether static handles should be drawn. They are hidden while the
    /// guide line is showing.
    pub fn handle_affordance_visible(&self) -> bool {
        !self.is_resizing()
    }

    /// Pointer pressed on the handle described by `plan`.
    ///
    /// `cell` is the bounding box of the header cell hosting the handle. The
    /// press is ignored when a session is already running, the handle is not
    /// visible, the target has no registered width or the page capture is
    /// taken by someone else.
    pub fn press(
        &mut self,
        cx: &TableContext,
        plan: &HandlePlan,
        cell: Rect,
        pointer_x: i32,
        listener: &mut dyn ResizeListener,
    ) -> EventResult {
        if self.session.is_some() || !plan.visible {
            return EventResult::Ignored;
        }

        let key = &plan.target_column_key;
        let Some(start_width) = cx.registry().get(key) else {
            log::debug!("[resize] no registered width for {}, ignoring press", key);
            return EventResult::Ignored;
        };

        let Some(capture) = self.capture.acquire(format!("column:{}", key)) else {
            return EventResult::Ignored;
        };

        let edge_x = match plan.edge {
            HandleEdge::Trailing => cell.right(),
            HandleEdge::Leading => cell.left(),
        };
        let guide_offset = edge_x.saturating_sub(cx.table_bounds.left());

        log::debug!(
            "[resize] start {} width={} x={} edge={:?} guide={}",
            key,
            start_width,
            pointer_x,
            plan.edge,
            guide_offset
        );

        self.session = Some(DragSession {
            column_key: key.clone(),
            is_active: true,
            start_width,
            start_pointer_x: pointer_x,
            guide_line_offset: guide_offset,
            start_guide_offset: guide_offset,
            current_width: start_width,
            edge: plan.edge,
            min_width: plan.min_width,
            capture: Some(capture),
        });
        listener.on_resizing_change(true);
        EventResult::StartDrag
    }

    /// Pointer moved anywhere on the page.
    pub fn pointer_move(&mut self, pointer_x: i32) -> EventResult {
        match self.session.as_mut().filter(|s| s.is_active) {
            Some(session) => {
                let width = session.track(pointer_x);
                log::trace!(
                    "[resize] move {} x={} width={} guide={}",
                    session.column_key,
                    pointer_x,
                    width,
                    session.guide_line_offset
                );
                EventResult::Consumed
            }
            None => EventResult::Ignored,
        }
    }

    /// Pointer released: commit the final width.
    ///
    /// Returns the outcome handed to the listener, or `None` when nothing was
    /// being dragged or the column disappeared from the registry mid-drag.
    pub fn release(
        &mut self,
        cx: &mut TableContext,
        pointer_x: i32,
        listener: &mut dyn ResizeListener,
    ) -> Option<ResizeOutcome> {
        let mut session = self.session.take()?;
        session.is_active = false;
        if let Some(capture) = session.capture.take() {
            capture.release();
        }
        listener.on_resizing_change(false);

        let new_width = session.track(pointer_x);
        let key = &session.column_key;
        let Some(old_width) = cx.registry().get(key) else {
            log::debug!("[resize] {} vanished from registry, dropping drag", key);
            return None;
        };

        let ordered_keys = cx.registry().keys();
        let outcome = WidthRedistributor::from_context(cx).redistribute(
            key,
            new_width,
            old_width,
            cx.registry(),
            &ordered_keys,
        );
        cx.registry_mut().apply(&outcome.column_widths);

        log::debug!("[resize] commit {} {} -> {}", key, old_width, new_width);
        listener.on_column_resize_complete(&outcome);
        Some(outcome)
    }

    /// End a running drag without producing an outcome.
    ///
    /// Used when the owning table goes away mid-drag. Returns true if a
    /// session was running.
    pub fn cancel(&mut self, listener: &mut dyn ResizeListener) -> bool {
        match self.session.take() {
            Some(session) => {
                log::debug!("[resize] cancel {}", session.column_key);
                drop(session);
                listener.on_resizing_change(false);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(edge: HandleEdge, min_width: i32) -> DragSession {
        DragSession {
            column_key: "a".into(),
            is_active: true,
            start_width: 40,
            start_pointer_x: 100,
            guide_line_offset: 40,
            start_guide_offset: 40,
            current_width: 40,
            edge,
            min_width,
            capture: None,
        }
    }

    #[test]
    fn trailing_guide_follows_pointer() {
        let mut s = session(HandleEdge::Trailing, 0);
        assert_eq!(s.track(110), 50);
        assert_eq!(s.guide_line_offset, 50);
    }

    #[test]
    fn leading_guide_mirrors_width_change() {
        let mut s = session(HandleEdge::Leading, 0);
        assert_eq!(s.track(90), 50);
        assert_eq!(s.guide_line_offset, 30);
    }

    #[test]
    fn guide_is_clamped_with_the_width() {
        let mut s = session(HandleEdge::Trailing, 30);
        assert_eq!(s.track(0), 30);
        assert_eq!(s.guide_line_offset, 30);
    }
}
