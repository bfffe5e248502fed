/// Pointer events the resize subsystem reacts to.
///
/// Only the primary button drives a resize; other buttons and wheel
/// scrolling never become pointer events here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    /// Primary button pressed
    Down { x: i32, y: i32 },
    /// Pointer moved, with or without the button held
    Move { x: i32, y: i32 },
    /// Primary button released
    Up { x: i32, y: i32 },
}

impl PointerEvent {
    /// Convert a crossterm mouse event, if it is one we care about.
    pub fn from_crossterm(mouse: &crossterm::event::MouseEvent) -> Option<Self> {
        use crossterm::event::{MouseButton, MouseEventKind};

        let x = mouse.column as i32;
        let y = mouse.row as i32;
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => Some(PointerEvent::Down { x, y }),
            MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved => {
                Some(PointerEvent::Move { x, y })
            }
            MouseEventKind::Up(MouseButton::Left) => Some(PointerEvent::Up { x, y }),
            _ => None,
        }
    }
}

/// Result of feeding an event to a resize component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
    /// Event started a drag. The host must suppress its default handling
    /// (text selection, click-to-sort) for this press.
    StartDrag,
}

impl EventResult {
    /// Check if the event was handled (consumed or started drag).
    pub fn is_handled(&self) -> bool {
        !matches!(self, EventResult::Ignored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

    fn mouse(kind: MouseEventKind) -> MouseEvent {
        MouseEvent {
            kind,
            column: 12,
            row: 3,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn left_button_events_convert() {
        assert_eq!(
            PointerEvent::from_crossterm(&mouse(MouseEventKind::Down(MouseButton::Left))),
            Some(PointerEvent::Down { x: 12, y: 3 })
        );
        assert_eq!(
            PointerEvent::from_crossterm(&mouse(MouseEventKind::Drag(MouseButton::Left))),
            Some(PointerEvent::Move { x: 12, y: 3 })
        );
        assert_eq!(
            PointerEvent::from_crossterm(&mouse(MouseEventKind::Up(MouseButton::Left))),
            Some(PointerEvent::Up { x: 12, y: 3 })
        );
    }

    #[test]
    fn other_buttons_and_wheel_are_dropped() {
        assert_eq!(
            PointerEvent::from_crossterm(&mouse(MouseEventKind::Down(MouseButton::Right))),
            None
        );
        assert_eq!(PointerEvent::from_crossterm(&mouse(MouseEventKind::ScrollDown)), None);
    }
}
