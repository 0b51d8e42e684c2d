//! Content pane boundary.
//!
//! The desktop manager mounts a pane per window/widget kind and treats it
//! as opaque: it hands the pane an area to render into and forwards
//! localized input. `interactive_zones` is the convention through which a
//! pane marks regions that must receive pointer input instead of starting
//! a drag (buttons, text areas, anything clickable).

use crossterm::event::Event;
use ratatui::layout::Rect;

use crate::ui::UiFrame;

/// Context passed to `Pane` methods describing UI state.
#[derive(Debug, Clone, Copy)]
pub struct PaneContext {
    focused: bool,
}

impl PaneContext {
    pub const fn new(focused: bool) -> Self {
        Self { focused }
    }

    pub const fn focused(&self) -> bool {
        self.focused
    }
}

impl Default for PaneContext {
    fn default() -> Self {
        Self::new(false)
    }
}

pub trait Pane {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &PaneContext);

    /// Handle an event localized to pane-content coordinates. Returns true
    /// when the event was consumed.
    fn handle_event(&mut self, _event: &Event, _ctx: &PaneContext) -> bool {
        false
    }

    /// Content-local rectangles that take pointer input instead of chrome
    /// dragging. Computed from the pane's current area so the shell can
    /// hit-test before delivering a pointer-down.
    fn interactive_zones(&self, _area: Rect) -> Vec<Rect> {
        Vec::new()
    }
}
