use crate::desktop::entity::{EntityId, GeometryUpdate};
use crate::desktop::manager::DesktopManager;
use crate::geometry::CellRect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeEdge {
    Left,
    Right,
    Top,
    Bottom,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl ResizeEdge {
    fn moves_left(self) -> bool {
        matches!(
            self,
            ResizeEdge::Left | ResizeEdge::TopLeft | ResizeEdge::BottomLeft
        )
    }

    fn moves_right(self) -> bool {
        matches!(
            self,
            ResizeEdge::Right | ResizeEdge::TopRight | ResizeEdge::BottomRight
        )
    }

    fn moves_top(self) -> bool {
        matches!(
            self,
            ResizeEdge::Top | ResizeEdge::TopLeft | ResizeEdge::TopRight
        )
    }

    fn moves_bottom(self) -> bool {
        matches!(
            self,
            ResizeEdge::Bottom | ResizeEdge::BottomLeft | ResizeEdge::BottomRight
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragTarget {
    Window(EntityId),
    Widget(EntityId),
}

#[derive(Debug, Clone, Copy)]
struct DragSession {
    target: DragTarget,
    // pointer-space anchor: pointer minus entity origin at pointer-down
    grab_x: i32,
    grab_y: i32,
}

#[derive(Debug, Clone, Copy)]
struct ResizeSession {
    target: DragTarget,
    edge: ResizeEdge,
    start: CellRect,
    start_col: u16,
    start_row: u16,
}

/// Tracks the single in-flight drag or resize gesture.
///
/// At most one session is active per pointer. `end_session` must run on
/// every pointer-up, wherever the pointer is released; the event loop is
/// global, not scoped to the entity that started the gesture. A session
/// whose target vanished mid-gesture (closed programmatically) keeps
/// consuming moves as no-ops until the pointer is released.
#[derive(Debug, Default)]
pub struct PointerController {
    drag: Option<DragSession>,
    resize: Option<ResizeSession>,
}

impl PointerController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session_active(&self) -> bool {
        self.drag.is_some() || self.resize.is_some()
    }

    /// Start a drag. Refused while another session is active, for unknown
    /// targets, and for maximized windows.
    pub fn begin_drag(
        &mut self,
        manager: &DesktopManager,
        target: DragTarget,
        column: u16,
        row: u16,
    ) -> bool {
        if self.session_active() {
            return false;
        }
        let Some(rect) = drag_rect(manager, target) else {
            return false;
        };
        self.drag = Some(DragSession {
            target,
            grab_x: i32::from(column) - rect.x,
            grab_y: i32::from(row) - rect.y,
        });
        tracing::debug!(?target, column, row, "drag session started");
        true
    }

    /// Start a resize from one of the eight edge/corner handles. Same
    /// refusal rules as `begin_drag`.
    pub fn begin_resize(
        &mut self,
        manager: &DesktopManager,
        target: DragTarget,
        edge: ResizeEdge,
        column: u16,
        row: u16,
    ) -> bool {
        if self.session_active() {
            return false;
        }
        let Some(rect) = drag_rect(manager, target) else {
            return false;
        };
        self.resize = Some(ResizeSession {
            target,
            edge,
            start: rect,
            start_col: column,
            start_row: row,
        });
        tracing::debug!(?target, ?edge, "resize session started");
        true
    }

    /// Apply one pointer-move to the active session. Returns true when a
    /// session consumed the event, whether or not geometry changed.
    pub fn pointer_moved(&mut self, manager: &mut DesktopManager, column: u16, row: u16) -> bool {
        if let Some(drag) = self.drag {
            if drag_rect(manager, drag.target).is_some() {
                let x = i32::from(column) - drag.grab_x;
                let y = i32::from(row) - drag.grab_y;
                apply_update(manager, drag.target, GeometryUpdate::position(x, y));
            }
            return true;
        }
        if let Some(resize) = self.resize {
            if drag_rect(manager, resize.target).is_some() {
                let (min_width, min_height) = min_size(manager, resize.target);
                let resized = apply_resize(
                    resize.start,
                    resize.edge,
                    column,
                    row,
                    resize.start_col,
                    resize.start_row,
                    min_width,
                    min_height,
                );
                apply_update(manager, resize.target, GeometryUpdate::rect(resized));
            }
            return true;
        }
        false
    }

    /// Drop the active session. Pointer-up always commits whatever the
    /// last move computed; there is no cancel gesture.
    pub fn end_session(&mut self) {
        if self.drag.take().is_some() || self.resize.take().is_some() {
            tracing::debug!("pointer session ended");
        }
    }
}

/// The rect a gesture may act on: absent entities and maximized windows
/// yield `None`, which inhibits both session start and movement.
fn drag_rect(manager: &DesktopManager, target: DragTarget) -> Option<CellRect> {
    match target {
        DragTarget::Window(id) => {
            let window = manager.window(id)?;
            if window.maximized {
                return None;
            }
            Some(window.rect)
        }
        DragTarget::Widget(id) => manager.widget(id).map(|widget| widget.rect),
    }
}

fn min_size(manager: &DesktopManager, target: DragTarget) -> (u16, u16) {
    match target {
        DragTarget::Window(id) => manager
            .window(id)
            .map(|window| window.kind.min_size())
            .unwrap_or((1, 1)),
        DragTarget::Widget(id) => manager
            .widget(id)
            .map(|widget| widget.kind.min_size())
            .unwrap_or((1, 1)),
    }
}

fn apply_update(manager: &mut DesktopManager, target: DragTarget, update: GeometryUpdate) {
    match target {
        DragTarget::Window(id) => manager.set_window_geometry(id, update),
        DragTarget::Widget(id) => manager.set_widget_geometry(id, update),
    }
}

/// Recompute a rect from the gesture anchor. Width/height are clamped to
/// the minimum; for north/west edges the origin shifts so the opposite
/// edge stays fixed, including when the clamp re-anchors the moving edge.
pub(crate) fn apply_resize(
    start: CellRect,
    edge: ResizeEdge,
    column: u16,
    row: u16,
    start_col: u16,
    start_row: u16,
    min_width: u16,
    min_height: u16,
) -> CellRect {
    let dx = i32::from(column) - i32::from(start_col);
    let dy = i32::from(row) - i32::from(start_row);
    let mut x = start.x;
    let mut y = start.y;
    let mut width = i32::from(start.width);
    let mut height = i32::from(start.height);

    if edge.moves_left() {
        x += dx;
        width -= dx;
    } else if edge.moves_right() {
        width += dx;
    }
    if edge.moves_top() {
        y += dy;
        height -= dy;
    } else if edge.moves_bottom() {
        height += dy;
    }

    let min_w = i32::from(min_width.max(1));
    let min_h = i32::from(min_height.max(1));
    if width < min_w {
        if edge.moves_left() {
            x -= min_w - width;
        }
        width = min_w;
    }
    if height < min_h {
        if edge.moves_top() {
            y -= min_h - height;
        }
        height = min_h;
    }

    let max_dim = i32::from(u16::MAX);
    CellRect {
        x,
        y,
        width: width.min(max_dim) as u16,
        height: height.min(max_dim) as u16,
    }
}
