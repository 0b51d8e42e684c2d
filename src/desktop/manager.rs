use std::collections::BTreeMap;

use crate::constants::INITIAL_WINDOW_Z;
use crate::desktop::entity::{
    EntityId, GeometryUpdate, WidgetEntity, WidgetKind, WindowEntity, WindowKind,
};
use crate::geometry::CellRect;

/// Read-only dock projection of one window: everything the dock needs to
/// render a restore affordance, nothing more.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DockEntry {
    pub id: EntityId,
    pub kind: WindowKind,
    pub title: String,
    pub minimized: bool,
}

/// Owns the authoritative window and widget lists and the global z-order
/// counter.
///
/// All operations are synchronous and run on the UI thread; ids that no
/// longer resolve (double close, action raced against a close) degrade to
/// idempotent no-ops rather than errors. The z counter is monotonically
/// increasing for the lifetime of the session: it advances on every open,
/// focus, and restore and never resets, so the most recently raised window
/// always holds the strictly greatest z.
#[derive(Debug)]
pub struct DesktopManager {
    windows: BTreeMap<EntityId, WindowEntity>,
    widgets: BTreeMap<EntityId, WidgetEntity>,
    // insertion order; widgets never compete for z
    widget_order: Vec<EntityId>,
    next_entity: u64,
    next_z: u32,
}

impl Default for DesktopManager {
    fn default() -> Self {
        Self::new()
    }
}

impl DesktopManager {
    pub fn new() -> Self {
        Self {
            windows: BTreeMap::new(),
            widgets: BTreeMap::new(),
            widget_order: Vec::new(),
            next_entity: 1,
            next_z: INITIAL_WINDOW_Z,
        }
    }

    fn alloc_id(&mut self) -> EntityId {
        let id = EntityId(self.next_entity);
        self.next_entity += 1;
        id
    }

    fn take_z(&mut self) -> u32 {
        let z = self.next_z;
        self.next_z = self.next_z.saturating_add(1);
        z
    }

    /// Open a window of the given kind with type-keyed default geometry,
    /// staggered from the current window count. The new window starts
    /// normal (not minimized, not maximized) and focused.
    pub fn open_window(&mut self, kind: WindowKind) -> EntityId {
        let id = self.alloc_id();
        let (width, height) = kind.default_size();
        let (x, y) = kind.origin_for(self.windows.len());
        let z = self.take_z();
        tracing::debug!(window_id = ?id, ?kind, z, "opened window");
        self.windows.insert(
            id,
            WindowEntity {
                id,
                title: kind.title().to_string(),
                kind,
                rect: CellRect::new(x, y, width, height),
                z,
                minimized: false,
                maximized: false,
            },
        );
        id
    }

    /// Remove the window permanently. Terminal and idempotent.
    pub fn close_window(&mut self, id: EntityId) {
        if self.windows.remove(&id).is_some() {
            tracing::debug!(window_id = ?id, "closed window");
        }
    }

    pub fn minimize_window(&mut self, id: EntityId) {
        if let Some(window) = self.windows.get_mut(&id) {
            window.minimized = true;
            tracing::debug!(window_id = ?id, "minimized window");
        }
    }

    /// Clear the minimized flag and raise the window above everything
    /// focused before it.
    pub fn restore_window(&mut self, id: EntityId) {
        if !self.windows.contains_key(&id) {
            return;
        }
        let z = self.take_z();
        if let Some(window) = self.windows.get_mut(&id) {
            window.minimized = false;
            window.z = z;
            tracing::debug!(window_id = ?id, z, "restored window");
        }
    }

    /// Flip the maximized flag. Maximize is a display-only override: the
    /// stored geometry is left untouched, and drag/resize input is ignored
    /// while the flag is set, so un-maximizing falls back to the old rect.
    pub fn toggle_maximize(&mut self, id: EntityId) {
        if let Some(window) = self.windows.get_mut(&id) {
            window.maximized = !window.maximized;
            tracing::debug!(window_id = ?id, maximized = window.maximized, "toggled maximize");
        }
    }

    /// Raise the window: assign the next counter value, guaranteed to
    /// exceed every z handed out before. Visibility flags are untouched.
    pub fn focus_window(&mut self, id: EntityId) {
        self.bring_to_front(id);
    }

    fn bring_to_front(&mut self, id: EntityId) {
        if !self.windows.contains_key(&id) {
            return;
        }
        let z = self.take_z();
        if let Some(window) = self.windows.get_mut(&id) {
            window.z = z;
        }
    }

    pub fn add_widget(&mut self, kind: WidgetKind) -> EntityId {
        let id = self.alloc_id();
        let (width, height) = kind.default_size();
        let (x, y) = kind.origin_for(self.widgets.len());
        tracing::debug!(widget_id = ?id, ?kind, "added widget");
        self.widgets.insert(
            id,
            WidgetEntity {
                id,
                kind,
                rect: CellRect::new(x, y, width, height),
                opacity: kind.default_opacity(),
            },
        );
        self.widget_order.push(id);
        id
    }

    pub fn remove_widget(&mut self, id: EntityId) {
        if self.widgets.remove(&id).is_some() {
            self.widget_order.retain(|widget| *widget != id);
            tracing::debug!(widget_id = ?id, "removed widget");
        }
    }

    /// Merge a partial geometry into a window. No bounds validation:
    /// windows may be dragged fully off-screen.
    pub fn set_window_geometry(&mut self, id: EntityId, update: GeometryUpdate) {
        if let Some(window) = self.windows.get_mut(&id) {
            update.apply_to(&mut window.rect);
        }
    }

    pub fn set_widget_geometry(&mut self, id: EntityId, update: GeometryUpdate) {
        if let Some(widget) = self.widgets.get_mut(&id) {
            update.apply_to(&mut widget.rect);
        }
    }

    pub fn window(&self, id: EntityId) -> Option<&WindowEntity> {
        self.windows.get(&id)
    }

    pub fn widget(&self, id: EntityId) -> Option<&WidgetEntity> {
        self.widgets.get(&id)
    }

    pub fn window_count(&self) -> usize {
        self.windows.len()
    }

    pub fn widget_count(&self) -> usize {
        self.widgets.len()
    }

    /// Non-minimized windows in back-to-front stacking order.
    pub fn visible_windows(&self) -> Vec<&WindowEntity> {
        let mut visible: Vec<&WindowEntity> = self
            .windows
            .values()
            .filter(|window| !window.minimized)
            .collect();
        visible.sort_by_key(|window| window.z);
        visible
    }

    /// The frontmost non-minimized window, i.e. the focused one.
    pub fn top_window(&self) -> Option<EntityId> {
        self.visible_windows().last().map(|window| window.id)
    }

    /// Widgets in insertion order. They all render on one fixed layer
    /// below the windows.
    pub fn widgets_in_order(&self) -> Vec<&WidgetEntity> {
        self.widget_order
            .iter()
            .filter_map(|id| self.widgets.get(id))
            .collect()
    }

    /// Snapshot for the dock: every window, creation-ordered, with just
    /// the fields a restore affordance needs. Re-derived on demand so the
    /// dock can never observe a stale minimized list.
    pub fn dock_entries(&self) -> Vec<DockEntry> {
        self.windows
            .values()
            .map(|window| DockEntry {
                id: window.id,
                kind: window.kind,
                title: window.title.clone(),
                minimized: window.minimized,
            })
            .collect()
    }
}
