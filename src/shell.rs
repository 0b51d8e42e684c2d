//! The desktop shell: owns the manager, the pointer controller, and the
//! mounted panes, routes input events, and renders frames.
//!
//! Pointer events resolve in overlay order: an open drop-down menu wins
//! first, then the top bar, then the dock, then windows front-to-back,
//! then widgets. Windows render above widgets; the bars and the menu
//! render above everything.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use chrono::Local;
use crossterm::event::{Event, MouseEvent, MouseEventKind};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;

use crate::apps;
use crate::constants::{DOCK_HEIGHT, TOP_BAR_HEIGHT};
use crate::desktop::chrome::{self, ChromeHit, WidgetHit};
use crate::desktop::{
    DesktopManager, Dock, DragTarget, EntityId, GeometryUpdate, PointerController, TopBar,
    WidgetKind, WindowKind,
};
use crate::geometry::{CellRect, rect_contains};
use crate::metrics::MetricsWalker;
use crate::pane::{Pane, PaneContext};
use crate::state::ShellState;
use crate::theme;
use crate::ui::UiFrame;
use crate::widgets;

const METRICS_INTERVAL: Duration = Duration::from_secs(2);

pub struct DesktopShell {
    manager: DesktopManager,
    pointer: PointerController,
    window_panes: BTreeMap<EntityId, Box<dyn Pane>>,
    widget_panes: BTreeMap<EntityId, Box<dyn Pane>>,
    dock: Dock,
    top_bar: TopBar,
    state: ShellState,
    metrics: MetricsWalker,
    cpu: f32,
    mem: f32,
    last_metrics: Option<Instant>,
    // widget currently receiving keyboard input; windows take over on focus
    key_target: Option<EntityId>,
    // desktop area from the last rendered frame, used for hit testing
    last_desktop: Rect,
    seed_widgets: bool,
    seeded: bool,
}

impl DesktopShell {
    pub fn new(seed_widgets: bool) -> Self {
        Self {
            manager: DesktopManager::new(),
            pointer: PointerController::new(),
            window_panes: BTreeMap::new(),
            widget_panes: BTreeMap::new(),
            dock: Dock::new(),
            top_bar: TopBar::new(),
            state: ShellState::new(),
            metrics: MetricsWalker::default(),
            cpu: 0.0,
            mem: 0.0,
            last_metrics: None,
            key_target: None,
            last_desktop: Rect::default(),
            seed_widgets,
            seeded: false,
        }
    }

    pub fn manager(&self) -> &DesktopManager {
        &self.manager
    }

    pub fn manager_mut(&mut self) -> &mut DesktopManager {
        &mut self.manager
    }

    pub fn pointer(&self) -> &PointerController {
        &self.pointer
    }

    pub fn mouse_capture_enabled(&self) -> bool {
        self.state.mouse_capture_enabled()
    }

    pub fn set_mouse_capture_enabled(&mut self, enabled: bool) {
        self.state.set_mouse_capture_enabled(enabled);
    }

    pub fn take_mouse_capture_change(&mut self) -> Option<bool> {
        self.state.take_mouse_capture_change()
    }

    /// The restore affordance under the given cell, if any. Derived from
    /// the most recently rendered frame.
    pub fn dock_restore_at(&self, column: u16, row: u16) -> Option<EntityId> {
        self.dock.hit_test_restore(column, row)
    }

    /// The dock launcher under the given cell, if any.
    pub fn dock_launcher_at(&self, column: u16, row: u16) -> Option<WindowKind> {
        self.dock.hit_test_launcher(column, row)
    }

    /// Open a window and mount its pane. The new window is frontmost.
    pub fn open_window(&mut self, kind: WindowKind) -> EntityId {
        let id = self.manager.open_window(kind);
        self.window_panes.insert(id, apps::pane_for(kind));
        self.key_target = None;
        id
    }

    /// Close a window and drop its pane. Safe to call twice.
    pub fn close_window(&mut self, id: EntityId) {
        self.manager.close_window(id);
        self.window_panes.remove(&id);
    }

    pub fn add_widget(&mut self, kind: WidgetKind) -> EntityId {
        let id = self.manager.add_widget(kind);
        self.widget_panes.insert(id, widgets::pane_for(kind));
        id
    }

    pub fn remove_widget(&mut self, id: EntityId) {
        self.manager.remove_widget(id);
        self.widget_panes.remove(&id);
        if self.key_target == Some(id) {
            self.key_target = None;
        }
    }

    fn layout(area: Rect) -> (Rect, Rect, Rect) {
        let top = Rect {
            x: area.x,
            y: area.y,
            width: area.width,
            height: TOP_BAR_HEIGHT.min(area.height),
        };
        let dock_height = DOCK_HEIGHT.min(area.height.saturating_sub(top.height));
        let dock = Rect {
            x: area.x,
            y: area.y + area.height - dock_height,
            width: area.width,
            height: dock_height,
        };
        let desktop = Rect {
            x: area.x,
            y: area.y + top.height,
            width: area.width,
            height: area.height.saturating_sub(top.height + dock_height),
        };
        (top, desktop, dock)
    }

    /// The rect a window occupies on screen. While maximized the stored
    /// geometry is overridden by the full desktop area; the stored fields
    /// are never touched, so restoring falls back to them.
    fn display_rect(&self, id: EntityId) -> Option<CellRect> {
        let window = self.manager.window(id)?;
        if window.maximized {
            let desktop = self.last_desktop;
            Some(CellRect::new(
                i32::from(desktop.x),
                i32::from(desktop.y),
                desktop.width,
                desktop.height,
            ))
        } else {
            Some(window.rect)
        }
    }

    fn seed_initial_widgets(&mut self, area: Rect) {
        // a clock and a weather card, tucked into the top-right corner
        let clock = self.add_widget(WidgetKind::Clock);
        let weather = self.add_widget(WidgetKind::Weather);
        let (clock_w, _) = WidgetKind::Clock.default_size();
        let x = i32::from(area.width) - i32::from(clock_w) - 2;
        if x > 0 {
            self.manager
                .set_widget_geometry(clock, GeometryUpdate::position(x, 2));
            self.manager
                .set_widget_geometry(weather, GeometryUpdate::position(x, 10));
        }
    }

    fn sample_metrics(&mut self) {
        let due = match self.last_metrics {
            None => true,
            Some(at) => at.elapsed() >= METRICS_INTERVAL,
        };
        if due {
            self.last_metrics = Some(Instant::now());
            self.cpu = self.metrics.cpu();
            self.mem = self.metrics.mem();
        }
    }

    pub fn render(&mut self, frame: &mut UiFrame<'_>) {
        let area = frame.area();
        let (top, desktop, dock_area) = Self::layout(area);
        self.last_desktop = desktop;
        if self.seed_widgets && !self.seeded {
            self.seeded = true;
            self.seed_initial_widgets(area);
        }
        self.sample_metrics();
        self.top_bar.begin_frame(top);
        self.dock.begin_frame(dock_area);

        frame.fill_rect(area, Style::default().bg(theme::desktop_bg()));

        // widgets first: fixed layer below all windows, insertion order
        let widget_draws: Vec<(EntityId, CellRect, f32)> = self
            .manager
            .widgets_in_order()
            .iter()
            .map(|widget| (widget.id, widget.rect, widget.opacity))
            .collect();
        for (id, rect, opacity) in widget_draws {
            if let Some(widget) = self.manager.widget(id) {
                chrome::render_widget_frame(frame, widget, rect);
            }
            let focused = self.key_target == Some(id);
            Self::render_pane_content(
                frame,
                self.widget_panes.get_mut(&id),
                chrome::widget_content_rect(rect),
                theme::widget_bg(opacity),
                focused,
            );
        }

        // windows back to front
        let top_window = self.manager.top_window();
        let window_draws: Vec<(EntityId, CellRect)> = self
            .manager
            .visible_windows()
            .iter()
            .filter_map(|window| self.display_rect(window.id).map(|rect| (window.id, rect)))
            .collect();
        for (id, display) in window_draws {
            let focused = top_window == Some(id);
            if let Some(window) = self.manager.window(id) {
                chrome::render_window_frame(frame, window, display, focused);
            }
            Self::render_pane_content(
                frame,
                self.window_panes.get_mut(&id),
                chrome::window_content_rect(display),
                theme::window_body_bg(),
                focused && self.key_target.is_none(),
            );
        }

        self.dock.render(frame, &self.manager.dock_entries());
        let clock = Local::now().format("%H:%M:%S").to_string();
        self.top_bar.render(
            frame,
            self.state.widget_menu_open(),
            self.cpu,
            self.mem,
            &clock,
        );
        if self.state.widget_menu_open() {
            self.top_bar.render_menu(frame, area);
        }
    }

    /// Render a pane into an offscreen buffer sized to its content area,
    /// then composite at the (possibly negative) on-screen origin.
    fn render_pane_content(
        frame: &mut UiFrame<'_>,
        pane: Option<&mut Box<dyn Pane>>,
        content: CellRect,
        background: ratatui::style::Color,
        focused: bool,
    ) {
        let Some(pane) = pane else {
            return;
        };
        if content.width == 0 || content.height == 0 {
            return;
        }
        let local = Rect {
            x: 0,
            y: 0,
            width: content.width,
            height: content.height,
        };
        let mut buffer = Buffer::empty(local);
        buffer.set_style(local, Style::default().bg(background));
        let mut offscreen = UiFrame::from_parts(local, &mut buffer);
        pane.render(&mut offscreen, local, &PaneContext::new(focused));
        frame.blit_from_signed(&buffer, content);
    }

    pub fn handle_event(&mut self, event: &Event) -> bool {
        match event {
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Key(_) => self.dispatch_key(event),
            _ => false,
        }
    }

    fn dispatch_key(&mut self, event: &Event) -> bool {
        if let Some(widget_id) = self.key_target {
            if let Some(pane) = self.widget_panes.get_mut(&widget_id) {
                return pane.handle_event(event, &PaneContext::new(true));
            }
            self.key_target = None;
        }
        let Some(focused) = self.manager.top_window() else {
            return false;
        };
        if let Some(pane) = self.window_panes.get_mut(&focused) {
            return pane.handle_event(event, &PaneContext::new(true));
        }
        false
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent) -> bool {
        match mouse.kind {
            MouseEventKind::Up(_) => {
                if self.pointer.session_active() {
                    self.pointer.end_session();
                    return true;
                }
                false
            }
            MouseEventKind::Drag(_) | MouseEventKind::Moved => {
                self.pointer
                    .pointer_moved(&mut self.manager, mouse.column, mouse.row)
            }
            MouseEventKind::Down(_) => self.handle_pointer_down(mouse),
            _ => false,
        }
    }

    fn handle_pointer_down(&mut self, mouse: &MouseEvent) -> bool {
        let (column, row) = (mouse.column, mouse.row);

        if self.state.widget_menu_open() {
            if let Some(kind) = self.top_bar.hit_test_menu_item(column, row) {
                self.add_widget(kind);
                self.state.set_widget_menu_open(false);
                return true;
            }
            if self.top_bar.menu_contains(column, row) {
                return true;
            }
            // clicking elsewhere dismisses the menu; the click still lands
            self.state.set_widget_menu_open(false);
        }

        if self.top_bar.contains(column, row) {
            if self.top_bar.hit_test_widgets_button(column, row) {
                self.state.toggle_widget_menu();
            }
            return true;
        }

        if self.dock.contains(column, row) {
            if let Some(kind) = self.dock.hit_test_launcher(column, row) {
                self.open_window(kind);
            } else if let Some(id) = self.dock.hit_test_restore(column, row) {
                self.manager.restore_window(id);
                self.key_target = None;
            }
            return true;
        }

        // windows, frontmost first; the topmost hit wins and occludes
        // everything beneath it
        let stacked: Vec<(EntityId, CellRect, bool)> = self
            .manager
            .visible_windows()
            .iter()
            .rev()
            .filter_map(|window| {
                self.display_rect(window.id)
                    .map(|rect| (window.id, rect, window.maximized))
            })
            .collect();
        for (id, display, maximized) in stacked {
            let hit = chrome::window_hit_test(display, column, row);
            if hit == ChromeHit::Miss {
                continue;
            }
            self.manager.focus_window(id);
            match hit {
                ChromeHit::Close => self.close_window(id),
                ChromeHit::Minimize => self.manager.minimize_window(id),
                ChromeHit::Maximize => self.manager.toggle_maximize(id),
                ChromeHit::Drag => {
                    // a maximized window keeps its controls but ignores
                    // drag initiation until restored
                    if !maximized {
                        self.pointer
                            .begin_drag(&self.manager, DragTarget::Window(id), column, row);
                    }
                }
                ChromeHit::Resize(edge) => {
                    if !maximized {
                        self.pointer.begin_resize(
                            &self.manager,
                            DragTarget::Window(id),
                            edge,
                            column,
                            row,
                        );
                    }
                }
                ChromeHit::Content => {
                    self.key_target = None;
                    let content = chrome::window_content_rect(display);
                    let localized = localize_mouse(mouse, content);
                    if let Some(pane) = self.window_panes.get_mut(&id) {
                        pane.handle_event(&Event::Mouse(localized), &PaneContext::new(true));
                    }
                }
                ChromeHit::Miss => {}
            }
            return true;
        }

        // widgets, most recently added first
        let widget_hits: Vec<(EntityId, CellRect)> = self
            .manager
            .widgets_in_order()
            .iter()
            .rev()
            .map(|widget| (widget.id, widget.rect))
            .collect();
        for (id, rect) in widget_hits {
            let hit = chrome::widget_hit_test(rect, column, row);
            match hit {
                WidgetHit::Miss => continue,
                WidgetHit::Close => self.remove_widget(id),
                WidgetHit::Resize(edge) => {
                    self.pointer.begin_resize(
                        &self.manager,
                        DragTarget::Widget(id),
                        edge,
                        column,
                        row,
                    );
                }
                WidgetHit::Body => {
                    let content = chrome::widget_content_rect(rect);
                    let localized = localize_mouse(mouse, content);
                    let local_area = Rect {
                        x: 0,
                        y: 0,
                        width: content.width,
                        height: content.height,
                    };
                    let in_zone = self
                        .widget_panes
                        .get(&id)
                        .map(|pane| {
                            pane.interactive_zones(local_area)
                                .iter()
                                .any(|zone| rect_contains(*zone, localized.column, localized.row))
                        })
                        .unwrap_or(false);
                    if in_zone {
                        // interactive content gets the click; no drag starts
                        self.key_target = Some(id);
                        if let Some(pane) = self.widget_panes.get_mut(&id) {
                            pane.handle_event(&Event::Mouse(localized), &PaneContext::new(true));
                        }
                    } else {
                        self.pointer
                            .begin_drag(&self.manager, DragTarget::Widget(id), column, row);
                    }
                }
            }
            return true;
        }

        // empty desktop: drop any widget keyboard focus
        self.key_target = None;
        false
    }
}

/// Translate a mouse event into pane-content coordinates.
fn localize_mouse(mouse: &MouseEvent, content: CellRect) -> MouseEvent {
    let column = (i32::from(mouse.column) - content.x).clamp(0, i32::from(u16::MAX)) as u16;
    let row = (i32::from(mouse.row) - content.y).clamp(0, i32::from(u16::MAX)) as u16;
    MouseEvent {
        kind: mouse.kind,
        column,
        row,
        modifiers: mouse.modifiers,
    }
}
