use neoshell::desktop::{
    DesktopManager, DragTarget, GeometryUpdate, PointerController, ResizeEdge, WidgetKind,
    WindowKind,
};
use neoshell::geometry::CellRect;

#[test]
fn drag_offset_invariance_for_arbitrary_deltas() {
    let mut manager = DesktopManager::new();
    let id = manager.open_window(WindowKind::Terminal);
    manager.set_window_geometry(id, GeometryUpdate::position(30, 10));
    let mut pointer = PointerController::new();

    // grab the title bar at (34, 11): offset is (4, 1)
    assert!(pointer.begin_drag(&manager, DragTarget::Window(id), 34, 11));
    for (px, py) in [(40u16, 14u16), (2, 3), (90, 1), (0, 0)] {
        assert!(pointer.pointer_moved(&mut manager, px, py));
        let rect = manager.window(id).unwrap().rect;
        assert_eq!(rect.x, i32::from(px) - 4);
        assert_eq!(rect.y, i32::from(py) - 1);
    }
    pointer.end_session();
}

#[test]
fn resize_below_minimum_clamps_per_kind() {
    let mut manager = DesktopManager::new();
    let id = manager.open_window(WindowKind::Terminal);
    manager.set_window_geometry(id, GeometryUpdate::rect(CellRect::new(5, 5, 70, 20)));
    let mut pointer = PointerController::new();
    assert!(pointer.begin_resize(&manager, DragTarget::Window(id), ResizeEdge::Right, 74, 10));
    assert!(pointer.pointer_moved(&mut manager, 0, 10));
    let rect = manager.window(id).unwrap().rect;
    let (min_w, _) = WindowKind::Terminal.min_size();
    assert_eq!(rect.width, min_w);
    // the left edge never moved
    assert_eq!(rect.x, 5);
}

#[test]
fn stale_sessions_are_inert_until_released() {
    let mut manager = DesktopManager::new();
    let id = manager.open_window(WindowKind::Files);
    let mut pointer = PointerController::new();
    assert!(pointer.begin_drag(&manager, DragTarget::Window(id), 12, 4));
    manager.close_window(id);

    // subsequent moves consume events but mutate nothing
    assert!(pointer.pointer_moved(&mut manager, 80, 30));
    assert_eq!(manager.window_count(), 0);
    assert!(pointer.session_active());
    pointer.end_session();
    assert!(!pointer.session_active());

    // a fresh window is unaffected by the dead session's history
    let next = manager.open_window(WindowKind::Files);
    assert!(!pointer.pointer_moved(&mut manager, 50, 20));
    let rect = manager.window(next).unwrap().rect;
    assert_eq!((rect.x, rect.y), WindowKind::Files.origin_for(0));
}

#[test]
fn widget_resize_honors_weather_minimum() {
    let mut manager = DesktopManager::new();
    let id = manager.add_widget(WidgetKind::Weather);
    manager.set_widget_geometry(id, GeometryUpdate::rect(CellRect::new(0, 0, 28, 12)));
    let mut pointer = PointerController::new();
    assert!(pointer.begin_resize(&manager, DragTarget::Widget(id), ResizeEdge::Bottom, 14, 11));
    assert!(pointer.pointer_moved(&mut manager, 14, 0));
    let rect = manager.widget(id).unwrap().rect;
    assert_eq!(rect.height, WidgetKind::Weather.min_size().1);
    assert_eq!(rect.y, 0);
}

#[test]
fn maximized_windows_ignore_pointer_sessions() {
    let mut manager = DesktopManager::new();
    let id = manager.open_window(WindowKind::Browser);
    manager.toggle_maximize(id);
    let stored = manager.window(id).unwrap().rect;
    let mut pointer = PointerController::new();
    assert!(!pointer.begin_drag(&manager, DragTarget::Window(id), 20, 4));
    assert!(!pointer.begin_resize(&manager, DragTarget::Window(id), ResizeEdge::Left, 20, 4));
    assert_eq!(manager.window(id).unwrap().rect, stored);

    // restoring re-enables gestures against the untouched geometry
    manager.toggle_maximize(id);
    assert!(pointer.begin_drag(&manager, DragTarget::Window(id), 20, 4));
    assert_eq!(manager.window(id).unwrap().rect, stored);
}

#[test]
fn pointer_up_commits_the_last_geometry() {
    let mut manager = DesktopManager::new();
    let id = manager.open_window(WindowKind::Monitor);
    manager.set_window_geometry(id, GeometryUpdate::position(10, 10));
    let mut pointer = PointerController::new();
    assert!(pointer.begin_drag(&manager, DragTarget::Window(id), 15, 11));
    assert!(pointer.pointer_moved(&mut manager, 60, 25));
    pointer.end_session();
    let rect = manager.window(id).unwrap().rect;
    assert_eq!((rect.x, rect.y), (55, 24));
    // no further moves apply after release
    assert!(!pointer.pointer_moved(&mut manager, 5, 5));
    assert_eq!(manager.window(id).unwrap().rect, rect);
}
