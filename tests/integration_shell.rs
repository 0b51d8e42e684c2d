use crossterm::event::{Event, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use neoshell::desktop::{GeometryUpdate, WidgetKind, WindowKind};
use neoshell::shell::DesktopShell;
use neoshell::ui::UiFrame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

const FRAME: Rect = Rect {
    x: 0,
    y: 0,
    width: 120,
    height: 36,
};

fn render_once(shell: &mut DesktopShell) {
    let mut buffer = Buffer::empty(FRAME);
    let mut frame = UiFrame::from_parts(FRAME, &mut buffer);
    shell.render(&mut frame);
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

fn down(column: u16, row: u16) -> Event {
    mouse(MouseEventKind::Down(MouseButton::Left), column, row)
}

fn drag(column: u16, row: u16) -> Event {
    mouse(MouseEventKind::Drag(MouseButton::Left), column, row)
}

fn up(column: u16, row: u16) -> Event {
    mouse(MouseEventKind::Up(MouseButton::Left), column, row)
}

#[test]
fn full_drag_gesture_through_the_event_layer() {
    let mut shell = DesktopShell::new(false);
    let id = shell.open_window(WindowKind::Files);
    render_once(&mut shell);
    let rect = shell.manager().window(id).unwrap().rect;

    let grab_x = (rect.x + 6) as u16;
    let grab_y = (rect.y + 1) as u16;
    assert!(shell.handle_event(&down(grab_x, grab_y)));
    assert!(shell.handle_event(&drag(grab_x + 20, grab_y + 7)));
    assert!(shell.handle_event(&up(grab_x + 20, grab_y + 7)));

    let moved = shell.manager().window(id).unwrap().rect;
    assert_eq!((moved.x, moved.y), (rect.x + 20, rect.y + 7));
    assert!(!shell.pointer().session_active());
}

#[test]
fn interactive_content_never_starts_a_drag() {
    let mut shell = DesktopShell::new(false);
    let id = shell.add_widget(WidgetKind::Music);
    shell
        .manager_mut()
        .set_widget_geometry(id, GeometryUpdate::position(20, 8));
    render_once(&mut shell);
    let rect = shell.manager().widget(id).unwrap().rect;

    // the transport row is the widget's bottom content row
    let controls_y = (rect.bottom() - 2) as u16;
    let center_x = (rect.x + i32::from(rect.width) / 2) as u16;
    assert!(shell.handle_event(&down(center_x, controls_y)));
    assert!(!shell.pointer().session_active());

    // a follow-up move that would have relocated the widget is inert
    shell.handle_event(&drag(center_x + 15, controls_y + 5));
    assert_eq!(shell.manager().widget(id).unwrap().rect, rect);
}

#[test]
fn widget_body_outside_zones_drags_normally() {
    let mut shell = DesktopShell::new(false);
    let id = shell.add_widget(WidgetKind::Music);
    shell
        .manager_mut()
        .set_widget_geometry(id, GeometryUpdate::position(20, 8));
    render_once(&mut shell);
    let rect = shell.manager().widget(id).unwrap().rect;

    // the track-title row carries no interactive zone
    let body = ((rect.x + 3) as u16, (rect.y + 1) as u16);
    assert!(shell.handle_event(&down(body.0, body.1)));
    assert!(shell.pointer().session_active());
    shell.handle_event(&drag(body.0 + 5, body.1 + 3));
    shell.handle_event(&up(body.0 + 5, body.1 + 3));
    let moved = shell.manager().widget(id).unwrap().rect;
    assert_eq!((moved.x, moved.y), (rect.x + 5, rect.y + 3));
}

#[test]
fn minimize_from_chrome_then_restore_from_dock() {
    let mut shell = DesktopShell::new(false);
    let id = shell.open_window(WindowKind::Monitor);
    let other = shell.open_window(WindowKind::Files);
    render_once(&mut shell);
    let display = shell.manager().window(id).unwrap().rect;

    // chrome minimize control: two cells left of the maximize control
    let minimize = ((display.right() - 7) as u16, (display.y + 1) as u16);
    assert!(shell.handle_event(&down(minimize.0, minimize.1)));
    assert!(shell.manager().window(id).unwrap().minimized);
    render_once(&mut shell);

    let dock_row = FRAME.height - 1;
    let mut restored = false;
    for x in 0..FRAME.width {
        if shell.dock_restore_at(x, dock_row).is_some() {
            shell.handle_event(&down(x, dock_row));
            restored = true;
            break;
        }
    }
    assert!(restored, "dock must expose the minimized window");
    let window = shell.manager().window(id).unwrap();
    assert!(!window.minimized);
    assert!(window.z > shell.manager().window(other).unwrap().z);
}

#[test]
fn windows_render_above_widgets() {
    let mut shell = DesktopShell::new(false);
    let widget = shell.add_widget(WidgetKind::Clock);
    shell
        .manager_mut()
        .set_widget_geometry(widget, GeometryUpdate::position(12, 4));
    let window = shell.open_window(WindowKind::Files);
    shell
        .manager_mut()
        .set_window_geometry(window, GeometryUpdate::position(12, 4));
    render_once(&mut shell);

    // a click over the overlap hits the window, not the widget
    assert!(shell.handle_event(&down(20, 6)));
    assert!(shell.manager().widget(widget).is_some());
    assert_eq!(shell.manager().top_window(), Some(window));
}
