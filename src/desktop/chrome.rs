//! Window and widget chrome: borders, title bars, controls.
//!
//! Hit testing is pure geometry over the entity's display rect; the shell
//! decides what a hit means (maximized windows keep their controls but
//! ignore drag/resize hits). Rendering draws straight into the frame with
//! per-cell clipping so partially off-screen entities degrade gracefully.

use ratatui::style::{Modifier, Style};

use crate::desktop::entity::{WidgetEntity, WindowEntity};
use crate::desktop::pointer::ResizeEdge;
use crate::geometry::CellRect;
use crate::theme;
use crate::ui::UiFrame;

/// What a pointer-down over a window's rect landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChromeHit {
    /// Title-bar area that starts a drag.
    Drag,
    Minimize,
    Maximize,
    Close,
    Resize(ResizeEdge),
    /// The mounted pane's region; routed to the pane, never to a drag.
    Content,
    Miss,
}

/// What a pointer-down over a widget's rect landed on. Body hits are
/// further split by the pane's interactive zones at the shell level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetHit {
    Close,
    Resize(ResizeEdge),
    Body,
    Miss,
}

/// The pane content area inside a window's chrome: border all around plus
/// the title-bar row.
pub fn window_content_rect(display: CellRect) -> CellRect {
    display.inset(1, 2, 1, 1)
}

/// The pane content area inside a widget's border.
pub fn widget_content_rect(display: CellRect) -> CellRect {
    display.inset(1, 1, 1, 1)
}

fn border_edge(rect: CellRect, column: i32, row: i32) -> Option<ResizeEdge> {
    let left = rect.x;
    let top = rect.y;
    let right = rect.right() - 1;
    let bottom = rect.bottom() - 1;
    let on_left = column == left;
    let on_right = column == right;
    let on_top = row == top;
    let on_bottom = row == bottom;
    match (on_left, on_right, on_top, on_bottom) {
        (true, _, true, _) => Some(ResizeEdge::TopLeft),
        (_, true, true, _) => Some(ResizeEdge::TopRight),
        (true, _, _, true) => Some(ResizeEdge::BottomLeft),
        (_, true, _, true) => Some(ResizeEdge::BottomRight),
        (true, _, _, _) => Some(ResizeEdge::Left),
        (_, true, _, _) => Some(ResizeEdge::Right),
        (_, _, true, _) => Some(ResizeEdge::Top),
        (_, _, _, true) => Some(ResizeEdge::Bottom),
        _ => None,
    }
}

pub fn window_hit_test(rect: CellRect, column: u16, row: u16) -> ChromeHit {
    if !rect.contains(column, row) {
        return ChromeHit::Miss;
    }
    let c = i32::from(column);
    let r = i32::from(row);
    if let Some(edge) = border_edge(rect, c, r) {
        return ChromeHit::Resize(edge);
    }
    if r == rect.y + 1 {
        let right = rect.right();
        if c == right - 3 {
            return ChromeHit::Close;
        }
        if c == right - 5 {
            return ChromeHit::Maximize;
        }
        if c == right - 7 {
            return ChromeHit::Minimize;
        }
        return ChromeHit::Drag;
    }
    ChromeHit::Content
}

pub fn widget_hit_test(rect: CellRect, column: u16, row: u16) -> WidgetHit {
    if !rect.contains(column, row) {
        return WidgetHit::Miss;
    }
    let c = i32::from(column);
    let r = i32::from(row);
    // close glyph sits on the top border, one cell in from the corner
    if r == rect.y && c == rect.right() - 2 {
        return WidgetHit::Close;
    }
    if let Some(edge) = border_edge(rect, c, r) {
        return WidgetHit::Resize(edge);
    }
    WidgetHit::Body
}

fn put(frame: &mut UiFrame<'_>, x: i32, y: i32, symbol: &str, style: Style) {
    let area = frame.area();
    let x0 = i32::from(area.x);
    let y0 = i32::from(area.y);
    if x < x0 || y < y0 || x >= x0 + i32::from(area.width) || y >= y0 + i32::from(area.height) {
        return;
    }
    if let Some(cell) = frame.buffer_mut().cell_mut((x as u16, y as u16)) {
        cell.set_symbol(symbol);
        cell.set_style(style);
    }
}

fn draw_border(frame: &mut UiFrame<'_>, rect: CellRect, style: Style) {
    let right = rect.right() - 1;
    let bottom = rect.bottom() - 1;
    for x in rect.x..=right {
        let symbol = if x == rect.x {
            "┌"
        } else if x == right {
            "┐"
        } else {
            "─"
        };
        put(frame, x, rect.y, symbol, style);
        let symbol = if x == rect.x {
            "└"
        } else if x == right {
            "┘"
        } else {
            "─"
        };
        put(frame, x, bottom, symbol, style);
    }
    for y in (rect.y + 1)..bottom {
        put(frame, rect.x, y, "│", style);
        put(frame, right, y, "│", style);
    }
}

fn fill_interior(frame: &mut UiFrame<'_>, rect: CellRect, style: Style) {
    if let Some(visible) = rect.visible(frame.area()) {
        frame.fill_rect(visible, style);
    }
}

/// Draw a window's chrome: body fill, border, title bar with centered
/// title and minimize/maximize/close controls.
pub fn render_window_frame(
    frame: &mut UiFrame<'_>,
    window: &WindowEntity,
    display: CellRect,
    focused: bool,
) {
    if display.width < 2 || display.height < 3 {
        return;
    }
    fill_interior(
        frame,
        display,
        Style::default().bg(theme::window_body_bg()),
    );
    draw_border(
        frame,
        display,
        Style::default()
            .fg(theme::window_border(focused))
            .bg(theme::window_body_bg()),
    );

    let header_y = display.y + 1;
    let header_style = Style::default()
        .bg(theme::window_header_bg(focused))
        .fg(theme::window_header_fg(focused));
    let right = display.right();
    for x in (display.x + 1)..(right - 1) {
        put(frame, x, header_y, " ", header_style);
    }

    // centered title, truncated clear of the three controls
    let header_width = i32::from(display.width) - 2;
    let reserved = 8;
    let max_title = (header_width - reserved).max(0) as usize;
    let title: String = window.title.chars().take(max_title).collect();
    let title_len = title.chars().count() as i32;
    let start_x = display.x + 1 + ((header_width - title_len) / 2).max(0);
    let title_style = if focused {
        header_style.add_modifier(Modifier::BOLD)
    } else {
        header_style
    };
    for (idx, ch) in title.chars().enumerate() {
        put(
            frame,
            start_x + idx as i32,
            header_y,
            &ch.to_string(),
            title_style,
        );
    }

    put(
        frame,
        right - 7,
        header_y,
        "–",
        header_style.fg(theme::control_minimize()),
    );
    put(
        frame,
        right - 5,
        header_y,
        "□",
        header_style.fg(theme::control_maximize()),
    );
    put(
        frame,
        right - 3,
        header_y,
        "✕",
        header_style.fg(theme::control_close()),
    );
}

/// Draw a widget's frame: opacity-shaded body, border, close glyph.
pub fn render_widget_frame(frame: &mut UiFrame<'_>, widget: &WidgetEntity, display: CellRect) {
    if display.width < 2 || display.height < 2 {
        return;
    }
    let bg = theme::widget_bg(widget.opacity);
    fill_interior(frame, display, Style::default().bg(bg));
    draw_border(
        frame,
        display,
        Style::default().fg(theme::widget_border()).bg(bg),
    );
    put(
        frame,
        display.right() - 2,
        display.y,
        "✕",
        Style::default().fg(theme::control_close()).bg(bg),
    );
}
