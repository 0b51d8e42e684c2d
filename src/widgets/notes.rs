use crossterm::event::{Event, KeyCode, KeyEventKind, MouseEventKind};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use crate::pane::{Pane, PaneContext};
use crate::theme;
use crate::ui::{UiFrame, safe_set_string};

const PLACEHOLDER: &str = "Type your notes here...";

/// Free-form note pad. The body is one big interactive zone: clicking it
/// routes keyboard input here instead of dragging the widget.
pub struct NotesPane {
    text: String,
}

impl Default for NotesPane {
    fn default() -> Self {
        Self::new()
    }
}

impl NotesPane {
    pub fn new() -> Self {
        Self {
            text: String::new(),
        }
    }

    fn body_rect(area: Rect) -> Rect {
        Rect {
            x: area.x,
            y: area.y + 1,
            width: area.width,
            height: area.height.saturating_sub(1),
        }
    }

    fn wrapped_lines(&self, width: usize) -> Vec<String> {
        if width == 0 {
            return Vec::new();
        }
        let mut lines = Vec::new();
        for raw in self.text.split('\n') {
            if raw.is_empty() {
                lines.push(String::new());
                continue;
            }
            let mut current = String::new();
            for ch in raw.chars() {
                if current.chars().count() == width {
                    lines.push(std::mem::take(&mut current));
                }
                current.push(ch);
            }
            lines.push(current);
        }
        lines
    }
}

impl Pane for NotesPane {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &PaneContext) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let buffer = frame.buffer_mut();
        let bounds = area.intersection(buffer.area);
        if bounds.width == 0 || bounds.height == 0 {
            return;
        }
        safe_set_string(
            buffer,
            bounds,
            area.x + 1,
            area.y,
            "Quick Notes",
            Style::default()
                .fg(theme::widget_fg())
                .add_modifier(Modifier::BOLD),
        );
        let body = Self::body_rect(area);
        if self.text.is_empty() {
            safe_set_string(
                buffer,
                bounds,
                body.x + 1,
                body.y,
                PLACEHOLDER,
                Style::default()
                    .fg(theme::widget_dim_fg())
                    .add_modifier(Modifier::ITALIC),
            );
        } else {
            let width = body.width.saturating_sub(2) as usize;
            for (idx, line) in self.wrapped_lines(width).iter().enumerate() {
                let y = body.y + idx as u16;
                if y >= body.y.saturating_add(body.height) {
                    break;
                }
                safe_set_string(
                    buffer,
                    bounds,
                    body.x + 1,
                    y,
                    line,
                    Style::default().fg(theme::widget_fg()),
                );
            }
        }
        if ctx.focused() {
            // visible caret after the last character
            let width = body.width.saturating_sub(2) as usize;
            let lines = self.wrapped_lines(width);
            let row = lines.len().saturating_sub(1) as u16;
            let col = lines.last().map(|l| l.chars().count()).unwrap_or(0) as u16;
            if row < body.height {
                safe_set_string(
                    buffer,
                    bounds,
                    body.x + 1 + col,
                    body.y + row,
                    "▏",
                    Style::default().fg(theme::accent_cyan()),
                );
            }
        }
    }

    fn handle_event(&mut self, event: &Event, _ctx: &PaneContext) -> bool {
        match event {
            Event::Mouse(mouse) => {
                // body clicks claim keyboard focus at the shell level
                matches!(mouse.kind, MouseEventKind::Down(_))
            }
            Event::Key(key) => {
                if key.kind != KeyEventKind::Press {
                    return false;
                }
                match key.code {
                    KeyCode::Char(ch) => {
                        self.text.push(ch);
                        true
                    }
                    KeyCode::Enter => {
                        self.text.push('\n');
                        true
                    }
                    KeyCode::Backspace => {
                        self.text.pop();
                        true
                    }
                    _ => false,
                }
            }
            _ => false,
        }
    }

    fn interactive_zones(&self, area: Rect) -> Vec<Rect> {
        vec![Self::body_rect(area)]
    }
}
