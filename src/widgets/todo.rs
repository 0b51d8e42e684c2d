use crossterm::event::{Event, KeyCode, KeyEventKind, MouseEventKind};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use crate::geometry::rect_contains;
use crate::pane::{Pane, PaneContext};
use crate::theme;
use crate::ui::{UiFrame, safe_set_string, truncate_to_width};

#[derive(Debug, Clone)]
struct TodoItem {
    text: String,
    completed: bool,
}

/// To-do list: an input row, toggleable items, and a clear-completed
/// footer. Everything below the title is interactive; the footer only
/// clears pane-internal state and never touches the desktop manager.
pub struct TodoPane {
    items: Vec<TodoItem>,
    input: String,
    last_size: (u16, u16),
}

impl Default for TodoPane {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoPane {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            input: String::new(),
            last_size: (0, 0),
        }
    }

    fn input_row(area: Rect) -> u16 {
        area.y + 1
    }

    fn items_rect(area: Rect) -> Rect {
        Rect {
            x: area.x,
            y: area.y + 2,
            width: area.width,
            height: area.height.saturating_sub(3),
        }
    }

    fn footer_row(area: Rect) -> u16 {
        area.y + area.height.saturating_sub(1)
    }

    fn last_area(&self) -> Rect {
        Rect {
            x: 0,
            y: 0,
            width: self.last_size.0,
            height: self.last_size.1,
        }
    }

    fn push_item(&mut self) {
        let text = self.input.trim().to_string();
        if text.is_empty() {
            return;
        }
        // newest first
        self.items.insert(
            0,
            TodoItem {
                text,
                completed: false,
            },
        );
        self.input.clear();
    }
}

impl Pane for TodoPane {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &PaneContext) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        self.last_size = (area.width, area.height);
        let buffer = frame.buffer_mut();
        let bounds = area.intersection(buffer.area);
        if bounds.width == 0 || bounds.height == 0 {
            return;
        }
        let open = self.items.iter().filter(|item| !item.completed).count();
        let title = format!("To-Do ({open} open)");
        safe_set_string(
            buffer,
            bounds,
            area.x + 1,
            area.y,
            &title,
            Style::default()
                .fg(theme::widget_fg())
                .add_modifier(Modifier::BOLD),
        );
        let caret = if ctx.focused() { "▏" } else { "" };
        let input_line = format!("+ {}{caret}", self.input);
        safe_set_string(
            buffer,
            bounds,
            area.x + 1,
            Self::input_row(area),
            &truncate_to_width(&input_line, area.width.saturating_sub(2) as usize),
            Style::default().fg(theme::accent_cyan()),
        );
        let items = Self::items_rect(area);
        for (idx, item) in self.items.iter().enumerate() {
            let y = items.y + idx as u16;
            if y >= items.y.saturating_add(items.height) {
                break;
            }
            let marker = if item.completed { "[x]" } else { "[ ]" };
            let line = format!(" {marker} {}", item.text);
            let style = if item.completed {
                Style::default()
                    .fg(theme::widget_dim_fg())
                    .add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default().fg(theme::widget_fg())
            };
            safe_set_string(
                buffer,
                bounds,
                items.x,
                y,
                &truncate_to_width(&line, area.width as usize),
                style,
            );
        }
        if self.items.iter().any(|item| item.completed) {
            safe_set_string(
                buffer,
                bounds,
                area.x + 1,
                Self::footer_row(area),
                "Clear completed",
                Style::default()
                    .fg(theme::widget_dim_fg())
                    .add_modifier(Modifier::UNDERLINED),
            );
        }
    }

    fn handle_event(&mut self, event: &Event, _ctx: &PaneContext) -> bool {
        match event {
            Event::Mouse(mouse) => {
                if !matches!(mouse.kind, MouseEventKind::Down(_)) {
                    return false;
                }
                let area = self.last_area();
                if mouse.row == Self::input_row(area) {
                    // claims keyboard focus at the shell level
                    return true;
                }
                if mouse.row == Self::footer_row(area) {
                    self.items.retain(|item| !item.completed);
                    return true;
                }
                let items = Self::items_rect(area);
                if rect_contains(items, mouse.column, mouse.row) {
                    let idx = (mouse.row - items.y) as usize;
                    if let Some(item) = self.items.get_mut(idx) {
                        item.completed = !item.completed;
                        return true;
                    }
                }
                false
            }
            Event::Key(key) => {
                if key.kind != KeyEventKind::Press {
                    return false;
                }
                match key.code {
                    KeyCode::Char(ch) => {
                        self.input.push(ch);
                        true
                    }
                    KeyCode::Backspace => {
                        self.input.pop();
                        true
                    }
                    KeyCode::Enter => {
                        self.push_item();
                        true
                    }
                    _ => false,
                }
            }
            _ => false,
        }
    }

    fn interactive_zones(&self, area: Rect) -> Vec<Rect> {
        let mut zones = vec![
            Rect {
                x: area.x,
                y: Self::input_row(area),
                width: area.width,
                height: 1,
            },
            Self::items_rect(area),
        ];
        if self.items.iter().any(|item| item.completed) {
            zones.push(Rect {
                x: area.x,
                y: Self::footer_row(area),
                width: area.width,
                height: 1,
            });
        }
        zones
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers, MouseButton, MouseEvent};

    const AREA: Rect = Rect {
        x: 0,
        y: 0,
        width: 26,
        height: 11,
    };

    fn typed(pane: &mut TodoPane, text: &str) {
        let ctx = PaneContext::new(true);
        for ch in text.chars() {
            pane.handle_event(
                &Event::Key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE)),
                &ctx,
            );
        }
        pane.handle_event(
            &Event::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
            &ctx,
        );
    }

    fn click(pane: &mut TodoPane, column: u16, row: u16) -> bool {
        pane.handle_event(
            &Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                modifiers: KeyModifiers::NONE,
            }),
            &PaneContext::new(true),
        )
    }

    #[test]
    fn new_items_go_to_the_front() {
        let mut pane = TodoPane::new();
        typed(&mut pane, "first");
        typed(&mut pane, "second");
        assert_eq!(pane.items[0].text, "second");
        assert_eq!(pane.items[1].text, "first");
    }

    #[test]
    fn blank_input_is_ignored() {
        let mut pane = TodoPane::new();
        typed(&mut pane, "   ");
        assert!(pane.items.is_empty());
    }

    #[test]
    fn clicking_an_item_toggles_completion() {
        let mut pane = TodoPane::new();
        pane.last_size = (AREA.width, AREA.height);
        typed(&mut pane, "task");
        let items = TodoPane::items_rect(AREA);
        assert!(click(&mut pane, items.x + 2, items.y));
        assert!(pane.items[0].completed);
        assert!(click(&mut pane, items.x + 2, items.y));
        assert!(!pane.items[0].completed);
    }

    #[test]
    fn footer_clears_completed_items_only() {
        let mut pane = TodoPane::new();
        pane.last_size = (AREA.width, AREA.height);
        typed(&mut pane, "done");
        typed(&mut pane, "open");
        let items = TodoPane::items_rect(AREA);
        // "done" is at index 1 after "open" was inserted in front
        assert!(click(&mut pane, items.x + 2, items.y + 1));
        assert!(click(&mut pane, 3, TodoPane::footer_row(AREA)));
        assert_eq!(pane.items.len(), 1);
        assert_eq!(pane.items[0].text, "open");
    }

    #[test]
    fn footer_zone_only_exists_with_completed_items() {
        let mut pane = TodoPane::new();
        assert_eq!(pane.interactive_zones(AREA).len(), 2);
        typed(&mut pane, "task");
        pane.items[0].completed = true;
        assert_eq!(pane.interactive_zones(AREA).len(), 3);
    }
}
