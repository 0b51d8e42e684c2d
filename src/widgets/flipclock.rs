use chrono::Local;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use crate::pane::{Pane, PaneContext};
use crate::theme;
use crate::ui::{UiFrame, safe_set_string};

/// Large split-flap style clock: each digit rendered as a card.
pub struct FlipClockPane;

impl Default for FlipClockPane {
    fn default() -> Self {
        Self::new()
    }
}

impl FlipClockPane {
    pub fn new() -> Self {
        Self
    }
}

impl Pane for FlipClockPane {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, _ctx: &PaneContext) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let time = Local::now().format("%H:%M").to_string();
        // one 5-wide card per character, 3 rows tall
        let card_width = 5u16;
        let total = card_width * time.chars().count() as u16;
        let start_x = if total >= area.width {
            area.x
        } else {
            area.x + (area.width - total) / 2
        };
        let top = area.y + area.height.saturating_sub(3) / 2;
        let card_style = Style::default()
            .bg(theme::menu_bg())
            .fg(theme::widget_fg())
            .add_modifier(Modifier::BOLD);
        let buffer = frame.buffer_mut();
        let bounds = area.intersection(buffer.area);
        if bounds.width == 0 || bounds.height == 0 {
            return;
        }
        for (idx, ch) in time.chars().enumerate() {
            let x = start_x + idx as u16 * card_width;
            if ch == ':' {
                safe_set_string(buffer, bounds, x + 2, top + 1, ":", card_style);
                continue;
            }
            safe_set_string(buffer, bounds, x, top, " ▄▄▄ ", card_style);
            safe_set_string(buffer, bounds, x, top + 1, &format!("  {ch}  "), card_style);
            safe_set_string(buffer, bounds, x, top + 2, " ▀▀▀ ", card_style);
        }
    }
}
