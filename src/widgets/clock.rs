use chrono::Local;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use crate::pane::{Pane, PaneContext};
use crate::theme;
use crate::ui::{UiFrame, safe_set_string};

pub struct ClockPane;

impl Default for ClockPane {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockPane {
    pub fn new() -> Self {
        Self
    }
}

impl Pane for ClockPane {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, _ctx: &PaneContext) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let buffer = frame.buffer_mut();
        let bounds = area.intersection(buffer.area);
        if bounds.width == 0 || bounds.height == 0 {
            return;
        }
        let now = Local::now();
        let time = now.format("%H:%M").to_string();
        let date = now.format("%A, %b %e").to_string();
        let center = |text: &str| -> u16 {
            let width = text.chars().count() as u16;
            if width >= area.width {
                area.x
            } else {
                area.x + (area.width - width) / 2
            }
        };
        let mid = area.y + area.height / 2;
        safe_set_string(
            buffer,
            bounds,
            center(&time),
            mid.saturating_sub(1),
            &time,
            Style::default()
                .fg(theme::widget_fg())
                .add_modifier(Modifier::BOLD),
        );
        safe_set_string(
            buffer,
            bounds,
            center(&date),
            mid,
            &date,
            Style::default().fg(theme::widget_dim_fg()),
        );
    }
}
