use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use crate::metrics::MetricsWalker;
use crate::pane::{Pane, PaneContext};
use crate::theme;
use crate::ui::{UiFrame, safe_set_string};

const CONDITIONS: [(&str, &str); 4] = [
    ("☀", "Sunny"),
    ("⛅", "Partly Cloudy"),
    ("☁", "Cloudy"),
    ("🌧", "Rainy"),
];

/// Weather card with simulated conditions, picked once at creation.
/// There is no weather service behind it.
pub struct WeatherPane {
    glyph: &'static str,
    condition: &'static str,
    temperature: i32,
}

impl Default for WeatherPane {
    fn default() -> Self {
        Self::new()
    }
}

impl WeatherPane {
    pub fn new() -> Self {
        let mut walker = MetricsWalker::new(0x77656174);
        let pick = (walker.next_unit() * CONDITIONS.len() as f32) as usize;
        let (glyph, condition) = CONDITIONS[pick.min(CONDITIONS.len() - 1)];
        let temperature = 15 + (walker.next_unit() * 15.0) as i32;
        Self {
            glyph,
            condition,
            temperature,
        }
    }
}

impl Pane for WeatherPane {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, _ctx: &PaneContext) {
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
            "San Francisco, CA",
            Style::default().fg(theme::widget_dim_fg()),
        );
        safe_set_string(
            buffer,
            bounds,
            area.x + 1,
            area.y + 2,
            self.glyph,
            Style::default().fg(theme::widget_fg()),
        );
        let temp = format!("{}°C", self.temperature);
        safe_set_string(
            buffer,
            bounds,
            area.x + 1,
            area.y + area.height.saturating_sub(3),
            &temp,
            Style::default()
                .fg(theme::widget_fg())
                .add_modifier(Modifier::BOLD),
        );
        safe_set_string(
            buffer,
            bounds,
            area.x + 1,
            area.y + area.height.saturating_sub(2),
            self.condition,
            Style::default().fg(theme::widget_dim_fg()),
        );
    }
}
