use std::time::Instant;

use crossterm::event::{Event, MouseEventKind};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use crate::geometry::rect_contains;
use crate::pane::{Pane, PaneContext};
use crate::theme;
use crate::ui::{UiFrame, safe_set_string};

// fraction of the track consumed per second while playing
const PROGRESS_RATE: f32 = 5.0;

/// Music player card: track line, progress bar, transport controls. The
/// transport buttons are interactive zones so clicks reach them instead
/// of dragging the widget.
pub struct MusicPane {
    playing: bool,
    progress: f32,
    last_tick: Option<Instant>,
    // content size from the last render; events arrive in content-local
    // coordinates and are mapped back onto this layout
    last_size: (u16, u16),
}

impl Default for MusicPane {
    fn default() -> Self {
        Self::new()
    }
}

impl MusicPane {
    pub fn new() -> Self {
        Self {
            playing: false,
            progress: 45.0,
            last_tick: None,
            last_size: (0, 0),
        }
    }

    /// Previous / play-pause / next hit boxes, centered on the bottom row.
    fn controls(area: Rect) -> [Rect; 3] {
        let y = area.y + area.height.saturating_sub(1);
        let center = area.x + area.width / 2;
        let make = |offset: i32| -> Rect {
            let x = (i32::from(center) + offset - 1).max(i32::from(area.x)) as u16;
            Rect {
                x,
                y,
                width: 3,
                height: 1,
            }
        };
        [make(-6), make(0), make(6)]
    }

    fn advance(&mut self) {
        let now = Instant::now();
        let elapsed = self
            .last_tick
            .map(|at| now.duration_since(at).as_secs_f32())
            .unwrap_or_default();
        self.last_tick = Some(now);
        if self.playing {
            self.progress += elapsed * PROGRESS_RATE;
            if self.progress >= 100.0 {
                self.progress = 0.0;
            }
        }
    }

    fn last_area(&self) -> Rect {
        Rect {
            x: 0,
            y: 0,
            width: self.last_size.0,
            height: self.last_size.1,
        }
    }
}

impl Pane for MusicPane {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, _ctx: &PaneContext) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        self.advance();
        self.last_size = (area.width, area.height);
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
            "Neon Dreams",
            Style::default()
                .fg(theme::widget_fg())
                .add_modifier(Modifier::BOLD),
        );
        safe_set_string(
            buffer,
            bounds,
            area.x + 1,
            area.y + 1,
            "Synthwave Artist",
            Style::default().fg(theme::widget_dim_fg()),
        );

        let bar_width = area.width.saturating_sub(2) as usize;
        if bar_width > 0 {
            let filled = (((self.progress / 100.0) * bar_width as f32) as usize).min(bar_width);
            let bar = format!("{}{}", "━".repeat(filled), "─".repeat(bar_width - filled));
            safe_set_string(
                buffer,
                bounds,
                area.x + 1,
                area.y + area.height.saturating_sub(3),
                &bar,
                Style::default().fg(theme::accent_cyan()),
            );
        }

        let [prev, play, next] = Self::controls(area);
        let control_style = Style::default().fg(theme::widget_fg());
        safe_set_string(buffer, bounds, prev.x, prev.y, "|◂◂", control_style);
        let play_glyph = if self.playing { " ⏸ " } else { " ▶ " };
        safe_set_string(
            buffer,
            bounds,
            play.x,
            play.y,
            play_glyph,
            control_style.add_modifier(Modifier::BOLD),
        );
        safe_set_string(buffer, bounds, next.x, next.y, "▸▸|", control_style);
    }

    fn handle_event(&mut self, event: &Event, _ctx: &PaneContext) -> bool {
        let Event::Mouse(mouse) = event else {
            return false;
        };
        if !matches!(mouse.kind, MouseEventKind::Down(_)) {
            return false;
        }
        let [prev, play, next] = Self::controls(self.last_area());
        if rect_contains(play, mouse.column, mouse.row) {
            self.playing = !self.playing;
            return true;
        }
        if rect_contains(prev, mouse.column, mouse.row)
            || rect_contains(next, mouse.column, mouse.row)
        {
            self.progress = 0.0;
            return true;
        }
        false
    }

    fn interactive_zones(&self, area: Rect) -> Vec<Rect> {
        Self::controls(area).to_vec()
    }
}
