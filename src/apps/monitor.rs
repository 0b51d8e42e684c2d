use std::time::{Duration, Instant};

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use crate::metrics::MetricsWalker;
use crate::pane::{Pane, PaneContext};
use crate::theme;
use crate::ui::{UiFrame, safe_set_string};

const HISTORY: usize = 20;
const SAMPLE_INTERVAL: Duration = Duration::from_secs(1);

/// System monitor over the simulated metrics feed: scrolling CPU/MEM
/// histories plus a couple of static info tiles.
pub struct MonitorPane {
    walker: MetricsWalker,
    cpu_history: [f32; HISTORY],
    mem_history: [f32; HISTORY],
    last_sample: Option<Instant>,
}

impl Default for MonitorPane {
    fn default() -> Self {
        Self::new()
    }
}

impl MonitorPane {
    pub fn new() -> Self {
        Self {
            walker: MetricsWalker::new(0x6d6f6e),
            cpu_history: [0.0; HISTORY],
            mem_history: [0.0; HISTORY],
            last_sample: None,
        }
    }

    fn sample_if_due(&mut self) {
        let due = match self.last_sample {
            None => true,
            Some(at) => at.elapsed() >= SAMPLE_INTERVAL,
        };
        if !due {
            return;
        }
        self.last_sample = Some(Instant::now());
        self.push_sample();
    }

    fn push_sample(&mut self) {
        self.cpu_history.rotate_left(1);
        self.cpu_history[HISTORY - 1] = self.walker.cpu();
        self.mem_history.rotate_left(1);
        self.mem_history[HISTORY - 1] = self.walker.mem();
    }

    fn render_history(
        frame: &mut UiFrame<'_>,
        area: Rect,
        y: u16,
        label: &str,
        history: &[f32],
        accent: Style,
    ) {
        let buffer = frame.buffer_mut();
        let bounds = area.intersection(buffer.area);
        let current = history.last().copied().unwrap_or_default();
        let header = format!("{label:<14} {current:>5.1}%");
        safe_set_string(buffer, bounds, area.x + 1, y, &header, accent);
        // one braille-ish column per sample, scaled to eight steps
        const STEPS: [&str; 8] = ["▁", "▂", "▃", "▄", "▅", "▆", "▇", "█"];
        let mut graph = String::new();
        for value in history {
            let step = ((value / 100.0) * (STEPS.len() as f32 - 1.0)).round() as usize;
            graph.push_str(STEPS[step.min(STEPS.len() - 1)]);
        }
        safe_set_string(buffer, bounds, area.x + 1, y + 1, &graph, accent);
    }
}

impl Pane for MonitorPane {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, _ctx: &PaneContext) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        self.sample_if_due();
        {
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
                "System Monitor",
                Style::default()
                    .fg(theme::widget_fg())
                    .add_modifier(Modifier::BOLD),
            );
        }
        Self::render_history(
            frame,
            area,
            area.y + 2,
            "CPU Usage",
            &self.cpu_history,
            Style::default().fg(theme::accent_cyan()),
        );
        Self::render_history(
            frame,
            area,
            area.y + 5,
            "Memory Usage",
            &self.mem_history,
            Style::default().fg(theme::accent_purple()),
        );
        let buffer = frame.buffer_mut();
        let bounds = area.intersection(buffer.area);
        let tiles_y = area.y + 8;
        safe_set_string(
            buffer,
            bounds,
            area.x + 1,
            tiles_y,
            "Processes: 247      Uptime: 3d 14h",
            Style::default().fg(theme::widget_dim_fg()),
        );
    }
}
