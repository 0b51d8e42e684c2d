use std::time::{Duration, Instant};

use ratatui::layout::Rect;
use ratatui::style::Style;

use crate::metrics::MetricsWalker;
use crate::pane::{Pane, PaneContext};
use crate::theme;
use crate::ui::{UiFrame, safe_set_string};

const SAMPLE_INTERVAL: Duration = Duration::from_secs(2);

pub struct SystemInfoPane {
    walker: MetricsWalker,
    cpu: f32,
    mem: f32,
    last_sample: Option<Instant>,
}

impl Default for SystemInfoPane {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemInfoPane {
    pub fn new() -> Self {
        Self {
            walker: MetricsWalker::new(0x737973),
            cpu: 0.0,
            mem: 0.0,
            last_sample: None,
        }
    }

    fn sample_if_due(&mut self) {
        let due = match self.last_sample {
            None => true,
            Some(at) => at.elapsed() >= SAMPLE_INTERVAL,
        };
        if due {
            self.last_sample = Some(Instant::now());
            self.cpu = self.walker.cpu();
            self.mem = self.walker.mem();
        }
    }

    fn gauge(value: f32, width: usize) -> String {
        let filled = ((value / 100.0) * width as f32).round() as usize;
        let filled = filled.min(width);
        format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
    }
}

impl Pane for SystemInfoPane {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, _ctx: &PaneContext) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        self.sample_if_due();
        let buffer = frame.buffer_mut();
        let bounds = area.intersection(buffer.area);
        if bounds.width == 0 || bounds.height == 0 {
            return;
        }
        let gauge_width = (area.width.saturating_sub(12)).max(4) as usize;
        let cpu_line = format!(
            "CPU {:>3.0}% {}",
            self.cpu,
            Self::gauge(self.cpu, gauge_width)
        );
        safe_set_string(
            buffer,
            bounds,
            area.x + 1,
            area.y,
            &cpu_line,
            Style::default().fg(theme::accent_cyan()),
        );
        let mem_line = format!(
            "MEM {:>3.0}% {}",
            self.mem,
            Self::gauge(self.mem, gauge_width)
        );
        safe_set_string(
            buffer,
            bounds,
            area.x + 1,
            area.y + 1,
            &mem_line,
            Style::default().fg(theme::accent_purple()),
        );
        let dim = Style::default().fg(theme::widget_dim_fg());
        safe_set_string(
            buffer,
            bounds,
            area.x + 1,
            area.y + 3,
            "Disk: 234GB / 512GB",
            dim,
        );
        safe_set_string(
            buffer,
            bounds,
            area.x + 1,
            area.y + 4,
            "Net: 45.2 MB/s",
            dim,
        );
        safe_set_string(
            buffer,
            bounds,
            area.x + 1,
            area.y + 5,
            "Uptime: 3d 14h 27m",
            dim,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gauge_is_clamped_to_width() {
        assert_eq!(SystemInfoPane::gauge(0.0, 4), "░░░░");
        assert_eq!(SystemInfoPane::gauge(100.0, 4), "████");
        assert_eq!(SystemInfoPane::gauge(250.0, 4).chars().count(), 4);
    }
}
