use indoc::indoc;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use crate::pane::{Pane, PaneContext};
use crate::theme;
use crate::ui::{UiFrame, safe_set_string};

const BLURB: &str = indoc! {"
    A modern, beautiful Linux desktop experience,
    simulated entirely inside your terminal.

    Kernel: 6.x.x-neo
    Shell: NeoShell 5.1
    Desktop: NeoDE 3.0
"};

pub struct AboutPane {
    host: String,
}

impl Default for AboutPane {
    fn default() -> Self {
        Self::new()
    }
}

impl AboutPane {
    pub fn new() -> Self {
        let host = hostname::get()
            .ok()
            .and_then(|s| s.into_string().ok())
            .unwrap_or_else(|| "neolinux".to_string());
        Self { host }
    }
}

impl Pane for AboutPane {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, _ctx: &PaneContext) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let buffer = frame.buffer_mut();
        let bounds = area.intersection(buffer.area);
        if bounds.width == 0 || bounds.height == 0 {
            return;
        }
        let center = |width: usize| -> u16 {
            let width = width as u16;
            if width >= area.width {
                area.x
            } else {
                area.x + (area.width - width) / 2
            }
        };
        let title = "NeoLinux OS";
        safe_set_string(
            buffer,
            bounds,
            center(title.len()),
            area.y + 1,
            title,
            Style::default()
                .fg(theme::brand_fg())
                .add_modifier(Modifier::BOLD),
        );
        let version = concat!("neoshell ", env!("CARGO_PKG_VERSION"));
        safe_set_string(
            buffer,
            bounds,
            center(version.len()),
            area.y + 2,
            version,
            Style::default().fg(theme::widget_dim_fg()),
        );
        for (idx, line) in BLURB.lines().enumerate() {
            safe_set_string(
                buffer,
                bounds,
                center(line.chars().count()),
                area.y + 4 + idx as u16,
                line,
                Style::default().fg(theme::widget_fg()),
            );
        }
        let host_line = format!("Host: {}", self.host);
        safe_set_string(
            buffer,
            bounds,
            center(host_line.chars().count()),
            area.y + 5 + BLURB.lines().count() as u16,
            &host_line,
            Style::default().fg(theme::widget_dim_fg()),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::buffer::Buffer;

    #[test]
    fn renders_title_and_version() {
        let area = Rect {
            x: 0,
            y: 0,
            width: 50,
            height: 16,
        };
        let mut buf = Buffer::empty(area);
        let mut ui = UiFrame::from_parts(area, &mut buf);
        let mut pane = AboutPane::new();
        pane.render(&mut ui, area, &PaneContext::default());
        let mut text = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                text.push_str(buf.cell((x, y)).unwrap().symbol());
            }
        }
        assert!(text.contains("NeoLinux OS"));
        assert!(text.contains(env!("CARGO_PKG_VERSION")));
    }
}
