use indoc::indoc;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use crate::pane::{Pane, PaneContext};
use crate::theme;
use crate::ui::{UiFrame, safe_set_string};

const START_PAGE: &str = indoc! {"
    NeoSurf

    Search or enter an address to begin.

    Bookmarks
      · NeoLinux Handbook
      · Package Index
      · Community Forum

    Offline simulation: pages never load.
"};

/// A browser mock: a URL bar over a static start page. There is no
/// network stack behind it.
pub struct BrowserPane {
    url: String,
}

impl Default for BrowserPane {
    fn default() -> Self {
        Self::new()
    }
}

impl BrowserPane {
    pub fn new() -> Self {
        Self {
            url: "neo://start".to_string(),
        }
    }
}

impl Pane for BrowserPane {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, _ctx: &PaneContext) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let buffer = frame.buffer_mut();
        let bounds = area.intersection(buffer.area);
        if bounds.width == 0 || bounds.height == 0 {
            return;
        }
        let url_bar = format!(" ◂ ▸ ⟳  [ {} ]", self.url);
        safe_set_string(
            buffer,
            bounds,
            area.x,
            area.y,
            &url_bar,
            Style::default().fg(theme::accent_cyan()),
        );
        for (idx, line) in START_PAGE.lines().enumerate() {
            let y = area.y + 2 + idx as u16;
            if y >= area.y.saturating_add(area.height) {
                break;
            }
            let style = if idx == 0 {
                Style::default()
                    .fg(theme::accent_purple())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme::widget_fg())
            };
            safe_set_string(buffer, bounds, area.x + 1, y, line, style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::buffer::Buffer;

    #[test]
    fn start_page_renders_url_bar() {
        let area = Rect {
            x: 0,
            y: 0,
            width: 60,
            height: 20,
        };
        let mut buf = Buffer::empty(area);
        let mut ui = UiFrame::from_parts(area, &mut buf);
        let mut pane = BrowserPane::new();
        pane.render(&mut ui, area, &PaneContext::default());
        let mut row = String::new();
        for x in 0..area.width {
            row.push_str(buf.cell((x, 0)).unwrap().symbol());
        }
        assert!(row.contains("neo://start"));
    }
}
