use crossterm::event::{Event, KeyCode, KeyEventKind};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use crate::pane::{Pane, PaneContext};
use crate::theme;
use crate::ui::{UiFrame, safe_set_string};

struct CatalogEntry {
    name: &'static str,
    category: &'static str,
    rating: &'static str,
}

const CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        name: "NeoPaint",
        category: "Graphics",
        rating: "★★★★☆",
    },
    CatalogEntry {
        name: "NeoEdit",
        category: "Productivity",
        rating: "★★★★★",
    },
    CatalogEntry {
        name: "WaveTunes",
        category: "Music",
        rating: "★★★★☆",
    },
    CatalogEntry {
        name: "PixelFlick",
        category: "Video",
        rating: "★★★☆☆",
    },
    CatalogEntry {
        name: "Game Center",
        category: "Games",
        rating: "★★★★☆",
    },
    CatalogEntry {
        name: "Stellar Maps",
        category: "Science",
        rating: "★★★★★",
    },
];

/// App-store catalog mock. Install buttons are decorative; nothing is
/// ever downloaded.
pub struct AppStorePane {
    selected: usize,
}

impl Default for AppStorePane {
    fn default() -> Self {
        Self::new()
    }
}

impl AppStorePane {
    pub fn new() -> Self {
        Self { selected: 0 }
    }
}

impl Pane for AppStorePane {
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
            "Featured",
            Style::default()
                .fg(theme::widget_fg())
                .add_modifier(Modifier::BOLD),
        );
        for (idx, entry) in CATALOG.iter().enumerate() {
            let y = area.y + 2 + idx as u16;
            if y >= area.y.saturating_add(area.height) {
                break;
            }
            let line = format!(
                " {:<14} {:<14} {}   [ Install ]",
                entry.name, entry.category, entry.rating
            );
            let style = if idx == self.selected && ctx.focused() {
                Style::default()
                    .bg(theme::menu_selected_bg())
                    .fg(theme::menu_selected_fg())
            } else {
                Style::default().fg(theme::widget_fg())
            };
            safe_set_string(buffer, bounds, area.x, y, &line, style);
        }
    }

    fn handle_event(&mut self, event: &Event, _ctx: &PaneContext) -> bool {
        let Event::Key(key) = event else {
            return false;
        };
        if key.kind != KeyEventKind::Press {
            return false;
        }
        let len = CATALOG.len() as isize;
        match key.code {
            KeyCode::Up => {
                self.selected = (self.selected as isize - 1).rem_euclid(len) as usize;
                true
            }
            KeyCode::Down => {
                self.selected = (self.selected as isize + 1).rem_euclid(len) as usize;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};

    #[test]
    fn selection_cycles_through_catalog() {
        let mut pane = AppStorePane::new();
        let ctx = PaneContext::new(true);
        for _ in 0..CATALOG.len() {
            pane.handle_event(
                &Event::Key(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE)),
                &ctx,
            );
        }
        assert_eq!(pane.selected, 0);
    }
}
