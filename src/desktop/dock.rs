use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use crate::desktop::entity::{EntityId, WindowKind};
use crate::desktop::manager::DockEntry;
use crate::geometry::rect_contains;
use crate::theme;
use crate::ui::{UiFrame, safe_set_string};

#[derive(Debug, Clone, Copy)]
struct LauncherHit {
    kind: WindowKind,
    rect: Rect,
}

#[derive(Debug, Clone, Copy)]
struct RestoreHit {
    id: EntityId,
    rect: Rect,
}

/// The dock: a fixed launcher row plus one restore affordance per
/// minimized window.
///
/// The dock holds no state of its own; it re-derives everything from the
/// manager's snapshot each frame. Hit rectangles are rebuilt during
/// render, so a minimized list can never go stale.
#[derive(Debug)]
pub struct Dock {
    area: Rect,
    launcher_hits: Vec<LauncherHit>,
    restore_hits: Vec<RestoreHit>,
}

impl Default for Dock {
    fn default() -> Self {
        Self::new()
    }
}

impl Dock {
    pub fn new() -> Self {
        Self {
            area: Rect::default(),
            launcher_hits: Vec::new(),
            restore_hits: Vec::new(),
        }
    }

    pub fn begin_frame(&mut self, area: Rect) {
        self.area = area;
        self.launcher_hits.clear();
        self.restore_hits.clear();
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        rect_contains(self.area, column, row)
    }

    pub fn render(&mut self, frame: &mut UiFrame<'_>, entries: &[DockEntry]) {
        let area = self.area;
        if area.width == 0 || area.height == 0 {
            return;
        }
        frame.fill_rect(
            area,
            Style::default().bg(theme::dock_bg()).fg(theme::dock_fg()),
        );
        let buffer = frame.buffer_mut();
        let bounds = area.intersection(buffer.area);
        if bounds.width == 0 || bounds.height == 0 {
            return;
        }

        let minimized: Vec<&DockEntry> = entries.iter().filter(|entry| entry.minimized).collect();

        // center the chunk run within the bar
        let launcher_width: u16 = WindowKind::ALL
            .iter()
            .map(|kind| kind.dock_label().chars().count() as u16 + 2)
            .sum();
        let minimized_width: u16 = minimized
            .iter()
            .map(|entry| entry.title.chars().count() as u16 + 2)
            .sum();
        let separator_width = if minimized.is_empty() { 0 } else { 3 };
        let total = launcher_width + separator_width + minimized_width;
        let mut x = if total >= area.width {
            area.x
        } else {
            area.x + (area.width - total) / 2
        };
        let y = area.y;
        let max_x = area.x.saturating_add(area.width);

        for kind in WindowKind::ALL {
            let chunk = format!(" {} ", kind.dock_label());
            let chunk_width = chunk.chars().count() as u16;
            if x.saturating_add(chunk_width) > max_x {
                break;
            }
            let style = Style::default().bg(theme::dock_bg()).fg(theme::dock_fg());
            safe_set_string(buffer, bounds, x, y, &chunk, style);
            self.launcher_hits.push(LauncherHit {
                kind,
                rect: Rect {
                    x,
                    y,
                    width: chunk_width,
                    height: 1,
                },
            });
            x = x.saturating_add(chunk_width);
        }

        if !minimized.is_empty() && x.saturating_add(3) <= max_x {
            safe_set_string(
                buffer,
                bounds,
                x,
                y,
                " │ ",
                Style::default()
                    .bg(theme::dock_bg())
                    .fg(theme::dock_separator_fg()),
            );
            x = x.saturating_add(3);
        }

        for entry in minimized {
            let chunk = format!(" {} ", entry.title);
            let chunk_width = chunk.chars().count() as u16;
            if x.saturating_add(chunk_width) > max_x {
                break;
            }
            let style = Style::default()
                .bg(theme::dock_bg())
                .fg(theme::dock_minimized_fg())
                .add_modifier(Modifier::DIM);
            safe_set_string(buffer, bounds, x, y, &chunk, style);
            self.restore_hits.push(RestoreHit {
                id: entry.id,
                rect: Rect {
                    x,
                    y,
                    width: chunk_width,
                    height: 1,
                },
            });
            x = x.saturating_add(chunk_width);
        }
    }

    pub fn hit_test_launcher(&self, column: u16, row: u16) -> Option<WindowKind> {
        self.launcher_hits
            .iter()
            .find(|hit| rect_contains(hit.rect, column, row))
            .map(|hit| hit.kind)
    }

    pub fn hit_test_restore(&self, column: u16, row: u16) -> Option<EntityId> {
        self.restore_hits
            .iter()
            .find(|hit| rect_contains(hit.rect, column, row))
            .map(|hit| hit.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::buffer::Buffer;

    fn entry(id: u64, minimized: bool) -> DockEntry {
        DockEntry {
            id: EntityId(id),
            kind: WindowKind::Terminal,
            title: "Terminal".to_string(),
            minimized,
        }
    }

    fn render_dock(entries: &[DockEntry]) -> Dock {
        let area = Rect {
            x: 0,
            y: 23,
            width: 120,
            height: 1,
        };
        let mut dock = Dock::new();
        dock.begin_frame(area);
        let frame_area = Rect {
            x: 0,
            y: 0,
            width: 120,
            height: 24,
        };
        let mut buf = Buffer::empty(frame_area);
        let mut ui = UiFrame::from_parts(frame_area, &mut buf);
        dock.render(&mut ui, entries);
        dock
    }

    #[test]
    fn launchers_are_always_clickable() {
        let dock = render_dock(&[]);
        let hit = dock.launcher_hits.first().expect("launcher hits recorded");
        assert_eq!(
            dock.hit_test_launcher(hit.rect.x, hit.rect.y),
            Some(hit.kind)
        );
        assert_eq!(dock.launcher_hits.len(), WindowKind::ALL.len());
    }

    #[test]
    fn only_minimized_windows_get_restore_affordances() {
        let dock = render_dock(&[entry(1, false), entry(2, true)]);
        assert_eq!(dock.restore_hits.len(), 1);
        let hit = dock.restore_hits[0];
        assert_eq!(dock.hit_test_restore(hit.rect.x, hit.rect.y), Some(EntityId(2)));
    }

    #[test]
    fn begin_frame_drops_stale_hits() {
        let mut dock = render_dock(&[entry(7, true)]);
        assert_eq!(dock.restore_hits.len(), 1);
        dock.begin_frame(Rect {
            x: 0,
            y: 23,
            width: 120,
            height: 1,
        });
        assert!(dock.hit_test_restore(0, 23).is_none());
        assert!(dock.restore_hits.is_empty());
    }
}
