use crossterm::event::{Event, KeyCode, KeyEventKind};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use crate::pane::{Pane, PaneContext};
use crate::theme;
use crate::ui::{UiFrame, safe_set_string};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    Folder,
    File,
}

struct FileRow {
    name: &'static str,
    kind: EntryKind,
    size: &'static str,
}

const LISTING: &[FileRow] = &[
    FileRow {
        name: "Documents",
        kind: EntryKind::Folder,
        size: "-",
    },
    FileRow {
        name: "Downloads",
        kind: EntryKind::Folder,
        size: "-",
    },
    FileRow {
        name: "Pictures",
        kind: EntryKind::Folder,
        size: "-",
    },
    FileRow {
        name: "Music",
        kind: EntryKind::Folder,
        size: "-",
    },
    FileRow {
        name: "Videos",
        kind: EntryKind::Folder,
        size: "-",
    },
    FileRow {
        name: "config.json",
        kind: EntryKind::File,
        size: "2.4 KB",
    },
    FileRow {
        name: "readme.md",
        kind: EntryKind::File,
        size: "1.1 KB",
    },
    FileRow {
        name: "script.sh",
        kind: EntryKind::File,
        size: "856 B",
    },
];

/// A file browser mock over a fixed listing. Nothing touches the real
/// filesystem.
pub struct FilesPane {
    path: String,
    selected: usize,
}

impl Default for FilesPane {
    fn default() -> Self {
        Self::new()
    }
}

impl FilesPane {
    pub fn new() -> Self {
        Self {
            path: "/home/neo".to_string(),
            selected: 0,
        }
    }

    fn move_selection(&mut self, delta: isize) {
        let len = LISTING.len() as isize;
        self.selected = (self.selected as isize + delta).rem_euclid(len) as usize;
    }
}

impl Pane for FilesPane {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &PaneContext) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let buffer = frame.buffer_mut();
        let bounds = area.intersection(buffer.area);
        if bounds.width == 0 || bounds.height == 0 {
            return;
        }
        let path_line = format!(" ◂ ▸  {}", self.path);
        safe_set_string(
            buffer,
            bounds,
            area.x,
            area.y,
            &path_line,
            Style::default().fg(theme::accent_cyan()),
        );

        for (idx, row) in LISTING.iter().enumerate() {
            let y = area.y + 2 + idx as u16;
            if y >= area.y.saturating_add(area.height) {
                break;
            }
            let marker = match row.kind {
                EntryKind::Folder => "▸",
                EntryKind::File => "·",
            };
            let name_width = 24usize;
            let line = format!(" {marker} {:<name_width$} {:>8}", row.name, row.size);
            let style = if idx == self.selected && ctx.focused() {
                Style::default()
                    .bg(theme::menu_selected_bg())
                    .fg(theme::menu_selected_fg())
                    .add_modifier(Modifier::BOLD)
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
        match key.code {
            KeyCode::Up => {
                self.move_selection(-1);
                true
            }
            KeyCode::Down => {
                self.move_selection(1);
                true
            }
            KeyCode::Enter => {
                if LISTING[self.selected].kind == EntryKind::Folder {
                    self.path = format!("/home/neo/{}", LISTING[self.selected].name);
                } else {
                    self.path = "/home/neo".to_string();
                }
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

    fn press(pane: &mut FilesPane, code: KeyCode) -> bool {
        pane.handle_event(
            &Event::Key(KeyEvent::new(code, KeyModifiers::NONE)),
            &PaneContext::new(true),
        )
    }

    #[test]
    fn selection_wraps_both_ways() {
        let mut pane = FilesPane::new();
        assert!(press(&mut pane, KeyCode::Up));
        assert_eq!(pane.selected, LISTING.len() - 1);
        assert!(press(&mut pane, KeyCode::Down));
        assert_eq!(pane.selected, 0);
    }

    #[test]
    fn entering_a_folder_updates_the_path() {
        let mut pane = FilesPane::new();
        press(&mut pane, KeyCode::Enter);
        assert_eq!(pane.path, "/home/neo/Documents");
    }
}
