use chrono::Local;
use crossterm::event::{Event, KeyCode, KeyEventKind};
use indoc::indoc;
use ratatui::layout::Rect;
use ratatui::style::Style;

use crate::pane::{Pane, PaneContext};
use crate::theme;
use crate::ui::{UiFrame, safe_set_string};

const BANNER: &str = indoc! {r#"
    ╔═══════════════════════════════════════════════╗
    ║         NeoLinux Terminal v2.0                ║
    ║         Type "help" for commands              ║
    ╚═══════════════════════════════════════════════╝
"#};

const MAX_SCROLLBACK: usize = 500;

/// A toy terminal: a fixed command table over simulated output. There is
/// no shell process behind it.
pub struct TerminalPane {
    lines: Vec<String>,
    input: String,
    history: Vec<String>,
}

impl Default for TerminalPane {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalPane {
    pub fn new() -> Self {
        let mut lines: Vec<String> = BANNER.lines().map(str::to_string).collect();
        lines.push(String::new());
        Self {
            lines,
            input: String::new(),
            history: Vec::new(),
        }
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    fn run_command(&mut self, raw: &str) {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return;
        }
        self.history.push(trimmed.to_string());
        self.lines.push(format!("$ {trimmed}"));

        let command = trimmed.split_whitespace().next().unwrap_or_default();
        match command {
            "help" => self.lines.extend(
                [
                    "Available commands:",
                    "  help     - Show this help message",
                    "  ls       - List directory contents",
                    "  whoami   - Display current user",
                    "  date     - Show current date and time",
                    "  neofetch - Display system information",
                    "  clear    - Clear the terminal",
                    "  cowsay   - Make the cow say something",
                ]
                .map(String::from),
            ),
            "ls" => self.lines.extend(
                [
                    "Documents/",
                    "Downloads/",
                    "Pictures/",
                    "Desktop/",
                    "config.txt",
                    "readme.md",
                ]
                .map(String::from),
            ),
            "whoami" => self.lines.push("neo@neolinux".to_string()),
            "date" => self
                .lines
                .push(Local::now().format("%a %b %e %T %Y").to_string()),
            "neofetch" => self.lines.extend(
                [
                    "        _____        neo@neolinux",
                    "       /     \\       ---------------",
                    "      | ^   ^ |      OS: NeoLinux 2024.12",
                    "      |   >   |      Kernel: 6.x.x-neo",
                    "       \\ ___ /       Shell: neosh 5.1",
                    "                     CPU: Virtual x86_64",
                    "    NeoLinux OS      Memory: 8192MB",
                ]
                .map(String::from),
            ),
            "clear" => self.lines.clear(),
            "cowsay" => self.lines.extend(
                [
                    " _________________",
                    "< Hello from Neo! >",
                    " -----------------",
                    "        \\   ^__^",
                    "         \\  (oo)\\_______",
                    "            (__)\\       )\\/\\",
                    "                ||----w |",
                    "                ||     ||",
                ]
                .map(String::from),
            ),
            other => self.lines.push(format!("Command not found: {other}")),
        }
        if command != "clear" {
            self.lines.push(String::new());
        }
        if self.lines.len() > MAX_SCROLLBACK {
            let overflow = self.lines.len() - MAX_SCROLLBACK;
            self.lines.drain(..overflow);
        }
    }
}

impl Pane for TerminalPane {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &PaneContext) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let buffer = frame.buffer_mut();
        let bounds = area.intersection(buffer.area);
        if bounds.width == 0 || bounds.height == 0 {
            return;
        }
        let style = Style::default().fg(theme::terminal_fg());
        let prompt_rows = 1usize;
        let view = area.height as usize;
        let visible = view.saturating_sub(prompt_rows);
        let start = self.lines.len().saturating_sub(visible);
        for (row, line) in self.lines[start..].iter().enumerate() {
            safe_set_string(buffer, bounds, area.x, area.y + row as u16, line, style);
        }
        let cursor = if ctx.focused() { "▊" } else { "" };
        let prompt = format!("$ {}{cursor}", self.input);
        let prompt_y = area.y + (view.saturating_sub(1)) as u16;
        safe_set_string(
            buffer,
            bounds,
            area.x,
            prompt_y,
            &prompt,
            Style::default().fg(theme::accent_cyan()),
        );
    }

    fn handle_event(&mut self, event: &Event, _ctx: &PaneContext) -> bool {
        let Event::Key(key) = event else {
            return false;
        };
        if key.kind != KeyEventKind::Press {
            return false;
        }
        match key.code {
            KeyCode::Char(ch) => {
                self.input.push(ch);
                true
            }
            KeyCode::Backspace => {
                self.input.pop();
                true
            }
            KeyCode::Enter => {
                let line = std::mem::take(&mut self.input);
                self.run_command(&line);
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

    fn type_line(pane: &mut TerminalPane, line: &str) {
        let ctx = PaneContext::new(true);
        for ch in line.chars() {
            pane.handle_event(
                &Event::Key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE)),
                &ctx,
            );
        }
        pane.handle_event(
            &Event::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
            &ctx,
        );
    }

    #[test]
    fn known_command_appends_output() {
        let mut pane = TerminalPane::new();
        let before = pane.lines.len();
        type_line(&mut pane, "whoami");
        assert!(pane.lines.len() > before);
        assert!(pane.lines.iter().any(|l| l == "neo@neolinux"));
        assert_eq!(pane.history(), ["whoami"]);
    }

    #[test]
    fn unknown_command_reports_not_found() {
        let mut pane = TerminalPane::new();
        type_line(&mut pane, "frobnicate");
        assert!(
            pane.lines
                .iter()
                .any(|l| l == "Command not found: frobnicate")
        );
    }

    #[test]
    fn clear_empties_the_scrollback() {
        let mut pane = TerminalPane::new();
        type_line(&mut pane, "ls");
        type_line(&mut pane, "clear");
        assert!(pane.lines.is_empty());
    }

    #[test]
    fn backspace_edits_the_input_line() {
        let mut pane = TerminalPane::new();
        let ctx = PaneContext::new(true);
        for ch in "lsx".chars() {
            pane.handle_event(
                &Event::Key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE)),
                &ctx,
            );
        }
        pane.handle_event(
            &Event::Key(KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE)),
            &ctx,
        );
        assert_eq!(pane.input, "ls");
    }

    #[test]
    fn scrollback_is_bounded() {
        let mut pane = TerminalPane::new();
        for _ in 0..200 {
            type_line(&mut pane, "help");
        }
        assert!(pane.lines.len() <= MAX_SCROLLBACK);
    }
}
