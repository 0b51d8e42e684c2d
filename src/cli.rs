use std::path::PathBuf;

use clap::Parser;

use crate::desktop::WindowKind;

#[derive(Debug, Parser)]
#[command(name = "neoshell", version, about)]
pub struct Options {
    /// Frame poll interval in milliseconds.
    #[arg(long, default_value_t = 16)]
    pub tick_ms: u64,

    /// Disable mouse capture at startup (toggle later from the top bar).
    #[arg(long)]
    pub no_mouse: bool,

    /// Append debug logs to this file instead of stderr.
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Open one or more application windows at startup.
    #[arg(long = "open", value_enum)]
    pub open: Vec<WindowKind>,

    /// Start with an empty desktop (no seeded clock/weather widgets).
    #[arg(long)]
    pub bare: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_parse() {
        let opts = Options::parse_from(["neoshell"]);
        assert_eq!(opts.tick_ms, 16);
        assert!(!opts.no_mouse);
        assert!(opts.open.is_empty());
        assert!(!opts.bare);
    }

    #[test]
    fn open_accepts_kind_names() {
        let opts = Options::parse_from(["neoshell", "--open", "terminal", "--open", "files"]);
        assert_eq!(opts.open, vec![WindowKind::Terminal, WindowKind::Files]);
    }
}
