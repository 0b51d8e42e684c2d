//! Application panes mounted inside windows.
//!
//! The shell resolves a `WindowKind` to a boxed pane when the window is
//! opened; from then on the pane is opaque to the desktop manager.

pub mod about;
pub mod browser;
pub mod files;
pub mod monitor;
pub mod store;
pub mod terminal;

pub use about::AboutPane;
pub use browser::BrowserPane;
pub use files::FilesPane;
pub use monitor::MonitorPane;
pub use store::AppStorePane;
pub use terminal::TerminalPane;

use crate::desktop::WindowKind;
use crate::pane::Pane;

pub fn pane_for(kind: WindowKind) -> Box<dyn Pane> {
    match kind {
        WindowKind::Terminal => Box::new(TerminalPane::new()),
        WindowKind::Files => Box::new(FilesPane::new()),
        WindowKind::Browser => Box::new(BrowserPane::new()),
        WindowKind::Monitor => Box::new(MonitorPane::new()),
        WindowKind::AppStore => Box::new(AppStorePane::new()),
        WindowKind::About => Box::new(AboutPane::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_resolves_to_a_pane() {
        for kind in WindowKind::ALL {
            let _ = pane_for(kind);
        }
    }
}
