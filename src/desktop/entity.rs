use clap::ValueEnum;

use crate::constants::{WIDGET_STAGGER, WINDOW_STAGGER};
use crate::geometry::CellRect;

/// Opaque identity of a window or widget. Allocated once per entity and
/// never reused within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityId(pub(crate) u64);

/// The closed catalog of application windows the shell can open. Matches
/// the dock's launcher row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum)]
pub enum WindowKind {
    Terminal,
    Files,
    Browser,
    Monitor,
    AppStore,
    About,
}

impl WindowKind {
    pub const ALL: [WindowKind; 6] = [
        WindowKind::Terminal,
        WindowKind::Files,
        WindowKind::Browser,
        WindowKind::Monitor,
        WindowKind::AppStore,
        WindowKind::About,
    ];

    pub fn title(self) -> &'static str {
        match self {
            WindowKind::Terminal => "Terminal",
            WindowKind::Files => "Files",
            WindowKind::Browser => "Browser",
            WindowKind::Monitor => "System Monitor",
            WindowKind::AppStore => "App Store",
            WindowKind::About => "About",
        }
    }

    /// Short label used by the dock launcher row.
    pub fn dock_label(self) -> &'static str {
        match self {
            WindowKind::Terminal => "Terminal",
            WindowKind::Files => "Files",
            WindowKind::Browser => "Browser",
            WindowKind::Monitor => "Monitor",
            WindowKind::AppStore => "Store",
            WindowKind::About => "About",
        }
    }

    pub fn default_size(self) -> (u16, u16) {
        match self {
            WindowKind::Terminal => (70, 20),
            WindowKind::Files => (56, 16),
            WindowKind::Browser => (72, 22),
            WindowKind::Monitor => (50, 14),
            WindowKind::AppStore => (64, 18),
            WindowKind::About => (56, 16),
        }
    }

    /// Minimum size enforced during resize only; creation always uses the
    /// defaults above.
    pub fn min_size(self) -> (u16, u16) {
        match self {
            WindowKind::Terminal | WindowKind::Browser => (30, 10),
            _ => (24, 8),
        }
    }

    /// Default origin for the n-th simultaneously open window. Each new
    /// window is staggered so consecutive opens do not overlap exactly.
    pub fn origin_for(self, count: usize) -> (i32, i32) {
        let count = count as i32;
        (10 + WINDOW_STAGGER.0 * count, 3 + WINDOW_STAGGER.1 * count)
    }
}

/// The closed catalog of desktop widgets offered by the top-bar menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WidgetKind {
    Clock,
    Weather,
    Calendar,
    Music,
    SystemInfo,
    Notes,
    Todo,
    FlipClock,
}

impl WidgetKind {
    pub const ALL: [WidgetKind; 8] = [
        WidgetKind::Clock,
        WidgetKind::Weather,
        WidgetKind::Calendar,
        WidgetKind::Music,
        WidgetKind::SystemInfo,
        WidgetKind::Notes,
        WidgetKind::Todo,
        WidgetKind::FlipClock,
    ];

    pub fn label(self) -> &'static str {
        match self {
            WidgetKind::Clock => "Clock",
            WidgetKind::Weather => "Weather",
            WidgetKind::Calendar => "Calendar",
            WidgetKind::Music => "Music",
            WidgetKind::SystemInfo => "System Info",
            WidgetKind::Notes => "Notes",
            WidgetKind::Todo => "To-Do",
            WidgetKind::FlipClock => "Flip Clock",
        }
    }

    pub fn default_size(self) -> (u16, u16) {
        match self {
            WidgetKind::Clock => (28, 7),
            WidgetKind::Weather => (28, 10),
            WidgetKind::Calendar => (30, 16),
            WidgetKind::Music => (32, 9),
            WidgetKind::SystemInfo => (26, 8),
            WidgetKind::Notes => (28, 10),
            WidgetKind::Todo => (28, 13),
            WidgetKind::FlipClock => (34, 7),
        }
    }

    /// Weather keeps a taller minimum so its condition and temperature
    /// rows never collapse into each other.
    pub fn min_size(self) -> (u16, u16) {
        match self {
            WidgetKind::Weather => (14, 8),
            _ => (14, 5),
        }
    }

    /// Default background opacity, stored on the entity and forwarded to
    /// the renderer untouched.
    pub fn default_opacity(self) -> f32 {
        match self {
            WidgetKind::Clock => 0.40,
            WidgetKind::Weather => 0.45,
            WidgetKind::Calendar => 0.50,
            WidgetKind::Music => 0.50,
            WidgetKind::SystemInfo => 0.40,
            WidgetKind::Notes => 0.55,
            WidgetKind::Todo => 0.55,
            WidgetKind::FlipClock => 0.35,
        }
    }

    pub fn origin_for(self, count: usize) -> (i32, i32) {
        let count = count as i32;
        (8 + WIDGET_STAGGER.0 * count, 4 + WIDGET_STAGGER.1 * count)
    }
}

#[derive(Debug, Clone)]
pub struct WindowEntity {
    pub id: EntityId,
    pub title: String,
    pub kind: WindowKind,
    pub rect: CellRect,
    pub z: u32,
    pub minimized: bool,
    pub maximized: bool,
}

#[derive(Debug, Clone)]
pub struct WidgetEntity {
    pub id: EntityId,
    pub kind: WidgetKind,
    pub rect: CellRect,
    pub opacity: f32,
}

/// Partial geometry merged into an entity by the manager. Unset fields
/// leave the stored value untouched; nothing is validated against the
/// canvas bounds.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GeometryUpdate {
    pub x: Option<i32>,
    pub y: Option<i32>,
    pub width: Option<u16>,
    pub height: Option<u16>,
}

impl GeometryUpdate {
    pub fn position(x: i32, y: i32) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Self::default()
        }
    }

    pub fn size(width: u16, height: u16) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
            ..Self::default()
        }
    }

    pub fn rect(rect: CellRect) -> Self {
        Self {
            x: Some(rect.x),
            y: Some(rect.y),
            width: Some(rect.width),
            height: Some(rect.height),
        }
    }

    pub fn apply_to(&self, rect: &mut CellRect) {
        if let Some(x) = self.x {
            rect.x = x;
        }
        if let Some(y) = self.y {
            rect.y = y;
        }
        if let Some(width) = self.width {
            rect.width = width;
        }
        if let Some(height) = self.height {
            rect.height = height;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_defaults_are_exhaustive_and_nonzero() {
        for kind in WindowKind::ALL {
            let (w, h) = kind.default_size();
            let (mw, mh) = kind.min_size();
            assert!(w >= mw, "{kind:?} default narrower than minimum");
            assert!(h >= mh, "{kind:?} default shorter than minimum");
            assert!(!kind.title().is_empty());
        }
    }

    #[test]
    fn widget_defaults_are_exhaustive_and_nonzero() {
        for kind in WidgetKind::ALL {
            let (w, h) = kind.default_size();
            let (mw, mh) = kind.min_size();
            assert!(w >= mw);
            assert!(h >= mh);
            let opacity = kind.default_opacity();
            assert!((0.0..=1.0).contains(&opacity));
        }
    }

    #[test]
    fn weather_minimum_is_taller_than_the_rest() {
        let (_, weather_min_h) = WidgetKind::Weather.min_size();
        for kind in WidgetKind::ALL {
            if kind != WidgetKind::Weather {
                assert!(kind.min_size().1 < weather_min_h);
            }
        }
    }

    #[test]
    fn origins_stagger_by_count() {
        let (x0, y0) = WindowKind::Terminal.origin_for(0);
        let (x2, y2) = WindowKind::Terminal.origin_for(2);
        assert_eq!(x2 - x0, 2 * WINDOW_STAGGER.0);
        assert_eq!(y2 - y0, 2 * WINDOW_STAGGER.1);
    }

    #[test]
    fn geometry_update_merges_partially() {
        let mut rect = CellRect::new(5, 6, 40, 20);
        GeometryUpdate::position(-3, 9).apply_to(&mut rect);
        assert_eq!(rect, CellRect::new(-3, 9, 40, 20));
        GeometryUpdate::size(30, 10).apply_to(&mut rect);
        assert_eq!(rect, CellRect::new(-3, 9, 30, 10));
        GeometryUpdate::default().apply_to(&mut rect);
        assert_eq!(rect, CellRect::new(-3, 9, 30, 10));
    }
}
