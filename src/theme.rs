use ratatui::style::Color;

// Centralized theme colors for the NeoLinux look. Keeping these as small
// helpers lets panes and chrome share one palette without styling drift.

pub fn desktop_bg() -> Color {
    Color::Rgb(24, 18, 52)
}

// Top bar
pub fn top_bar_bg() -> Color {
    Color::Rgb(12, 10, 24)
}
pub fn top_bar_fg() -> Color {
    Color::Rgb(220, 220, 235)
}
pub fn brand_fg() -> Color {
    Color::Rgb(80, 200, 240)
}

// Widgets drop-down menu
pub fn menu_bg() -> Color {
    Color::Rgb(30, 26, 48)
}
pub fn menu_fg() -> Color {
    Color::Rgb(225, 225, 235)
}
pub fn menu_selected_bg() -> Color {
    Color::Rgb(70, 60, 120)
}
pub fn menu_selected_fg() -> Color {
    Color::White
}

// Window chrome
pub fn window_header_bg(focused: bool) -> Color {
    if focused {
        Color::Rgb(96, 58, 160)
    } else {
        Color::Rgb(48, 42, 72)
    }
}
pub fn window_header_fg(focused: bool) -> Color {
    if focused {
        Color::White
    } else {
        Color::Rgb(170, 168, 186)
    }
}
pub fn window_border(focused: bool) -> Color {
    if focused {
        Color::Rgb(130, 120, 200)
    } else {
        Color::Rgb(70, 66, 96)
    }
}
pub fn window_body_bg() -> Color {
    Color::Rgb(18, 16, 34)
}
pub fn control_minimize() -> Color {
    Color::Rgb(235, 195, 60)
}
pub fn control_maximize() -> Color {
    Color::Rgb(90, 200, 110)
}
pub fn control_close() -> Color {
    Color::Rgb(235, 85, 85)
}

// Dock
pub fn dock_bg() -> Color {
    Color::Rgb(14, 12, 28)
}
pub fn dock_fg() -> Color {
    Color::Rgb(215, 215, 230)
}
pub fn dock_minimized_fg() -> Color {
    Color::Rgb(140, 138, 158)
}
pub fn dock_separator_fg() -> Color {
    Color::Rgb(80, 76, 104)
}

// Widget panes
pub fn widget_border() -> Color {
    Color::Rgb(92, 86, 128)
}
pub fn widget_fg() -> Color {
    Color::Rgb(228, 228, 240)
}
pub fn widget_dim_fg() -> Color {
    Color::Rgb(158, 155, 178)
}

/// Map a widget's background opacity (0.0 to 1.0) onto a background shade.
/// The manager stores and forwards the value; only this helper interprets
/// it, blending from the desktop color toward near-black.
pub fn widget_bg(opacity: f32) -> Color {
    let opacity = opacity.clamp(0.0, 1.0);
    let blend = |from: u8, to: u8| -> u8 {
        let from = f32::from(from);
        let to = f32::from(to);
        (from + (to - from) * opacity).round() as u8
    };
    // from the desktop base color toward a dark slate
    Color::Rgb(blend(24, 8), blend(18, 7), blend(52, 18))
}

// Accents shared across panes
pub fn accent_cyan() -> Color {
    Color::Rgb(80, 200, 240)
}
pub fn accent_purple() -> Color {
    Color::Rgb(180, 120, 240)
}
pub fn accent_green() -> Color {
    Color::Rgb(100, 220, 130)
}
pub fn terminal_fg() -> Color {
    Color::Rgb(110, 230, 130)
}
