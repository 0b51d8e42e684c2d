//! Shared crate-wide constants.

/// Height of the top bar in rows. The desktop area starts below it.
pub const TOP_BAR_HEIGHT: u16 = 1;

/// Height of the dock in rows, anchored to the bottom of the frame.
pub const DOCK_HEIGHT: u16 = 1;

/// First z-order value handed out by the desktop manager. Every focus,
/// open, and restore consumes the next value; the counter never resets.
pub const INITIAL_WINDOW_Z: u32 = 1000;

/// Fixed stacking layer for desktop widgets. Widgets never compete for
/// z-order among themselves and always render below windows.
pub const WIDGET_LAYER_Z: u32 = 500;

/// Per-entity offset applied to each newly created window so consecutive
/// opens do not overlap exactly.
pub const WINDOW_STAGGER: (i32, i32) = (3, 2);

/// Same, for widgets added from the top-bar menu.
pub const WIDGET_STAGGER: (i32, i32) = (2, 2);
