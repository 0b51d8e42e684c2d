pub mod chrome;
pub mod dock;
pub mod entity;
pub mod manager;
pub mod pointer;
pub mod topbar;

pub use chrome::{ChromeHit, WidgetHit};
pub use dock::Dock;
pub use entity::{EntityId, GeometryUpdate, WidgetEntity, WidgetKind, WindowEntity, WindowKind};
pub use manager::{DesktopManager, DockEntry};
pub use pointer::{DragTarget, PointerController, ResizeEdge};
pub use topbar::TopBar;
