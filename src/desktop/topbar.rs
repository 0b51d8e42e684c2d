use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use crate::desktop::entity::WidgetKind;
use crate::geometry::rect_contains;
use crate::theme;
use crate::ui::{UiFrame, safe_set_string, truncate_to_width};

/// The top bar: branding, the widgets drop-down, and the CPU/MEM/clock
/// readout. Hit rectangles are rebuilt every frame.
#[derive(Debug)]
pub struct TopBar {
    area: Rect,
    widgets_button: Option<Rect>,
    menu_bounds: Option<Rect>,
    item_hits: Vec<(WidgetKind, Rect)>,
    hostname: Option<String>,
}

impl Default for TopBar {
    fn default() -> Self {
        Self::new()
    }
}

impl TopBar {
    pub fn new() -> Self {
        Self {
            area: Rect::default(),
            widgets_button: None,
            menu_bounds: None,
            item_hits: Vec::new(),
            hostname: None,
        }
    }

    pub fn begin_frame(&mut self, area: Rect) {
        self.area = area;
        self.widgets_button = None;
        self.menu_bounds = None;
        self.item_hits.clear();
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        rect_contains(self.area, column, row)
    }

    fn hostname(&mut self) -> String {
        if let Some(ref cached) = self.hostname {
            return cached.clone();
        }
        let host = hostname::get()
            .ok()
            .and_then(|s| s.into_string().ok())
            .unwrap_or_else(|| "neolinux".to_string());
        self.hostname = Some(host.clone());
        host
    }

    pub fn render(
        &mut self,
        frame: &mut UiFrame<'_>,
        menu_open: bool,
        cpu: f32,
        mem: f32,
        clock: &str,
    ) {
        let area = self.area;
        if area.width == 0 || area.height == 0 {
            return;
        }
        frame.fill_rect(
            area,
            Style::default()
                .bg(theme::top_bar_bg())
                .fg(theme::top_bar_fg()),
        );
        let host = self.hostname();
        let buffer = frame.buffer_mut();
        let bounds = area.intersection(buffer.area);
        if bounds.width == 0 || bounds.height == 0 {
            return;
        }
        let y = area.y;
        let max_x = area.x.saturating_add(area.width);
        let mut x = area.x.saturating_add(1);

        let brand = "⬢ NeoLinux";
        let brand_style = Style::default()
            .bg(theme::top_bar_bg())
            .fg(theme::brand_fg())
            .add_modifier(Modifier::BOLD);
        safe_set_string(buffer, bounds, x, y, brand, brand_style);
        x = x.saturating_add(brand.chars().count() as u16 + 2);

        let button = " Widgets ▾ ";
        let button_width = button.chars().count() as u16;
        if x.saturating_add(button_width) <= max_x {
            let style = if menu_open {
                Style::default()
                    .bg(theme::menu_selected_bg())
                    .fg(theme::menu_selected_fg())
            } else {
                Style::default()
                    .bg(theme::top_bar_bg())
                    .fg(theme::top_bar_fg())
            };
            safe_set_string(buffer, bounds, x, y, button, style);
            self.widgets_button = Some(Rect {
                x,
                y,
                width: button_width,
                height: 1,
            });
        }

        let readout = format!("CPU: {cpu:>2.0}%  MEM: {mem:>2.0}%  {clock}  {host}");
        let readout_width = readout.chars().count() as u16 + 2;
        if readout_width < area.width {
            let start = max_x.saturating_sub(readout_width).saturating_sub(1);
            safe_set_string(
                buffer,
                bounds,
                start,
                y,
                "●",
                Style::default()
                    .bg(theme::top_bar_bg())
                    .fg(theme::accent_green()),
            );
            safe_set_string(
                buffer,
                bounds,
                start.saturating_add(2),
                y,
                &readout,
                Style::default()
                    .bg(theme::top_bar_bg())
                    .fg(theme::top_bar_fg()),
            );
        }
    }

    /// Draw the widgets drop-down below its button. Called after windows
    /// so the menu overlays everything.
    pub fn render_menu(&mut self, frame: &mut UiFrame<'_>, bounds: Rect) {
        let Some(anchor) = self.widgets_button else {
            return;
        };
        let label_width = WidgetKind::ALL
            .iter()
            .map(|kind| kind.label().chars().count() as u16)
            .max()
            .unwrap_or(1);
        let width = (label_width + 4).min(bounds.width);
        let height = (WidgetKind::ALL.len() as u16).min(bounds.height);
        let start_x = anchor.x;
        let start_y = anchor.y.saturating_add(1);
        let menu_rect = Rect {
            x: start_x,
            y: start_y,
            width,
            height,
        };
        self.menu_bounds = Some(menu_rect);
        let menu_style = Style::default().bg(theme::menu_bg()).fg(theme::menu_fg());
        frame.fill_rect(menu_rect, menu_style);
        let buffer = frame.buffer_mut();
        let clip = bounds.intersection(buffer.area);
        for (idx, kind) in WidgetKind::ALL.into_iter().enumerate() {
            let item_y = start_y.saturating_add(idx as u16);
            if item_y >= clip.y.saturating_add(clip.height) {
                break;
            }
            let line = truncate_to_width(&format!("  {}", kind.label()), width as usize);
            safe_set_string(buffer, clip, start_x, item_y, &line, menu_style);
            self.item_hits.push((
                kind,
                Rect {
                    x: start_x,
                    y: item_y,
                    width,
                    height: 1,
                },
            ));
        }
    }

    pub fn hit_test_widgets_button(&self, column: u16, row: u16) -> bool {
        self.widgets_button
            .is_some_and(|rect| rect_contains(rect, column, row))
    }

    pub fn hit_test_menu_item(&self, column: u16, row: u16) -> Option<WidgetKind> {
        self.item_hits
            .iter()
            .find(|(_, rect)| rect_contains(*rect, column, row))
            .map(|(kind, _)| *kind)
    }

    pub fn menu_contains(&self, column: u16, row: u16) -> bool {
        self.menu_bounds
            .is_some_and(|rect| rect_contains(rect, column, row))
    }
}
