use chrono::{Datelike, Local, NaiveDate};
use crossterm::event::{Event, MouseEventKind};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use crate::pane::{Pane, PaneContext};
use crate::theme;
use crate::ui::{UiFrame, safe_set_string};

const CELL_WIDTH: u16 = 3;
const GRID_COLS: u16 = 7;

/// Month-view calendar. The month is fixed at creation; day cells are
/// clickable and therefore declared as an interactive zone.
pub struct CalendarPane {
    today: NaiveDate,
    selected: u32,
}

impl Default for CalendarPane {
    fn default() -> Self {
        Self::new()
    }
}

impl CalendarPane {
    pub fn new() -> Self {
        let today = Local::now().date_naive();
        Self {
            today,
            selected: today.day(),
        }
    }

    fn first_weekday(&self) -> u32 {
        self.today
            .with_day(1)
            .map(|d| d.weekday().num_days_from_sunday())
            .unwrap_or(0)
    }

    fn days_in_month(&self) -> u32 {
        let (year, month) = (self.today.year(), self.today.month());
        let next = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)
        };
        next.and_then(|d| d.pred_opt())
            .map(|d| d.day())
            .unwrap_or(31)
    }

    fn grid_rect(area: Rect) -> Rect {
        Rect {
            x: area.x + 1,
            y: area.y + 2,
            width: (GRID_COLS * CELL_WIDTH).min(area.width.saturating_sub(1)),
            height: area.height.saturating_sub(2),
        }
    }

    fn day_at(&self, area: Rect, column: u16, row: u16) -> Option<u32> {
        let grid = Self::grid_rect(area);
        if !crate::geometry::rect_contains(grid, column, row) {
            return None;
        }
        // first grid row is the weekday header
        if row == grid.y {
            return None;
        }
        let col = (column - grid.x) / CELL_WIDTH;
        let week = row - grid.y - 1;
        let slot = u32::from(week) * u32::from(GRID_COLS) + u32::from(col);
        let day = (slot + 1).checked_sub(self.first_weekday())?;
        if day == 0 || day > self.days_in_month() {
            return None;
        }
        Some(day)
    }
}

impl Pane for CalendarPane {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, _ctx: &PaneContext) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let buffer = frame.buffer_mut();
        let bounds = area.intersection(buffer.area);
        if bounds.width == 0 || bounds.height == 0 {
            return;
        }
        let title = self.today.format("%B %Y").to_string();
        let title_x = if (title.chars().count() as u16) < area.width {
            area.x + (area.width - title.chars().count() as u16) / 2
        } else {
            area.x
        };
        safe_set_string(
            buffer,
            bounds,
            title_x,
            area.y,
            &title,
            Style::default()
                .fg(theme::widget_fg())
                .add_modifier(Modifier::BOLD),
        );
        let grid = Self::grid_rect(area);
        safe_set_string(
            buffer,
            bounds,
            grid.x,
            grid.y,
            "Su Mo Tu We Th Fr Sa",
            Style::default().fg(theme::widget_dim_fg()),
        );
        let first_weekday = self.first_weekday();
        for day in 1..=self.days_in_month() {
            let slot = day + first_weekday - 1;
            let col = (slot % u32::from(GRID_COLS)) as u16;
            let week = (slot / u32::from(GRID_COLS)) as u16;
            let x = grid.x + col * CELL_WIDTH;
            let y = grid.y + 1 + week;
            if y >= area.y.saturating_add(area.height) {
                break;
            }
            let is_today = day == self.today.day();
            let style = if is_today {
                Style::default()
                    .bg(theme::accent_cyan())
                    .fg(theme::top_bar_bg())
                    .add_modifier(Modifier::BOLD)
            } else if day == self.selected {
                Style::default()
                    .bg(theme::menu_selected_bg())
                    .fg(theme::menu_selected_fg())
            } else {
                Style::default().fg(theme::widget_fg())
            };
            safe_set_string(buffer, bounds, x, y, &format!("{day:>2}"), style);
        }
    }

    fn handle_event(&mut self, event: &Event, _ctx: &PaneContext) -> bool {
        let Event::Mouse(mouse) = event else {
            return false;
        };
        if !matches!(mouse.kind, MouseEventKind::Down(_)) {
            return false;
        }
        // events arrive localized, so reconstruct the layout from a rect
        // anchored at the origin with a generous extent
        let area = Rect {
            x: 0,
            y: 0,
            width: GRID_COLS * CELL_WIDTH + 2,
            height: u16::MAX,
        };
        if let Some(day) = self.day_at(area, mouse.column, mouse.row) {
            self.selected = day;
            return true;
        }
        false
    }

    fn interactive_zones(&self, area: Rect) -> Vec<Rect> {
        vec![Self::grid_rect(area)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pane_on(date: NaiveDate) -> CalendarPane {
        CalendarPane {
            today: date,
            selected: date.day(),
        }
    }

    #[test]
    fn days_in_month_handles_december_and_leap_years() {
        let dec = pane_on(NaiveDate::from_ymd_opt(2025, 12, 10).unwrap());
        assert_eq!(dec.days_in_month(), 31);
        let feb_leap = pane_on(NaiveDate::from_ymd_opt(2024, 2, 5).unwrap());
        assert_eq!(feb_leap.days_in_month(), 29);
        let feb = pane_on(NaiveDate::from_ymd_opt(2025, 2, 5).unwrap());
        assert_eq!(feb.days_in_month(), 28);
    }

    #[test]
    fn day_at_maps_grid_cells() {
        // June 2025 starts on a Sunday, so slot 0 is day 1
        let pane = pane_on(NaiveDate::from_ymd_opt(2025, 6, 15).unwrap());
        let area = Rect {
            x: 0,
            y: 0,
            width: 30,
            height: 16,
        };
        let grid = CalendarPane::grid_rect(area);
        assert_eq!(pane.day_at(area, grid.x, grid.y + 1), Some(1));
        assert_eq!(pane.day_at(area, grid.x + CELL_WIDTH, grid.y + 1), Some(2));
        // header row is not a day
        assert_eq!(pane.day_at(area, grid.x, grid.y), None);
        // second week, first column is day 8
        assert_eq!(pane.day_at(area, grid.x, grid.y + 2), Some(8));
    }

    #[test]
    fn clicks_select_a_day() {
        use crossterm::event::{KeyModifiers, MouseButton, MouseEvent};
        let mut pane = pane_on(NaiveDate::from_ymd_opt(2025, 6, 15).unwrap());
        let grid = CalendarPane::grid_rect(Rect {
            x: 0,
            y: 0,
            width: 30,
            height: 16,
        });
        let event = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: grid.x + CELL_WIDTH,
            row: grid.y + 1,
            modifiers: KeyModifiers::NONE,
        });
        assert!(pane.handle_event(&event, &PaneContext::new(false)));
        assert_eq!(pane.selected, 2);
    }
}
