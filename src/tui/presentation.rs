use std::collections::HashMap;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use jamnodes::{
    app::AppState,
    sync::SyncStatus,
    ui::views::{ViewId, ViewSet},
};
use crate::tui::{calendar_views, map_view};

const LEFT_COLUMN: [ViewId; 3] = [ViewId::Map, ViewId::MiniCalendar, ViewId::EventsList];
const RIGHT_COLUMN: [ViewId; 3] = [ViewId::LargeCalendar, ViewId::Timeline, ViewId::EventsGrid];

/// Screen areas for the enabled views. Lookups for a disabled view return
/// `None` and its renderer draws nothing.
pub struct Panels {
    areas: HashMap<ViewId, Rect>,
}

impl Panels {
    pub fn get(&self, view: ViewId) -> Option<Rect> {
        self.areas.get(&view).copied()
    }

    fn split_column(areas: &mut HashMap<ViewId, Rect>, views: &[ViewId], area: Rect) {
        if views.is_empty() {
            return;
        }
        let constraints: Vec<Constraint> = views
            .iter()
            .map(|_| Constraint::Ratio(1, views.len() as u32))
            .collect();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);
        for (view, chunk) in views.iter().zip(chunks.iter()) {
            areas.insert(*view, *chunk);
        }
    }

    pub fn layout(views: &ViewSet, area: Rect) -> Self {
        let left: Vec<ViewId> = LEFT_COLUMN.into_iter().filter(|v| views.contains(*v)).collect();
        let right: Vec<ViewId> = RIGHT_COLUMN.into_iter().filter(|v| views.contains(*v)).collect();

        let (left_pct, right_pct) = match (left.is_empty(), right.is_empty()) {
            (true, _) => (0, 100),
            (_, true) => (100, 0),
            _ => (40, 60),
        };

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(left_pct), Constraint::Percentage(right_pct)])
            .split(area);

        let mut areas = HashMap::new();
        Self::split_column(&mut areas, &left, columns[0]);
        Self::split_column(&mut areas, &right, columns[1]);
        Self { areas }
    }
}

fn status_text(app: &AppState) -> String {
    let sync = match app.sync_status() {
        SyncStatus::Pending => "syncing".to_string(),
        SyncStatus::NotConfigured | SyncStatus::SetDatesOnly => "set dates only".to_string(),
        SyncStatus::Synced(count) => format!("{} synced", count),
    };
    format!(
        "Events: {} | {} | j/k = Nodes | r = Refresh | q = Quit",
        app.calendar.events().len(),
        sync
    )
}

pub fn ui(f: &mut Frame, app: &AppState) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.size());

    let month_title = chrono::NaiveDate::from_ymd_opt(app.display_year, app.display_month, 1)
        .map(|d| d.format("%B %Y").to_string().to_uppercase())
        .unwrap_or_default();
    let title = Paragraph::new(format!("JAMNODES // {} // {}", month_title, app.clock_label()))
        .style(Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, main_chunks[0]);

    let panels = Panels::layout(&app.views, main_chunks[1]);

    map_view::render(f, app, &panels);
    calendar_views::mini_calendar::render(f, app, &panels);
    calendar_views::event_list::render(f, app, &panels);
    calendar_views::large_calendar::render(f, app, &panels);
    calendar_views::timeline::render(f, app, &panels);
    calendar_views::events_grid::render(f, app, &panels);

    let status = Paragraph::new(status_text(app))
        .style(Style::default().fg(app.theme.status_bar))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, main_chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> Rect {
        Rect::new(0, 0, 120, 40)
    }

    #[test]
    fn every_view_gets_an_area_by_default() {
        let panels = Panels::layout(&ViewSet::all(), screen());

        for view in ViewId::ALL {
            assert!(panels.get(view).is_some(), "{:?} missing", view);
        }
    }

    #[test]
    fn absent_views_get_no_area() {
        let panels = Panels::layout(&ViewSet::from_names(&["timeline"]), screen());

        assert!(panels.get(ViewId::Map).is_none());
        assert_eq!(panels.get(ViewId::Timeline).map(|r| r.width), Some(120));
    }

    #[test]
    fn status_mentions_set_dates_before_sync() {
        let app = AppState::new();
        assert!(status_text(&app).starts_with("Events: 6 | syncing"));
    }
}
