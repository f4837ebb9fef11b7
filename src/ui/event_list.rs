use chrono::NaiveDateTime;

use crate::calendar::CalendarEvent;
use crate::sync::CalendarSync;

pub const NO_UPCOMING: &str = "No upcoming events";
pub const LOCATION_FALLBACK: &str = "TBA";

#[derive(Debug, Clone, PartialEq)]
pub struct UpcomingRow {
    pub title: String,
    pub location: String,
    pub date: String,
    pub time: String,
    pub set_date: bool,
}

impl UpcomingRow {
    fn from_event(event: &CalendarEvent) -> Self {
        Self {
            title: event.title.clone(),
            location: event
                .location
                .clone()
                .unwrap_or_else(|| LOCATION_FALLBACK.to_string()),
            date: event.start.format("%b %-d").to_string(),
            time: if event.all_day {
                "All day".to_string()
            } else {
                event.start.format("%-I:%M %p").to_string()
            },
            set_date: event.is_set_date(),
        }
    }
}

pub fn upcoming_rows(sync: &CalendarSync, now: NaiveDateTime) -> Vec<UpcomingRow> {
    sync.upcoming(now)
        .into_iter()
        .map(UpcomingRow::from_event)
        .collect()
}
