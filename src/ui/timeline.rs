use chrono::NaiveDateTime;

use crate::calendar::{CalendarEvent, EventType};
use crate::sync::CalendarSync;

#[derive(Debug, Clone, PartialEq)]
pub struct TimelineItem {
    pub date: String,
    pub title: String,
    pub location: Option<String>,
    pub event_type: EventType,
    pub highlight: bool,
    pub active: bool,
    pub past: bool,
    pub set_date: bool,
}

fn item(event: &CalendarEvent, now: NaiveDateTime) -> TimelineItem {
    TimelineItem {
        date: event.start.format("%b %-d").to_string().to_uppercase(),
        title: event.title.clone(),
        location: event.location.clone(),
        event_type: event.event_type,
        highlight: matches!(event.event_type, EventType::Launch | EventType::Play),
        active: event.is_active_at(now),
        past: event.is_past_at(now),
        set_date: event.is_set_date(),
    }
}

pub fn timeline(sync: &CalendarSync, now: NaiveDateTime) -> Vec<TimelineItem> {
    sync.events().iter().map(|event| item(event, now)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[test]
    fn timeline_lists_every_event_with_uppercase_dates() {
        let sync = CalendarSync::new();
        let items = timeline(&sync, at(1, 0));

        assert_eq!(items.len(), 6);
        assert_eq!(items[1].date, "MAR 21");
        assert_eq!(items[1].location.as_deref(), Some("ALL NODES"));
    }

    #[test]
    fn launch_and_play_are_highlighted() {
        let sync = CalendarSync::new();
        let highlighted: Vec<EventType> = timeline(&sync, at(1, 0))
            .into_iter()
            .filter(|i| i.highlight)
            .map(|i| i.event_type)
            .collect();

        assert_eq!(highlighted, vec![EventType::Launch, EventType::Play, EventType::Play]);
    }

    #[test]
    fn past_and_active_follow_now() {
        let sync = CalendarSync::new();
        // The set dates end at midnight, so the jam period is active only
        // until the start of its final day.
        let items = timeline(&sync, at(24, 12));

        let open = &items[0];
        assert!(open.past && !open.active);

        let jam = items.iter().find(|i| i.title == "Jam Period").unwrap();
        assert!(jam.active && !jam.past);

        let deadline = items.iter().find(|i| i.title == "Submissions Due").unwrap();
        assert!(!deadline.active && !deadline.past);
    }
}
