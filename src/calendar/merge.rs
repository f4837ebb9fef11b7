use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};

use super::CalendarEvent;

pub const UPCOMING_LIMIT: usize = 5;

/// Set dates first, then synced events, stably sorted by start. Events are
/// never deduplicated, so a synced copy of a set date shows up twice.
pub fn merge_events(set_dates: &[CalendarEvent], synced: &[CalendarEvent]) -> Vec<CalendarEvent> {
    let mut all: Vec<CalendarEvent> = set_dates.iter().chain(synced).cloned().collect();
    all.sort_by_key(|event| event.start);
    all
}

fn day_bounds(event: &CalendarEvent) -> Option<(NaiveDateTime, NaiveDateTime)> {
    let first = event.start_date().and_hms_opt(0, 0, 0)?;
    let last = event.end_date().and_hms_milli_opt(23, 59, 59, 999)?;
    Some((first, last))
}

pub fn occurs_on(event: &CalendarEvent, date: NaiveDate) -> bool {
    let Some(noon) = NaiveTime::from_hms_opt(12, 0, 0).map(|t| date.and_time(t)) else {
        return false;
    };

    day_bounds(event)
        .map(|(first, last)| first <= noon && noon <= last)
        .unwrap_or(false)
}

pub fn events_for_date(events: &[CalendarEvent], date: NaiveDate) -> Vec<&CalendarEvent> {
    events.iter().filter(|event| occurs_on(event, date)).collect()
}

pub fn events_for_month(events: &[CalendarEvent], year: i32, month: u32) -> Vec<&CalendarEvent> {
    events
        .iter()
        .filter(|event| event.start.year() == year && event.start.month() == month)
        .collect()
}

pub fn upcoming_events(events: &[CalendarEvent], now: NaiveDateTime) -> Vec<&CalendarEvent> {
    let mut upcoming: Vec<&CalendarEvent> = events.iter().filter(|event| event.start >= now).collect();
    upcoming.sort_by_key(|event| event.start);
    upcoming.truncate(UPCOMING_LIMIT);
    upcoming
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{set_dates, EventSource, EventType};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn create_event(id: &str, start: NaiveDateTime, end: NaiveDateTime) -> CalendarEvent {
        CalendarEvent {
            id: id.to_string(),
            title: id.to_string(),
            description: None,
            location: None,
            start,
            end,
            all_day: false,
            event_type: EventType::Default,
            source: EventSource::Synced { color_id: None, creator: None },
        }
    }

    fn create_event_on(id: &str, day: NaiveDate, hour: u32) -> CalendarEvent {
        let start = day.and_hms_opt(hour, 0, 0).unwrap();
        create_event(id, start, start + chrono::Duration::hours(1))
    }

    fn ids(events: &[&CalendarEvent]) -> Vec<String> {
        events.iter().map(|e| e.id.clone()).collect()
    }

    #[test]
    fn multi_day_event_matches_inner_day_but_not_following_day() {
        let event = create_event(
            "jam",
            date(2026, 3, 22).and_hms_opt(0, 0, 0).unwrap(),
            date(2026, 3, 26).and_hms_opt(0, 0, 0).unwrap(),
        );

        assert!(occurs_on(&event, date(2026, 3, 24)));
        assert!(occurs_on(&event, date(2026, 3, 26)));
        assert!(!occurs_on(&event, date(2026, 3, 27)));
        assert!(!occurs_on(&event, date(2026, 3, 21)));
    }

    #[test]
    fn evening_event_still_matches_its_day() {
        let event = create_event_on("late", date(2026, 3, 5), 21);

        assert!(occurs_on(&event, date(2026, 3, 5)));
    }

    #[test]
    fn merge_does_not_deduplicate_ids() {
        let set = set_dates();
        let mut copy = set[0].clone();
        copy.source = EventSource::Synced { color_id: None, creator: None };

        let merged = merge_events(&set, &[copy]);

        assert_eq!(merged.len(), 7);
        assert_eq!(merged.iter().filter(|e| e.id == "set-open").count(), 2);
    }

    #[test]
    fn merge_keeps_set_date_before_synced_event_with_equal_start() {
        let set = set_dates();
        let synced = create_event("synced", set[0].start, set[0].end);

        let merged = merge_events(&set, &[synced]);

        assert_eq!(merged[0].id, "set-open");
        assert_eq!(merged[1].id, "synced");
    }

    #[test]
    fn month_lookup_matches_on_start_only() {
        let events = vec![
            create_event(
                "spans",
                date(2026, 2, 27).and_hms_opt(0, 0, 0).unwrap(),
                date(2026, 3, 2).and_hms_opt(0, 0, 0).unwrap(),
            ),
            create_event_on("march", date(2026, 3, 10), 9),
            create_event_on("march-next-year", date(2027, 3, 10), 9),
        ];

        assert_eq!(ids(&events_for_month(&events, 2026, 3)), vec!["march"]);
        assert_eq!(ids(&events_for_month(&events, 2026, 2)), vec!["spans"]);
    }

    #[test]
    fn set_dates_in_march_by_month_lookup() {
        let events = set_dates();
        assert_eq!(events_for_month(&events, 2026, 3).len(), 6);
        assert!(events_for_month(&events, 2026, 4).is_empty());
    }

    #[test]
    fn upcoming_is_capped_at_five_and_excludes_past() {
        let now = date(2026, 3, 10).and_hms_opt(12, 0, 0).unwrap();
        let events: Vec<CalendarEvent> = (1..=20)
            .map(|day| create_event_on(&format!("e{day}"), date(2026, 3, day), 9))
            .collect();

        let upcoming = upcoming_events(&events, now);

        assert_eq!(ids(&upcoming), vec!["e11", "e12", "e13", "e14", "e15"]);
    }

    #[test]
    fn upcoming_includes_event_starting_exactly_now() {
        let now = date(2026, 3, 10).and_hms_opt(9, 0, 0).unwrap();
        let events = vec![create_event_on("now", date(2026, 3, 10), 9)];

        assert_eq!(upcoming_events(&events, now).len(), 1);
    }

    #[test]
    fn upcoming_is_empty_when_everything_is_past() {
        let now = date(2027, 1, 1).and_hms_opt(0, 0, 0).unwrap();

        assert!(upcoming_events(&set_dates(), now).is_empty());
    }

    fn arb_event() -> impl Strategy<Value = CalendarEvent> {
        (0i64..2_000_000, 0i64..500_000).prop_map(|(offset, length)| {
            let base = date(2026, 1, 1).and_hms_opt(0, 0, 0).unwrap();
            let start = base + chrono::Duration::minutes(offset);
            create_event("p", start, start + chrono::Duration::minutes(length))
        })
    }

    proptest! {
        #[test]
        fn merged_list_is_sorted_by_start(synced in prop::collection::vec(arb_event(), 0..40)) {
            let merged = merge_events(&set_dates(), &synced);

            prop_assert_eq!(merged.len(), synced.len() + 6);
            prop_assert!(merged.windows(2).all(|w| w[0].start <= w[1].start));
        }

        #[test]
        fn upcoming_never_exceeds_limit_or_includes_past(
            events in prop::collection::vec(arb_event(), 0..40),
            now_offset in 0i64..2_000_000,
        ) {
            let now = date(2026, 1, 1).and_hms_opt(0, 0, 0).unwrap() + chrono::Duration::minutes(now_offset);
            let upcoming = upcoming_events(&events, now);

            prop_assert!(upcoming.len() <= UPCOMING_LIMIT);
            prop_assert!(upcoming.iter().all(|e| e.start >= now));
        }
    }
}
