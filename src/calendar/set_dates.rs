use chrono::{NaiveDate, NaiveDateTime};

use super::{CalendarEvent, EventSource, EventType};

pub const DISPLAY_YEAR: i32 = 2026;
pub const DISPLAY_MONTH: u32 = 3;

struct SetDate {
    id: &'static str,
    title: &'static str,
    start_day: u32,
    end_day: u32,
    event_type: EventType,
    location: &'static str,
}

const SET_DATES: [SetDate; 6] = [
    SetDate {
        id: "set-open",
        title: "Itch.io jam page live",
        start_day: 1,
        end_day: 1,
        event_type: EventType::Open,
        location: "",
    },
    SetDate {
        id: "set-jam-launch",
        title: "Game Jam Launch",
        start_day: 21,
        end_day: 21,
        event_type: EventType::Launch,
        location: "ALL NODES",
    },
    SetDate {
        id: "set-jam-period",
        title: "Jam Period",
        start_day: 22,
        end_day: 26,
        event_type: EventType::Jam,
        location: "",
    },
    SetDate {
        id: "set-deadline",
        title: "Submissions Due",
        start_day: 27,
        end_day: 27,
        event_type: EventType::Deadline,
        location: "23:59 UTC",
    },
    SetDate {
        id: "set-play-1",
        title: "Public Play",
        start_day: 28,
        end_day: 28,
        event_type: EventType::Play,
        location: "ALL NODES",
    },
    SetDate {
        id: "set-play-2",
        title: "Public Play",
        start_day: 29,
        end_day: 29,
        event_type: EventType::Play,
        location: "ALL NODES",
    },
];

fn midnight(day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(DISPLAY_YEAR, DISPLAY_MONTH, day)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

/// The always-shown jam schedule, in the order it is announced.
pub fn set_dates() -> Vec<CalendarEvent> {
    SET_DATES
        .iter()
        .map(|d| CalendarEvent {
            id: d.id.to_string(),
            title: d.title.to_string(),
            description: None,
            location: (!d.location.is_empty()).then(|| d.location.to_string()),
            start: midnight(d.start_day),
            end: midnight(d.end_day),
            all_day: true,
            event_type: d.event_type,
            source: EventSource::SetDate,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn there_are_six_set_dates() {
        assert_eq!(set_dates().len(), 6);
    }

    #[test]
    fn set_dates_are_all_day_set_events_in_march_2026() {
        for event in set_dates() {
            assert!(event.all_day);
            assert!(event.is_set_date());
            assert_eq!((event.start.year(), event.start.month()), (2026, 3));
            assert!(event.start <= event.end);
        }
    }

    #[test]
    fn jam_period_spans_five_days() {
        let events = set_dates();
        let jam = events.iter().find(|e| e.id == "set-jam-period").unwrap();

        assert_eq!((jam.end - jam.start).num_days(), 4);
        assert_eq!(jam.event_type, EventType::Jam);
    }

    #[test]
    fn empty_location_is_absent() {
        let events = set_dates();
        let open = events.iter().find(|e| e.id == "set-open").unwrap();
        let deadline = events.iter().find(|e| e.id == "set-deadline").unwrap();

        assert_eq!(open.location, None);
        assert_eq!(deadline.location.as_deref(), Some("23:59 UTC"));
    }
}
