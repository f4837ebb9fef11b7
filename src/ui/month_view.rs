use chrono::{Datelike, Days, NaiveDate};

use crate::calendar::{CalendarEvent, EventType};
use crate::sync::CalendarSync;

pub const WEEKDAY_HEADERS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

#[derive(Debug, Clone, PartialEq)]
pub struct MonthLayout<'a> {
    pub year: i32,
    pub month: u32,
    pub weeks: Vec<Week<'a>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Week<'a> {
    pub days: Vec<DayCell<'a>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayCell<'a> {
    pub date: NaiveDate,
    pub is_today: bool,
    pub is_current_month: bool,
    pub events: Vec<&'a CalendarEvent>,
}

impl<'a> DayCell<'a> {
    fn outside(date: NaiveDate) -> Self {
        Self {
            date,
            is_today: false,
            is_current_month: false,
            events: Vec::new(),
        }
    }

    /// The first event of the day decides how the cell is styled.
    pub fn primary_type(&self) -> Option<EventType> {
        self.events.first().map(|event| event.event_type)
    }

    pub fn has_events(&self) -> bool {
        !self.events.is_empty()
    }
}

impl MonthLayout<'_> {
    pub fn title(&self) -> String {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .map(|d| d.format("%B %Y").to_string())
            .unwrap_or_else(|| format!("{}-{:02}", self.year, self.month))
    }
}

fn last_day_of_month(first: NaiveDate) -> Option<NaiveDate> {
    first.checked_add_months(chrono::Months::new(1))?.pred_opt()
}

/// Sunday-first weeks covering `year`/`month`. Leading cells belong to the
/// previous month and the last week is padded with the next month's days;
/// only in-month cells carry events.
pub fn calculate_layout<'a>(
    sync: &'a CalendarSync,
    year: i32,
    month: u32,
    today: NaiveDate,
) -> MonthLayout<'a> {
    let empty = || MonthLayout { year, month, weeks: Vec::new() };

    let Some(first_day) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return empty();
    };
    let Some(last_day) = last_day_of_month(first_day) else {
        return empty();
    };

    let days_before = first_day.weekday().num_days_from_sunday() as u64;
    let Some(grid_start) = first_day.checked_sub_days(Days::new(days_before)) else {
        return empty();
    };

    let mut weeks = Vec::new();
    let mut current_week = Week { days: Vec::with_capacity(7) };
    let mut current_date = grid_start;

    loop {
        let cell = if current_date < first_day || current_date > last_day {
            DayCell::outside(current_date)
        } else {
            DayCell {
                date: current_date,
                is_today: current_date == today,
                is_current_month: true,
                events: sync.events_for_date(current_date),
            }
        };
        current_week.days.push(cell);

        if current_week.days.len() == 7 {
            weeks.push(current_week);
            current_week = Week { days: Vec::with_capacity(7) };
            if current_date >= last_day {
                break;
            }
        }

        let Some(next) = current_date.succ_opt() else { break };
        current_date = next;
    }

    MonthLayout { year, month, weeks }
}
