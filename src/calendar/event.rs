use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Jam,
    Launch,
    Play,
    Deadline,
    Open,
    Default,
}

/// Where an event came from. Set dates are compiled in; synced events carry
/// the provider metadata that fed the classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EventSource {
    SetDate,
    Synced {
        color_id: Option<String>,
        creator: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub all_day: bool,
    pub event_type: EventType,
    pub source: EventSource,
}

impl CalendarEvent {
    pub fn is_set_date(&self) -> bool {
        matches!(self.source, EventSource::SetDate)
    }

    pub fn color_id(&self) -> Option<&str> {
        match &self.source {
            EventSource::Synced { color_id, .. } => color_id.as_deref(),
            EventSource::SetDate => None,
        }
    }

    pub fn creator(&self) -> Option<&str> {
        match &self.source {
            EventSource::Synced { creator, .. } => creator.as_deref(),
            EventSource::SetDate => None,
        }
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start.date()
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end.date()
    }

    pub fn is_active_at(&self, now: NaiveDateTime) -> bool {
        self.start <= now && now <= self.end
    }

    pub fn is_past_at(&self, now: NaiveDateTime) -> bool {
        now > self.end
    }
}
