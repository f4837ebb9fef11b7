use crate::calendar::{detect_event_type, CalendarEvent, EventSource};
use crate::storage::config::CalendarConfig;
use async_trait::async_trait;
use chrono::{
    DateTime, Datelike, Local, Months, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc,
};
use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/calendar/v3";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("Request error: {0}")]
    RequestError(String),
    #[error("Calendar not found: {0}")]
    NotFound(String),
    #[error("Access denied for calendar {0}")]
    AccessDenied(String),
    #[error("Rate limit exceeded")]
    RateLimited,
    #[error("Parse error: {0}")]
    ParseError(String),
}

/// The span of local time a single fetch covers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FetchWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl FetchWindow {
    /// From midnight on the first of `today`'s month to midnight on the last
    /// day of the month `months_ahead - 1` after it.
    pub fn months_from(today: NaiveDate, months_ahead: u32) -> Option<Self> {
        let first = NaiveDate::from_ymd_opt(today.year(), today.month(), 1)?;
        let last = first.checked_add_months(Months::new(months_ahead))?.pred_opt()?;
        Some(Self {
            start: first.and_hms_opt(0, 0, 0)?,
            end: last.and_hms_opt(0, 0, 0)?,
        })
    }

    pub fn time_min(&self) -> String {
        local_to_rfc3339(self.start)
    }

    pub fn time_max(&self) -> String {
        local_to_rfc3339(self.end)
    }
}

fn local_to_rfc3339(local: NaiveDateTime) -> String {
    Local
        .from_local_datetime(&local)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|| local.and_utc())
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[derive(Debug, Deserialize)]
struct GoogleEvent {
    #[serde(default)]
    id: String,
    summary: Option<String>,
    description: Option<String>,
    location: Option<String>,
    start: Option<GoogleDateTime>,
    end: Option<GoogleDateTime>,
    #[serde(rename = "colorId")]
    color_id: Option<String>,
    creator: Option<GoogleCreator>,
}

#[derive(Debug, Deserialize)]
struct GoogleDateTime {
    #[serde(rename = "dateTime")]
    date_time: Option<String>,
    date: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GoogleCreator {
    email: Option<String>,
}

#[derive(Debug, Deserialize)]
struct EventListResponse {
    items: Option<Vec<GoogleEvent>>,
}

impl GoogleDateTime {
    fn is_timed(&self) -> bool {
        self.date_time.is_some()
    }

    fn to_local(&self) -> Result<NaiveDateTime, ApiError> {
        if let Some(date_time) = &self.date_time {
            return DateTime::parse_from_rfc3339(date_time)
                .map(|dt| dt.with_timezone(&Local).naive_local())
                .map_err(|e| ApiError::ParseError(format!("Invalid dateTime '{}': {}", date_time, e)));
        }

        let date = self
            .date
            .as_deref()
            .ok_or_else(|| ApiError::ParseError("Neither dateTime nor date present".to_string()))?;
        NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .ok_or_else(|| ApiError::ParseError(format!("Invalid date '{}'", date)))
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn convert_from_google_event(ge: GoogleEvent) -> Result<CalendarEvent, ApiError> {
    let start_time = ge
        .start
        .as_ref()
        .ok_or_else(|| ApiError::ParseError(format!("Event {} has no start", ge.id)))?;
    let start = start_time.to_local()?;
    let all_day = !start_time.is_timed();

    let end = match ge.end.as_ref().map(GoogleDateTime::to_local) {
        Some(Ok(end)) if end >= start => end,
        _ => {
            tracing::warn!("Event {} has no usable end, clamping to start", ge.id);
            start
        }
    };

    let title = non_empty(ge.summary).unwrap_or_else(|| "Untitled".to_string());
    let description = non_empty(ge.description);
    let color_id = non_empty(ge.color_id);
    let event_type = detect_event_type(
        &title,
        description.as_deref().unwrap_or_default(),
        color_id.as_deref(),
    );

    Ok(CalendarEvent {
        id: ge.id,
        title,
        description,
        location: non_empty(ge.location),
        start,
        end,
        all_day,
        event_type,
        source: EventSource::Synced {
            color_id,
            creator: non_empty(ge.creator.and_then(|c| c.email)),
        },
    })
}

pub fn parse_event_list(body: &str) -> Result<Vec<CalendarEvent>, ApiError> {
    let event_list: EventListResponse =
        serde_json::from_str(body).map_err(|e| ApiError::ParseError(e.to_string()))?;

    let events = event_list
        .items
        .unwrap_or_default()
        .into_iter()
        .filter_map(|ge| match convert_from_google_event(ge) {
            Ok(event) => Some(event),
            Err(e) => {
                tracing::warn!("Skipping calendar item: {}", e);
                None
            }
        })
        .collect();

    Ok(events)
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CalendarFeed: Send + Sync {
    async fn fetch_events(&self, window: &FetchWindow) -> Result<Vec<CalendarEvent>, ApiError>;
}

/// Read-only access to a public Google calendar using an API key.
pub struct GoogleCalendarClient {
    base_url: String,
    api_key: String,
    calendar_id: String,
    client: reqwest::Client,
}

impl GoogleCalendarClient {
    pub fn new(api_key: String, calendar_id: String) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key,
            calendar_id,
            client: reqwest::Client::new(),
        }
    }

    /// A client for the configured calendar, or `None` while sync is off or
    /// the credentials are still placeholders.
    pub fn from_config(config: &CalendarConfig) -> Option<Self> {
        config
            .is_configured()
            .then(|| Self::new(config.api_key.clone(), config.calendar_id.clone()))
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn events_url(&self) -> String {
        format!(
            "{}/calendars/{}/events",
            self.base_url,
            urlencoding::encode(&self.calendar_id)
        )
    }
}

#[async_trait]
impl CalendarFeed for GoogleCalendarClient {
    async fn fetch_events(&self, window: &FetchWindow) -> Result<Vec<CalendarEvent>, ApiError> {
        let time_min = window.time_min();
        let time_max = window.time_max();

        tracing::info!("Fetching events from {} to {}", time_min, time_max);

        let response = self
            .client
            .get(self.events_url())
            .query(&[
                ("key", self.api_key.as_str()),
                ("timeMin", time_min.as_str()),
                ("timeMax", time_max.as_str()),
                ("singleEvents", "true"),
                ("orderBy", "startTime"),
            ])
            .send()
            .await?;

        let status = response.status();
        tracing::info!("Fetch events response status: {}", status);

        if status == 403 {
            return Err(ApiError::AccessDenied(self.calendar_id.clone()));
        }

        if status == 404 {
            return Err(ApiError::NotFound(self.calendar_id.clone()));
        }

        if status == 429 {
            return Err(ApiError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await?;
            return Err(ApiError::RequestError(format!("Status {}: {}", status, body)));
        }

        let body = response.text().await?;
        let events = parse_event_list(&body)?;

        tracing::info!("Fetched {} events successfully", events.len());
        Ok(events)
    }
}
