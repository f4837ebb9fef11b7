use crate::calendar::{merge, set_dates, CalendarEvent};
use crate::sync::google_api::{CalendarFeed, FetchWindow};
use chrono::{NaiveDate, NaiveDateTime};

#[derive(Debug, Clone, PartialEq)]
pub enum SyncStatus {
    Pending,
    NotConfigured,
    Synced(usize),
    SetDatesOnly,
}

/// Owns the merged event list. Every view reads from here; nothing else
/// holds a copy of the events.
#[derive(Debug, Clone)]
pub struct CalendarSync {
    set_dates: Vec<CalendarEvent>,
    events: Vec<CalendarEvent>,
    synced_events: Vec<CalendarEvent>,
    status: SyncStatus,
}

impl Default for CalendarSync {
    fn default() -> Self {
        Self::with_set_dates(set_dates())
    }
}

impl CalendarSync {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_set_dates(set_dates: Vec<CalendarEvent>) -> Self {
        Self {
            events: set_dates.clone(),
            set_dates,
            synced_events: Vec::new(),
            status: SyncStatus::Pending,
        }
    }

    /// Rebuilds the event list from the set dates plus whatever `feed`
    /// returns. A failed fetch leaves only the set dates; it is logged and
    /// never retried.
    pub async fn fetch_events(
        &mut self,
        feed: Option<&dyn CalendarFeed>,
        window: &FetchWindow,
    ) -> &[CalendarEvent] {
        self.events = self.set_dates.clone();
        self.synced_events.clear();

        let Some(feed) = feed else {
            tracing::info!("Calendar sync not configured, using hardcoded set dates");
            self.status = SyncStatus::NotConfigured;
            return &self.events;
        };

        match feed.fetch_events(window).await {
            Ok(synced) => {
                tracing::info!("Calendar sync: loaded {} events from Google Calendar", synced.len());
                self.events = merge::merge_events(&self.set_dates, &synced);
                self.status = SyncStatus::Synced(synced.len());
                self.synced_events = synced;
            }
            Err(e) => {
                tracing::error!("Calendar sync failed, using set dates only: {}", e);
                self.status = SyncStatus::SetDatesOnly;
            }
        }

        &self.events
    }

    /// Fetches the window starting at `today`'s month, as configured.
    pub async fn refresh(
        &mut self,
        feed: Option<&dyn CalendarFeed>,
        today: NaiveDate,
        months_ahead: u32,
    ) -> &[CalendarEvent] {
        match FetchWindow::months_from(today, months_ahead) {
            Some(window) => self.fetch_events(feed, &window).await,
            None => {
                tracing::warn!("No fetch window for {} + {} months", today, months_ahead);
                self.events = self.set_dates.clone();
                self.status = SyncStatus::SetDatesOnly;
                &self.events
            }
        }
    }

    pub fn events(&self) -> &[CalendarEvent] {
        &self.events
    }

    pub fn synced_events(&self) -> &[CalendarEvent] {
        &self.synced_events
    }

    pub fn status(&self) -> &SyncStatus {
        &self.status
    }

    pub fn events_for_date(&self, date: NaiveDate) -> Vec<&CalendarEvent> {
        merge::events_for_date(&self.events, date)
    }

    pub fn events_for_month(&self, year: i32, month: u32) -> Vec<&CalendarEvent> {
        merge::events_for_month(&self.events, year, month)
    }

    pub fn upcoming(&self, now: NaiveDateTime) -> Vec<&CalendarEvent> {
        merge::upcoming_events(&self.events, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{EventSource, EventType};
    use crate::sync::google_api::{ApiError, MockCalendarFeed};
    use pretty_assertions::assert_eq;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn window() -> FetchWindow {
        FetchWindow::months_from(date(2026, 3, 1), 3).unwrap()
    }

    fn synced_event(id: &str, day: u32) -> CalendarEvent {
        let start = date(2026, 3, day).and_hms_opt(18, 0, 0).unwrap();
        CalendarEvent {
            id: id.to_string(),
            title: "Node meetup".to_string(),
            description: None,
            location: Some("London".to_string()),
            start,
            end: start + chrono::Duration::hours(2),
            all_day: false,
            event_type: EventType::Default,
            source: EventSource::Synced { color_id: None, creator: None },
        }
    }

    #[tokio::test]
    async fn rejected_fetch_leaves_exactly_the_set_dates() {
        let mut feed = MockCalendarFeed::new();
        feed.expect_fetch_events()
            .times(1)
            .returning(|_| Err(ApiError::RateLimited));

        let mut sync = CalendarSync::new();
        let events = sync.fetch_events(Some(&feed), &window()).await.to_vec();

        assert_eq!(events, set_dates());
        assert_eq!(sync.status(), &SyncStatus::SetDatesOnly);
        assert!(sync.synced_events().is_empty());
    }

    #[tokio::test]
    async fn unconfigured_sync_uses_set_dates() {
        let mut sync = CalendarSync::new();
        sync.fetch_events(None, &window()).await;

        assert_eq!(sync.events(), set_dates().as_slice());
        assert_eq!(sync.status(), &SyncStatus::NotConfigured);
    }

    #[tokio::test]
    async fn successful_fetch_merges_in_start_order() {
        let mut feed = MockCalendarFeed::new();
        feed.expect_fetch_events()
            .returning(|_| Ok(vec![synced_event("late", 30), synced_event("early", 10)]));

        let mut sync = CalendarSync::new();
        sync.fetch_events(Some(&feed), &window()).await;

        let ids: Vec<&str> = sync.events().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "set-open",
                "early",
                "set-jam-launch",
                "set-jam-period",
                "set-deadline",
                "set-play-1",
                "set-play-2",
                "late",
            ]
        );
        assert_eq!(sync.status(), &SyncStatus::Synced(2));
        assert_eq!(sync.synced_events().len(), 2);
    }

    #[tokio::test]
    async fn refetch_starts_again_from_set_dates() {
        let mut feed = MockCalendarFeed::new();
        let mut calls = 0;
        feed.expect_fetch_events().times(2).returning(move |_| {
            calls += 1;
            if calls == 1 {
                Ok(vec![synced_event("once", 12)])
            } else {
                Err(ApiError::RequestError("Status 500".to_string()))
            }
        });

        let mut sync = CalendarSync::new();
        sync.fetch_events(Some(&feed), &window()).await;
        assert_eq!(sync.events().len(), 7);

        sync.fetch_events(Some(&feed), &window()).await;
        assert_eq!(sync.events().len(), 6);
    }

    #[tokio::test]
    async fn refresh_fetches_from_the_first_of_the_month() {
        let mut feed = MockCalendarFeed::new();
        feed.expect_fetch_events()
            .withf(|window| window.start == date(2026, 3, 1).and_hms_opt(0, 0, 0).unwrap())
            .times(1)
            .returning(|_| Ok(Vec::new()));

        let mut sync = CalendarSync::new();
        sync.refresh(Some(&feed), date(2026, 3, 18), 3).await;

        assert_eq!(sync.status(), &SyncStatus::Synced(0));
    }

    #[test]
    fn lookups_read_the_owned_events() {
        let sync = CalendarSync::new();

        let on_jam_day: Vec<&str> = sync
            .events_for_date(date(2026, 3, 24))
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(on_jam_day, vec!["set-jam-period"]);
        assert!(sync.events_for_date(date(2026, 3, 30)).is_empty());
        assert_eq!(sync.events_for_month(2026, 3).len(), 6);

        let now = date(2026, 3, 27).and_hms_opt(12, 0, 0).unwrap();
        let upcoming: Vec<&str> = sync.upcoming(now).iter().map(|e| e.id.as_str()).collect();
        assert_eq!(upcoming, vec!["set-play-1", "set-play-2"]);
    }
}
