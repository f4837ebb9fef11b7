pub mod google_api;
pub mod sync_engine;

pub use google_api::{ApiError, CalendarFeed, FetchWindow, GoogleCalendarClient};
pub use sync_engine::{CalendarSync, SyncStatus};
