pub mod app;
pub mod calendar;
pub mod geo;
pub mod storage;
pub mod sync;
pub mod ui;

pub use app::AppState;
pub use calendar::{CalendarEvent, EventType};
pub use sync::{CalendarSync, SyncStatus};
