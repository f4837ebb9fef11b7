pub mod event;
pub mod classifier;
pub mod merge;
pub mod set_dates;

pub use event::{CalendarEvent, EventSource, EventType};
pub use classifier::detect_event_type;
pub use set_dates::{set_dates, DISPLAY_MONTH, DISPLAY_YEAR};
