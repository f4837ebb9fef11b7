pub mod events_grid;
pub mod event_list;
pub mod large_calendar;
pub mod mini_calendar;
pub mod timeline;
