pub mod event_list;
pub mod events_grid;
pub mod month_view;
pub mod theme;
pub mod timeline;
pub mod views;
