mod calendar_views;
mod map_view;
mod presentation;
mod session;

pub use session::run_tui;
