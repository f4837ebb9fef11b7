use chrono::{Local, NaiveDateTime};

use crate::geo::overlay::MapStyle;
use crate::geo::{Location, Pulse, PulseFrame, LOCATIONS};
use crate::storage::config::Config;
use crate::sync::{CalendarSync, SyncStatus};
use crate::ui::theme::Theme;
use crate::ui::views::ViewSet;

pub struct AppState {
    pub calendar: CalendarSync,
    pub views: ViewSet,
    pub theme: Theme,
    pub map_style: MapStyle,
    pub display_year: i32,
    pub display_month: u32,
    pub now: NaiveDateTime,
    pub pulse: Pulse,
    pub pulse_frame: PulseFrame,
    pub selected_location: Option<usize>,
}

impl AppState {
    pub fn new() -> Self {
        let pulse = Pulse::new();
        Self {
            calendar: CalendarSync::new(),
            views: ViewSet::all(),
            theme: Theme::default(),
            map_style: crate::geo::overlay::MAP_STYLES[0],
            display_year: crate::calendar::DISPLAY_YEAR,
            display_month: crate::calendar::DISPLAY_MONTH,
            now: Local::now().naive_local(),
            pulse_frame: pulse.frame(),
            pulse,
            selected_location: None,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            views: ViewSet::from_names(&config.display.views),
            theme: Theme::get_by_name(&config.display.theme),
            map_style: MapStyle::by_name(&config.map.style),
            display_year: config.display.year,
            display_month: config.display.month,
            ..Self::new()
        }
    }

    pub fn sync_status(&self) -> &SyncStatus {
        self.calendar.status()
    }

    pub fn tick_clock(&mut self, now: NaiveDateTime) {
        self.now = now;
    }

    pub fn clock_label(&self) -> String {
        self.now.format("%I:%M %p").to_string()
    }

    pub fn advance_frame(&mut self) {
        self.pulse_frame = self.pulse.advance();
    }

    pub fn select_next_location(&mut self) {
        self.selected_location = Some(match self.selected_location {
            Some(index) => (index + 1) % LOCATIONS.len(),
            None => 0,
        });
    }

    pub fn select_previous_location(&mut self) {
        self.selected_location = Some(match self.selected_location {
            Some(0) | None => LOCATIONS.len() - 1,
            Some(index) => index - 1,
        });
    }

    pub fn clear_selection(&mut self) {
        self.selected_location = None;
    }

    pub fn selected_location(&self) -> Option<&'static Location> {
        self.selected_location.and_then(|index| LOCATIONS.get(index))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
