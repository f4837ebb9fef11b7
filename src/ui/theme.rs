use ratatui::style::Color;

use crate::calendar::EventType;

/// How a day cell is marked in the small month grid: a style class and an
/// optional short label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayStyle {
    pub class: &'static str,
    pub label: Option<&'static str>,
}

pub fn day_style(event_type: EventType) -> DayStyle {
    match event_type {
        EventType::Jam => DayStyle { class: "jam-period", label: None },
        EventType::Launch => DayStyle { class: "launch", label: Some("JAM!") },
        EventType::Play => DayStyle { class: "launch", label: Some("PLAY") },
        EventType::Deadline => DayStyle { class: "has-event", label: Some("DUE") },
        EventType::Open => DayStyle { class: "has-event", label: Some("OPEN") },
        EventType::Default => DayStyle { class: "has-event", label: None },
    }
}

pub fn tag_label(event_type: EventType) -> &'static str {
    match event_type {
        EventType::Launch => "LAUNCH",
        EventType::Play => "PLAY",
        EventType::Deadline => "DEADLINE",
        EventType::Open => "OPEN",
        EventType::Jam => "JAM",
        EventType::Default => "EVENT",
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: String,
    pub title: Color,
    pub weekday_header: Color,
    pub inactive_day: Color,
    pub status_bar: Color,
    pub muted: Color,
    pub launch: Color,
    pub play: Color,
    pub deadline: Color,
    pub open: Color,
    pub jam: Color,
    pub default_event: Color,
    pub land: Color,
    pub connection: Color,
    pub glow: Color,
    pub marker: Color,
    pub marker_stroke: Color,
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            name: "default".to_string(),
            title: Color::Rgb(242, 255, 0),
            weekday_header: Color::Yellow,
            inactive_day: Color::DarkGray,
            status_bar: Color::White,
            muted: Color::DarkGray,
            launch: Color::Rgb(255, 140, 0),
            play: Color::Rgb(204, 255, 0),
            deadline: Color::Rgb(0, 34, 255),
            open: Color::White,
            jam: Color::Rgb(255, 0, 170),
            default_event: Color::Gray,
            land: Color::Gray,
            connection: Color::Rgb(0, 0, 255),
            glow: Color::Rgb(204, 255, 0),
            marker: Color::Rgb(242, 255, 0),
            marker_stroke: Color::Rgb(0, 34, 255),
        }
    }

    pub fn mono() -> Self {
        Self {
            name: "mono".to_string(),
            title: Color::White,
            weekday_header: Color::Gray,
            inactive_day: Color::DarkGray,
            status_bar: Color::White,
            muted: Color::DarkGray,
            launch: Color::White,
            play: Color::White,
            deadline: Color::White,
            open: Color::Gray,
            jam: Color::Gray,
            default_event: Color::Gray,
            land: Color::DarkGray,
            connection: Color::White,
            glow: Color::Gray,
            marker: Color::White,
            marker_stroke: Color::White,
        }
    }

    pub fn get_by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "mono" => Self::mono(),
            _ => Self::default_theme(),
        }
    }

    pub fn event_color(&self, event_type: EventType) -> Color {
        match event_type {
            EventType::Launch => self.launch,
            EventType::Play => self.play,
            EventType::Deadline => self.deadline,
            EventType::Open => self.open,
            EventType::Jam => self.jam,
            EventType::Default => self.default_event,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn play_days_share_the_launch_class() {
        assert_eq!(day_style(EventType::Play).class, day_style(EventType::Launch).class);
        assert_eq!(day_style(EventType::Play).label, Some("PLAY"));
    }

    #[test]
    fn jam_days_have_no_label() {
        assert_eq!(day_style(EventType::Jam), DayStyle { class: "jam-period", label: None });
    }

    #[test]
    fn default_events_are_tagged_event() {
        assert_eq!(tag_label(EventType::Default), "EVENT");
    }

    #[test]
    fn unknown_theme_name_uses_default() {
        assert_eq!(Theme::get_by_name("solarized").name, "default");
        assert_eq!(Theme::get_by_name("MONO").name, "mono");
    }
}
