use super::EventType;

// Google Calendar palette ids: 5 banana, 6 tangerine, 7 peacock, 9 blueberry,
// 10 basil, 11 tomato.
const COLOR_TYPES: [(&str, EventType); 6] = [
    ("11", EventType::Deadline),
    ("6", EventType::Launch),
    ("5", EventType::Open),
    ("10", EventType::Play),
    ("9", EventType::Jam),
    ("7", EventType::Jam),
];

// Checked in order; the first rule with any matching keyword wins.
const KEYWORD_RULES: [(&[&str], EventType); 5] = [
    (&["jam period", "jam-period"], EventType::Jam),
    (&["launch", "kickoff"], EventType::Launch),
    (&["play"], EventType::Play),
    (&["deadline", "due"], EventType::Deadline),
    (&["open", "live"], EventType::Open),
];

pub fn type_for_color(color_id: &str) -> Option<EventType> {
    COLOR_TYPES
        .iter()
        .find(|(id, _)| *id == color_id)
        .map(|(_, event_type)| *event_type)
}

pub fn detect_event_type(title: &str, description: &str, color_id: Option<&str>) -> EventType {
    if let Some(event_type) = color_id.and_then(type_for_color) {
        return event_type;
    }

    let text = format!("{} {}", title, description).to_lowercase();

    KEYWORD_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| text.contains(k)))
        .map(|(_, event_type)| *event_type)
        .unwrap_or(EventType::Default)
}
