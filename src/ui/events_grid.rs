use crate::calendar::{CalendarEvent, EventType};
use crate::sync::CalendarSync;
use crate::ui::theme::tag_label;

#[derive(Debug, Clone, PartialEq)]
pub struct EventCard {
    pub number: String,
    pub title: String,
    pub meta: String,
    pub tag: &'static str,
    pub event_type: Option<EventType>,
    pub set_date: bool,
}

fn card_number(index: usize) -> String {
    format!("{:02}", index + 1)
}

fn event_card(index: usize, event: &CalendarEvent) -> EventCard {
    let date = event.start.format("%b %-d").to_string().to_uppercase();
    let meta = match &event.location {
        Some(location) => format!("{} — {}", date, location),
        None => date,
    };

    EventCard {
        number: card_number(index),
        title: event.title.clone(),
        meta,
        tag: tag_label(event.event_type),
        event_type: Some(event.event_type),
        set_date: event.is_set_date(),
    }
}

fn add_card(index: usize) -> EventCard {
    EventCard {
        number: card_number(index),
        title: "+ Add Event".to_string(),
        meta: "Organizers only".to_string(),
        tag: "ADD",
        event_type: None,
        set_date: false,
    }
}

/// One numbered card per event, then the trailing add-event card.
pub fn event_cards(sync: &CalendarSync) -> Vec<EventCard> {
    let events = sync.events();
    let mut cards: Vec<EventCard> = events
        .iter()
        .enumerate()
        .map(|(index, event)| event_card(index, event))
        .collect();
    cards.push(add_card(events.len()));
    cards
}
