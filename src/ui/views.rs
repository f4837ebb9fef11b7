#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewId {
    MiniCalendar,
    EventsList,
    LargeCalendar,
    Timeline,
    EventsGrid,
    Map,
}

impl ViewId {
    pub const ALL: [ViewId; 6] = [
        ViewId::MiniCalendar,
        ViewId::EventsList,
        ViewId::LargeCalendar,
        ViewId::Timeline,
        ViewId::EventsGrid,
        ViewId::Map,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewId::MiniCalendar => "mini-calendar",
            ViewId::EventsList => "events-list",
            ViewId::LargeCalendar => "large-calendar",
            ViewId::Timeline => "timeline",
            ViewId::EventsGrid => "events-grid",
            ViewId::Map => "map",
        }
    }

    pub fn from_name(name: &str) -> Option<ViewId> {
        ViewId::ALL.into_iter().find(|view| view.as_str() == name)
    }
}

/// Which views the current layout has room for. Renderers check membership
/// and do nothing for absent views.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewSet {
    views: Vec<ViewId>,
}

impl ViewSet {
    pub fn all() -> Self {
        Self { views: ViewId::ALL.to_vec() }
    }

    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Self {
        let mut views = Vec::new();
        for name in names {
            match ViewId::from_name(name.as_ref()) {
                Some(view) if !views.contains(&view) => views.push(view),
                Some(_) => {}
                None => tracing::warn!("Ignoring unknown view '{}'", name.as_ref()),
            }
        }
        Self { views }
    }

    pub fn contains(&self, view: ViewId) -> bool {
        self.views.contains(&view)
    }

    pub fn iter(&self) -> impl Iterator<Item = ViewId> + '_ {
        self.views.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_from_name() {
        for view in ViewId::ALL {
            assert_eq!(ViewId::from_name(view.as_str()), Some(view));
        }
    }

    #[test]
    fn unknown_and_duplicate_names_are_dropped() {
        let views = ViewSet::from_names(&["timeline", "calendar-month-title", "timeline", "map"]);

        assert_eq!(views.iter().collect::<Vec<_>>(), vec![ViewId::Timeline, ViewId::Map]);
        assert!(!views.contains(ViewId::MiniCalendar));
    }

    #[test]
    fn empty_names_give_empty_set() {
        let names: Vec<String> = Vec::new();
        assert!(ViewSet::from_names(&names).is_empty());
    }
}
