use chrono::Datelike;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use jamnodes::{
    app::AppState,
    ui::{
        month_view::{self, DayCell, WEEKDAY_HEADERS},
        theme::day_style,
        views::ViewId,
    },
};

use crate::tui::presentation::Panels;

fn cell_span<'a>(app: &AppState, cell: &DayCell<'_>) -> Span<'a> {
    if !cell.is_current_month {
        return Span::styled(
            format!(" {:>2}  ", cell.date.day()),
            Style::default().fg(app.theme.inactive_day),
        );
    }

    let mut style = Style::default();
    let mut text = format!(" {:>2}  ", cell.date.day());

    if let Some(event_type) = cell.primary_type() {
        let marker = day_style(event_type);
        style = style.fg(app.theme.event_color(event_type));
        if marker.class != "has-event" {
            style = style.add_modifier(Modifier::BOLD);
        }
        if let Some(label) = marker.label {
            text = format!(" {:>2}{:<2} ", cell.date.day(), &label[..1]);
        }
    }

    if cell.is_today {
        style = style.add_modifier(Modifier::REVERSED);
    }

    Span::styled(text, style)
}

pub fn render(f: &mut Frame, app: &AppState, panels: &Panels) {
    let Some(area) = panels.get(ViewId::MiniCalendar) else {
        return;
    };

    let layout = month_view::calculate_layout(
        &app.calendar,
        app.display_year,
        app.display_month,
        app.now.date(),
    );

    let header: Vec<Span> = WEEKDAY_HEADERS
        .iter()
        .map(|d| Span::styled(format!(" {:<3} ", d), Style::default().fg(app.theme.weekday_header)))
        .collect();

    let mut lines = vec![Line::from(header)];
    for week in &layout.weeks {
        let spans: Vec<Span> = week.days.iter().map(|cell| cell_span(app, cell)).collect();
        lines.push(Line::from(spans));
    }

    let title = Span::styled(
        layout.title().to_uppercase(),
        Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD),
    );
    let content = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(content, area);
}
