use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use jamnodes::{
    app::AppState,
    ui::{
        event_list::{upcoming_rows, NO_UPCOMING},
        views::ViewId,
    },
};

use crate::tui::presentation::Panels;

pub fn render(f: &mut Frame, app: &AppState, panels: &Panels) {
    let Some(area) = panels.get(ViewId::EventsList) else {
        return;
    };

    let rows = upcoming_rows(&app.calendar, app.now);
    let mut lines = Vec::new();

    if rows.is_empty() {
        lines.push(Line::from(Span::styled(NO_UPCOMING, Style::default().fg(app.theme.muted))));
    }

    for row in rows {
        let mut title_style = Style::default();
        if row.set_date {
            title_style = title_style.fg(app.theme.title).add_modifier(Modifier::BOLD);
        }
        lines.push(Line::from(vec![
            Span::styled(format!("{:<7}", row.date), Style::default().fg(app.theme.weekday_header)),
            Span::raw(" "),
            Span::styled(row.title, title_style),
        ]));
        lines.push(Line::from(vec![
            Span::raw("        "),
            Span::styled(format!("{} · {}", row.time, row.location), Style::default().fg(app.theme.muted)),
        ]));
    }

    let content = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Upcoming"));
    f.render_widget(content, area);
}
