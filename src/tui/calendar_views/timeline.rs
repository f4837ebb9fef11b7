use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use jamnodes::{
    app::AppState,
    ui::{timeline::timeline, views::ViewId},
};

use crate::tui::presentation::Panels;

pub fn render(f: &mut Frame, app: &AppState, panels: &Panels) {
    let Some(area) = panels.get(ViewId::Timeline) else {
        return;
    };

    let lines: Vec<Line> = timeline(&app.calendar, app.now)
        .into_iter()
        .map(|item| {
            let (marker, mut style) = if item.active {
                ("▶", Style::default().fg(app.theme.event_color(item.event_type)))
            } else if item.past {
                ("·", Style::default().fg(app.theme.muted))
            } else {
                ("○", Style::default())
            };
            if item.highlight && !item.past {
                style = style.fg(app.theme.event_color(item.event_type)).add_modifier(Modifier::BOLD);
            }

            let mut spans = vec![
                Span::styled(format!("{} ", marker), style),
                Span::styled(format!("{:<7} ", item.date), Style::default().fg(app.theme.weekday_header)),
                Span::styled(item.title, style),
            ];
            if let Some(location) = item.location {
                spans.push(Span::styled(format!("  {}", location), Style::default().fg(app.theme.muted)));
            }
            Line::from(spans)
        })
        .collect();

    let content = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Timeline"));
    f.render_widget(content, area);
}
