use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use jamnodes::{
    app::AppState,
    ui::{events_grid::event_cards, views::ViewId},
};

use crate::tui::presentation::Panels;

const CARDS_PER_ROW: usize = 4;

pub fn render(f: &mut Frame, app: &AppState, panels: &Panels) {
    let Some(area) = panels.get(ViewId::EventsGrid) else {
        return;
    };

    let block = Block::default().borders(Borders::ALL).title("Events");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let cards = event_cards(&app.calendar);
    let row_count = cards.len().div_ceil(CARDS_PER_ROW);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, row_count as u32); row_count])
        .split(inner);

    for (chunk, row) in cards.chunks(CARDS_PER_ROW).zip(rows.iter()) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, CARDS_PER_ROW as u32); CARDS_PER_ROW])
            .split(*row);

        for (card, col) in chunk.iter().zip(cols.iter()) {
            let tag_style = match card.event_type {
                Some(event_type) => Style::default().fg(app.theme.event_color(event_type)),
                None => Style::default().fg(app.theme.muted),
            };
            let mut title_style = Style::default().add_modifier(Modifier::BOLD);
            if card.event_type.is_none() {
                title_style = Style::default().fg(app.theme.muted);
            }

            let lines = vec![
                Line::from(vec![
                    Span::styled(card.number.clone(), Style::default().fg(app.theme.muted)),
                    Span::raw(" "),
                    Span::styled(card.tag, tag_style),
                ]),
                Line::from(Span::styled(card.title.clone(), title_style)),
                Line::from(Span::styled(card.meta.clone(), Style::default().fg(app.theme.muted))),
            ];
            let widget = Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .block(Block::default().borders(Borders::ALL));
            f.render_widget(widget, *col);
        }
    }
}
