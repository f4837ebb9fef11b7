use chrono::Datelike;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use jamnodes::{
    app::AppState,
    ui::{
        month_view::{self, DayCell, WEEKDAY_HEADERS},
        views::ViewId,
    },
};

use crate::tui::presentation::Panels;

/// Days outside the displayed month stay blank.
fn cell_lines(app: &AppState, cell: &DayCell<'_>) -> Vec<Line<'static>> {
    if !cell.is_current_month {
        return Vec::new();
    }

    let number_style = if cell.is_today {
        Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        Style::default()
    };

    let mut lines = vec![Line::from(Span::styled(format!("{:>2}", cell.date.day()), number_style))];
    for event in &cell.events {
        let mut style = Style::default().fg(app.theme.event_color(event.event_type));
        if event.is_set_date() {
            style = style.add_modifier(Modifier::BOLD);
        }
        lines.push(Line::from(Span::styled(event.title.clone(), style)));
    }
    lines
}

fn render_cell(f: &mut Frame, app: &AppState, cell: &DayCell<'_>, area: Rect) {
    f.render_widget(Paragraph::new(cell_lines(app, cell)), area);
}

pub fn render(f: &mut Frame, app: &AppState, panels: &Panels) {
    let Some(area) = panels.get(ViewId::LargeCalendar) else {
        return;
    };

    let layout = month_view::calculate_layout(
        &app.calendar,
        app.display_year,
        app.display_month,
        app.now.date(),
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            layout.title().to_uppercase(),
            Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if layout.weeks.is_empty() {
        return;
    }

    let mut row_constraints = vec![Constraint::Length(1)];
    row_constraints.extend(layout.weeks.iter().map(|_| Constraint::Ratio(1, layout.weeks.len() as u32)));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(row_constraints)
        .split(inner);

    let column_constraints = [Constraint::Ratio(1, 7); 7];
    let header_cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(column_constraints)
        .split(rows[0]);
    for (header, col) in WEEKDAY_HEADERS.iter().zip(header_cols.iter()) {
        f.render_widget(
            Paragraph::new(Span::styled(*header, Style::default().fg(app.theme.weekday_header))),
            *col,
        );
    }

    for (week, row) in layout.weeks.iter().zip(rows.iter().skip(1)) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(column_constraints)
            .split(*row);
        for (cell, col) in week.days.iter().zip(cols.iter()) {
            render_cell(f, app, cell, *col);
        }
    }
}
