use ratatui::{
    style::{Modifier, Style},
    text::Span,
    widgets::{
        canvas::{Canvas, Circle, Line, Map, MapResolution},
        Block, Borders,
    },
    Frame,
};
use jamnodes::{
    app::AppState,
    geo::{connection_segments, split_at_antimeridian, PulseFrame, LOCATIONS},
    ui::{theme::Theme, views::ViewId},
};

use crate::tui::presentation::Panels;

// Glow radius is given in screen pixels; the canvas works in degrees.
const DEGREES_PER_PIXEL: f64 = 0.25;
const DIM_OPACITY: f64 = 0.2;

fn glow_color(theme: &Theme, frame: PulseFrame) -> ratatui::style::Color {
    if frame.opacity < DIM_OPACITY {
        theme.muted
    } else {
        theme.glow
    }
}

fn map_title(app: &AppState) -> String {
    match app.selected_location() {
        Some(location) => format!(
            "Nodes // {} // {} // {}",
            location.name,
            location.org,
            location.coord_label()
        ),
        None => format!("Nodes // {}", app.map_style.name),
    }
}

pub fn render(f: &mut Frame, app: &AppState, panels: &Panels) {
    let Some(area) = panels.get(ViewId::Map) else {
        return;
    };

    let segments = connection_segments(&LOCATIONS);
    let selected = app.selected_location().map(|l| l.id);
    let glow = glow_color(&app.theme, app.pulse_frame);
    let glow_radius = app.pulse_frame.radius * DEGREES_PER_PIXEL;

    let canvas = Canvas::default()
        .block(Block::default().borders(Borders::ALL).title(map_title(app)))
        .x_bounds([-180.0, 180.0])
        .y_bounds([-90.0, 90.0])
        .paint(|ctx| {
            ctx.draw(&Map {
                resolution: MapResolution::High,
                color: app.theme.land,
            });
            ctx.layer();

            for segment in &segments {
                for [a, b] in split_at_antimeridian(segment.coords) {
                    ctx.draw(&Line {
                        x1: a.lon,
                        y1: a.lat,
                        x2: b.lon,
                        y2: b.lat,
                        color: app.theme.connection,
                    });
                }
            }
            ctx.layer();

            for location in &LOCATIONS {
                ctx.draw(&Circle {
                    x: location.coords.lon,
                    y: location.coords.lat,
                    radius: glow_radius,
                    color: glow,
                });
            }
            ctx.layer();

            for location in &LOCATIONS {
                let mut style = Style::default().fg(app.theme.marker);
                if selected == Some(location.id) {
                    style = style.bg(app.theme.marker_stroke).add_modifier(Modifier::BOLD);
                }
                ctx.print(location.coords.lon, location.coords.lat, Span::styled("●", style));
            }
        });

    f.render_widget(canvas, area);
}
