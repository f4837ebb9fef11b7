use std::io;
use std::time::{Duration, Instant};

use chrono::Local;
use crossterm::{
    event::{self, Event as TermEvent, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use jamnodes::{app::AppState, storage::config::Config};

use crate::cli::load_calendar;
use crate::tui::presentation::ui;

const FRAME_INTERVAL: Duration = Duration::from_millis(33);
const CLOCK_INTERVAL: Duration = Duration::from_secs(1);

pub async fn run_tui(config: &Config, offline: bool) -> Result<(), io::Error> {
    let mut app = AppState::from_config(config);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    terminal.draw(|f| ui(f, &app)).ok();
    app.calendar = load_calendar(config, offline).await;

    let res = run_app(&mut terminal, &mut app, config, offline).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("Error: {:?}", err);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
    config: &Config,
    offline: bool,
) -> io::Result<()> {
    let mut last_clock_tick = Instant::now();

    loop {
        terminal.draw(|f| ui(f, app))?;

        if event::poll(FRAME_INTERVAL)?
            && let TermEvent::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Char('j') | KeyCode::Down => app.select_next_location(),
                KeyCode::Char('k') | KeyCode::Up => app.select_previous_location(),
                KeyCode::Esc => app.clear_selection(),
                KeyCode::Char('r') => {
                    tracing::info!("Refreshing calendar");
                    app.calendar = load_calendar(config, offline).await;
                }
                _ => {}
            }
        }

        app.advance_frame();

        if last_clock_tick.elapsed() >= CLOCK_INTERVAL {
            app.tick_clock(Local::now().naive_local());
            last_clock_tick = Instant::now();
        }
    }
}
