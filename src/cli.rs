use std::{
    env,
    io::{self, Write},
    process::{Command, Stdio},
};

use chrono::{Datelike, Local};

use jamnodes::{
    geo::{overlay::{MapStyle, OverlayDocument, MAP_STYLES}, LOCATIONS},
    storage::config::Config,
    sync::{CalendarFeed, CalendarSync, GoogleCalendarClient, SyncStatus},
    ui::{
        event_list::{upcoming_rows, NO_UPCOMING},
        month_view::{self, WEEKDAY_HEADERS},
        theme::day_style,
        timeline::timeline,
    },
};

pub const USAGE: &str = "Usage: jamnodes [--agenda] [--map-json] [--offline]";

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CliMode {
    Dashboard { offline: bool },
    Agenda { offline: bool },
    MapJson,
}

pub fn parse_cli_mode() -> Result<CliMode, String> {
    parse_args(env::args().skip(1))
}

fn parse_args<I: Iterator<Item = String>>(args: I) -> Result<CliMode, String> {
    let mut offline = false;
    let mut agenda = false;
    let mut map_json = false;

    for arg in args {
        match arg.as_str() {
            "--offline" => offline = true,
            "--agenda" => agenda = true,
            "--map-json" => map_json = true,
            "--help" => {
                println!("{}", USAGE);
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown argument: {}", arg)),
        }
    }

    match (agenda, map_json) {
        (true, true) => Err("--agenda and --map-json cannot be combined".to_string()),
        (true, false) => Ok(CliMode::Agenda { offline }),
        (false, true) => Ok(CliMode::MapJson),
        (false, false) => Ok(CliMode::Dashboard { offline }),
    }
}

pub fn run_map_json_mode() -> Result<(), io::Error> {
    let style = Config::load_or_create()
        .map(|config| MapStyle::by_name(&config.map.style))
        .unwrap_or_else(|e| {
            tracing::warn!("Using default map style: {}", e);
            MAP_STYLES[0]
        });

    let document = OverlayDocument::new(&LOCATIONS, style);
    let json = serde_json::to_string_pretty(&document.to_style_json())
        .map_err(|e| io::Error::other(e.to_string()))?;
    println!("{json}");
    Ok(())
}

pub async fn load_calendar(config: &Config, offline: bool) -> CalendarSync {
    let client = if offline {
        None
    } else {
        GoogleCalendarClient::from_config(&config.calendar)
    };
    let feed = client.as_ref().map(|c| c as &dyn CalendarFeed);

    let mut calendar = CalendarSync::new();
    calendar
        .refresh(feed, Local::now().date_naive(), config.calendar.months_ahead)
        .await;
    calendar
}

pub async fn run_agenda_mode(config: &Config, offline: bool) -> Result<(), io::Error> {
    let calendar = load_calendar(config, offline).await;
    let agenda = format_agenda_text(&calendar, config.display.year, config.display.month);
    display_with_pager(&agenda)
}

fn format_agenda_text(calendar: &CalendarSync, year: i32, month: u32) -> String {
    let now = Local::now().naive_local();
    let today = now.date();
    let layout = month_view::calculate_layout(calendar, year, month, today);

    let mut lines = Vec::new();
    lines.push(layout.title().to_uppercase());
    if matches!(calendar.status(), SyncStatus::SetDatesOnly | SyncStatus::NotConfigured) {
        lines.push("(set dates only)".to_string());
    }
    lines.push(String::new());

    lines.push(WEEKDAY_HEADERS.iter().map(|d| format!("{:<6}", d)).collect::<String>());
    for week in &layout.weeks {
        let row: String = week
            .days
            .iter()
            .map(|cell| {
                let label = cell
                    .primary_type()
                    .filter(|_| cell.is_current_month)
                    .and_then(|t| day_style(t).label)
                    .unwrap_or("");
                let day = if cell.is_current_month {
                    format!("{:>2}", cell.date.day())
                } else {
                    " .".to_string()
                };
                format!("{}{:<4}", day, label)
            })
            .collect();
        lines.push(row.trim_end().to_string());
    }

    lines.push(String::new());
    lines.push("Upcoming".to_string());
    let rows = upcoming_rows(calendar, now);
    if rows.is_empty() {
        lines.push(format!("  {}", NO_UPCOMING));
    }
    for row in rows {
        lines.push(format!("  {:<7} {:<8} {} @ {}", row.date, row.time, row.title, row.location));
    }

    lines.push(String::new());
    lines.push("Timeline".to_string());
    for item in timeline(calendar, now) {
        let marker = if item.active {
            ">"
        } else if item.past {
            "x"
        } else {
            " "
        };
        let mut line = format!("{} {:<7} {}", marker, item.date, item.title);
        if let Some(location) = &item.location {
            line.push_str(&format!(" ({})", location));
        }
        lines.push(line);
    }

    lines.join("\n")
}

fn display_with_pager(text: &str) -> Result<(), io::Error> {
    let pager_value = env::var("PAGER").unwrap_or_else(|_| "less".to_string());
    let mut parts = pager_value.split_whitespace();
    let cmd = match parts.next() {
        Some(c) => c,
        None => {
            print!("{text}");
            return Ok(());
        }
    };
    let args: Vec<&str> = parts.collect();

    match Command::new(cmd)
        .args(&args)
        .stdin(Stdio::piped())
        .spawn()
    {
        Ok(mut child) => {
            if let Some(stdin) = child.stdin.as_mut() {
                stdin.write_all(text.as_bytes())?;
            }
            let _ = child.wait();
        }
        Err(_) => {
            print!("{text}");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliMode, String> {
        parse_args(args.iter().map(|a| a.to_string()))
    }

    #[test]
    fn no_arguments_opens_the_dashboard() {
        assert_eq!(parse(&[]), Ok(CliMode::Dashboard { offline: false }));
    }

    #[test]
    fn offline_applies_to_agenda() {
        assert_eq!(parse(&["--agenda", "--offline"]), Ok(CliMode::Agenda { offline: true }));
    }

    #[test]
    fn map_json_mode_is_recognized() {
        assert_eq!(parse(&["--map-json"]), Ok(CliMode::MapJson));
    }

    #[test]
    fn conflicting_modes_are_rejected() {
        assert!(parse(&["--agenda", "--map-json"]).is_err());
    }

    #[test]
    fn unknown_argument_is_an_error() {
        assert_eq!(parse(&["--sample"]), Err("Unknown argument: --sample".to_string()));
    }

    #[test]
    fn agenda_text_lists_the_set_dates() {
        let calendar = CalendarSync::new();
        let text = format_agenda_text(&calendar, 2026, 3);

        assert!(text.starts_with("MARCH 2026"));
        assert!(text.contains("21JAM!"));
        assert!(text.contains("Submissions Due (23:59 UTC)"));
    }
}
