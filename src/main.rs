use chrono::{Local, NaiveDate};
use clap::{CommandFactory, Parser};
use colored::Colorize;
use crossterm::{
    cursor::MoveTo,
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use directories::ProjectDirs;
use locwork::api::LocworkApi;
use locwork::commands::{CmdMessage, MessageLevel};
use locwork::config::LocworkConfig;
use locwork::error::{LocworkError, Result};
use locwork::interactive::{menu_action, pick_index, MenuAction};
use locwork::model::{DayType, LogEntry};
use locwork::store::{LocationRegistry, RecordStore};
use locwork::viewer::{KeyReader, PagedViewer, Step};
use std::io::Write;
use std::path::PathBuf;

mod args;
mod styles;

use args::{Cli, Commands, LocationCommands, LogCommands};

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let api = init_api()?;

    let Some(command) = cli.command else {
        if cli.interactive {
            return run_interactive(&api);
        }
        Cli::command().print_help().map_err(LocworkError::Io)?;
        return Ok(());
    };

    match command {
        Commands::Location(LocationCommands::Add { name }) => {
            let result = api.add_location(&name)?;
            print_messages(&result.messages);
        }
        Commands::Location(LocationCommands::Remove { name }) => {
            let result = api.remove_location(&name)?;
            print_messages(&result.messages);
        }
        Commands::Location(LocationCommands::List) => {
            let result = api.list_locations()?;
            for location in &result.locations {
                println!("{location}");
            }
            print_messages(&result.messages);
        }
        Commands::Log(LogCommands::Add {
            location,
            today,
            date,
            holiday,
        }) => {
            let date = resolve_date(today, date)?;
            let day_type = if holiday { DayType::Free } else { DayType::Work };
            let result = api.log_day(&location, date, day_type)?;
            print_messages(&result.messages);
        }
        Commands::Log(LogCommands::List) => {
            let result = api.list_records()?;
            print_records(&result.records);
            print_messages(&result.messages);
        }
        Commands::Stats { month } => {
            let day = month.unwrap_or_else(|| Local::now().date_naive());
            let result = api.stat_page(day)?;
            print_messages(&result.messages);
            if let Some(page) = &result.page {
                for line in styles::page_lines(page) {
                    println!("{line}");
                }
            }
        }
        Commands::View => {
            let (viewer, result) = api.viewer(Local::now().date_naive())?;
            print_messages(&result.messages);
            run_viewer(viewer)?;
        }
        Commands::Interactive => run_interactive(&api)?,
    }
    Ok(())
}

fn init_api() -> Result<LocworkApi> {
    let data_dir = data_dir()?;
    let config = LocworkConfig::load(&data_dir)?;
    let registry = LocationRegistry::new(data_dir.join("locations"));
    let store = RecordStore::new(data_dir.join("records.csv"));
    Ok(LocworkApi::new(registry, store, config))
}

fn data_dir() -> Result<PathBuf> {
    // LOCWORK_HOME overrides the platform dir, mainly for tests and scripts
    if let Ok(home) = std::env::var("LOCWORK_HOME") {
        return Ok(PathBuf::from(home));
    }
    let dirs = ProjectDirs::from("com", "locwork", "locwork")
        .ok_or_else(|| LocworkError::Store("could not determine a data directory".to_string()))?;
    Ok(dirs.data_dir().to_path_buf())
}

fn resolve_date(today: bool, date: Option<NaiveDate>) -> Result<NaiveDate> {
    match (today, date) {
        (true, None) => Ok(Local::now().date_naive()),
        (false, Some(d)) => Ok(d),
        (false, None) => Err(LocworkError::InvalidDateRange(
            "either --today or --date is required".to_string(),
        )),
        // clap's conflicts_with already rejects this
        (true, Some(_)) => Err(LocworkError::InvalidDateRange(
            "--today and --date are mutually exclusive".to_string(),
        )),
    }
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_records(records: &[LogEntry]) {
    for entry in records {
        let kind = match entry.day_type {
            DayType::Work => "work",
            DayType::Free => "free",
        };
        println!("{}  {:<16} {}", entry.date_key(), entry.location, kind);
    }
}

/// Reads single keys from the terminal in raw mode.
struct TerminalKeys;

impl KeyReader for TerminalKeys {
    fn read_key(&mut self) -> Result<char> {
        loop {
            if let Event::Key(key) = event::read().map_err(LocworkError::Io)? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                    return Ok('q');
                }
                match key.code {
                    KeyCode::Char(c) => return Ok(c),
                    KeyCode::Left => return Ok('h'),
                    KeyCode::Right => return Ok('l'),
                    KeyCode::Esc => return Ok('\x1b'),
                    _ => continue,
                }
            }
        }
    }
}

fn run_interactive(api: &LocworkApi) -> Result<()> {
    let mut stdout = std::io::stdout();
    enable_raw_mode().map_err(LocworkError::Io)?;

    let outcome = interactive_loop(api, &mut TerminalKeys, &mut stdout);

    disable_raw_mode().map_err(LocworkError::Io)?;
    outcome
}

fn interactive_loop<K: KeyReader, W: Write>(
    api: &LocworkApi,
    keys: &mut K,
    out: &mut W,
) -> Result<()> {
    loop {
        execute!(out, Clear(ClearType::All), MoveTo(0, 0)).map_err(LocworkError::Io)?;
        write!(out, "{}\r\n\r\n", "locwork".bold()).map_err(LocworkError::Io)?;
        write!(out, "l) log today\r\ns) stats\r\nq) quit\r\n").map_err(LocworkError::Io)?;
        out.flush().map_err(LocworkError::Io)?;

        let action = loop {
            if let Some(action) = menu_action(keys.read_key()?) {
                break action;
            }
        };

        match action {
            MenuAction::LogToday => log_today(api, keys, out)?,
            MenuAction::Stats => {
                let (viewer, result) = api.viewer(Local::now().date_naive())?;
                write_messages(&result.messages, out)?;
                execute!(out, EnterAlternateScreen).map_err(LocworkError::Io)?;
                let outcome = viewer_loop(viewer, keys, out);
                execute!(out, LeaveAlternateScreen).map_err(LocworkError::Io)?;
                outcome?;
            }
            MenuAction::Quit => return Ok(()),
        }
    }
}

fn log_today<K: KeyReader, W: Write>(api: &LocworkApi, keys: &mut K, out: &mut W) -> Result<()> {
    let result = api.list_locations()?;
    write_messages(&result.messages, out)?;
    if result.locations.is_empty() {
        write!(out, "{}\r\n", "No locations yet; add one with `locwork location add`".yellow())
            .map_err(LocworkError::Io)?;
        return pause(keys, out);
    }

    write!(out, "\r\nWhere are you today?\r\n").map_err(LocworkError::Io)?;
    for (i, location) in result.locations.iter().enumerate() {
        write!(out, "{i}) {location}\r\n").map_err(LocworkError::Io)?;
    }
    out.flush().map_err(LocworkError::Io)?;

    match pick_index(keys.read_key()?, result.locations.len()) {
        Some(i) => {
            let logged = api.log_day(
                &result.locations[i],
                Local::now().date_naive(),
                DayType::Work,
            )?;
            write_messages(&logged.messages, out)?;
        }
        None => {
            write!(out, "{}\r\n", "Cancelled".dimmed()).map_err(LocworkError::Io)?;
        }
    }
    pause(keys, out)
}

fn pause<K: KeyReader, W: Write>(keys: &mut K, out: &mut W) -> Result<()> {
    write!(out, "\r\n{}\r\n", "press any key".dimmed()).map_err(LocworkError::Io)?;
    out.flush().map_err(LocworkError::Io)?;
    keys.read_key()?;
    Ok(())
}

fn write_messages<W: Write>(messages: &[CmdMessage], out: &mut W) -> Result<()> {
    for message in messages {
        let styled = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        write!(out, "{styled}\r\n").map_err(LocworkError::Io)?;
    }
    Ok(())
}

fn run_viewer(viewer: PagedViewer) -> Result<()> {
    let mut stdout = std::io::stdout();
    enable_raw_mode().map_err(LocworkError::Io)?;
    execute!(stdout, EnterAlternateScreen).map_err(LocworkError::Io)?;

    let outcome = viewer_loop(viewer, &mut TerminalKeys, &mut stdout);

    execute!(stdout, LeaveAlternateScreen).map_err(LocworkError::Io)?;
    disable_raw_mode().map_err(LocworkError::Io)?;
    outcome
}

fn viewer_loop<K: KeyReader, W: Write>(
    mut viewer: PagedViewer,
    keys: &mut K,
    out: &mut W,
) -> Result<()> {
    loop {
        execute!(out, Clear(ClearType::All), MoveTo(0, 0)).map_err(LocworkError::Io)?;
        let page = viewer.page()?;
        for line in styles::page_lines(&page) {
            // raw mode needs explicit carriage returns
            write!(out, "{line}\r\n").map_err(LocworkError::Io)?;
        }
        write!(out, "\r\n{}\r\n", "h: prev  l: next  q: quit".dimmed())
            .map_err(LocworkError::Io)?;
        out.flush().map_err(LocworkError::Io)?;

        loop {
            let key = keys.read_key()?;
            match viewer.apply(key) {
                Some(Step::Quit) => return Ok(()),
                Some(Step::Redraw) => break,
                None => continue,
            }
        }
    }
}
