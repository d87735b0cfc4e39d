//! bgtutor - learn the Bulgarian alphabet and numbers in the terminal
//!
//! Reference tables, typed and tiled practice rounds, arithmetic drills and a
//! short scored test, all driven by one quiz session type.

mod arithmetic;
mod config;
mod error;
mod models;
mod quiz;
mod selection;
mod session;
mod tables;
mod ui;

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::prelude::*;

use config::Config;
use tables::{search_numbers, ALPHABET, MATCH_WORDS};
use ui::App;

// ══════════════════════════════════════════════════════════════════════════
// CLI Arguments
// ══════════════════════════════════════════════════════════════════════════

#[derive(Parser, Debug)]
#[command(name = "bgtutor")]
#[command(author, version, about = "Bulgarian alphabet and numbers trainer", long_about = None)]
struct Args {
    /// Config file to use instead of the default location
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Start with this theme (default, rose)
    #[arg(short, long)]
    theme: Option<String>,

    /// Write the log here instead of the data directory
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print a reference table and exit
    #[arg(short, long, value_enum)]
    list: Option<Table>,

    /// Filter the printed table; implies `--list numbers` when no table is given
    #[arg(short, long)]
    search: Option<String>,

    /// Print the table as JSON
    #[arg(long)]
    json: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Table {
    Alphabet,
    Numbers,
    Words,
}

// ══════════════════════════════════════════════════════════════════════════
// Main Entry Point
// ══════════════════════════════════════════════════════════════════════════

fn main() -> Result<()> {
    let args = Args::parse();

    let table = args.list.or(args.search.as_ref().map(|_| Table::Numbers));
    if let Some(table) = table {
        let output = render_table(table, args.search.as_deref().unwrap_or(""), args.json)?;
        print!("{}", output);
        return Ok(());
    }

    let log_path = args.log_file.unwrap_or_else(default_log_path);
    if let Err(e) = init_logging(&log_path) {
        eprintln!("Warning: logging disabled: {:#}", e);
    }

    let config_path = args.config.unwrap_or_else(Config::default_path);
    let mut config = match Config::load_from(&config_path) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("{:#}", e);
            Config::default()
        }
    };
    if let Some(theme) = args.theme {
        config.theme = theme;
    }

    run_tui(config, config_path)
}

fn default_log_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("bgtutor")
        .join("bgtutor.log")
}

/// Send log records to `path`; the terminal belongs to the UI.
fn init_logging(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {:?}", parent))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {:?}", path))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .context("Failed to install logger")?;

    log::info!("bgtutor {} starting", env!("CARGO_PKG_VERSION"));
    Ok(())
}

// ══════════════════════════════════════════════════════════════════════════
// Table Output
// ══════════════════════════════════════════════════════════════════════════

fn render_table(table: Table, query: &str, json: bool) -> Result<String> {
    let needle = query.trim().to_lowercase();
    let hit = |fields: &[&str]| {
        needle.is_empty() || fields.iter().any(|f| f.to_lowercase().contains(&needle))
    };

    let mut out = String::new();
    match table {
        Table::Alphabet => {
            let rows: Vec<_> = ALPHABET
                .iter()
                .filter(|e| hit(&[e.letter, e.sound, e.word, e.translation]))
                .collect();
            if json {
                out = serde_json::to_string_pretty(&rows).context("Failed to serialize alphabet")?;
                out.push('\n');
            } else {
                for e in rows {
                    out.push_str(&format!("{:<3}{:<5}{}\n", e.letter, e.sound, e.example()));
                }
            }
        }
        Table::Numbers => {
            let rows = search_numbers(query);
            if json {
                out = serde_json::to_string_pretty(&rows).context("Failed to serialize numbers")?;
                out.push('\n');
            } else {
                for e in rows {
                    out.push_str(&format!("{:>3}  {}\n", e.value, e.word));
                }
            }
        }
        Table::Words => {
            let rows: Vec<_> = MATCH_WORDS
                .iter()
                .filter(|w| hit(&[w.bulgarian, w.translation]))
                .collect();
            if json {
                out = serde_json::to_string_pretty(&rows).context("Failed to serialize words")?;
                out.push('\n');
            } else {
                for w in rows {
                    out.push_str(&format!(
                        "{:<10}{:<22}{:<12}{}\n",
                        w.bulgarian,
                        w.sounds.join(" "),
                        w.translation,
                        w.difficulty.name()
                    ));
                }
            }
        }
    }
    Ok(out)
}

// ══════════════════════════════════════════════════════════════════════════
// Terminal
// ══════════════════════════════════════════════════════════════════════════

fn run_tui(config: Config, config_path: PathBuf) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config, config_path, StdRng::from_os_rng());

    // Run main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        log::error!("{:#}", err);
        eprintln!("Error: {}", err);
        return Err(err);
    }

    log::info!("bye");
    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    while app.running {
        terminal.draw(|frame| app.render(frame))?;
        app.handle_events()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_alphabet_lists_every_letter() {
        let out = render_table(Table::Alphabet, "", false).unwrap();
        assert_eq!(out.lines().count(), 30);
        assert!(out.starts_with("А  a    автобус (avtobus) - bus"));
    }

    #[test]
    fn number_search_filters() {
        let out = render_table(Table::Numbers, "седем", false).unwrap();
        assert!(out.lines().any(|l| l.trim() == "7  седем"));
        assert!(out.lines().all(|l| l.contains("седем")));
    }

    #[test]
    fn words_as_json() {
        let out = render_table(Table::Words, "june", true).unwrap();
        let rows: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(rows[0]["bulgarian"], "юни");
        assert_eq!(rows[0]["sounds"], serde_json::json!(["yu", "n", "i"]));
        assert_eq!(rows[0]["difficulty"], "easy");
    }

    #[test]
    fn log_file_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("bgtutor.log");
        // another test may already own the global logger
        let _ = init_logging(&path);
        assert!(path.exists());
    }

    #[test]
    fn args_parse() {
        let args = Args::try_parse_from(["bgtutor", "--list", "words", "--json"]).unwrap();
        assert_eq!(args.list, Some(Table::Words));
        assert!(args.json);
    }
}
