//! Mood CLI - record and graph your team's daily mood.

use chrono::NaiveDate;
use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use moodlog::{Criteria, MoodEngine, MoodRecord, SqliteStore, date_util};
use std::fs;
use std::path::PathBuf;

mod cli;

use cli::{Cli, Command};

fn setup_logging() -> Result<()> {
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("moodlog")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("mood.log");

    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

fn default_db_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("moodlog")
        .join("moods.db")
}

fn open_engine(cli: &Cli) -> Result<MoodEngine> {
    let path = cli.db.clone().unwrap_or_else(default_db_path);
    let store = SqliteStore::open(&path).context("Failed to open mood database")?;
    Ok(MoodEngine::with_key(Box::new(store), cli.key.clone()))
}

fn nickname(user: Option<String>) -> String {
    match user {
        Some(u) if !u.trim().eq_ignore_ascii_case("me") => u,
        _ => std::env::var("USER").unwrap_or_else(|_| "unknown".to_string()),
    }
}

fn parse_day(input: &str) -> Result<NaiveDate> {
    let normalized = date_util::normalize(input);
    NaiveDate::parse_from_str(&normalized, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}': expected YYYY-MM-DD", input))
}

fn print_day(engine: &MoodEngine, label: &str, date: NaiveDate, json: bool) -> Result<()> {
    let moods = engine.query(Some(&Criteria::new().date(date)))?;
    if json {
        println!("{}", serde_json::to_string_pretty(&moods).context("Failed to encode entries")?);
    } else if moods.is_empty() {
        println!("{}", format!("No mood entry for {}.", label).dimmed());
    } else {
        for mood in moods {
            println!("- {}", mood);
        }
    }
    Ok(())
}

fn print_graph(engine: &MoodEngine, user: Option<String>, since: i64) -> Result<()> {
    let user = nickname(user);
    let graph = engine.graph(&Criteria::new().user(user.clone()).since(since))?;
    println!("{} {}", user.cyan(), graph);
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Set {
            ref mood,
            ref info,
            ref user,
            ref date,
        } => {
            let mut engine = open_engine(&cli)?;
            let record = MoodRecord {
                date: date.as_deref().map(parse_day).transpose()?,
                user: Some(nickname(user.clone())),
                mood: Some(mood.to_lowercase()),
                info: info.clone(),
            };

            let stored = engine.store(record)?;
            println!("{} Recorded entry: {}", "✓".green(), stored);
        }

        Command::Of { ref user } => {
            let engine = open_engine(&cli)?;
            let user = nickname(user.clone());
            let criteria = Criteria::new().date(date_util::today()).user(user.clone());
            let moods = engine.query(Some(&criteria))?;

            match moods.first() {
                Some(mood) => println!("{}", mood),
                None => println!("{}", format!("{} has not set a mood today, yet", user).dimmed()),
            }
        }

        Command::Today { json } => {
            let engine = open_engine(&cli)?;
            print_day(&engine, "today", date_util::today(), json)?;
        }

        Command::Yesterday { json } => {
            let engine = open_engine(&cli)?;
            print_day(&engine, "yesterday", date_util::yesterday(), json)?;
        }

        Command::Week { ref user } => {
            let engine = open_engine(&cli)?;
            print_graph(&engine, user.clone(), 7)?;
        }

        Command::Month { ref user } => {
            let engine = open_engine(&cli)?;
            print_graph(&engine, user.clone(), 30)?;
        }

        Command::Clear => {
            let mut engine = open_engine(&cli)?;
            engine.clear()?;
            println!("{} Cleared all mood entries in {}", "✓".green(), engine.key());
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    setup_logging().context("Failed to setup logging")?;

    let cli = Cli::parse();
    info!("Command: {:?}", std::env::args().collect::<Vec<_>>());

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
