//! CLI argument parsing for the mood tool.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "mood",
    about = "Record your team's daily mood and graph it over time",
    version,
    after_help = "Logs are written to: ~/.local/share/moodlog/logs/mood.log"
)]
pub struct Cli {
    /// Path to the mood database (default: ~/.local/share/moodlog/moods.db)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Log key to store entries under
    #[arg(long, global = true, default_value = "moods")]
    pub key: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Set your mood for today
    Set {
        /// One of: sunny, cloudy, rainy, stormy
        mood: String,

        /// Optional annotation
        info: Option<String>,

        /// User to record for (default: $USER)
        #[arg(short, long)]
        user: Option<String>,

        /// Day to record for, YYYY-MM-DD (default: today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Show someone's mood for today
    Of {
        /// User to look up (default: $USER)
        user: Option<String>,
    },

    /// Show everyone's mood for today
    Today {
        /// Print entries as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show everyone's mood for yesterday
    Yesterday {
        /// Print entries as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show someone's mood bar graph for the last 7 days
    Week {
        /// User to graph (default: $USER)
        user: Option<String>,
    },

    /// Show someone's mood bar graph for the last 30 days
    Month {
        /// User to graph (default: $USER)
        user: Option<String>,
    },

    /// Delete every stored entry
    Clear,
}
