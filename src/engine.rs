//! The mood engine: append/query/filter/graph over one log key.

use crate::query::{Criteria, filter};
use crate::storage::ListStore;
use crate::types::{Mood, MoodRecord, ValidationError};
use chrono::NaiveDate;
use eyre::{Context, Result};

/// Default log key.
const DEFAULT_KEY: &str = "moods";

/// Errors that can occur during engine operations.
#[derive(Debug)]
pub enum EngineError {
    /// A mood record already exists for this user on this day.
    DuplicateEntry { user: String, date: NaiveDate },
    /// `graph` called without a user.
    MissingUser,
    /// `graph` called without a since window.
    MissingSince,
    /// `graph` found no entries in the requested window.
    EmptyRange { user: String, since: i64 },
    /// Validation error.
    Validation(ValidationError),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::DuplicateEntry { user, date } => {
                write!(f, "Mood already stored for {} on {}", user, date)
            }
            EngineError::MissingUser => write!(f, "a user is mandatory"),
            EngineError::MissingSince => write!(f, "a since filter is mandatory"),
            EngineError::EmptyRange { user, since } => {
                write!(f, "No mood entry for {} in the last {} days.", user, since)
            }
            EngineError::Validation(e) => write!(f, "validation error: {}", e),
        }
    }
}

impl std::error::Error for EngineError {}

/// Observer for engine lifecycle notifications.
///
/// Two fixed notification kinds, each carrying one human-readable line.
/// The engine never requires a listener; [`LogSink`] forwards to the `log`
/// crate by default.
pub trait EventSink {
    /// Verbose trace of clear operations.
    fn debug(&self, message: &str);

    /// One line per attempted write.
    fn info(&self, message: &str);
}

/// Default sink: forwards events to the `log` facade.
pub struct LogSink;

impl EventSink for LogSink {
    fn debug(&self, message: &str) {
        log::debug!("{}", message);
    }

    fn info(&self, message: &str) {
        log::info!("{}", message);
    }
}

/// The mood engine. Owns one store connection and one log key.
pub struct MoodEngine {
    store: Box<dyn ListStore>,
    key: String,
    sink: Box<dyn EventSink>,
}

impl MoodEngine {
    /// Create an engine over the given store with the default `"moods"` key.
    pub fn new(store: Box<dyn ListStore>) -> Self {
        Self::with_key(store, DEFAULT_KEY)
    }

    /// Create an engine over the given store and log key.
    pub fn with_key(store: Box<dyn ListStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            sink: Box::new(LogSink),
        }
    }

    /// Replace the event sink.
    pub fn with_sink(mut self, sink: Box<dyn EventSink>) -> Self {
        self.sink = sink;
        self
    }

    /// The log key this engine writes under.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Delete the whole log.
    pub fn clear(&mut self) -> Result<()> {
        self.sink.debug(&format!("clearing records in {}", self.key));
        self.store.delete(&self.key).context("Failed to clear mood log")?;
        self.sink.debug(&format!("deleted records in {}", self.key));
        Ok(())
    }

    /// Read the full log, decode every line, and apply `criteria`.
    ///
    /// One malformed line fails the entire read. `None` criteria returns
    /// everything, preserving insertion order.
    pub fn query(&self, criteria: Option<&Criteria>) -> Result<Vec<Mood>> {
        let lines = self.store.read_all(&self.key).context("Failed to read mood log")?;
        let moods = lines
            .iter()
            .map(|line| Mood::parse(line))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| eyre::eyre!(EngineError::Validation(e)))?;

        let all = Criteria::new();
        Ok(filter(&moods, Some(criteria.unwrap_or(&all))))
    }

    /// Whether any entry matches `criteria`.
    pub fn exists(&self, criteria: &Criteria) -> Result<bool> {
        Ok(!self.query(Some(criteria))?.is_empty())
    }

    /// Validate and append one mood entry.
    ///
    /// Fails with [`EngineError::DuplicateEntry`] when an entry already
    /// exists for the same user and day. The existence check and the append
    /// are two separate store round-trips, not one atomic operation; the
    /// engine assumes sequential callers on one connection.
    pub fn store(&mut self, record: MoodRecord) -> Result<Mood> {
        let mood = Mood::new(record).map_err(|e| eyre::eyre!(EngineError::Validation(e)))?;

        let collision = Criteria::new().date(mood.date).user(mood.user.clone());
        if self.exists(&collision)? {
            return Err(eyre::eyre!(EngineError::DuplicateEntry {
                user: mood.user,
                date: mood.date,
            }));
        }

        let line = mood.serialize();
        self.sink.info(&format!("storing mood entry for {}: {}", mood.user, line));
        self.store.append(&self.key, &line).context("Failed to append mood entry")?;

        Ok(mood)
    }

    /// Render a user's moods over a trailing window as one bar string,
    /// oldest day first.
    pub fn graph(&self, criteria: &Criteria) -> Result<String> {
        let user = criteria.user.clone().ok_or_else(|| eyre::eyre!(EngineError::MissingUser))?;
        let since = criteria.since.ok_or_else(|| eyre::eyre!(EngineError::MissingSince))?;

        let mut moods = self.query(Some(criteria))?;
        if moods.is_empty() {
            return Err(eyre::eyre!(EngineError::EmptyRange { user, since }));
        }

        moods.sort_by_key(|mood| mood.date);
        Ok(moods.iter().map(Mood::bar).collect())
    }
}
