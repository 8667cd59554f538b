//! Moodlog: per-user daily mood tracking over an append-only list store.
//!
//! Each entry records one user's mood (sunny, cloudy, rainy, or stormy) on
//! one calendar day, persisted as a colon-delimited line under a single log
//! key. The engine answers simple queries and renders rolling bar graphs.
//!
//! # Example
//!
//! ```
//! use moodlog::{Criteria, MemoryStore, MoodEngine, MoodRecord};
//!
//! let mut engine = MoodEngine::new(Box::new(MemoryStore::new()));
//!
//! engine.store(MoodRecord {
//!     user: Some("john".to_string()),
//!     mood: Some("sunny".to_string()),
//!     ..Default::default()
//! }).unwrap();
//!
//! let moods = engine.query(Some(&Criteria::new().user("john"))).unwrap();
//! assert_eq!(moods.len(), 1);
//! println!("{}", moods[0]);
//! ```

pub mod date_util;
mod engine;
mod query;
mod storage;
mod types;

// Re-export public API
pub use engine::{EngineError, EventSink, LogSink, MoodEngine};
pub use query::{Criteria, filter};
pub use storage::{ListStore, MemoryStore, SqliteStore};
pub use types::{Mood, MoodKind, MoodRecord, ValidationError};
