//! Shared test infrastructure for moodlog integration tests.
//!
//! Provides TestEnv helper for consistent test setup/teardown.

#![allow(dead_code)]

use chrono::NaiveDate;
use moodlog::{Criteria, MemoryStore, Mood, MoodEngine, MoodRecord, date_util};

/// Test environment around an in-memory engine.
pub struct TestEnv {
    pub engine: MoodEngine,
}

impl TestEnv {
    /// Create a new test environment with an empty in-memory log.
    pub fn new() -> Self {
        let engine = MoodEngine::with_key(Box::new(MemoryStore::new()), "mood:test");
        Self { engine }
    }

    /// Store a mood for today.
    pub fn set_mood(&mut self, user: &str, mood: &str) -> Mood {
        self.store(user, mood, None, None).expect("Failed to store mood")
    }

    /// Store a mood on a specific day.
    pub fn set_mood_on(&mut self, user: &str, mood: &str, date: NaiveDate) -> Mood {
        self.store(user, mood, Some(date), None).expect("Failed to store mood")
    }

    /// Store a mood with an annotation.
    pub fn set_mood_with_info(&mut self, user: &str, mood: &str, info: &str) -> Mood {
        self.store(user, mood, None, Some(info)).expect("Failed to store mood")
    }

    /// Raw store call, error surfaced to the caller.
    pub fn store(
        &mut self,
        user: &str,
        mood: &str,
        date: Option<NaiveDate>,
        info: Option<&str>,
    ) -> eyre::Result<Mood> {
        self.engine.store(MoodRecord {
            date,
            user: Some(user.to_string()),
            mood: Some(mood.to_string()),
            info: info.map(String::from),
        })
    }

    /// All moods stored for one user.
    pub fn moods_of(&self, user: &str) -> Vec<Mood> {
        self.engine
            .query(Some(&Criteria::new().user(user)))
            .expect("Failed to query moods")
    }

    /// All moods stored for one day.
    pub fn moods_on(&self, date: NaiveDate) -> Vec<Mood> {
        self.engine
            .query(Some(&Criteria::new().date(date)))
            .expect("Failed to query moods")
    }

    /// Total number of stored entries.
    pub fn total_count(&self) -> usize {
        self.engine.query(None).expect("Failed to query moods").len()
    }

    /// Seed one user with a 4-day run of moods: stormy 3 days ago, then
    /// rainy, cloudy, and sunny today.
    pub fn seed_week(&mut self, user: &str) {
        self.set_mood(user, "sunny");
        self.set_mood_on(user, "cloudy", date_util::yesterday());
        self.set_mood_on(user, "rainy", date_util::days_before(2));
        self.set_mood_on(user, "stormy", date_util::days_before(3));
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
