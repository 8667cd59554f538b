//! Filter criteria over mood entries.

use crate::date_util;
use crate::types::Mood;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Filter record for `query`/`exists`/`graph`, built fluently.
///
/// All present fields are AND-combined. A `since` of `N` selects the
/// trailing window of `N` calendar days including today; values `<= 0`
/// are treated as absent rather than rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Criteria {
    #[serde(default)]
    pub date: Option<NaiveDate>,

    #[serde(default)]
    pub since: Option<i64>,

    #[serde(default)]
    pub user: Option<String>,
}

impl Criteria {
    /// An empty criteria record matching everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Match entries on exactly this calendar day.
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Match entries in the trailing window of `days` days including today.
    pub fn since(mut self, days: i64) -> Self {
        self.since = Some(days);
        self
    }

    /// Match entries for exactly this user.
    pub fn user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    /// Whether one entry satisfies every present field.
    pub fn matches(&self, mood: &Mood) -> bool {
        if self.date.is_some_and(|date| mood.date != date) {
            return false;
        }
        if let Some(since) = self.since
            && since > 0
            && mood.date < date_util::days_before(since - 1)
        {
            return false;
        }
        if self.user.as_deref().is_some_and(|user| mood.user != user) {
            return false;
        }
        true
    }
}

/// Pure in-memory filter over an already-materialized sequence.
///
/// Returns nothing when the input is empty or no criteria record is given.
pub fn filter(moods: &[Mood], criteria: Option<&Criteria>) -> Vec<Mood> {
    let Some(criteria) = criteria else {
        return Vec::new();
    };
    moods.iter().filter(|mood| criteria.matches(mood)).cloned().collect()
}
