//! Core data types: the mood entry and its line codec.

use crate::date_util;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of allowed mood values, ordered brightest to darkest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodKind {
    Sunny,
    Cloudy,
    Rainy,
    Stormy,
}

impl MoodKind {
    /// All values, in bar-height order (tallest first).
    pub const ALL: [MoodKind; 4] = [MoodKind::Sunny, MoodKind::Cloudy, MoodKind::Rainy, MoodKind::Stormy];

    /// Bar-graph glyphs, positionally aligned with [`MoodKind::ALL`].
    const BARS: [char; 4] = ['▇', '▅', '▃', '▁'];

    /// Weather glyphs, positionally aligned with [`MoodKind::ALL`].
    const SYMBOLS: [char; 4] = ['☀', '☁', '☂', '⚡'];

    /// The wire name of this mood.
    pub fn as_str(&self) -> &'static str {
        match self {
            MoodKind::Sunny => "sunny",
            MoodKind::Cloudy => "cloudy",
            MoodKind::Rainy => "rainy",
            MoodKind::Stormy => "stormy",
        }
    }

    /// Bar-height glyph for this mood (sunny tallest, stormy shortest).
    pub fn bar(&self) -> char {
        Self::BARS[*self as usize]
    }

    /// Weather glyph for this mood.
    pub fn symbol(&self) -> char {
        Self::SYMBOLS[*self as usize]
    }
}

impl fmt::Display for MoodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MoodKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sunny" => Ok(MoodKind::Sunny),
            "cloudy" => Ok(MoodKind::Cloudy),
            "rainy" => Ok(MoodKind::Rainy),
            "stormy" => Ok(MoodKind::Stormy),
            other => Err(ValidationError::InvalidMood(other.to_string())),
        }
    }
}

/// Raw input for constructing a [`Mood`]; every field optional so that
/// missing-field failures surface as validation errors, not type errors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MoodRecord {
    #[serde(default)]
    pub date: Option<NaiveDate>,

    #[serde(default)]
    pub user: Option<String>,

    #[serde(default)]
    pub mood: Option<String>,

    #[serde(default)]
    pub info: Option<String>,
}

/// Validation errors for mood entries.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    MissingUser,
    MissingMood,
    InvalidMood(String),
    /// A field value contains the `:` wire delimiter.
    ReservedDelimiter(&'static str),
    InvalidDate(String),
    /// A stored line does not split into 3 or 4 fields.
    MalformedLine(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingUser => write!(f, "a user is required"),
            ValidationError::MissingMood => write!(f, "a mood is required"),
            ValidationError::InvalidMood(mood) => {
                write!(
                    f,
                    "invalid mood {}; valid values are sunny, cloudy, rainy, stormy",
                    mood
                )
            }
            ValidationError::ReservedDelimiter(field) => {
                write!(f, "{} must not contain ':'", field)
            }
            ValidationError::InvalidDate(date) => write!(f, "invalid date '{}': expected YYYY-MM-DD", date),
            ValidationError::MalformedLine(line) => write!(f, "malformed mood entry '{}'", line),
        }
    }
}

impl std::error::Error for ValidationError {}

/// One user's validated mood on one calendar day.
///
/// Immutable after construction; persisted as the colon-delimited line
/// `date:user:mood[:info]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mood {
    /// Calendar day, wire form `YYYY-MM-DD`.
    pub date: NaiveDate,

    /// Who felt this way. Non-empty.
    pub user: String,

    /// The mood itself.
    pub mood: MoodKind,

    /// Optional free-text annotation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
}

impl Mood {
    /// Validate a raw record into a `Mood`.
    ///
    /// `date` defaults to today when absent. Empty `info` is treated as
    /// absent. `user` and `info` must not contain the `:` delimiter since
    /// the wire format defines no escaping.
    pub fn new(record: MoodRecord) -> Result<Self, ValidationError> {
        let user = match record.user {
            Some(u) if !u.is_empty() => u,
            _ => return Err(ValidationError::MissingUser),
        };
        if user.contains(':') {
            return Err(ValidationError::ReservedDelimiter("user"));
        }

        let mood = record.mood.ok_or(ValidationError::MissingMood)?.parse()?;

        let info = record.info.filter(|i| !i.is_empty());
        if info.as_deref().is_some_and(|i| i.contains(':')) {
            return Err(ValidationError::ReservedDelimiter("info"));
        }

        Ok(Mood {
            date: record.date.unwrap_or_else(date_util::today),
            user,
            mood,
            info,
        })
    }

    /// Encode as a `date:user:mood[:info]` line.
    pub fn serialize(&self) -> String {
        match &self.info {
            Some(info) => format!("{}:{}:{}:{}", self.date, self.user, self.mood, info),
            None => format!("{}:{}:{}", self.date, self.user, self.mood),
        }
    }

    /// Decode a stored line, running the same validation as [`Mood::new`].
    pub fn parse(line: &str) -> Result<Self, ValidationError> {
        let parts: Vec<&str> = line.split(':').collect();
        if parts.len() != 3 && parts.len() != 4 {
            return Err(ValidationError::MalformedLine(line.to_string()));
        }

        let date = NaiveDate::parse_from_str(parts[0], "%Y-%m-%d")
            .map_err(|_| ValidationError::InvalidDate(parts[0].to_string()))?;

        Mood::new(MoodRecord {
            date: Some(date),
            user: Some(parts[1].to_string()),
            mood: Some(parts[2].to_string()),
            info: parts.get(3).map(|i| i.to_string()),
        })
    }

    /// Bar-height glyph for this entry.
    pub fn bar(&self) -> char {
        self.mood.bar()
    }

    /// Weather glyph for this entry.
    pub fn symbol(&self) -> char {
        self.mood.symbol()
    }
}

impl fmt::Display for Mood {
    /// Human sentence, e.g. `Today, x is in a sunny mood ☀ (loving it)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (label, tense) = if self.date == date_util::today() {
            ("Today".to_string(), "is")
        } else if self.date == date_util::yesterday() {
            ("Yesterday".to_string(), "was")
        } else {
            (format!("On {}", self.date), "was")
        };

        write!(f, "{}, {} {} in a {} mood {}", label, self.user, tense, self.mood, self.symbol())?;
        if let Some(info) = &self.info {
            write!(f, " ({})", info)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(user: Option<&str>, mood: Option<&str>) -> MoodRecord {
        MoodRecord {
            date: None,
            user: user.map(String::from),
            mood: mood.map(String::from),
            info: None,
        }
    }

    #[test]
    fn test_valid_mood_defaults_date_to_today() {
        let mood = Mood::new(record(Some("x"), Some("sunny"))).unwrap();
        assert_eq!(mood.user, "x");
        assert_eq!(mood.mood, MoodKind::Sunny);
        assert_eq!(mood.date, date_util::today());
        assert_eq!(mood.info, None);
    }

    #[test]
    fn test_missing_user_rejected() {
        assert_eq!(Mood::new(record(None, Some("sunny"))), Err(ValidationError::MissingUser));
        assert_eq!(Mood::new(record(Some(""), Some("sunny"))), Err(ValidationError::MissingUser));
    }

    #[test]
    fn test_missing_mood_rejected() {
        assert_eq!(Mood::new(record(Some("x"), None)), Err(ValidationError::MissingMood));
    }

    #[test]
    fn test_invalid_mood_rejected() {
        assert_eq!(
            Mood::new(record(Some("x"), Some("wrong"))),
            Err(ValidationError::InvalidMood("wrong".to_string()))
        );
    }

    #[test]
    fn test_empty_record_rejected() {
        assert!(Mood::new(MoodRecord::default()).is_err());
    }

    #[test]
    fn test_delimiter_in_user_rejected() {
        assert_eq!(
            Mood::new(record(Some("a:b"), Some("sunny"))),
            Err(ValidationError::ReservedDelimiter("user"))
        );
    }

    #[test]
    fn test_delimiter_in_info_rejected() {
        let mut rec = record(Some("x"), Some("sunny"));
        rec.info = Some("a:b".to_string());
        assert_eq!(Mood::new(rec), Err(ValidationError::ReservedDelimiter("info")));
    }

    #[test]
    fn test_empty_info_treated_as_absent() {
        let mut rec = record(Some("x"), Some("sunny"));
        rec.info = Some(String::new());
        assert_eq!(Mood::new(rec).unwrap().info, None);
    }

    #[test]
    fn test_serialize_without_info() {
        let mut rec = record(Some("x"), Some("sunny"));
        rec.date = NaiveDate::from_ymd_opt(2013, 1, 1);
        assert_eq!(Mood::new(rec).unwrap().serialize(), "2013-01-01:x:sunny");
    }

    #[test]
    fn test_serialize_with_info() {
        let mut rec = record(Some("x"), Some("sunny"));
        rec.date = NaiveDate::from_ymd_opt(2013, 1, 1);
        rec.info = Some("plop".to_string());
        assert_eq!(Mood::new(rec).unwrap().serialize(), "2013-01-01:x:sunny:plop");
    }

    #[test]
    fn test_parse_roundtrip() {
        let line = "2013-01-01:x:sunny";
        assert_eq!(Mood::parse(line).unwrap().serialize(), line);

        let line = "2013-01-01:x:sunny:plop";
        assert_eq!(Mood::parse(line).unwrap().serialize(), line);
    }

    #[test]
    fn test_parse_rejects_malformed_lines() {
        assert!(matches!(Mood::parse(""), Err(ValidationError::MalformedLine(_))));
        assert!(matches!(Mood::parse("2013-01-01:x"), Err(ValidationError::MalformedLine(_))));
        assert!(matches!(
            Mood::parse("2013-01-01:x:sunny:plop:extra"),
            Err(ValidationError::MalformedLine(_))
        ));
        assert!(matches!(Mood::parse("notadate:x:sunny"), Err(ValidationError::InvalidDate(_))));
        assert!(matches!(
            Mood::parse("2013-01-01:x:superman"),
            Err(ValidationError::InvalidMood(_))
        ));
    }

    #[test]
    fn test_bar_glyphs() {
        assert_eq!(MoodKind::Sunny.bar(), '▇');
        assert_eq!(MoodKind::Cloudy.bar(), '▅');
        assert_eq!(MoodKind::Rainy.bar(), '▃');
        assert_eq!(MoodKind::Stormy.bar(), '▁');
    }

    #[test]
    fn test_symbol_glyphs() {
        assert_eq!(MoodKind::Sunny.symbol(), '☀');
        assert_eq!(MoodKind::Cloudy.symbol(), '☁');
        assert_eq!(MoodKind::Rainy.symbol(), '☂');
        assert_eq!(MoodKind::Stormy.symbol(), '⚡');
    }

    #[test]
    fn test_glyphs_are_a_bijection_over_all_moods() {
        let bars: std::collections::HashSet<char> = MoodKind::ALL.iter().map(MoodKind::bar).collect();
        let symbols: std::collections::HashSet<char> = MoodKind::ALL.iter().map(MoodKind::symbol).collect();
        assert_eq!(bars.len(), MoodKind::ALL.len());
        assert_eq!(symbols.len(), MoodKind::ALL.len());
    }

    #[test]
    fn test_display_past_date() {
        let mut rec = record(Some("x"), Some("sunny"));
        rec.date = NaiveDate::from_ymd_opt(2013, 1, 1);
        let mood = Mood::new(rec).unwrap();
        assert_eq!(mood.to_string(), "On 2013-01-01, x was in a sunny mood ☀");
    }

    #[test]
    fn test_display_today_uses_present_tense() {
        let mood = Mood::new(record(Some("x"), Some("cloudy"))).unwrap();
        assert_eq!(mood.to_string(), "Today, x is in a cloudy mood ☁");
    }

    #[test]
    fn test_display_yesterday() {
        let mut rec = record(Some("x"), Some("rainy"));
        rec.date = Some(date_util::yesterday());
        let mood = Mood::new(rec).unwrap();
        assert_eq!(mood.to_string(), "Yesterday, x was in a rainy mood ☂");
    }

    #[test]
    fn test_display_appends_info() {
        let mut rec = record(Some("x"), Some("sunny"));
        rec.date = NaiveDate::from_ymd_opt(2013, 1, 1);
        rec.info = Some("plop".to_string());
        let mood = Mood::new(rec).unwrap();
        assert_eq!(mood.to_string(), "On 2013-01-01, x was in a sunny mood ☀ (plop)");
    }

    #[test]
    fn test_mood_json_roundtrip() {
        let mut rec = record(Some("x"), Some("stormy"));
        rec.date = NaiveDate::from_ymd_opt(2013, 1, 1);
        let mood = Mood::new(rec).unwrap();
        let json = serde_json::to_string(&mood).unwrap();
        let back: Mood = serde_json::from_str(&json).unwrap();
        assert_eq!(mood, back);
    }
}
