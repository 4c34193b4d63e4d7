//! Core domain types: habits, completion logs, derived statistics
//!
//! Serialized field names follow the on-disk JSON shape (camelCase, no
//! version tag), so data written by earlier builds keeps parsing.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Day keys are local calendar dates in this fixed format.
pub const DAY_KEY_FORMAT: &str = "%Y-%m-%d";

/// Fixed accent palette; habits without an explicit color are assigned
/// from here round-robin.
pub const COLORS: [&str; 8] = [
    "#6366f1", // Indigo
    "#ec4899", // Pink
    "#10b981", // Emerald
    "#f59e0b", // Amber
    "#3b82f6", // Blue
    "#8b5cf6", // Violet
    "#ef4444", // Red
    "#14b8a6", // Teal
];

/// Recognized icon keys. Unknown keys are not an error; they render as the
/// default glyph.
pub const ICONS: [&str; 15] = [
    "activity",
    "book",
    "coffee",
    "droplet",
    "dumbbell",
    "headphones",
    "heart",
    "moon",
    "sun",
    "zap",
    "briefcase",
    "code",
    "music",
    "smile",
    "star",
];

/// How often a habit recurs.
///
/// Scheduling currently narrows the "today" view only for `MonFri`;
/// `Weekly` is shown every day like `Daily` (incomplete cadence semantics,
/// kept as-is).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Frequency {
    Daily,
    Weekly,
    MonFri,
}

impl Frequency {
    /// Parse a user-supplied frequency name. Accepts a couple of aliases
    /// for the weekday cadence.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "daily" => Some(Frequency::Daily),
            "weekly" => Some(Frequency::Weekly),
            "mon-fri" | "monfri" | "weekdays" => Some(Frequency::MonFri),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
            Frequency::MonFri => "mon-fri",
        }
    }
}

/// A user-defined recurring activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    /// Unique across the store, immutable after creation.
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub icon: String,
    pub color: String,
    pub frequency: Frequency,
    /// Epoch milliseconds, immutable.
    pub created_at: i64,
}

impl Habit {
    /// Create a habit with a fresh id and the given creation timestamp.
    ///
    /// Name validation (non-empty) belongs to the creation flow, not here.
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        icon: impl Into<String>,
        color: impl Into<String>,
        frequency: Frequency,
        created_at: i64,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            description,
            icon: icon.into(),
            color: color.into(),
            frequency,
            created_at,
        }
    }
}

/// Per-habit, per-day completion record.
///
/// Outer key: habit id. Inner key: day key (`YYYY-MM-DD`, local time).
/// Absent and `false` mean the same thing to every reader. BTreeMap keeps
/// the serialized files deterministic.
pub type CompletionLog = BTreeMap<String, BTreeMap<String, bool>>;

/// Statistics derived per query; never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HabitStats {
    pub current_streak: u32,
    /// Restates the current streak; true historical maxima are not tracked.
    pub best_streak: u32,
    pub total_completions: usize,
    /// Reserved; always 0.
    pub completion_rate: f64,
}

impl HabitStats {
    pub fn zero() -> Self {
        Self {
            current_streak: 0,
            best_streak: 0,
            total_completions: 0,
            completion_rate: 0.0,
        }
    }
}

/// Format a local calendar date as a log day key.
pub fn day_key(date: NaiveDate) -> String {
    date.format(DAY_KEY_FORMAT).to_string()
}

/// Parse a day key back into a calendar date.
pub fn parse_day_key(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(key, DAY_KEY_FORMAT).ok()
}

/// Terminal glyph for an icon key; unrecognized keys fall back to the
/// default star.
pub fn icon_glyph(icon: &str) -> &'static str {
    match icon {
        "activity" => "🏃",
        "book" => "📖",
        "coffee" => "☕",
        "droplet" => "💧",
        "dumbbell" => "🏋",
        "headphones" => "🎧",
        "heart" => "❤",
        "moon" => "🌙",
        "sun" => "☀",
        "zap" => "⚡",
        "briefcase" => "💼",
        "code" => "💻",
        "music" => "🎵",
        "smile" => "🙂",
        _ => "⭐",
    }
}

/// Pick a palette color for the nth habit in the store.
pub fn pick_color(existing: usize) -> &'static str {
    COLORS[existing % COLORS.len()]
}

/// Returns true when `date` falls on Monday through Friday.
pub fn is_weekday(date: NaiveDate) -> bool {
    date.weekday().number_from_monday() <= 5
}

/// Built-in sample habits, used when nothing is persisted yet or the
/// persisted text fails to parse.
pub fn default_habits(created_at: i64) -> Vec<Habit> {
    vec![
        Habit {
            id: "1".to_string(),
            name: "Morning Meditation".to_string(),
            description: Some("10 minutes of mindfulness".to_string()),
            icon: "sun".to_string(),
            color: "#f59e0b".to_string(),
            frequency: Frequency::Daily,
            created_at,
        },
        Habit {
            id: "2".to_string(),
            name: "Drink Water".to_string(),
            description: Some("2 liters daily".to_string()),
            icon: "droplet".to_string(),
            color: "#3b82f6".to_string(),
            frequency: Frequency::Daily,
            created_at,
        },
        Habit {
            id: "3".to_string(),
            name: "Read Books".to_string(),
            description: Some("Read 20 pages".to_string()),
            icon: "book".to_string(),
            color: "#8b5cf6".to_string(),
            frequency: Frequency::Weekly,
            created_at,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frequency_serializes_screaming_snake() {
        assert_eq!(
            serde_json::to_string(&Frequency::MonFri).unwrap(),
            "\"MON_FRI\""
        );
        assert_eq!(
            serde_json::from_str::<Frequency>("\"WEEKLY\"").unwrap(),
            Frequency::Weekly
        );
    }

    #[test]
    fn frequency_parse_accepts_aliases() {
        assert_eq!(Frequency::parse("Daily"), Some(Frequency::Daily));
        assert_eq!(Frequency::parse("weekdays"), Some(Frequency::MonFri));
        assert_eq!(Frequency::parse("mon-fri"), Some(Frequency::MonFri));
        assert_eq!(Frequency::parse("fortnightly"), None);
    }

    #[test]
    fn habit_round_trips_with_camel_case_fields() {
        let habit = Habit::new(
            "Stretch",
            Some("5 minutes".to_string()),
            "activity",
            "#6366f1",
            Frequency::Daily,
            1_700_000_000_000,
        );

        let json = serde_json::to_value(&habit).unwrap();
        assert_eq!(json["createdAt"], 1_700_000_000_000_i64);
        assert_eq!(json["frequency"], "DAILY");

        let decoded: Habit = serde_json::from_value(json).unwrap();
        assert_eq!(decoded, habit);
    }

    #[test]
    fn unknown_icon_falls_back_to_star() {
        assert_eq!(icon_glyph("book"), "📖");
        assert_eq!(icon_glyph("not-an-icon"), "⭐");
    }

    #[test]
    fn day_key_round_trip() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
        let key = day_key(date);
        assert_eq!(key, "2024-01-03");
        assert_eq!(parse_day_key(&key), Some(date));
    }

    #[test]
    fn pick_color_wraps_around_palette() {
        assert_eq!(pick_color(0), COLORS[0]);
        assert_eq!(pick_color(8), COLORS[0]);
        assert_eq!(pick_color(11), COLORS[3]);
    }
}
