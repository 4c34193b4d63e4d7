//! CLI command implementations

pub mod add;
pub mod list;
pub mod remove;
pub mod stats;
pub mod today;
pub mod toggle;

use anyhow::Result;
use chrono::{Local, NaiveDate};

use crate::model::{Habit, DAY_KEY_FORMAT};

/// Find a habit by id prefix or exact name.
pub fn find_habit<'a>(habits: &'a [Habit], query: &str) -> Option<&'a Habit> {
    habits
        .iter()
        .find(|h| h.id.starts_with(query) || h.name == query)
}

/// Resolve an optional `--date` argument, defaulting to the local calendar
/// date.
pub fn resolve_date(date: Option<&str>) -> Result<NaiveDate> {
    match date {
        Some(raw) => NaiveDate::parse_from_str(raw, DAY_KEY_FORMAT)
            .map_err(|_| anyhow::anyhow!("Invalid date '{}', expected YYYY-MM-DD", raw)),
        None => Ok(Local::now().date_naive()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Frequency;

    fn habit(id: &str, name: &str) -> Habit {
        Habit {
            id: id.to_string(),
            name: name.to_string(),
            description: None,
            icon: "star".to_string(),
            color: "#6366f1".to_string(),
            frequency: Frequency::Daily,
            created_at: 0,
        }
    }

    #[test]
    fn find_habit_by_id_prefix_or_name() {
        let habits = vec![habit("abc123", "Run"), habit("def456", "Read")];
        assert_eq!(find_habit(&habits, "abc").unwrap().name, "Run");
        assert_eq!(find_habit(&habits, "Read").unwrap().id, "def456");
        assert!(find_habit(&habits, "missing").is_none());
    }

    #[test]
    fn resolve_date_parses_day_keys() {
        let date = resolve_date(Some("2024-01-03")).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 3).unwrap());
        assert!(resolve_date(Some("01/03/2024")).is_err());
    }
}
