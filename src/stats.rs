//! Streak and completion statistics
//!
//! Pure functions over a habit and the completion log; deterministic for a
//! given `today`, no side effects. Absent log data means "zero activity",
//! never an error.

use chrono::{DateTime, NaiveDate, Utc};

use crate::model::{day_key, parse_day_key, CompletionLog, Frequency, Habit, HabitStats};

/// Compute derived statistics for one habit.
///
/// `today` is the caller's local calendar date; it is a parameter so the
/// result is reproducible in tests.
pub fn calculate_stats(habit: &Habit, logs: &CompletionLog, today: NaiveDate) -> HabitStats {
    let Some(days) = logs.get(&habit.id) else {
        return HabitStats::zero();
    };

    let total_completions = days.values().filter(|&&done| done).count();

    let current_streak = current_streak(habit, days, today);

    HabitStats {
        current_streak,
        // Historical maxima are not tracked; the best streak restates the
        // current one.
        best_streak: current_streak,
        total_completions,
        completion_rate: 0.0,
    }
}

/// Walk backward from `today`, counting consecutive done days.
///
/// Today itself gets a grace pass: an unmarked today does not break a streak
/// the user may still extend before midnight. Any earlier unmarked day ends
/// the walk.
///
/// The walk is bounded below by the earlier of the habit's creation date and
/// the earliest logged day, so it always terminates even on a log that is
/// all `true`.
fn current_streak(habit: &Habit, days: &std::collections::BTreeMap<String, bool>, today: NaiveDate) -> u32 {
    let floor = walk_floor(habit, days, today);

    let mut streak = 0u32;
    let mut date = today;
    loop {
        if days.get(&day_key(date)).copied().unwrap_or(false) {
            streak += 1;
        } else if date != today {
            break;
        }
        if date <= floor {
            break;
        }
        match date.pred_opt() {
            Some(prev) => date = prev,
            None => break,
        }
    }
    streak
}

/// Lower bound for the streak walk.
fn walk_floor(
    habit: &Habit,
    days: &std::collections::BTreeMap<String, bool>,
    today: NaiveDate,
) -> NaiveDate {
    let created = created_date(habit, today);
    days.iter()
        .filter(|(_, &done)| done)
        .filter_map(|(key, _)| parse_day_key(key))
        .min()
        .map_or(created, |earliest| earliest.min(created))
}

/// Local calendar date of the habit's creation timestamp. An out-of-range
/// timestamp falls back to `today`, which bounds the walk to a single step.
fn created_date(habit: &Habit, today: NaiveDate) -> NaiveDate {
    DateTime::<Utc>::from_timestamp_millis(habit.created_at)
        .map(|dt| dt.with_timezone(&chrono::Local).date_naive())
        .unwrap_or(today)
}

/// Whether a habit is scheduled on `date` for the "today" view.
///
/// Display filter only; the log accepts completions on any date. `Weekly`
/// is shown every day like `Daily` (kept as-is).
pub fn is_scheduled(frequency: Frequency, date: NaiveDate) -> bool {
    match frequency {
        Frequency::Daily | Frequency::Weekly => true,
        Frequency::MonFri => crate::model::is_weekday(date),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn habit_created(created_at: i64) -> Habit {
        Habit {
            id: "h1".to_string(),
            name: "Test".to_string(),
            description: None,
            icon: "star".to_string(),
            color: "#6366f1".to_string(),
            frequency: Frequency::Daily,
            created_at,
        }
    }

    fn logs_with(days: &[(&str, bool)]) -> CompletionLog {
        let mut inner = BTreeMap::new();
        for (key, done) in days {
            inner.insert(key.to_string(), *done);
        }
        let mut logs = CompletionLog::new();
        logs.insert("h1".to_string(), inner);
        logs
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // Dec 2023, safely before every test date.
    const CREATED_MS: i64 = 1_703_000_000_000;

    #[test]
    fn empty_log_yields_zero_stats() {
        let habit = habit_created(CREATED_MS);
        let stats = calculate_stats(&habit, &CompletionLog::new(), date(2024, 1, 5));
        assert_eq!(stats, HabitStats::zero());
    }

    #[test]
    fn three_consecutive_days_ending_today() {
        let habit = habit_created(CREATED_MS);
        let logs = logs_with(&[
            ("2024-01-01", true),
            ("2024-01-02", true),
            ("2024-01-03", true),
        ]);
        let stats = calculate_stats(&habit, &logs, date(2024, 1, 3));
        assert_eq!(stats.current_streak, 3);
        assert_eq!(stats.best_streak, 3);
        assert_eq!(stats.total_completions, 3);
    }

    #[test]
    fn gap_yesterday_breaks_streak() {
        let habit = habit_created(CREATED_MS);
        let logs = logs_with(&[
            ("2024-01-01", true),
            ("2024-01-02", false),
            ("2024-01-03", true),
        ]);
        let stats = calculate_stats(&habit, &logs, date(2024, 1, 3));
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.total_completions, 2);
    }

    #[test]
    fn unmarked_today_does_not_break_streak() {
        let habit = habit_created(CREATED_MS);
        let logs = logs_with(&[("2024-01-01", true), ("2024-01-02", true)]);

        // Today (Jan 3) not marked yet: the two-day run still counts.
        let pending = calculate_stats(&habit, &logs, date(2024, 1, 3));
        assert_eq!(pending.current_streak, 2);

        // Marking today extends it.
        let logs = logs_with(&[
            ("2024-01-01", true),
            ("2024-01-02", true),
            ("2024-01-03", true),
        ]);
        let marked = calculate_stats(&habit, &logs, date(2024, 1, 3));
        assert_eq!(marked.current_streak, 3);
    }

    #[test]
    fn unmarked_today_with_no_history_is_zero() {
        let habit = habit_created(CREATED_MS);
        let logs = logs_with(&[]);
        let stats = calculate_stats(&habit, &logs, date(2024, 1, 5));
        assert_eq!(stats.current_streak, 0);
    }

    #[test]
    fn walk_terminates_before_log_start() {
        let habit = habit_created(CREATED_MS);
        let logs = logs_with(&[("2024-01-02", true), ("2024-01-03", true)]);
        let stats = calculate_stats(&habit, &logs, date(2024, 1, 3));
        assert_eq!(stats.current_streak, 2);
    }

    #[test]
    fn walk_bounded_when_done_back_to_creation() {
        // Creation date inside the all-true run: the floor ends the walk.
        let created = date(2024, 1, 1)
            .and_hms_opt(12, 0, 0)
            .unwrap()
            .and_utc()
            .timestamp_millis();
        let habit = habit_created(created);
        let logs = logs_with(&[
            ("2024-01-01", true),
            ("2024-01-02", true),
            ("2024-01-03", true),
        ]);
        let stats = calculate_stats(&habit, &logs, date(2024, 1, 3));
        assert_eq!(stats.current_streak, 3);
    }

    #[test]
    fn false_entries_do_not_count_toward_totals() {
        let habit = habit_created(CREATED_MS);
        let logs = logs_with(&[
            ("2023-12-25", true),
            ("2023-12-28", false),
            ("2024-01-01", true),
        ]);
        let stats = calculate_stats(&habit, &logs, date(2024, 1, 5));
        assert_eq!(stats.total_completions, 2);
    }

    #[test]
    fn completion_rate_is_reserved_zero() {
        let habit = habit_created(CREATED_MS);
        let logs = logs_with(&[("2024-01-03", true)]);
        let stats = calculate_stats(&habit, &logs, date(2024, 1, 3));
        assert_eq!(stats.completion_rate, 0.0);
    }

    #[test]
    fn scheduling_filter_by_frequency() {
        let monday = date(2024, 1, 1);
        let saturday = date(2024, 1, 6);

        assert!(is_scheduled(Frequency::Daily, saturday));
        assert!(is_scheduled(Frequency::Weekly, saturday));
        assert!(is_scheduled(Frequency::MonFri, monday));
        assert!(!is_scheduled(Frequency::MonFri, saturday));
    }
}
