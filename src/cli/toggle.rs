//! Toggle command implementation

use anyhow::Result;

use crate::cli::{find_habit, resolve_date};
use crate::model::day_key;
use crate::store::HabitStore;

pub fn run(store: &HabitStore, habit_query: String, date: Option<String>) -> Result<()> {
    let date = resolve_date(date.as_deref())?;
    let key = day_key(date);

    let habits = store.load_habits();
    let habit = find_habit(&habits, &habit_query)
        .ok_or_else(|| anyhow::anyhow!("Habit not found: {}", habit_query))?;

    let mut logs = store.load_logs();
    let days = logs.entry(habit.id.clone()).or_default();
    let done = !days.get(&key).copied().unwrap_or(false);
    days.insert(key.clone(), done);

    store.store_logs(&logs)?;

    if done {
        println!("Marked '{}' done for {}", habit.name, key);
    } else {
        println!("Marked '{}' not done for {}", habit.name, key);
    }

    Ok(())
}
