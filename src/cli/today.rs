//! Today command implementation
//!
//! Shows the habits scheduled for a date with their completion marks. The
//! frequency filter is display-only; completions can be toggled on any date.

use anyhow::Result;

use crate::cli::resolve_date;
use crate::model::{day_key, icon_glyph};
use crate::stats::is_scheduled;
use crate::store::HabitStore;

pub fn run(store: &HabitStore, date: Option<String>) -> Result<()> {
    let date = resolve_date(date.as_deref())?;
    let key = day_key(date);

    let habits = store.load_habits();
    let logs = store.load_logs();

    let scheduled: Vec<_> = habits
        .iter()
        .filter(|h| is_scheduled(h.frequency, date))
        .collect();

    if scheduled.is_empty() {
        println!("No habits scheduled for {}.", key);
        return Ok(());
    }

    println!("Habits for {}:", key);
    for habit in scheduled {
        let done = logs
            .get(&habit.id)
            .and_then(|days| days.get(&key))
            .copied()
            .unwrap_or(false);
        let mark = if done { "[x]" } else { "[ ]" };

        println!(
            "  {} {} {}  ({})",
            mark,
            icon_glyph(&habit.icon),
            habit.name,
            &habit.id[..8.min(habit.id.len())],
        );
    }

    Ok(())
}
