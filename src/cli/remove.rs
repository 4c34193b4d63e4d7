//! Remove command implementation
//!
//! Deletion is the only destructive action, so it sits behind an
//! interactive y/N confirmation unless `--yes` is passed. Log entries for
//! the deleted id are left in place, orphaned.

use anyhow::Result;
use std::io::{self, BufRead, Write};

use crate::cli::find_habit;
use crate::store::HabitStore;

pub fn run(store: &HabitStore, habit_query: String, yes: bool) -> Result<()> {
    let mut habits = store.load_habits();
    let habit = find_habit(&habits, &habit_query)
        .ok_or_else(|| anyhow::anyhow!("Habit not found: {}", habit_query))?;

    let id = habit.id.clone();
    let name = habit.name.clone();

    if !yes && !confirm(&name)? {
        println!("Aborted.");
        return Ok(());
    }

    habits.retain(|h| h.id != id);
    store.store_habits(&habits)?;

    println!("Deleted habit '{}'", name);
    Ok(())
}

fn confirm(name: &str) -> Result<bool> {
    print!("Delete habit '{}'? This cannot be undone. [y/N] ", name);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;

    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}
