//! List command implementation

use anyhow::Result;
use chrono::{DateTime, Utc};

use crate::model::icon_glyph;
use crate::store::HabitStore;

pub fn run(store: &HabitStore) -> Result<()> {
    let habits = store.load_habits();

    if habits.is_empty() {
        println!("No habits yet. Run 'habitflow add <name>' to create one.");
        return Ok(());
    }

    println!(
        "{:<10} {:<3} {:<24} {:<9} {:<12} {}",
        "ID", "", "Name", "Cadence", "Since", "Description"
    );
    println!("{}", "-".repeat(80));

    for habit in &habits {
        let since = DateTime::<Utc>::from_timestamp_millis(habit.created_at)
            .map(|ts| ts.with_timezone(&chrono::Local).format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "-".to_string());

        println!(
            "{:<10} {:<3} {:<24} {:<9} {:<12} {}",
            &habit.id[..8.min(habit.id.len())],
            icon_glyph(&habit.icon),
            habit.name,
            habit.frequency.as_str(),
            since,
            habit.description.as_deref().unwrap_or("-"),
        );
    }

    Ok(())
}
