//! Add command implementation

use anyhow::{bail, Result};
use chrono::Utc;

use crate::model::{pick_color, Frequency, Habit, ICONS};
use crate::store::HabitStore;

pub fn run(
    store: &HabitStore,
    name: String,
    description: Option<String>,
    icon: Option<String>,
    color: Option<String>,
    frequency: String,
) -> Result<()> {
    let name = name.trim().to_string();
    if name.is_empty() {
        bail!("Habit name cannot be empty");
    }

    let frequency = Frequency::parse(&frequency)
        .ok_or_else(|| anyhow::anyhow!("Unknown frequency '{}', expected daily, weekly or mon-fri", frequency))?;

    let mut habits = store.load_habits();

    let icon = icon.unwrap_or_else(|| "star".to_string());
    if !ICONS.contains(&icon.as_str()) {
        // Unknown keys are stored as-is and render as the default glyph.
        println!("Note: unrecognized icon '{}', it will display as the default glyph", icon);
    }

    let color = color.unwrap_or_else(|| pick_color(habits.len()).to_string());
    let description = description.filter(|d| !d.trim().is_empty());

    let habit = Habit::new(
        name,
        description,
        icon,
        color,
        frequency,
        Utc::now().timestamp_millis(),
    );

    let (id, name) = (habit.id.clone(), habit.name.clone());
    habits.push(habit);
    store.store_habits(&habits)?;

    println!("Habit '{}' created with ID: {}", name, id);
    Ok(())
}
