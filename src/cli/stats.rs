//! Stats command implementation

use anyhow::Result;
use chrono::Local;

use crate::cli::find_habit;
use crate::model::{icon_glyph, CompletionLog, Habit};
use crate::stats::calculate_stats;
use crate::store::HabitStore;

pub fn run(store: &HabitStore, habit_query: Option<String>) -> Result<()> {
    let habits = store.load_habits();
    let logs = store.load_logs();

    match habit_query {
        Some(query) => {
            let habit = find_habit(&habits, &query)
                .ok_or_else(|| anyhow::anyhow!("Habit not found: {}", query))?;
            print_single(habit, &logs);
        }
        None => {
            if habits.is_empty() {
                println!("Add habits to see your stats grow!");
                return Ok(());
            }
            print_table(&habits, &logs);
        }
    }

    Ok(())
}

fn print_single(habit: &Habit, logs: &CompletionLog) {
    let today = Local::now().date_naive();
    let stats = calculate_stats(habit, logs, today);

    println!("{} {}", icon_glyph(&habit.icon), habit.name);
    if let Some(ref description) = habit.description {
        println!("   {}", description);
    }
    println!("   Current streak:    {} days", stats.current_streak);
    println!("   Best streak:       {} days", stats.best_streak);
    println!("   Total completions: {}", stats.total_completions);
}

fn print_table(habits: &[Habit], logs: &CompletionLog) {
    let today = Local::now().date_naive();

    println!(
        "{:<10} {:<3} {:<24} {:>7} {:>7}",
        "ID", "", "Name", "Streak", "Total"
    );
    println!("{}", "-".repeat(56));

    for habit in habits {
        let stats = calculate_stats(habit, logs, today);
        println!(
            "{:<10} {:<3} {:<24} {:>7} {:>7}",
            &habit.id[..8.min(habit.id.len())],
            icon_glyph(&habit.icon),
            habit.name,
            stats.current_streak,
            stats.total_completions,
        );
    }
}
