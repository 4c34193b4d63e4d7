pub mod cli;
pub mod config;
pub mod model;
pub mod stats;
pub mod store;

pub use config::Config;
pub use model::{CompletionLog, Frequency, Habit, HabitStats};
pub use store::{HabitStore, StoreError};
