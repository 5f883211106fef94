//! # clip-tracker
//!
//! Background machinery: the earnings accrual engine, the retention sweeper,
//! the periodic scheduler that drives both, and view sources.

pub mod engine;
pub mod provider;
pub mod retention;
pub mod scheduler;

pub use engine::{AccrualEngine, Outcome, TickSummary};
pub use provider::SimulatedViewSource;
pub use retention::{RetentionSweeper, SweepSummary};
pub use scheduler::{spawn_periodic, TaskHandle};
