pub mod stepper;
pub mod trace;

pub use stepper::ShortestPathEngine;
pub use trace::{NeighborEvent, RunResult, RunState, Settlement, Snapshot, StepResult};
