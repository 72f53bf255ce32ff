//! Error types for the simulation core

use thiserror::Error;

/// Failures of a step executor
#[derive(Debug, Error)]
pub enum SchedulerError {
    #[error("worker pool needs at least one worker")]
    ZeroWorkers,

    #[error("failed to build worker pool: {0}")]
    Build(#[from] rayon::ThreadPoolBuildError),
}

/// Simulation-level errors: precondition violations and executor failures
#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("bodies {first} and {second} occupy the same position")]
    Singularity { first: usize, second: usize },

    #[error("body {index} has invalid mass {mass}; masses must be positive and finite")]
    InvalidMass { index: usize, mass: f64 },

    #[error("body {index} has a non-finite position or velocity")]
    NonFinite { index: usize },

    #[error("step failed: {0}")]
    Scheduler(#[from] SchedulerError),

    #[error("state sink failed: {0}")]
    Sink(#[from] std::io::Error),
}
