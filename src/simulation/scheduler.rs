//! Step executors: fan one `advance` call per body out, fan the results back in
//!
//! [`StepExecutor`] is the seam the driver steps through. Two implementations:
//! - [`SerialExecutor`] runs every index on the calling thread
//! - [`WorkerPool`] owns a fixed set of long-lived rayon worker threads and
//!   maps every index across them
//!
//! Either way the output is placed by index, never by completion order, so the
//! new state is identical no matter how the work was scheduled.

use std::sync::Arc;

use log::info;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use super::engine::Engine;
use super::error::SchedulerError;
use super::states::{Body, SimulationState};

/// Computes the next `SimulationState` from the current one.
///
/// `state` is shared read-only for the whole step; the returned state has the
/// same length, one entry per input index, and time `state.t + engine.dt`.
pub trait StepExecutor {
    fn run_step(
        &mut self,
        engine: &Engine,
        state: &Arc<SimulationState>,
    ) -> Result<SimulationState, SchedulerError>;

    /// Number of threads doing the work
    fn workers(&self) -> usize;
}

impl<E: StepExecutor + ?Sized> StepExecutor for Box<E> {
    fn run_step(
        &mut self,
        engine: &Engine,
        state: &Arc<SimulationState>,
    ) -> Result<SimulationState, SchedulerError> {
        (**self).run_step(engine, state)
    }

    fn workers(&self) -> usize {
        (**self).workers()
    }
}

/// Runs every `advance` call in index order on the calling thread
#[derive(Debug, Default, Clone, Copy)]
pub struct SerialExecutor;

impl StepExecutor for SerialExecutor {
    fn run_step(
        &mut self,
        engine: &Engine,
        state: &Arc<SimulationState>,
    ) -> Result<SimulationState, SchedulerError> {
        let bodies = (0..state.len())
            .map(|index| engine.advance(state, index))
            .collect();

        Ok(SimulationState {
            bodies,
            t: state.t + engine.dt,
        })
    }

    fn workers(&self) -> usize {
        1
    }
}

/// Fixed-size rayon thread pool reused across every step.
///
/// The threads are spawned once in [`WorkerPool::new`] and live as long as the
/// pool. Each step is an indexed parallel map over body indices, so slot `i`
/// of the result always holds body `i` whatever order the threads finish in.
pub struct WorkerPool {
    pool: ThreadPool,
}

impl WorkerPool {
    /// Spawn `workers` named threads
    pub fn new(workers: usize) -> Result<Self, SchedulerError> {
        if workers == 0 {
            return Err(SchedulerError::ZeroWorkers);
        }

        let pool = ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|id| format!("nbsim-worker-{id}"))
            .build()?;

        info!("worker pool started: {workers} workers");
        Ok(Self { pool })
    }

    /// One worker per hardware thread
    pub fn with_default_workers() -> Result<Self, SchedulerError> {
        Self::new(num_cpus::get())
    }
}

impl StepExecutor for WorkerPool {
    fn run_step(
        &mut self,
        engine: &Engine,
        state: &Arc<SimulationState>,
    ) -> Result<SimulationState, SchedulerError> {
        let snapshot: &SimulationState = state;

        // install() blocks until every index is done: this is the step barrier
        let bodies: Vec<Body> = self.pool.install(|| {
            (0..snapshot.len())
                .into_par_iter()
                .map(|index| engine.advance(snapshot, index))
                .collect()
        });

        Ok(SimulationState {
            bodies,
            t: snapshot.t + engine.dt,
        })
    }

    fn workers(&self) -> usize {
        self.pool.current_num_threads()
    }
}
