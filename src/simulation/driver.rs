//! Simulation driver
//!
//! Owns the current state and a step executor. Each call to
//! [`Simulation::step`] hands the current snapshot to the executor and adopts
//! the returned one. The driver has no notion of "done": the caller decides
//! how many steps to take and what to do with each state.

use std::sync::Arc;
use std::time::Instant;

use log::debug;

use super::engine::Engine;
use super::error::SimulationError;
use super::scheduler::StepExecutor;
use super::states::SimulationState;
use crate::output::sink::StateSink;

pub struct Simulation<E: StepExecutor> {
    state: Arc<SimulationState>,
    engine: Engine,
    executor: E,
    steps: u64,
}

impl<E: StepExecutor> Simulation<E> {
    pub fn new(state: SimulationState, engine: Engine, executor: E) -> Self {
        Self {
            state: Arc::new(state),
            engine,
            executor,
            steps: 0,
        }
    }

    /// Advance every body by one step and return the new current state
    pub fn step(&mut self) -> Result<&SimulationState, SimulationError> {
        let start = Instant::now();

        let next = self.executor.run_step(&self.engine, &self.state)?;
        // the previous snapshot is released here once no job holds it
        self.state = Arc::new(next);
        self.steps += 1;

        debug!(
            "step {} (t = {:.4}) took {:?} on {} worker(s)",
            self.steps,
            self.state.t,
            start.elapsed(),
            self.executor.workers()
        );

        Ok(&self.state)
    }

    /// Take `steps` steps, handing each new state to `sink`
    pub fn run<S: StateSink>(&mut self, steps: u64, sink: &mut S) -> Result<(), SimulationError> {
        for _ in 0..steps {
            self.step()?;
            sink.consume(self.steps, &self.state)?;
        }
        Ok(())
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Steps taken since construction
    pub fn steps_taken(&self) -> u64 {
        self.steps
    }

    /// Consume the driver and return the current state
    pub fn into_state(self) -> SimulationState {
        Arc::try_unwrap(self.state).unwrap_or_else(|shared| (*shared).clone())
    }
}
