//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime bundle
//! (`Scenario`) containing:
//! - numerical parameters (`Parameters`) and the `Engine` built from them
//! - the initial state (`SimulationState` with bodies at t = 0)
//! - executor settings (kind and worker count)
//!
//! `Scenario::into_simulation` then spins up the executor and hands back a
//! ready-to-step driver.

use log::info;

use crate::configuration::config::{ConfigError, ExecutorConfig, ScenarioConfig};
use super::diagnostics::check_preconditions;
use super::driver::Simulation;
use super::engine::Engine;
use super::error::SchedulerError;
use super::params::Parameters;
use super::scheduler::{SerialExecutor, StepExecutor, WorkerPool};
use super::states::{Body, SimulationState};
use super::vector::NVec3;

/// Executor choice for a scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutorKind {
    Serial,
    Pool { workers: usize },
}

/// Runtime bundle built from a [`ScenarioConfig`]
#[derive(Debug, Clone)]
pub struct Scenario {
    pub parameters: Parameters,
    pub engine: Engine,
    pub state: SimulationState,
    pub executor: ExecutorKind,
}

pub type DynSimulation = Simulation<Box<dyn StepExecutor + Send>>;

impl Scenario {
    pub fn build(cfg: ScenarioConfig) -> Result<Self, ConfigError> {
        let p_cfg = cfg.parameters;
        if !(p_cfg.dt.is_finite() && p_cfg.dt > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "dt must be positive and finite, got {}",
                p_cfg.dt
            )));
        }
        if !p_cfg.g.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "G must be finite, got {}",
                p_cfg.g
            )));
        }
        if cfg.bodies.is_empty() {
            return Err(ConfigError::Invalid("scenario has no bodies".into()));
        }

        // Bodies: map `BodyConfig` -> runtime `Body` using nalgebra vectors
        let mut bodies = Vec::with_capacity(cfg.bodies.len());
        for (index, bc) in cfg.bodies.iter().enumerate() {
            let x = bc.x.to_array().map_err(|len| ConfigError::Dimension {
                index,
                field: "x",
                len,
            })?;
            let v = bc.v.to_array().map_err(|len| ConfigError::Dimension {
                index,
                field: "v",
                len,
            })?;
            bodies.push(Body::new(bc.m, NVec3::from(x), NVec3::from(v)));
        }

        // Initial system state: bodies at t = 0
        let state = SimulationState::new(bodies);

        let parameters = Parameters {
            dt: p_cfg.dt,
            g: p_cfg.g,
            check_singularities: p_cfg.check_singularities,
        };

        if parameters.check_singularities {
            check_preconditions(&state)?;
        }

        let e_cfg = cfg.engine;
        let executor = match e_cfg.executor {
            ExecutorConfig::Serial => ExecutorKind::Serial,
            ExecutorConfig::Pool => ExecutorKind::Pool {
                workers: e_cfg.workers.unwrap_or_else(num_cpus::get),
            },
        };

        Ok(Self {
            engine: Engine::new(&parameters),
            parameters,
            state,
            executor,
        })
    }

    /// Start the configured executor and wrap everything in a driver
    pub fn into_simulation(self) -> Result<DynSimulation, SchedulerError> {
        let executor: Box<dyn StepExecutor + Send> = match self.executor {
            ExecutorKind::Serial => Box::new(SerialExecutor),
            ExecutorKind::Pool { workers } => Box::new(WorkerPool::new(workers)?),
        };

        info!(
            "scenario ready: {} bodies, dt = {}, G = {}, {} worker(s)",
            self.state.len(),
            self.parameters.dt,
            self.parameters.g,
            executor.workers()
        );

        Ok(Simulation::new(self.state, self.engine, executor))
    }
}
