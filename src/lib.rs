pub mod simulation;
pub mod configuration;
pub mod output;
pub mod benchmark;

pub use simulation::vector::{add, subtract, scale, norm, zero, NVec3};
pub use simulation::states::{Body, SimulationState};
pub use simulation::params::Parameters;
pub use simulation::forces::NewtonianGravity;
pub use simulation::integrator::semi_implicit_euler;
pub use simulation::engine::Engine;
pub use simulation::error::{SchedulerError, SimulationError};
pub use simulation::scheduler::{StepExecutor, SerialExecutor, WorkerPool};
pub use simulation::driver::Simulation;
pub use simulation::diagnostics::{total_momentum, total_energy, check_preconditions};
pub use simulation::scenario::{Scenario, ExecutorKind, DynSimulation};

pub use configuration::config::{ScenarioConfig, EngineConfig, ParametersConfig, BodyConfig, ExecutorConfig, VecConfig, ConfigError, load_scenario, parse_scenario};

pub use output::sink::{StateSink, CsvSink, LogSink};

pub use benchmark::benchmark::{bench_step_curve, make_state};
