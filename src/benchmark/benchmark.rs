use std::sync::Arc;
use std::time::Instant;

use crate::simulation::engine::Engine;
use crate::simulation::error::SchedulerError;
use crate::simulation::scheduler::{SerialExecutor, StepExecutor, WorkerPool};
use crate::simulation::states::{Body, SimulationState};
use crate::simulation::vector::NVec3;

/// Helper to build a deterministic system of size `n`
pub fn make_state(n: usize) -> SimulationState {
    let mut bodies = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        // deterministic positions, no rand needed
        let x = NVec3::new(
            (i_f * 0.37).sin() * 5.0 + i_f * 1.0e-3,
            (i_f * 0.13).cos() * 5.0,
            (i_f * 0.07).sin() * 5.0,
        );

        bodies.push(Body::new(1.0, x, NVec3::zeros()));
    }

    SimulationState::new(bodies)
}

/// Average milliseconds per step over `steps` steps
fn time_steps<E: StepExecutor>(
    executor: &mut E,
    engine: &Engine,
    template: &SimulationState,
    steps: usize,
) -> Result<f64, SchedulerError> {
    let mut state = Arc::new(template.clone());

    // Warm-up one step
    state = Arc::new(executor.run_step(engine, &state)?);

    let t0 = Instant::now();
    for _ in 0..steps {
        state = Arc::new(executor.run_step(engine, &state)?);
    }
    Ok(t0.elapsed().as_secs_f64() * 1000.0 / steps.max(1) as f64)
}

/// Benchmark the serial executor against the worker pool for each n in `ns`
/// Paste output directly into excel to graph
pub fn bench_step_curve(ns: &[usize], steps: usize) -> Result<(), SchedulerError> {
    let engine = Engine::default();

    // One pool for the whole run, sized for the largest system
    let mut pool = WorkerPool::with_default_workers()?;
    let mut serial = SerialExecutor;

    println!("N,serial_ms,pool_ms");

    for &n in ns {
        let template = make_state(n);

        let ms_serial = time_steps(&mut serial, &engine, &template, steps)?;
        let ms_pool = time_steps(&mut pool, &engine, &template, steps)?;

        println!("{},{:.6},{:.6}", n, ms_serial, ms_pool);
    }

    Ok(())
}
