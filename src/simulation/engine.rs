//! Force & integration engine
//!
//! `Engine` bundles the force law and step size. Its single operation,
//! [`Engine::advance`], computes one body's next state from an immutable
//! snapshot; it never touches the snapshot, so any number of calls for
//! different indices can run concurrently against the same state.

use super::forces::NewtonianGravity;
use super::integrator::semi_implicit_euler;
use super::params::Parameters;
use super::states::{Body, SimulationState};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Engine {
    pub gravity: NewtonianGravity,
    pub dt: f64, // fixed step size
}

impl Engine {
    pub fn new(params: &Parameters) -> Self {
        Self {
            gravity: NewtonianGravity::new(params.g),
            dt: params.dt,
        }
    }

    /// Next position and velocity of `state.bodies[index]` after one step.
    ///
    /// Callers must keep bodies apart: a zero separation yields non-finite
    /// values, which are returned rather than reported.
    ///
    /// Panics if `index` is out of bounds.
    pub fn advance(&self, state: &SimulationState, index: usize) -> Body {
        let acc = self.gravity.acceleration(&state.bodies, index);
        semi_implicit_euler(&state.bodies[index], &acc, self.dt)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(&Parameters::default())
    }
}
