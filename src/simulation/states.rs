//! Core state types for the N-body simulation.
//!
//! - `Body` holds one point mass (mass, position, velocity)
//! - `SimulationState` holds the ordered bodies and the simulation time `t`
//!
//! A body's index inside `SimulationState::bodies` is its identity for the
//! whole run: jobs and results are routed by it

use super::vector::NVec3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub mass: f64, // constant for the lifetime of a run
    pub position: NVec3,
    pub velocity: NVec3,
}

impl Body {
    pub fn new(mass: f64, position: NVec3, velocity: NVec3) -> Self {
        Self {
            mass,
            position,
            velocity,
        }
    }
}

/// One immutable snapshot of every body.
///
/// A step reads one snapshot and produces a brand-new one of the same length;
/// nothing ever updates a snapshot in place
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationState {
    pub bodies: Vec<Body>, // indexed 0..N-1
    pub t: f64, // time
}

impl SimulationState {
    /// State at t = 0
    pub fn new(bodies: Vec<Body>) -> Self {
        Self { bodies, t: 0.0 }
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}
