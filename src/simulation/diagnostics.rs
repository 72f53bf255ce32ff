//! Conserved quantities and initial-condition checks
//!
//! None of this is used inside a step. The checks guard scenario building
//! and the totals are for tests and logging.

use super::error::SimulationError;
use super::states::SimulationState;
use super::vector::{add, norm, scale, subtract, zero, NVec3};

/// Total linear momentum: sum of m_i * v_i
pub fn total_momentum(state: &SimulationState) -> NVec3 {
    state
        .bodies
        .iter()
        .fold(zero(), |p, b| add(&p, &scale(&b.velocity, b.mass)))
}

/// Kinetic plus pairwise gravitational potential energy
pub fn total_energy(state: &SimulationState, g: f64) -> f64 {
    let bodies = &state.bodies;

    // sum 1/2 m v^2
    let kinetic: f64 = bodies
        .iter()
        .map(|b| 0.5 * b.mass * b.velocity.dot(&b.velocity))
        .sum();

    // sum over i < j of -G m_i m_j / r_ij
    let mut potential = 0.0;
    for i in 0..bodies.len() {
        for j in (i + 1)..bodies.len() {
            let r = norm(&subtract(&bodies[j].position, &bodies[i].position));
            potential -= g * bodies[i].mass * bodies[j].mass / r;
        }
    }

    kinetic + potential
}

/// Reject states the unguarded engine cannot integrate:
/// - a mass that is not positive and finite
/// - a non-finite position or velocity component
/// - two bodies at exactly the same position (reports the first pair, i < j)
pub fn check_preconditions(state: &SimulationState) -> Result<(), SimulationError> {
    for (index, b) in state.bodies.iter().enumerate() {
        if !(b.mass.is_finite() && b.mass > 0.0) {
            return Err(SimulationError::InvalidMass {
                index,
                mass: b.mass,
            });
        }
        let finite = b.position.iter().chain(b.velocity.iter()).all(|c| c.is_finite());
        if !finite {
            return Err(SimulationError::NonFinite { index });
        }
    }

    for i in 0..state.len() {
        for j in (i + 1)..state.len() {
            if state.bodies[i].position == state.bodies[j].position {
                return Err(SimulationError::Singularity { first: i, second: j });
            }
        }
    }

    Ok(())
}
