//! Pairwise Newtonian gravity for the n-body engine
//!
//! The acceleration on one body is the direct sum of contributions from every
//! other body in the snapshot. There is no softening: point masses that
//! coincide divide by zero and the resulting non-finite values are returned
//! as-is

use super::states::Body;
use super::vector::{add, norm, scale, subtract, zero, NVec3};

/// 3D Newtonian gravity (direct N^2 sum, unsoftened)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonianGravity {
    pub g: f64, // gravitational constant
}

impl NewtonianGravity {
    pub fn new(g: f64) -> Self {
        Self { g }
    }

    /// Acceleration felt by `bodies[index]` from all other bodies.
    ///
    /// For each `j != index`:
    ///   delta = x_j - x_i
    ///   a    += delta * (G * m_j / |delta|^3)
    ///
    /// Panics if `index` is out of bounds.
    pub fn acceleration(&self, bodies: &[Body], index: usize) -> NVec3 {
        let current = &bodies[index];
        let mut acc = zero();

        for (j, other) in bodies.iter().enumerate() {
            if j == index {
                continue;
            }

            // delta points from the current body toward `other`,
            // so the pull is along +delta
            let delta = subtract(&other.position, &current.position);
            let r = norm(&delta);

            // G * m_j / r^3
            let factor = (self.g * other.mass) / (r * r * r);

            acc = add(&acc, &scale(&delta, factor));
        }

        acc
    }
}
