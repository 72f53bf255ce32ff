//! Fixed-step time integrator for a single body
//!
//! Position gets the second-order update and velocity the first-order one,
//! both using the acceleration sampled at the start of the step:
//!
//!   x_n+1 = x_n + v_n dt + (1/2) a_n dt^2
//!   v_n+1 = v_n + a_n dt
//!
//! This is not symplectic, so energy drifts slowly over long runs.

use super::states::Body;
use super::vector::{add, scale, NVec3};

/// Advance `body` by one step of size `dt` under acceleration `acc`.
/// Mass is carried through unchanged.
pub fn semi_implicit_euler(body: &Body, acc: &NVec3, dt: f64) -> Body {
    // ds = v dt + 0.5 a dt^2
    let drift = scale(&body.velocity, dt);
    let kick_displacement = scale(acc, 0.5 * dt * dt);
    let position = add(&add(&body.position, &drift), &kick_displacement);

    // dv = a dt
    let velocity = add(&body.velocity, &scale(acc, dt));

    Body {
        mass: body.mass,
        position,
        velocity,
    }
}
