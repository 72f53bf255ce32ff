//! Vector3 algebra used by the force law and the integrator
//!
//! `NVec3` is an nalgebra 3-vector of `f64`. The free functions below are the
//! pure building blocks the engine is written against: every one returns a
//! new value and leaves its operands untouched

use nalgebra::Vector3;

pub type NVec3 = Vector3<f64>;

/// The zero vector
#[inline]
pub fn zero() -> NVec3 {
    NVec3::zeros()
}

/// Component-wise `a + b`
#[inline]
pub fn add(a: &NVec3, b: &NVec3) -> NVec3 {
    a + b
}

/// Component-wise `a - b`, anti-commutative: `subtract(a, b) == -subtract(b, a)`
#[inline]
pub fn subtract(a: &NVec3, b: &NVec3) -> NVec3 {
    a - b
}

/// Scalar multiple `a * k`
#[inline]
pub fn scale(a: &NVec3, k: f64) -> NVec3 {
    a * k
}

/// Euclidean norm `|a|`
#[inline]
pub fn norm(a: &NVec3) -> f64 {
    (a.x * a.x + a.y * a.y + a.z * a.z).sqrt()
}
