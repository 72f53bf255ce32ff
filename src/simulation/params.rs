//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds the runtime settings the engine needs:
//! - the fixed step size `dt`
//! - the gravitational constant `g`
//! - whether scenario building rejects coincident bodies up front

pub const DEFAULT_DT: f64 = 0.01;
pub const DEFAULT_G: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    pub dt: f64, // step size
    pub g: f64, // gravitational constant
    pub check_singularities: bool, // validate initial positions when building a scenario
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            dt: DEFAULT_DT,
            g: DEFAULT_G,
            check_singularities: true,
        }
    }
}
