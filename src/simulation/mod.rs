pub mod vector;
pub mod states;
pub mod params;
pub mod forces;
pub mod integrator;
pub mod engine;
pub mod error;
pub mod scheduler;
pub mod driver;
pub mod diagnostics;
pub mod scenario;
