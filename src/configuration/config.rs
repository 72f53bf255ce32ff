//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – executor choice and worker count
//! - [`ParametersConfig`] – step size and physical constants
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper
//!
//! # YAML format
//!
//! ```yaml
//! engine:
//!   executor: "pool"        # or "serial"
//!   workers: 4              # default: one per hardware thread
//!
//! parameters:
//!   dt: 0.01                # fixed step size (alias h0)
//!   G: 1.0                  # gravitational constant
//!   check_singularities: true
//!
//! bodies:
//!   - x: [ 0.0, 0.0, 0.0 ]
//!     v: [ 0.0, 0.0, 0.0 ]
//!     m: 1.0
//!   - x: [ 2.0, 0.0, 0.0 ]
//!     v: [ 0.0, 0.7071, 0.0 ]
//!     m: 1.0e-6
//! ```
//!
//! Every section but `bodies` may be left out. A file holding just a list of
//! bodies is accepted as well, including the capitalised JSON layout
//! `{"Mass": 1, "Pos": {"X": 0, "Y": 0, "Z": 0}, "Vel": {...}}`
//! (YAML parsers read JSON unchanged).

use std::fs;
use std::path::Path;

use log::info;
use serde::Deserialize;
use thiserror::Error;

use crate::simulation::error::SimulationError;
use crate::simulation::params::{DEFAULT_DT, DEFAULT_G};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read scenario file: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot parse scenario: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("body {index}: `{field}` must have 3 components, found {len}")]
    Dimension {
        index: usize,
        field: &'static str,
        len: usize,
    },

    #[error("invalid scenario: {0}")]
    Invalid(String),

    #[error("invalid initial state: {0}")]
    Precondition(#[from] SimulationError),
}

/// How a step's per-body work is executed
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutorConfig {
    #[serde(rename = "pool")] // long-lived worker threads, one job per body
    #[default]
    Pool,

    #[serde(rename = "serial")] // everything on the calling thread
    Serial,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct EngineConfig {
    #[serde(default)]
    pub executor: ExecutorConfig,
    pub workers: Option<usize>, // defaults to hardware concurrency
}

#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    #[serde(default = "default_dt", alias = "h0")]
    pub dt: f64, // fixed step size
    #[serde(default = "default_g", rename = "G", alias = "g")]
    pub g: f64, // gravitational constant
    #[serde(default = "default_true")]
    pub check_singularities: bool, // reject coincident bodies / bad masses when building
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            dt: DEFAULT_DT,
            g: DEFAULT_G,
            check_singularities: true,
        }
    }
}

fn default_dt() -> f64 {
    DEFAULT_DT
}

fn default_g() -> f64 {
    DEFAULT_G
}

fn default_true() -> bool {
    true
}

/// A 3-vector written either as a sequence or as named components
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum VecConfig {
    Seq(Vec<f64>),
    Components {
        #[serde(alias = "X")]
        x: f64,
        #[serde(alias = "Y")]
        y: f64,
        #[serde(alias = "Z")]
        z: f64,
    },
}

impl VecConfig {
    /// Components as an array, or the offending length
    pub fn to_array(&self) -> Result<[f64; 3], usize> {
        match self {
            VecConfig::Seq(v) => match v.as_slice() {
                [x, y, z] => Ok([*x, *y, *z]),
                other => Err(other.len()),
            },
            VecConfig::Components { x, y, z } => Ok([*x, *y, *z]),
        }
    }
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    #[serde(alias = "position", alias = "Pos")]
    pub x: VecConfig, // initial position
    #[serde(alias = "velocity", alias = "Vel")]
    pub v: VecConfig, // initial velocity
    #[serde(alias = "mass", alias = "Mass")]
    pub m: f64, // mass
}

/// Top-level scenario configuration
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub parameters: ParametersConfig,
    pub bodies: Vec<BodyConfig>,
}

impl ScenarioConfig {
    /// Scenario with default engine and parameters
    pub fn from_bodies(bodies: Vec<BodyConfig>) -> Self {
        Self {
            engine: EngineConfig::default(),
            parameters: ParametersConfig::default(),
            bodies,
        }
    }
}

/// Parse a scenario from YAML (or JSON) text
///
/// The document shape is checked first and then deserialized as exactly one
/// type, so a bad field is reported by name with its location.
pub fn parse_scenario(text: &str) -> Result<ScenarioConfig, ConfigError> {
    let doc: serde_yaml::Value = serde_yaml::from_str(text)?;

    if doc.is_sequence() {
        let bodies: Vec<BodyConfig> = serde_yaml::from_str(text)?;
        Ok(ScenarioConfig::from_bodies(bodies))
    } else {
        Ok(serde_yaml::from_str(text)?)
    }
}

/// Load a scenario file from disk
pub fn load_scenario(path: &Path) -> Result<ScenarioConfig, ConfigError> {
    let text = fs::read_to_string(path)?;
    let cfg = parse_scenario(&text)?;

    info!("loaded {} bodies from {}", cfg.bodies.len(), path.display());
    Ok(cfg)
}
