//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – how initial velocities are assigned
//! - [`ParametersConfig`] – gravitational constant and time step
//! - [`CentralConfig`]    – the fixed attracting body at the origin
//! - [`BodyConfig`]       – initial state for each orbiting body
//! - [`DisplayConfig`]    – window and scale for the viewer (optional)
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//!
//! ```yaml
//! engine:
//!   init: "tangential"      # "tangential", "y_axis" or "none"
//!
//! parameters:
//!   G: 6.67430e-11          # gravitational constant
//!   dt: 7200.0              # fixed step size (s)
//!
//! central:
//!   name: "Sun"
//!   m: 1.989e30
//!   radius: 20.0
//!   color: [255, 255, 0]
//!
//! bodies:
//!   - name: "Earth"
//!     x: [1.496e11, 0.0]
//!     m: 5.972e24
//!     radius: 10.0
//!     color: [0, 0, 255]
//!
//! display:
//!   width: 800
//!   height: 800
//!   scale: 997333333.3      # meters per display unit
//!   title: "Solar System Simulation"
//! ```
//!
//! [`crate::Scenario::build_scenario`] validates this and maps it into the
//! runtime types.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::simulation::initializer::OrbitInit;

/// Astronomical unit in meters
pub const AU: f64 = 1.496e11;

/// Engine configuration
#[derive(Deserialize, Debug, Clone, Default)]
pub struct EngineConfig {
    #[serde(default)]
    pub init: OrbitInit, // initial velocity assignment
}

/// Physical constants and the fixed step
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub G: f64,  // gravitational constant
    pub dt: f64, // time step size in seconds
}

/// The central attracting body; its position is always the origin
#[derive(Deserialize, Debug, Clone)]
pub struct CentralConfig {
    pub name: String,
    pub m: f64,       // mass in kg
    pub radius: f64,  // display radius
    pub color: [u8; 3],
}

/// Configuration for a single orbiting body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub name: String,
    pub x: Vec<f64>,         // initial position in meters
    #[serde(default)]
    pub v: Option<Vec<f64>>, // initial velocity, only used with `init: "none"`
    pub m: f64,              // mass in kg
    pub radius: f64,         // display radius
    pub color: [u8; 3],
}

/// Viewer settings; a presentation concern only
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct DisplayConfig {
    #[serde(default = "default_width")]
    pub width: f32,
    #[serde(default = "default_height")]
    pub height: f32,
    #[serde(default = "default_scale")]
    pub scale: f64, // meters per display unit
    #[serde(default = "default_title")]
    pub title: String,
}

fn default_width() -> f32 {
    800.0
}

fn default_height() -> f32 {
    800.0
}

fn default_scale() -> f64 {
    AU / 150.0
}

fn default_title() -> String {
    "Solar System Simulation".to_owned()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            scale: default_scale(),
            title: default_title(),
        }
    }
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    pub parameters: ParametersConfig,
    pub central: CentralConfig,
    pub bodies: Vec<BodyConfig>,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl ScenarioConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        serde_yaml::from_str(s).context("invalid scenario yaml")
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)
            .with_context(|| format!("cannot open scenario {}", path.display()))?;
        serde_yaml::from_reader(std::io::BufReader::new(file))
            .with_context(|| format!("invalid scenario yaml in {}", path.display()))
    }
}
