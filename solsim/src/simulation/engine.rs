//! High-level runtime engine settings
//!
//! Selects how initial velocities are assigned and carries the display
//! settings the viewer reads when running a `Scenario`

use crate::configuration::config::DisplayConfig;
use crate::simulation::initializer::OrbitInit;

#[derive(Debug, Clone, PartialEq)]
pub struct Engine {
    pub init: OrbitInit, // tangential, y axis or none
    pub display: DisplayConfig, // window size, scale and title
}
