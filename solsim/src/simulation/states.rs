//! Core state types for the orbital simulation.
//!
//! Defines the 2D body/system structs:
//! - `CentralBody`  the fixed attracting mass, always at the origin
//! - `OrbitingBody` a planet moving under the central body's pull
//! - `System`       the central body, the ordered planets and the time `t`
//!
//! Positions are in meters, velocities in meters per second. Radius and
//! color are display attributes only and never enter the physics.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

/// 8-bit RGB display color
pub type Rgb = [u8; 3];

#[derive(Debug, Clone, PartialEq)]
pub struct CentralBody {
    pub name: String,
    pub x: NVec2, // position, fixed
    pub m: f64, // mass
    pub radius: f64, // display radius
    pub color: Rgb,
}

impl CentralBody {
    /// Central body of mass `m` at the origin
    pub fn at_origin(name: impl Into<String>, m: f64, radius: f64, color: Rgb) -> Self {
        Self {
            name: name.into(),
            x: NVec2::zeros(),
            m,
            radius,
            color,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrbitingBody {
    pub name: String,
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub m: f64, // mass
    pub radius: f64, // display radius
    pub color: Rgb,
}

impl OrbitingBody {
    /// Body at rest at `x`
    pub fn at_rest(name: impl Into<String>, x: NVec2, m: f64, radius: f64, color: Rgb) -> Self {
        Self {
            name: name.into(),
            x,
            v: NVec2::zeros(),
            m,
            radius,
            color,
        }
    }
}

/// One snapshot of the simulation. The integrator produces a new `System`
/// each tick; the order of `bodies` never changes.
#[derive(Debug, Clone, PartialEq)]
pub struct System {
    pub central: CentralBody,
    pub bodies: Vec<OrbitingBody>,
    pub t: f64, // time
}

impl System {
    pub fn new(central: CentralBody, bodies: Vec<OrbitingBody>) -> Self {
        Self {
            central,
            bodies,
            t: 0.0,
        }
    }

    /// Look a body up by name
    pub fn body(&self, name: &str) -> Option<&OrbitingBody> {
        self.bodies.iter().find(|b| b.name == name)
    }
}
