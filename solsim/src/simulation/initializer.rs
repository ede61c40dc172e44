//! Circular-orbit initial velocities
//!
//! Turns bodies placed at rest into bodies on circular orbits around the
//! central body. Positions are never touched.

use log::{debug, warn};
use serde::Deserialize;

use super::states::{CentralBody, NVec2, System};

/// How initial velocities are assigned
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrbitInit {
    /// Perpendicular to the radius vector, counter-clockwise for every body
    #[default]
    #[serde(rename = "tangential")]
    Tangential,

    /// Always `(0, speed)`; only circular for bodies on the x axis
    #[serde(rename = "y_axis")]
    YAxis,

    /// Keep configured velocities
    #[serde(rename = "none")]
    None,
}

/// Circular orbital speed `sqrt(G M / d)` at distance `d` from mass `m`
#[allow(non_snake_case)]
pub fn circular_speed(G: f64, m: f64, d: f64) -> f64 {
    (G * m / d).sqrt()
}

/// Velocity for a circular orbit around `central` starting at `x`
/// Returns `None` when `x` coincides with the central body, and always
/// for `OrbitInit::None`, which assigns no velocity.
#[allow(non_snake_case)]
pub fn circular_velocity(G: f64, central: &CentralBody, x: NVec2, mode: OrbitInit) -> Option<NVec2> {
    let r = x - central.x;
    let d = r.norm();
    if d == 0.0 {
        return None;
    }

    let speed = circular_speed(G, central.m, d);
    match mode {
        OrbitInit::Tangential => Some(speed * NVec2::new(-r.y / d, r.x / d)),
        OrbitInit::YAxis => Some(NVec2::new(0.0, speed)),
        OrbitInit::None => None,
    }
}

/// Assign every body in `sys` its circular-orbit velocity
///
/// Bodies sitting on the central body have no defined circular speed and
/// keep their velocity. `OrbitInit::None` leaves the system unchanged.
#[allow(non_snake_case)]
pub fn init_circular_orbits(sys: &mut System, G: f64, mode: OrbitInit) {
    if mode == OrbitInit::None {
        return;
    }

    let central = &sys.central;
    for b in sys.bodies.iter_mut() {
        match circular_velocity(G, central, b.x, mode) {
            Some(v) => {
                b.v = v;
                debug!("{}: |v| = {:.3} m/s at d = {:.6e} m", b.name, v.norm(), (b.x - central.x).norm());
            }
            None => warn!("{} sits on {}, velocity left unchanged", b.name, central.name),
        }
    }
}
