//! Orbital invariants used to watch integrator drift
//!
//! For a body under a single fixed central mass the specific energy and
//! the specific angular momentum are conserved; symplectic Euler keeps
//! their error bounded rather than exact.

use super::states::{CentralBody, OrbitingBody, System};

/// Distance from the central body
pub fn orbital_radius(b: &OrbitingBody, central: &CentralBody) -> f64 {
    (b.x - central.x).norm()
}

/// `v^2 / 2 - G M / r`, per unit mass
#[allow(non_snake_case)]
pub fn specific_energy(b: &OrbitingBody, central: &CentralBody, G: f64) -> f64 {
    0.5 * b.v.norm_squared() - G * central.m / orbital_radius(b, central)
}

/// z component of `r x v`, per unit mass
pub fn specific_angular_momentum(b: &OrbitingBody, central: &CentralBody) -> f64 {
    let r = b.x - central.x;
    r.x * b.v.y - r.y * b.v.x
}

/// Relative change of each invariant for one body
#[derive(Debug, Clone, PartialEq)]
pub struct BodyDrift {
    pub name: String,
    pub radius: f64,
    pub energy: f64,
    pub angular_momentum: f64,
}

/// Drift of every body between two snapshots of the same system
#[derive(Debug, Clone, PartialEq)]
pub struct DriftReport {
    pub t: f64,
    pub bodies: Vec<BodyDrift>,
    pub singular: Vec<String>, // bodies on the central body, energy undefined
}

impl DriftReport {
    /// Compare `current` against `initial`, matching bodies by name.
    /// Bodies missing from `initial` are skipped. Bodies sitting on the
    /// central body in either snapshot go to `singular` instead of `bodies`.
    #[allow(non_snake_case)]
    pub fn between(initial: &System, current: &System, G: f64) -> Self {
        let mut singular = Vec::new();
        let bodies = current
            .bodies
            .iter()
            .filter_map(|b| {
                let b0 = initial.body(&b.name)?;
                if orbital_radius(b0, &initial.central) == 0.0 || orbital_radius(b, &current.central) == 0.0 {
                    singular.push(b.name.clone());
                    return None;
                }
                Some(BodyDrift {
                    name: b.name.clone(),
                    radius: relative(
                        orbital_radius(b0, &initial.central),
                        orbital_radius(b, &current.central),
                    ),
                    energy: relative(
                        specific_energy(b0, &initial.central, G),
                        specific_energy(b, &current.central, G),
                    ),
                    angular_momentum: relative(
                        specific_angular_momentum(b0, &initial.central),
                        specific_angular_momentum(b, &current.central),
                    ),
                })
            })
            .collect();

        Self {
            t: current.t,
            bodies,
            singular,
        }
    }

    /// Largest relative energy drift over all bodies
    pub fn max_energy(&self) -> f64 {
        self.bodies.iter().map(|d| d.energy).fold(0.0, f64::max)
    }

    /// Largest relative radius drift over all bodies
    pub fn max_radius(&self) -> f64 {
        self.bodies.iter().map(|d| d.radius).fold(0.0, f64::max)
    }
}

fn relative(reference: f64, value: f64) -> f64 {
    if reference == 0.0 {
        return (value - reference).abs();
    }
    ((value - reference) / reference).abs()
}
