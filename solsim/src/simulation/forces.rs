//! Acceleration contributors for the orbital simulation
//!
//! Defines the acceleration trait, the set that sums its terms, and the
//! central-body gravity term. Planets attract only the central body, never
//! each other, so every term is evaluated body by body.

use log::trace;

use crate::simulation::states::{NVec2, System};

/// Collection of acceleration terms
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per body
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Compute total accelerations at time `t` for all bodies in `sys`
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_accels(&self, t: f64, sys: &System, out: &mut [NVec2]) {
        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec2::zeros();
        }
        for term in &self.terms {
            term.acceleration(t, sys, out);
        }
    }
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Acceleration source operating on a [`System`]
/// Implementations add their contribution into `out[i]` for each body
pub trait Acceleration {
    fn acceleration(&self, t: f64, sys: &System, out: &mut [NVec2]);
}

/// Newtonian attraction toward the fixed central body
///
/// The body's own mass cancels between `F = G m M / r^2` and `a = F / m`,
/// so the acceleration is computed directly as `G M d / |d|^3` where `d`
/// points from the body to the central body. A body sitting exactly on the
/// central body gets no contribution for that tick.
#[allow(non_snake_case)]
pub struct CentralGravity {
    pub G: f64, // gravitational constant
}

impl Acceleration for CentralGravity {
    fn acceleration(&self, _t: f64, sys: &System, out: &mut [NVec2]) {
        let gm = self.G * sys.central.m;

        for (i, b) in sys.bodies.iter().enumerate() {
            // displacement from the body to the central body
            let d = sys.central.x - b.x;
            let dist = d.norm();

            if dist == 0.0 {
                trace!("{} coincides with {}, no gravity this tick", b.name, sys.central.name);
                continue;
            }

            out[i] += (gm / (dist * dist * dist)) * d;
        }
    }
}
