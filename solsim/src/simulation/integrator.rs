//! Fixed-step time integrator for the orbital system
//!
//! Semi-implicit (symplectic) Euler driven by `AccelSet` and `Parameters`.
//! A tick is a pure function of the previous snapshot: the input `System`
//! is left untouched and a new one is returned.

use super::forces::AccelSet;
use super::params::Parameters;
use super::states::{NVec2, System};

/// Advance the system by one step of `params.dt` using symplectic Euler
///
/// Velocities of all bodies are kicked from the pre-tick positions first,
/// then all positions drift with the new velocities.
pub fn advance(sys: &System, forces: &AccelSet, params: &Parameters) -> System {
    let mut next = sys.clone();
    let n = next.bodies.len();
    if n == 0 { // no bodies, only time moves
        next.t += params.dt;
        return next;
    }

    let dt = params.dt;

    // a_n from x_n at time t_n
    let mut accels = vec![NVec2::zeros(); n];
    forces.accumulate_accels(sys.t, sys, &mut accels);

    // Kick: v_n+1 = v_n + dt * a_n
    for (b, a) in next.bodies.iter_mut().zip(accels.iter()) {
        b.v += dt * *a;
    }

    // Drift: x_n+1 = x_n + dt * v_n+1
    for b in next.bodies.iter_mut() {
        b.x += dt * b.v;
    }

    next.t += dt;
    next
}

/// Apply `advance` `steps` times, returning the final snapshot
pub fn advance_n(sys: &System, forces: &AccelSet, params: &Parameters, steps: usize) -> System {
    let mut current = sys.clone();
    for _ in 0..steps {
        current = advance(&current, forces, params);
    }
    current
}
