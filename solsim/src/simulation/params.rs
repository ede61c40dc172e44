//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds the constants the core consumes:
//! - gravitational constant `G`
//! - fixed integration step `dt`

/// Gravitational constant in m^3 kg^-1 s^-2
pub const G_SI: f64 = 6.67430e-11;

/// Step used by the solar system scenario, two hours
pub const DEFAULT_DT: f64 = 7200.0;

#[allow(non_snake_case)]
#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub G: f64, // gravitational constant
    pub dt: f64, // step size in seconds
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            G: G_SI,
            dt: DEFAULT_DT,
        }
    }
}
