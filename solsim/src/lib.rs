pub mod simulation;
pub mod configuration;
pub mod headless;
pub mod logger;
#[cfg(feature = "viewer")]
pub mod visualization;

pub use simulation::states::{CentralBody, OrbitingBody, System, NVec2, Rgb};
pub use simulation::params::{Parameters, G_SI, DEFAULT_DT};
pub use simulation::forces::{Acceleration, AccelSet, CentralGravity};
pub use simulation::initializer::{circular_speed, circular_velocity, init_circular_orbits, OrbitInit};
pub use simulation::integrator::{advance, advance_n};
pub use simulation::scenario::Scenario;
pub use simulation::diagnostics::{orbital_radius, specific_energy, specific_angular_momentum, DriftReport, BodyDrift};

pub use configuration::config::{EngineConfig, ParametersConfig, CentralConfig, BodyConfig, DisplayConfig, ScenarioConfig, AU};

pub use headless::run_headless;
pub use logger::Logger;

#[cfg(feature = "viewer")]
pub use visualization::solsim_vis2d::run_2d;
