pub mod states;
pub mod params;
pub mod engine;
pub mod forces;
pub mod initializer;
pub mod integrator;
pub mod scenario;
pub mod diagnostics;
