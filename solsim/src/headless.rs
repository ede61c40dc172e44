//! Run a scenario without a display, reporting orbital drift as it goes

use log::{info, warn};

use crate::simulation::diagnostics::{orbital_radius, DriftReport};
use crate::simulation::scenario::Scenario;

/// Advance `steps` ticks, logging a drift line every `report_every` ticks
/// (0 disables the periodic lines). Returns the final drift report.
pub fn run_headless(scenario: &mut Scenario, steps: usize, report_every: usize) -> DriftReport {
    info!("run_headless: {} bodies, {} steps", scenario.system.bodies.len(), steps);

    let initial = scenario.system.clone();
    let g = scenario.parameters.G;

    for step in 1..=steps {
        scenario.step();

        if report_every > 0 && step % report_every == 0 {
            let sys = scenario.system();
            let radii: Vec<String> = sys
                .bodies
                .iter()
                .map(|b| format!("{}={:.6e}", b.name, orbital_radius(b, &sys.central)))
                .collect();
            let report = DriftReport::between(&initial, sys, g);
            info!(
                "step {step}: t = {:.0} s, r [{}], max dE/E = {:.3e}",
                sys.t,
                radii.join(", "),
                report.max_energy()
            );
        }
    }

    let report = DriftReport::between(&initial, scenario.system(), g);
    for d in &report.bodies {
        info!(
            "{}: dr/r = {:.3e}, dE/E = {:.3e}, dL/L = {:.3e}",
            d.name, d.radius, d.energy, d.angular_momentum
        );
    }
    if !report.singular.is_empty() {
        warn!("no drift for {}: on the central body", report.singular.join(", "));
    }
    report
}
