//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario` containing:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - system state (`System` at t = 0, velocities initialized)
//! - active force set (`AccelSet`)
//!
//! A `Scenario` is the whole simulation context. The host loop owns it and
//! drives it with [`Scenario::step`]; the viewer inserts it into Bevy as a
//! `Resource`.

use std::collections::HashSet;

use anyhow::{bail, ensure, Result};
use log::info;

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::simulation::engine::Engine;
use crate::simulation::forces::{AccelSet, CentralGravity};
use crate::simulation::initializer::{init_circular_orbits, OrbitInit};
use crate::simulation::integrator::advance;
use crate::simulation::params::Parameters;
use crate::simulation::states::{CentralBody, NVec2, OrbitingBody, System};

#[cfg_attr(feature = "viewer", derive(bevy::prelude::Resource))]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub system: System,
    pub forces: AccelSet,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        validate(&cfg)?;

        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            G: p_cfg.G,
            dt: p_cfg.dt,
        };

        let engine = Engine {
            init: cfg.engine.init,
            display: cfg.display,
        };

        let c_cfg = cfg.central;
        let central = CentralBody::at_origin(c_cfg.name, c_cfg.m, c_cfg.radius, c_cfg.color);

        // Bodies: map `BodyConfig` -> runtime `OrbitingBody`, at rest unless
        // the configured velocity is to be kept
        let bodies = cfg
            .bodies
            .into_iter()
            .map(|bc: BodyConfig| -> Result<OrbitingBody> {
                let v = match (&bc.v, engine.init) {
                    (Some(v), OrbitInit::None) => vec2(&bc.name, "v", v)?,
                    _ => NVec2::zeros(),
                };
                Ok(OrbitingBody {
                    x: vec2(&bc.name, "x", &bc.x)?,
                    v,
                    name: bc.name,
                    m: bc.m,
                    radius: bc.radius,
                    color: bc.color,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let mut system = System::new(central, bodies);
        init_circular_orbits(&mut system, parameters.G, engine.init);

        let forces = AccelSet::new().with(CentralGravity { G: parameters.G });

        info!(
            "scenario: {} bodies around {}, dt = {} s, init = {:?}",
            system.bodies.len(),
            system.central.name,
            parameters.dt,
            engine.init
        );

        Ok(Self {
            engine,
            parameters,
            system,
            forces,
        })
    }

    /// Advance one tick, replacing the current snapshot
    pub fn step(&mut self) {
        self.system = advance(&self.system, &self.forces, &self.parameters);
    }

    /// Advance `steps` ticks
    pub fn run(&mut self, steps: usize) {
        for _ in 0..steps {
            self.step();
        }
    }

    /// Current snapshot
    pub fn system(&self) -> &System {
        &self.system
    }
}

fn vec2(name: &str, field: &str, v: &[f64]) -> Result<NVec2> {
    ensure!(v.len() == 2, "{name}: `{field}` needs 2 components, got {}", v.len());
    ensure!(v.iter().all(|c| c.is_finite()), "{name}: `{field}` must be finite");
    Ok(NVec2::new(v[0], v[1]))
}

fn positive(name: &str, field: &str, value: f64) -> Result<()> {
    ensure!(value.is_finite() && value > 0.0, "{name}: `{field}` must be positive, got {value}");
    Ok(())
}

fn validate(cfg: &ScenarioConfig) -> Result<()> {
    positive("parameters", "G", cfg.parameters.G)?;
    positive("parameters", "dt", cfg.parameters.dt)?;
    positive("display", "scale", cfg.display.scale)?;

    positive(&cfg.central.name, "m", cfg.central.m)?;
    positive(&cfg.central.name, "radius", cfg.central.radius)?;

    let mut names = HashSet::new();
    for b in &cfg.bodies {
        if !names.insert(b.name.as_str()) {
            bail!("duplicate body name `{}`", b.name);
        }
        positive(&b.name, "m", b.m)?;
        positive(&b.name, "radius", b.radius)?;

        let x = vec2(&b.name, "x", &b.x)?;
        if cfg.engine.init != OrbitInit::None {
            ensure!(
                x != NVec2::zeros(),
                "{}: no circular orbit exists at the position of {}",
                b.name,
                cfg.central.name
            );
        }
        if let Some(v) = &b.v {
            vec2(&b.name, "v", v)?;
        }
    }
    Ok(())
}
