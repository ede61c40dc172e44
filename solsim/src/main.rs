use solsim::{Logger, Scenario, ScenarioConfig};
use solsim::run_headless;
#[cfg(feature = "viewer")]
use solsim::run_2d;

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Sun and planets under central gravity")]
struct Args {
    /// Scenario file, as a path or a name under the crate's `scenarios/`
    #[arg(short, default_value = "solar_system.yaml")]
    file_name: String,

    /// Run without a window
    #[arg(long)]
    headless: bool,

    /// Ticks to run in headless mode
    #[arg(long, default_value_t = 10_000)]
    steps: usize,

    /// Headless progress line every this many ticks, 0 for none
    #[arg(long, default_value_t = 1_000)]
    report_every: usize,

    /// Log level for both headless and viewer runs
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

fn scenario_path(file_name: &str) -> PathBuf {
    let given = PathBuf::from(file_name);
    if given.exists() {
        return given;
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let headless = args.headless || cfg!(not(feature = "viewer"));
    if headless {
        Logger::init(args.log_level);
    }

    let scenario_cfg = ScenarioConfig::from_file(&scenario_path(&args.file_name))?;
    let mut scenario = Scenario::build_scenario(scenario_cfg)?;

    if headless {
        run_headless(&mut scenario, args.steps, args.report_every);
        return Ok(());
    }

    #[cfg(feature = "viewer")]
    run_2d(scenario, args.log_level);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_parse_log_level() {
        let args = Args::try_parse_from(["solsim", "--headless", "--log-level", "debug", "--steps", "5"]).expect("args");
        assert!(args.headless);
        assert_eq!(args.steps, 5);
        assert_eq!(args.log_level, LevelFilter::Debug);
        assert_eq!(args.file_name, "solar_system.yaml");
    }

    #[test]
    fn args_reject_unknown_log_level() {
        assert!(Args::try_parse_from(["solsim", "--log-level", "loud"]).is_err());
    }
}
