use basesim::{bench_step, load_scenario, Scenario, ScenarioConfig};

use anyhow::{Context, Result};
use clap::Parser;

use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// scenario file, looked up under scenarios/ when not a path to a file
    #[arg(short, default_value = "rub_and_stick.yaml")]
    file_name: String,

    /// time stepping instead of running the scenario
    #[arg(long)]
    bench: bool,

    /// print the scene summary before and after the script
    #[arg(long)]
    summary: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let direct = PathBuf::from(file_name);
    let config_path = if direct.is_file() {
        direct
    } else {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
    };
    let cfg = load_scenario(&config_path).with_context(|| format!("loading {}", config_path.display()))?;
    Ok(cfg)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    if args.bench {
        bench_step();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let mut scenario = Scenario::build_scenario(scenario_cfg)?;

    if args.summary {
        for line in scenario.scene_summary() {
            println!("{line}");
        }
    }

    for (t, text) in scenario.run_script() {
        println!("[{t:7.3}] {text}");
    }

    if args.summary {
        for line in scenario.scene_summary() {
            println!("{line}");
        }
    }

    Ok(())
}
