use repelsim::{Scenario, ScenarioConfig};
use repelsim::{bench_advance, bench_advance_curve};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file under `scenarios/`
    #[arg(short, long, default_value = "default.yaml")]
    file_name: String,

    /// Override the scenario's frame count
    #[arg(long)]
    frames: Option<u32>,

    /// Override the scenario's sub-steps per frame
    #[arg(long)]
    sub_steps: Option<u32>,

    /// Run the brute force vs grid benchmark instead of a scenario
    #[arg(long)]
    bench: bool,

    /// Print the benchmark as CSV over a range of sizes
    #[arg(long)]
    curve: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let text = fs::read_to_string(&config_path)
        .with_context(|| format!("reading {}", config_path.display()))?;
    let scenario_cfg = ScenarioConfig::from_yaml(&text)
        .with_context(|| format!("parsing {}", config_path.display()))?;
    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    if args.bench {
        if args.curve {
            bench_advance_curve()?;
        } else {
            bench_advance()?;
        }
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let mut scenario = Scenario::build(scenario_cfg)?;

    let frames = args.frames.unwrap_or(scenario.run.frames);
    let sub_steps = args.sub_steps.unwrap_or(scenario.run.sub_steps);
    info!("running {} frames x {} sub-steps", frames, sub_steps);

    for _ in 0..frames {
        scenario.engine.advance(sub_steps)?;
    }

    let world = scenario.engine.world();
    let n = world.point_count().max(1) as f64;
    let (sum_x, sum_y, max_speed) = world.points().fold((0.0, 0.0, 0.0_f64), |(sx, sy, ms), p| {
        (sx + p.position.x, sy + p.position.y, ms.max(p.velocity.norm()))
    });
    info!(
        "t = {:.1}: {} points, centroid ({:.2}, {:.2}), max speed {:.3}",
        scenario.engine.time(),
        world.point_count(),
        sum_x / n,
        sum_y / n,
        max_speed
    );

    Ok(())
}
