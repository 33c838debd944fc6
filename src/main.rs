use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use shooting_gallery::cli::Cli;
use shooting_gallery::config::Config;
use shooting_gallery::session::{run_script, Script, ScriptStep, SessionReport};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let mut script = match &cli.script {
        Some(path) => Script::load(path)?,
        None => {
            info!("No script given, running built-in demo");
            Script::demo()
        }
    };
    if let Some(dt) = cli.dt {
        script.dt = dt;
    }
    if cli.frames > 0 {
        script.steps.push(ScriptStep {
            events: Vec::new(),
            ticks: cli.frames,
        });
    }

    let report = run_script(config, &script);

    if cli.json {
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{json}");
    } else {
        print_summary(&report);
    }
    Ok(())
}

fn print_summary(report: &SessionReport) {
    println!("Frames: {} ({:.2}s)", report.frames, report.elapsed);
    println!("Shots: {}  Hits: {}", report.shots_fired, report.hits.len());
    for record in &report.hits {
        println!(
            "  frame {:>5}: target {} at {:.2}",
            record.frame, record.hit.target_id, record.hit.distance
        );
    }
    let [x, y, z] = report.final_pose.position;
    println!(
        "Final position: ({x:.2}, {y:.2}, {z:.2})  yaw {:.3}  pitch {:.3}",
        report.final_pose.yaw, report.final_pose.pitch
    );
    println!("Targets remaining: {}", report.targets_remaining);
}
