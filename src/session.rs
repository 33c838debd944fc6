use std::path::Path;

use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};

use crate::app::ShootingGallery;
use crate::camera::CameraPose;
use crate::config::Config;
use crate::core::event::InputEvent;
use crate::frame::{FixedStepFrames, FrameInfo};
use crate::gallery::Hit;

const DEFAULT_DT: f32 = 1.0 / 60.0;

fn default_dt() -> f32 {
    DEFAULT_DT
}

fn default_ticks() -> u32 {
    1
}

/// Events delivered together, followed by some frames
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptStep {
    #[serde(default)]
    pub events: Vec<InputEvent>,
    #[serde(default = "default_ticks")]
    pub ticks: u32,
}

/// Recorded input session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Script {
    #[serde(default = "default_dt")]
    pub dt: f32,
    pub steps: Vec<ScriptStep>,
}

impl Script {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse script JSON")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script file: {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("Invalid script file: {}", path.display()))
    }

    /// Walk up to the default target, shoot it, turn and walk into the east wall
    pub fn demo() -> Self {
        let key = |key: &str, pressed| InputEvent::Key {
            key: key.to_string(),
            pressed,
        };
        Self {
            dt: DEFAULT_DT,
            steps: vec![
                ScriptStep { events: vec![key("w", true)], ticks: 20 },
                ScriptStep {
                    // Slightly below center: the eye is above the target
                    events: vec![key("w", false), InputEvent::Click { x: 400.0, y: 336.0 }],
                    ticks: 1,
                },
                ScriptStep {
                    // Quarter turn to the right with pointer lock engaged
                    events: vec![InputEvent::MouseMove {
                        x: 400.0,
                        y: 300.0,
                        dx: std::f32::consts::FRAC_PI_2 / 0.002,
                        dy: 0.0,
                    }],
                    ticks: 1,
                },
                ScriptStep { events: vec![key("w", true)], ticks: 120 },
                ScriptStep { events: vec![key("w", false)], ticks: 1 },
            ],
        }
    }

    pub fn total_ticks(&self) -> u64 {
        self.steps.iter().map(|s| u64::from(s.ticks)).sum()
    }
}

/// A shot that struck a target, with the frame it happened before
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HitRecord {
    pub frame: u64,
    #[serde(flatten)]
    pub hit: Hit,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PoseReport {
    pub yaw: f32,
    pub pitch: f32,
    pub position: [f32; 3],
    pub forward: [f32; 3],
}

impl From<CameraPose> for PoseReport {
    fn from(pose: CameraPose) -> Self {
        Self {
            yaw: pose.yaw,
            pitch: pose.pitch,
            position: pose.position.to_array(),
            forward: pose.forward.to_array(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionReport {
    pub frames: u64,
    pub elapsed: f32,
    pub shots_fired: u32,
    pub hits: Vec<HitRecord>,
    pub final_pose: PoseReport,
    pub targets_remaining: usize,
}

/// Replay a script against a fresh gallery
pub fn run_script(config: Config, script: &Script) -> SessionReport {
    let mut app = ShootingGallery::new(config);
    let mut frames = FixedStepFrames::new(script.dt);
    let mut hits = Vec::new();
    let mut last = FrameInfo::new(0, 0.0, script.dt);

    for step in &script.steps {
        for event in &step.events {
            if let Some(hit) = app.handle_event(event) {
                hits.push(HitRecord { frame: app.frames(), hit });
            }
        }
        for frame in frames.by_ref().take(step.ticks as usize) {
            app.frame(frame.delta);
            last = frame;
        }
    }

    let report = SessionReport {
        frames: app.frames(),
        elapsed: if app.frames() == 0 { 0.0 } else { last.time },
        shots_fired: app.shots_fired(),
        hits,
        final_pose: app.controller().pose().into(),
        targets_remaining: app.gallery().targets().len(),
    };
    info!(
        "Session finished: {} frames, {}/{} shots hit",
        report.frames,
        report.hits.len(),
        report.shots_fired
    );
    report
}
