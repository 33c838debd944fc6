// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "shooting-gallery")]
#[command(about = "Replay a first-person shooting gallery input session", long_about = None)]
pub struct Cli {
    /// JSON config file (defaults are used for missing fields)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// JSON input script; the built-in demo runs when omitted
    #[arg(short, long)]
    pub script: Option<PathBuf>,

    /// Extra idle frames to run after the script
    #[arg(long, default_value_t = 0)]
    pub frames: u32,

    /// Override the script's frame time in seconds
    #[arg(long)]
    pub dt: Option<f32>,

    /// Print the session report as JSON
    #[arg(long, default_value = "false")]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::parse_from(["shooting-gallery"]);
        assert!(cli.config.is_none());
        assert!(cli.script.is_none());
        assert_eq!(cli.frames, 0);
        assert!(!cli.json);
    }

    #[test]
    fn all_flags() {
        let cli = Cli::parse_from([
            "shooting-gallery",
            "--config",
            "gallery.json",
            "-s",
            "run.json",
            "--frames",
            "30",
            "--dt",
            "0.02",
            "--json",
        ]);
        assert_eq!(cli.config, Some(PathBuf::from("gallery.json")));
        assert_eq!(cli.script, Some(PathBuf::from("run.json")));
        assert_eq!(cli.frames, 30);
        assert_eq!(cli.dt, Some(0.02));
        assert!(cli.json);
    }
}
