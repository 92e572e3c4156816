use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use lumen_renderer::RenderConfig;

/// Log levels selectable on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "lumen")]
#[command(about = "A recursive ray tracer with reflections, transparency and textures")]
pub struct Args {
    /// Scene description (JSON). Renders the built-in gallery when omitted
    #[arg(short, long)]
    pub scene: Option<PathBuf>,

    /// Output PNG path
    #[arg(short, long, default_value = "output.png")]
    pub output: PathBuf,

    /// Image width in pixels
    #[arg(long, default_value_t = 1024)]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 1024)]
    pub height: u32,

    /// Maximum recursion depth for reflections, transparency and shadows
    #[arg(short, long, default_value_t = 5)]
    pub depth: u32,

    /// Samples per pixel along each axis
    #[arg(short, long, default_value_t = 3)]
    pub antialias: u32,

    /// Shoot parallel rays instead of rays from the eye
    #[arg(long)]
    pub orthographic: bool,

    /// Directory the gallery scene's textures are looked up in
    #[arg(long, default_value = ".")]
    pub texture_dir: PathBuf,

    /// Set the logging level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

impl Args {
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            width: self.width,
            height: self.height,
            max_depth: self.depth,
            antialias: self.antialias,
            orthographic: self.orthographic,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["lumen"]);
        assert!(args.scene.is_none());
        assert_eq!(args.output, PathBuf::from("output.png"));
        assert_eq!(args.texture_dir, PathBuf::from("."));

        let config = args.render_config();
        let default = RenderConfig::default();
        assert_eq!(config.width, default.width);
        assert_eq!(config.height, default.height);
        assert_eq!(config.max_depth, default.max_depth);
        assert_eq!(config.antialias, default.antialias);
        assert!(!config.orthographic);
    }

    #[test]
    fn test_overrides() {
        let args = Args::parse_from([
            "lumen",
            "--scene",
            "room.json",
            "--width",
            "320",
            "--height",
            "200",
            "-d",
            "2",
            "--antialias",
            "1",
            "--orthographic",
            "--log-level",
            "debug",
        ]);

        assert_eq!(args.scene, Some(PathBuf::from("room.json")));
        assert_eq!(LevelFilter::from(args.log_level), LevelFilter::Debug);

        let config = args.render_config();
        assert_eq!((config.width, config.height), (320, 200));
        assert_eq!(config.max_depth, 2);
        assert_eq!(config.antialias, 1);
        assert!(config.orthographic);
    }
}
