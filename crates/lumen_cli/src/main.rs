mod cli;

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use lumen_core::{load_scene, SceneDescription, TextureCache};
use lumen_renderer::{render, Scene};

use crate::cli::Args;

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.into())
        .init();

    let description = match &args.scene {
        Some(path) => load_scene(path)
            .with_context(|| format!("Failed to load scene {}", path.display()))?,
        None => {
            log::info!("No scene given, rendering the gallery");
            SceneDescription::gallery()
        }
    };

    let mut textures = TextureCache::with_base_dir(args.texture_dir.clone());
    let scene = Scene::from_description(&description, &mut textures)
        .context("Failed to load scene textures")?;
    if scene.is_empty() {
        log::warn!("Scene has no surfaces; every pixel will be background");
    }

    let config = args.render_config();
    log::info!(
        "Rendering {}x{}, depth {}, {} samples per pixel{}",
        config.width,
        config.height,
        config.max_depth,
        config.antialias.max(1).pow(2),
        if config.orthographic { ", orthographic" } else { "" }
    );

    let start = Instant::now();
    let image = render(&scene, &config);
    log::info!("Render finished in {:.2?}", start.elapsed());

    image
        .save_png(&args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    log::info!("Saved {}", args.output.display());

    Ok(())
}
