mod cli;
mod logger;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use prism_core::{load_scene, read_scene, SceneDescription};
use prism_renderer::{render, write_ppm, Camera, RenderConfig, World};
use rand::rngs::StdRng;
use rand::SeedableRng;

use cli::Args;

fn load(input: Option<&Path>) -> Result<SceneDescription> {
    match input {
        Some(path) => load_scene(path)
            .with_context(|| format!("Failed to load scene from {}", path.display())),
        None => read_scene(io::stdin().lock()).context("Failed to read scene from stdin"),
    }
}

fn dump_json(scene: &SceneDescription, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, scene)
        .with_context(|| format!("Failed to write scene JSON to {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("Failed to write scene JSON to {}", path.display()))?;
    log::info!("Wrote scene description to {}", path.display());
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    logger::init_logger(args.debug_level.into());

    let scene = load(args.input.as_deref())?;
    log::info!(
        "Scene '{}': {} lights, {} surfaces",
        scene.name,
        scene.light_count(),
        scene.surface_count()
    );
    scene.log_dump();

    if let Some(path) = &args.dump_json {
        dump_json(&scene, path)?;
    }

    let world = World::from_scene(&scene);
    let camera = Camera::new(&scene.projection, args.width, args.height);
    let config = RenderConfig {
        samples_per_pixel: args.samples.max(1),
        max_depth: args.max_depth,
        ..Default::default()
    };
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    log::info!(
        "Rendering {}x{} at {} samples per pixel",
        args.width,
        args.height,
        config.samples_per_pixel
    );
    let start = Instant::now();
    let image = render(&camera, &world, &config, &mut rng);
    log::info!("Render finished in {:.2?}", start.elapsed());

    match &args.output {
        Some(path) => {
            image
                .save(path)
                .with_context(|| format!("Failed to write image to {}", path.display()))?;
            log::info!("Wrote {}", path.display());
        }
        None => {
            let mut out = BufWriter::new(io::stdout().lock());
            write_ppm(&image, &mut out).context("Failed to write image to stdout")?;
            out.flush().context("Failed to flush stdout")?;
        }
    }

    Ok(())
}
