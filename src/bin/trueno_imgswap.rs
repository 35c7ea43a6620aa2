//! trueno-imgswap - write the tap-to-swap image page.
//!
//! With no arguments this writes `rgba_img_toggle.html`: five clickable
//! points and five 1000x1000 sine-field images.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use trueno_imgswap::config::SwapConfig;
use trueno_imgswap::output::PngEncoder;
use trueno_imgswap::scene::Scene;

/// trueno-imgswap: click a point, swap the image
#[derive(Parser, Debug)]
#[command(name = "trueno-imgswap")]
#[command(author = "PAIML Team")]
#[command(version)]
#[command(about = "Write a self-contained HTML page where clicking a scatter point swaps the displayed image", long_about = None)]
struct Cli {
    /// YAML config file (flags override its values)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of reference points
    #[arg(long, allow_negative_numbers = true)]
    points: Option<i64>,

    /// Number of bank images
    #[arg(long, allow_negative_numbers = true)]
    images: Option<i64>,

    /// Samples per axis of each image
    #[arg(short, long)]
    resolution: Option<usize>,

    /// Seed for point values (random when omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Colormap: viridis, magma, greyscale
    #[arg(short, long)]
    palette: Option<String>,

    /// Normalization: symmetric, extent
    #[arg(short, long)]
    normalization: Option<String>,

    /// Output HTML path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Also write each bank image as image_<k>.png into this directory
    #[arg(long)]
    png_dir: Option<PathBuf>,

    /// Print the effective configuration as YAML and exit
    #[arg(long)]
    dump_config: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn into_config(self) -> Result<(SwapConfig, bool)> {
        let mut config = match &self.config {
            Some(path) => SwapConfig::load(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => SwapConfig::default(),
        };

        if let Some(points) = self.points {
            config.points = points;
        }
        if let Some(images) = self.images {
            config.images = images;
        }
        if let Some(resolution) = self.resolution {
            config.resolution = resolution;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(palette) = &self.palette {
            config.palette = palette.parse()?;
        }
        if let Some(normalization) = &self.normalization {
            config.normalization = normalization.parse()?;
        }
        if let Some(output) = self.output {
            config.output = output;
        }
        if self.png_dir.is_some() {
            config.png_dir = self.png_dir;
        }

        Ok((config, self.dump_config))
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn run(config: &SwapConfig) -> Result<()> {
    let selector = config.selector();
    let points = match config.seed {
        Some(seed) => selector.select_seeded(seed)?,
        None => selector.select_from_entropy()?,
    };
    log::info!("selected {} reference points", points.len());

    let bank = config.generator().generate()?;

    if let Some(dir) = &config.png_dir {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
        for (k, image) in bank.iter().enumerate() {
            let path = dir.join(format!("image_{k}.png"));
            PngEncoder::write_to_file(image, &path)
                .with_context(|| format!("writing {}", path.display()))?;
        }
        log::info!("wrote {} PNG files to {}", bank.len(), dir.display());
    }

    let scene = Scene::new(points, bank)?;
    config
        .exporter()?
        .write_to_file(&scene, &config.output)
        .with_context(|| format!("writing {}", config.output.display()))?;

    println!("{}", config.output.display());
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let (config, dump) = cli.into_config()?;
    if dump {
        print!("{}", config.to_yaml()?);
        return Ok(());
    }

    run(&config)
}
