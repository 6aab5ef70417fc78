//! fractal-turtle CLI: render an L-System preset or config file to SVG.
//!
//! Usage:
//!   fractal-turtle --preset dragon-curve --iterations 10 --output dragon.svg
//!   fractal-turtle --config plant.ron --primary teal --secondary gold
//!   fractal-turtle --list

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

use fractal_turtle::{FractalConfig, GrammarEngine, Palette, Preset, RenderRequest, SvgCanvas};

#[derive(Parser)]
#[command(name = "fractal-turtle", version, about = "Render L-System fractals to SVG")]
struct Cli {
    /// Built-in preset, by id or name (see --list)
    #[arg(short, long, default_value = "fractal-tree")]
    preset: Preset,

    /// RON fractal config file; overrides --preset
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of rewrite generations (defaults to the preset's)
    #[arg(short, long)]
    iterations: Option<u32>,

    /// First stroke colour
    #[arg(long, default_value = "#4dfe44")]
    primary: String,

    /// Last stroke colour
    #[arg(long, default_value = "#448afe")]
    secondary: String,

    #[arg(long, default_value = "black")]
    background: String,

    #[arg(long, default_value = "800")]
    width: f64,

    #[arg(long, default_value = "800")]
    height: f64,

    /// Cap on the expanded sequence length
    #[arg(long, default_value_t = fractal_turtle::DEFAULT_MAX_LEN)]
    max_len: usize,

    /// Output file
    #[arg(short, long, default_value = "fractal.svg")]
    output: PathBuf,

    /// Print the expanded sequence instead of rendering
    #[arg(long)]
    print_sequence: bool,

    /// List built-in presets
    #[arg(long)]
    list: bool,
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_target(false).compact().init();

    if let Err(e) = run(Cli::parse()) {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    if cli.list {
        for preset in Preset::ALL {
            let config = preset.config();
            println!(
                "{:>2}  {:<20} {} iterations (max {})",
                preset.id(),
                preset.slug(),
                config.iterations,
                config.max_iterations.unwrap_or(config.iterations)
            );
        }
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            FractalConfig::from_ron(&text).with_context(|| format!("parsing {}", path.display()))?
        }
        None => cli.preset.config(),
    };
    let engine = GrammarEngine::new(cli.max_len);

    if cli.print_sequence {
        let iterations = config.effective_iterations(cli.iterations)?;
        println!("{}", engine.expand_n(&config, iterations)?);
        return Ok(());
    }

    let palette = Palette::parse(&cli.primary, &cli.secondary)?.with_background(&cli.background)?;
    let request = RenderRequest::new(config)
        .with_iterations(cli.iterations)
        .with_palette(palette);

    let mut canvas = SvgCanvas::new(cli.width, cli.height);
    let summary = fractal_turtle::render(&request, &engine, &mut canvas)?;
    canvas
        .save(&cli.output)
        .with_context(|| format!("writing {}", cli.output.display()))?;

    info!(
        output = %cli.output.display(),
        segments = summary.segments,
        max_depth = summary.max_depth,
        "Saved"
    );
    Ok(())
}
