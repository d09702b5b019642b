use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use crtfx::{CrtParams, FrameRgba, Threading, apply_frame_with, color_bars};

#[derive(Parser, Debug)]
#[command(name = "crtfx", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Apply the CRT filter to an image and write a PNG.
    Apply(ApplyArgs),
    /// Render a color-bar test pattern through the filter.
    Pattern(PatternArgs),
}

#[derive(Parser, Debug)]
struct ApplyArgs {
    /// Input image (any format the `image` crate can decode).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Filter params JSON file, e.g. {"intensity": 1.5}.
    #[arg(long)]
    params: Option<PathBuf>,

    /// Output intensity multiplier; overrides the params file.
    #[arg(long)]
    intensity: Option<f32>,

    /// Shade rows in parallel.
    #[arg(long)]
    parallel: bool,

    /// Worker thread count (defaults to available parallelism).
    #[arg(long)]
    threads: Option<usize>,
}

#[derive(Parser, Debug)]
struct PatternArgs {
    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Pattern width in pixels.
    #[arg(long, default_value_t = 640)]
    width: u32,

    /// Pattern height in pixels.
    #[arg(long, default_value_t = 480)]
    height: u32,

    /// Output intensity multiplier.
    #[arg(long)]
    intensity: Option<f32>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Apply(args) => cmd_apply(args),
        Command::Pattern(args) => cmd_pattern(args),
    }
}

fn read_params(path: Option<&Path>, intensity: Option<f32>) -> anyhow::Result<CrtParams> {
    let mut params = match path {
        Some(p) => {
            let f = File::open(p).with_context(|| format!("open params '{}'", p.display()))?;
            serde_json::from_reader(BufReader::new(f)).with_context(|| "parse params JSON")?
        }
        None => CrtParams::default(),
    };
    if let Some(i) = intensity {
        params.intensity = i;
    }
    Ok(params)
}

fn cmd_apply(args: ApplyArgs) -> anyhow::Result<()> {
    let params = read_params(args.params.as_deref(), args.intensity)?;

    let img = image::open(&args.in_path)
        .with_context(|| format!("open image '{}'", args.in_path.display()))?
        .to_rgba8();
    let (width, height) = img.dimensions();
    let src = FrameRgba::new(width, height, img.into_raw())?;

    let threading = Threading {
        parallel: args.parallel,
        threads: args.threads,
    };
    let frame = apply_frame_with(&src, &params, &threading)?;

    write_png(&args.out, &frame)
}

fn cmd_pattern(args: PatternArgs) -> anyhow::Result<()> {
    let params = read_params(None, args.intensity)?;
    let src = color_bars(args.width, args.height)?;
    let frame = apply_frame_with(&src, &params, &Threading::default())?;
    write_png(&args.out, &frame)
}

fn write_png(path: &Path, frame: &FrameRgba) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        path,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;

    eprintln!("wrote {}", path.display());
    Ok(())
}
