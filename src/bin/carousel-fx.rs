use std::{
    io::{self, Write as _},
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use serde_json::json;

use carousel_fx::{
    CarouselResult, MeasureLayout, PagerMetrics, Pagination, PaginationConfig, ParallaxConfig,
    ParallaxImage, Platform, Rect, ScrollPosition,
};

#[derive(Parser, Debug)]
#[command(name = "carousel-fx", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Animate the dot row through an active-index change, one JSON line per frame.
    Dots(DotsArgs),
    /// Sweep the scroll position across one parallax image, one JSON line per step.
    Parallax(ParallaxArgs),
}

#[derive(Parser, Debug)]
struct DotsArgs {
    /// Number of pages.
    #[arg(long)]
    count: usize,

    /// Page that becomes active (starts from page 0).
    #[arg(long)]
    active: usize,

    /// Lay the row out for a right-to-left locale.
    #[arg(long)]
    rtl: bool,

    /// The platform mirrors rows for RTL on its own.
    #[arg(long)]
    native_mirror: bool,

    /// Stack the dots vertically.
    #[arg(long)]
    vertical: bool,

    /// Frames to print.
    #[arg(long, default_value_t = 30)]
    frames: u32,

    /// Frame rate of the simulated render loop.
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Pagination config JSON.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct ParallaxArgs {
    /// First scroll position.
    #[arg(long, allow_hyphen_values = true)]
    from: f64,

    /// Last scroll position.
    #[arg(long, allow_hyphen_values = true)]
    to: f64,

    /// Number of intervals between `from` and `to`.
    #[arg(long, default_value_t = 10)]
    steps: u32,

    /// Override the configured parallax factor.
    #[arg(long)]
    factor: Option<f64>,

    /// Parallax config JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Pager metrics JSON.
    #[arg(long)]
    metrics: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Dots(args) => cmd_dots(args),
        Command::Parallax(args) => cmd_parallax(args),
    }
}

const SETTLE_FRAMES: usize = 600;

fn read_text(path: &Path, what: &str) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("read {what} '{}'", path.display()))
}

fn cmd_dots(args: DotsArgs) -> anyhow::Result<()> {
    anyhow::ensure!(args.fps > 0, "--fps must be positive");

    let mut config = match &args.config {
        Some(path) => PaginationConfig::from_json(&read_text(path, "pagination config")?)
            .with_context(|| "parse pagination config JSON")?,
        None => PaginationConfig::default(),
    };
    config.vertical |= args.vertical;

    let platform = Platform {
        is_rtl: args.rtl,
        mirrors_rtl_natively: args.native_mirror,
    };
    let mut row = Pagination::new(config, platform, None);

    // Settle on page 0 before switching.
    row.update(0, args.count);
    for _ in 0..SETTLE_FRAMES {
        if !row.is_animating() {
            break;
        }
        row.tick(Duration::from_millis(16));
    }
    row.update(args.active, args.count);

    let dt = Duration::from_secs_f64(1.0 / f64::from(args.fps));
    let mut out = io::stdout().lock();
    for frame in 0..args.frames {
        row.tick(dt);
        let line = json!({
            "frame": frame,
            "time_ms": dt.as_secs_f64() * 1000.0 * f64::from(frame + 1),
            "row": row.frame(),
        });
        writeln!(out, "{line}").with_context(|| "write frame")?;
    }
    Ok(())
}

/// The image container as a fixed item-sized box at the pager origin.
struct ItemBox(Rect);

impl MeasureLayout for ItemBox {
    fn measure_layout(&self) -> CarouselResult<Rect> {
        Ok(self.0)
    }
}

fn cmd_parallax(args: ParallaxArgs) -> anyhow::Result<()> {
    anyhow::ensure!(args.steps > 0, "--steps must be positive");

    let mut config = match &args.config {
        Some(path) => ParallaxConfig::from_json(&read_text(path, "parallax config")?)
            .with_context(|| "parse parallax config JSON")?,
        None => ParallaxConfig::default(),
    };
    if let Some(factor) = args.factor {
        config.parallax_factor = factor;
    }
    let metrics = match &args.metrics {
        Some(path) => PagerMetrics::from_json(&read_text(path, "pager metrics")?)
            .with_context(|| "parse pager metrics JSON")?,
        None => PagerMetrics {
            slider_width: 300.0,
            slider_height: 300.0,
            item_width: 300.0,
            item_height: 300.0,
            vertical: false,
        },
    };

    let mut scroll = ScrollPosition::new(args.from);
    let mut image = ParallaxImage::new(config, metrics, Some(scroll.reader()));
    image.attach();
    let container = ItemBox(Rect::new(0.0, 0.0, metrics.item_width, metrics.item_height));
    let baseline = image
        .on_first_layout(&container)
        .with_context(|| "measure image container")?;
    tracing::debug!(?baseline, "parallax baseline");

    let mut out = io::stdout().lock();
    for step in 0..=args.steps {
        let t = f64::from(step) / f64::from(args.steps);
        scroll.set(args.from + (args.to - args.from) * t);
        let frame = image.frame();
        let line = json!({
            "step": step,
            "scroll": scroll.get(),
            "translate_x": frame.translate.x,
            "translate_y": frame.translate.y,
            "width": frame.width,
            "height": frame.height,
        });
        writeln!(out, "{line}").with_context(|| "write step")?;
    }
    Ok(())
}
