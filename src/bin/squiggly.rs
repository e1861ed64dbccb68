use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use squiggly::TimeSource as _;

#[derive(Parser, Debug)]
#[command(name = "squiggly", version)]
struct Cli {
    /// Log verbosity: -v for debug, -vv for trace.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
    /// Render a numbered PNG sequence.
    Frames(FramesArgs),
    /// Export a single frame's squiggles as SVG.
    Svg(SvgArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Animation clock, in milliseconds.
    #[arg(long, default_value_t = 0)]
    time_ms: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct FramesArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Number of frames to render; all are written even when nothing animates.
    #[arg(long)]
    count: u64,

    /// Frames per second; each frame advances the clock by `1000 / fps` ms.
    #[arg(long, default_value_t = 60.0)]
    fps: f64,

    /// Clock value of the first frame, in milliseconds.
    #[arg(long, default_value_t = 0)]
    start_ms: u64,

    /// Output directory; frames are written as `frame_00000.png`, ...
    #[arg(long)]
    out_dir: PathBuf,
}

#[derive(Parser, Debug)]
struct SvgArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Animation clock, in milliseconds.
    #[arg(long, default_value_t = 0)]
    time_ms: u64,

    /// Output SVG path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = match cli.verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();

    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Frames(args) => cmd_frames(args),
        Command::Svg(args) => cmd_svg(args),
    }
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let scene = squiggly::Scene::from_path(&args.in_path)?;
    let mut host = squiggly::RecordingHost::default();
    let mut renderer = scene.renderer(&mut host)?;

    let (frame, stats) = renderer.render_frame(args.time_ms)?;
    tracing::debug!(
        decorations = stats.decorations,
        regions = stats.regions,
        "frame drawn"
    );

    create_parent_dir(&args.out)?;
    write_png(&args.out, frame)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    anyhow::ensure!(
        args.fps.is_finite() && args.fps > 0.0,
        "fps must be > 0, got {}",
        args.fps
    );

    let scene = squiggly::Scene::from_path(&args.in_path)?;
    let mut host = squiggly::RecordingHost::default();
    let mut renderer = scene.renderer(&mut host)?;

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    let clock = squiggly::ManualTimeSource::new(args.start_ms);
    let frame_ms = 1000.0 / args.fps;
    for i in 0..args.count {
        // Deliver the display frame the coordinator asked for; an idle loop still gets drawn.
        if host.take_frame_request() {
            renderer.view_mut().on_animation_frame(&mut host);
        } else if i > 0 {
            tracing::debug!(frame = i, "animation loop idle");
        }

        clock.set(
            args.start_ms
                .wrapping_add((i as f64 * frame_ms).round() as u64),
        );
        let now_ms = clock.now_ms();
        let (frame, _) = renderer.render_frame(now_ms)?;
        let out = args.out_dir.join(format!("frame_{i:05}.png"));
        write_png(&out, frame)?;
        tracing::debug!(frame = i, now_ms, path = %out.display(), "frame written");
    }

    eprintln!("wrote {}", args.out_dir.display());
    Ok(())
}

fn cmd_svg(args: SvgArgs) -> anyhow::Result<()> {
    let scene = squiggly::Scene::from_path(&args.in_path)?;
    let mut host = squiggly::RecordingHost::default();
    let mut renderer = scene.renderer(&mut host)?;

    let (svg, _) = renderer.render_svg(args.time_ms)?;

    create_parent_dir(&args.out)?;
    std::fs::write(&args.out, svg)
        .with_context(|| format!("write svg '{}'", args.out.display()))?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn create_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn write_png(path: &Path, mut frame: squiggly::FrameRGBA) -> anyhow::Result<()> {
    frame.unpremultiply();
    image::save_buffer_with_format(
        path,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))
}
