use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "textfx", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single frame at a given progress as a PNG.
    Frame(FrameArgs),
    /// Render every frame of the effect as a numbered PNG sequence.
    Frames(FramesArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input render config JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Effect progress in [0, 1].
    #[arg(long)]
    progress: f64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Extra directory of font files to load alongside the system fonts.
    #[arg(long)]
    fonts: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct FramesArgs {
    /// Input render config JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output directory for `frame_00000.png`, `frame_00001.png`, ...
    #[arg(long)]
    out_dir: PathBuf,

    /// Extra directory of font files to load alongside the system fonts.
    #[arg(long)]
    fonts: Option<PathBuf>,

    /// Worker threads (defaults to the global pool, one per core).
    #[arg(long)]
    threads: Option<usize>,

    /// Frames rendered and written per batch; bounds how many frames are held in memory.
    #[arg(long, default_value_t = 64)]
    chunk_size: usize,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Frames(args) => cmd_frames(args),
    }
}

fn make_renderer(fonts: Option<&Path>) -> textfx::SvgTextRenderer {
    match fonts {
        Some(dir) => {
            let renderer = textfx::SvgTextRenderer::with_font_dir(dir);
            eprintln!(
                "fonts: {} faces (system + '{}')",
                renderer.face_count(),
                dir.display()
            );
            renderer
        }
        None => textfx::SvgTextRenderer::with_system_fonts(),
    }
}

fn write_png(path: &Path, frame: &textfx::FrameRGBA) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        path,
        &frame.to_straight(),
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    if !(0.0..=1.0).contains(&args.progress) {
        anyhow::bail!("--progress must be within [0, 1], got {}", args.progress);
    }

    let cfg = textfx::RenderConfig::from_path(&args.in_path)?;
    let source = cfg.frame_source()?;
    let renderer = make_renderer(args.fonts.as_deref());
    let layout = textfx::DefaultLayout::default();
    let ctx = textfx::FrameCtx {
        renderer: &renderer,
        layout: &layout,
    };

    let frame = textfx::render_frame(source.as_ref(), args.progress, cfg.frame_settings()?, &ctx)?;
    write_png(&args.out, &frame)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    let cfg = textfx::RenderConfig::from_path(&args.in_path)?;
    let source = cfg.frame_source()?;
    let renderer = make_renderer(args.fonts.as_deref());
    let layout = textfx::DefaultLayout::default();
    let ctx = textfx::FrameCtx {
        renderer: &renderer,
        layout: &layout,
    };

    let stats = textfx::render_frames_chunked(
        source.as_ref(),
        cfg.frame_range()?,
        cfg.total_frames(),
        cfg.frame_settings()?,
        &ctx,
        &textfx::RenderThreading {
            parallel: true,
            chunk_size: args.chunk_size,
            threads: args.threads,
        },
        &mut |start, frames| {
            for (i, frame) in frames.iter().enumerate() {
                let path = args
                    .out_dir
                    .join(format!("frame_{:05}.png", start.0 + i as u64));
                write_png(&path, frame)?;
            }
            Ok(())
        },
    )?;

    eprintln!(
        "wrote {} frames in {} chunks to {}",
        stats.frames_rendered,
        stats.chunks,
        args.out_dir.display()
    );
    Ok(())
}
