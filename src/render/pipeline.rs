use rayon::prelude::*;

use crate::foundation::core::{Canvas, FrameIndex, FrameRange, Rgba8Premul};
use crate::foundation::error::{TextFxError, TextFxResult};
use crate::render::raster::FrameRGBA;
use crate::render::scene::Scene;
use crate::sources::{FrameCtx, FrameSource};

/// Normalized progress of `frame` within an effect lasting `total_frames`.
pub fn progress_for_frame(frame: FrameIndex, total_frames: u64) -> f64 {
    if total_frames == 0 {
        return 0.0;
    }
    frame.0 as f64 / total_frames as f64
}

/// Output settings shared by every frame of a render.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameSettings {
    pub canvas: Canvas,
    /// If set, frames are cleared to this colour before effects draw.
    pub clear: Option<Rgba8Premul>,
}

/// Render one frame: run the effect callback into a fresh scene and flatten it.
#[tracing::instrument(level = "debug", skip(source, ctx))]
pub fn render_frame(
    source: &dyn FrameSource,
    progress: f64,
    settings: FrameSettings,
    ctx: &FrameCtx<'_>,
) -> TextFxResult<FrameRGBA> {
    let mut scene = Scene::new(settings.canvas);
    source.on_render(progress, ctx, &mut scene)?;
    scene.compose(settings.clear)
}

#[derive(Clone, Debug)]
pub struct RenderThreading {
    pub parallel: bool,
    /// Frames rendered per batch; at most this many finished frames are held at once.
    pub chunk_size: usize,
    /// Dedicated pool size. `None` uses the global rayon pool.
    pub threads: Option<usize>,
}

impl Default for RenderThreading {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_size: 64,
            threads: None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub frames_rendered: u64,
    pub chunks: u64,
}

/// Render `range` of an effect lasting `total_frames` in parallel, in frame order.
pub fn render_frames(
    source: &dyn FrameSource,
    range: FrameRange,
    total_frames: u64,
    settings: FrameSettings,
    ctx: &FrameCtx<'_>,
) -> TextFxResult<Vec<FrameRGBA>> {
    render_frames_with_stats(
        source,
        range,
        total_frames,
        settings,
        ctx,
        &RenderThreading {
            parallel: true,
            ..RenderThreading::default()
        },
    )
    .map(|(frames, _)| frames)
}

/// Like [`render_frames`], with explicit control over threading.
pub fn render_frames_with_stats(
    source: &dyn FrameSource,
    range: FrameRange,
    total_frames: u64,
    settings: FrameSettings,
    ctx: &FrameCtx<'_>,
    threading: &RenderThreading,
) -> TextFxResult<(Vec<FrameRGBA>, RenderStats)> {
    let mut out = Vec::with_capacity(range.len_frames().min(4096) as usize);
    let stats = render_frames_chunked(
        source,
        range,
        total_frames,
        settings,
        ctx,
        threading,
        &mut |_: FrameIndex, mut frames: Vec<FrameRGBA>| {
            out.append(&mut frames);
            Ok(())
        },
    )?;
    Ok((out, stats))
}

/// Render `range` in chunks of `threading.chunk_size`, handing each finished chunk to `sink`
/// together with the index of its first frame before the next chunk starts.
///
/// Each frame builds its own scene, so workers never share drawables.
pub fn render_frames_chunked(
    source: &dyn FrameSource,
    range: FrameRange,
    total_frames: u64,
    settings: FrameSettings,
    ctx: &FrameCtx<'_>,
    threading: &RenderThreading,
    sink: &mut dyn FnMut(FrameIndex, Vec<FrameRGBA>) -> TextFxResult<()>,
) -> TextFxResult<RenderStats> {
    if range.is_empty() {
        return Err(TextFxError::validation("render range must be non-empty"));
    }

    let chunk_size = threading.chunk_size.max(1) as u64;
    let pool = match threading.threads {
        Some(n) if threading.parallel => Some(build_thread_pool(n)?),
        _ => None,
    };
    tracing::debug!(
        frames = range.len_frames(),
        chunk_size,
        parallel = threading.parallel,
        "rendering frame range"
    );

    let render_one = |f: FrameIndex| {
        render_frame(
            source,
            progress_for_frame(f, total_frames),
            settings,
            ctx,
        )
    };

    let mut stats = RenderStats::default();
    let mut chunk_start = range.start.0;
    while chunk_start < range.end.0 {
        let chunk_end = (chunk_start + chunk_size).min(range.end.0);
        let frames = if threading.parallel {
            let run = || {
                (chunk_start..chunk_end)
                    .into_par_iter()
                    .map(|f| render_one(FrameIndex(f)))
                    .collect::<TextFxResult<Vec<_>>>()
            };
            match &pool {
                Some(pool) => pool.install(run)?,
                None => run()?,
            }
        } else {
            (chunk_start..chunk_end)
                .map(|f| render_one(FrameIndex(f)))
                .collect::<TextFxResult<Vec<_>>>()?
        };

        stats.frames_rendered += frames.len() as u64;
        stats.chunks += 1;
        sink(FrameIndex(chunk_start), frames)?;
        chunk_start = chunk_end;
    }

    Ok(stats)
}

fn build_thread_pool(threads: usize) -> TextFxResult<rayon::ThreadPool> {
    if threads == 0 {
        return Err(TextFxError::validation(
            "render threading 'threads' must be >= 1 when set",
        ));
    }

    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(|e| TextFxError::render(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
