//! textfx computes and draws per-frame text overlay effects for frame-by-frame video renderers.
//!
//! An effect is configured once and then asked, for every frame, to add its drawables to a
//! [`Scene`] given a normalized progress value in `[0, 1]`. The numeric core is pure:
//!
//! - **Easing**: [`Ease`], [`ease_out_expo`], [`ease_in_out_cubic`].
//! - **Keyframes**: [`KeyframeTrack`] with "last writer wins" duplicate handling.
//! - **Ken Burns**: [`zoom_scale`] / [`zoom_translate`] for zoom and pan.
//! - **Fade**: [`fade`] masks a drawable with a travelling white-to-transparent gradient band.
//!
//! Text and rectangle rasterization go through a [`RenderCollaborator`]; [`SvgTextRenderer`] is
//! the bundled `usvg`/`resvg` implementation. Positions resolve through a [`LayoutResolver`].
//!
//! Pixels are **premultiplied RGBA8** end-to-end.
#![forbid(unsafe_code)]

mod animation;
mod config;
mod effects;
mod foundation;
mod layout;
mod render;
mod sources;

#[cfg(test)]
#[path = "../tests/unit/support.rs"]
pub(crate) mod test_support;

pub use animation::ease::{Ease, ease_in_out_cubic, ease_out_expo};
pub use animation::kenburns::{
    KenBurns, PAN_BASE_SCALE, PAN_RANGE_PER_AMOUNT, ZoomDirection, ZoomParams, zoom_scale,
    zoom_translate,
};
pub use animation::keyframes::{Checkpoint, KeyframeTrack, Lerp, Props, TrackProps, interpolate};
pub use config::color::Color;
pub use config::render_config::RenderConfig;
pub use effects::composite::{
    PremulRgba8, multiply_by_mask_alpha_in_place, over, scale_alpha,
};
pub use effects::fade::{FADE_BAND_WIDTH, FadeBand, GradientMask, fade};
pub use foundation::core::{
    Affine, Canvas, Fps, FrameIndex, FrameRange, Point, Rect, Rgba8Premul, Vec2, clamp01,
};
pub use foundation::error::{TextFxError, TextFxResult};
pub use layout::position::{
    DefaultLayout, LayoutResolver, NamedPosition, OriginX, OriginY, Position, PositionProps,
};
pub use render::collaborator::{DEFAULT_FONT_FAMILY, RenderCollaborator, TextAlign, TextStyle};
pub use render::pipeline::{
    FrameSettings, RenderStats, RenderThreading, progress_for_frame, render_frame, render_frames,
    render_frames_chunked, render_frames_with_stats,
};
pub use render::raster::{Drawable, FrameRGBA, MAX_RASTER_DIM, Raster};
pub use render::scene::{Node, Placement, Scene};
pub use render::svg_text::SvgTextRenderer;
pub use sources::custom::{CustomEffect, CustomSource};
pub use sources::news_title::{NewsTitleParams, NewsTitleRamps, NewsTitleSource, delayed_ramp};
pub use sources::slide_in_text::{
    SlideInFrame, SlideInTextParams, SlideInTextSource, slide_in_track,
};
pub use sources::title::{TitleParams, TitleSource};
pub use sources::{EffectConfig, EffectSpec, FrameCtx, FrameSource};
