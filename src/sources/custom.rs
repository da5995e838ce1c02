use std::sync::Arc;

use crate::foundation::error::TextFxResult;
use crate::render::scene::Scene;
use crate::sources::{FrameCtx, FrameSource};

type CustomRenderFn = dyn Fn(f64, &FrameCtx<'_>, &mut Scene) -> TextFxResult<()> + Send + Sync;

/// Effect whose frames are drawn entirely by caller code.
#[derive(Clone)]
pub struct CustomEffect {
    name: String,
    render: Arc<CustomRenderFn>,
}

impl CustomEffect {
    pub fn new<F>(name: impl Into<String>, render: F) -> Self
    where
        F: Fn(f64, &FrameCtx<'_>, &mut Scene) -> TextFxResult<()> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            render: Arc::new(render),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Debug for CustomEffect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CustomEffect")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Passes every frame straight to the wrapped callback.
pub struct CustomSource {
    effect: CustomEffect,
}

impl CustomSource {
    pub fn new(effect: CustomEffect) -> Self {
        Self { effect }
    }
}

impl FrameSource for CustomSource {
    fn on_render(&self, progress: f64, ctx: &FrameCtx<'_>, target: &mut Scene) -> TextFxResult<()> {
        (self.effect.render)(progress, ctx, target)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sources/custom.rs"]
mod tests;
