use crate::effects::composite::over;
use crate::foundation::core::{Affine, Canvas, Point, Rect, Rgba8Premul, Vec2};
use crate::foundation::error::TextFxResult;
use crate::layout::position::{OriginX, OriginY, PositionProps};
use crate::render::raster::{FrameRGBA, Raster};

/// Where and how a raster lands in the frame.
///
/// `left`/`top` locate the origin point; scaling pivots around it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub left: f64,
    pub top: f64,
    pub origin_x: OriginX,
    pub origin_y: OriginY,
    pub scale_x: f64,
    pub scale_y: f64,
    pub opacity: f64,
}

impl Default for Placement {
    fn default() -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            origin_x: OriginX::Left,
            origin_y: OriginY::Top,
            scale_x: 1.0,
            scale_y: 1.0,
            opacity: 1.0,
        }
    }
}

impl Placement {
    /// Top-left anchored placement.
    pub fn top_left(left: f64, top: f64) -> Self {
        Self {
            left,
            top,
            ..Self::default()
        }
    }

    /// Placement taken from a resolved layout position.
    pub fn at(props: PositionProps) -> Self {
        Self {
            left: props.left,
            top: props.top,
            origin_x: props.origin_x,
            origin_y: props.origin_y,
            ..Self::default()
        }
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale_x = scale;
        self.scale_y = scale;
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn offset_x(mut self, dx: f64) -> Self {
        self.left += dx;
        self
    }

    /// Object-local pixel space to frame space for an object of `width` x `height`.
    pub fn to_affine(self, width: f64, height: f64) -> Affine {
        let anchor = Vec2::new(
            self.origin_x.factor() * width,
            self.origin_y.factor() * height,
        );
        Affine::translate(Vec2::new(self.left, self.top))
            * Affine::scale_non_uniform(self.scale_x, self.scale_y)
            * Affine::translate(-anchor)
    }
}

/// A raster placed in a frame.
#[derive(Clone, Debug)]
pub struct Node {
    pub raster: Raster,
    pub placement: Placement,
}

/// Per-frame target that effects add drawables to.
///
/// Nodes are drawn in insertion order. A scene belongs to exactly one frame.
#[derive(Clone, Debug)]
pub struct Scene {
    canvas: Canvas,
    nodes: Vec<Node>,
}

impl Scene {
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            nodes: Vec::new(),
        }
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn width(&self) -> f64 {
        f64::from(self.canvas.width)
    }

    pub fn height(&self) -> f64 {
        f64::from(self.canvas.height)
    }

    pub fn add(&mut self, raster: Raster, placement: Placement) {
        self.nodes.push(Node { raster, placement });
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Flatten the scene into a frame, optionally cleared to `clear` first.
    pub fn compose(&self, clear: Option<Rgba8Premul>) -> TextFxResult<FrameRGBA> {
        let fw = self.canvas.width;
        let fh = self.canvas.height;
        let mut frame = match clear {
            Some(c) => Raster::solid(fw, fh, c)?,
            None => Raster::transparent(fw, fh)?,
        }
        .into_data();

        for node in &self.nodes {
            draw_node(&mut frame, fw, fh, node);
        }

        Ok(FrameRGBA {
            width: fw,
            height: fh,
            data: frame,
            premultiplied: true,
        })
    }
}

// Nearest-neighbour sampling through the inverse placement transform.
fn draw_node(frame: &mut [u8], fw: u32, fh: u32, node: &Node) {
    let (w, h) = (node.raster.width(), node.raster.height());
    let opacity = node.placement.opacity as f32;
    if w == 0 || h == 0 || opacity.is_nan() || opacity <= 0.0 {
        return;
    }

    let xf = node.placement.to_affine(f64::from(w), f64::from(h));
    let det = xf.determinant();
    if !det.is_finite() || det.abs() < 1e-12 {
        return;
    }
    let inv = xf.inverse();

    let bb = xf.transform_rect_bbox(Rect::new(0.0, 0.0, f64::from(w), f64::from(h)));
    let x_start = bb.x0.floor().clamp(0.0, f64::from(fw)) as u32;
    let x_end = bb.x1.ceil().clamp(0.0, f64::from(fw)) as u32;
    let y_start = bb.y0.floor().clamp(0.0, f64::from(fh)) as u32;
    let y_end = bb.y1.ceil().clamp(0.0, f64::from(fh)) as u32;

    for y in y_start..y_end {
        for x in x_start..x_end {
            let p = inv * Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
            if p.x < 0.0 || p.y < 0.0 || p.x >= f64::from(w) || p.y >= f64::from(h) {
                continue;
            }
            let Some(src) = node.raster.pixel(p.x as u32, p.y as u32) else {
                continue;
            };
            let idx = ((y as usize) * (fw as usize) + (x as usize)) * 4;
            let dst = [frame[idx], frame[idx + 1], frame[idx + 2], frame[idx + 3]];
            frame[idx..idx + 4].copy_from_slice(&over(dst, src, opacity));
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/scene.rs"]
mod tests;
