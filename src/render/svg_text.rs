//! Reference text collaborator built on `usvg`/`resvg`.
//!
//! Text is wrapped in a tiny SVG document, laid out by `usvg` against a font database and
//! rasterized by `resvg`. The output is cropped to the ink bounding box.

use std::fmt::Write as _;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context as _;

use crate::foundation::error::{TextFxError, TextFxResult};
use crate::render::collaborator::{RenderCollaborator, TextAlign, TextStyle};
use crate::render::raster::{MAX_RASTER_DIM, Raster};

/// Line advance for multi-line text, in ems.
const LINE_HEIGHT_EM: f64 = 1.16;

#[derive(Clone)]
pub struct SvgTextRenderer {
    fontdb: Arc<usvg::fontdb::Database>,
}

impl std::fmt::Debug for SvgTextRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SvgTextRenderer")
            .field("faces", &self.fontdb.faces().count())
            .finish()
    }
}

impl SvgTextRenderer {
    /// Renderer backed by the system fonts.
    pub fn with_system_fonts() -> Self {
        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();
        Self { fontdb: Arc::new(db) }
    }

    /// Renderer backed by the system fonts plus every font file found in `dir`.
    pub fn with_font_dir(dir: &Path) -> Self {
        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();
        load_fonts_from_dir(&mut db, dir);
        Self { fontdb: Arc::new(db) }
    }

    pub fn face_count(&self) -> usize {
        self.fontdb.faces().count()
    }

    fn build_svg(style: &TextStyle) -> String {
        let size = style.font_size;
        let lines: Vec<&str> = style.text.lines().collect();
        let longest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) as f64;

        // Generous viewport; the crop below only looks at the ink bounds.
        let box_w = (longest * (size + style.letter_spacing.max(0.0)) * 1.5 + 2.0 * size).ceil();
        let box_h = ((lines.len().max(1) as f64) * size * LINE_HEIGHT_EM + 2.0 * size).ceil();

        let (anchor, x) = match style.align {
            TextAlign::Left => ("start", size),
            TextAlign::Center => ("middle", box_w / 2.0),
            TextAlign::Right => ("end", box_w - size),
        };
        let (fill, fill_opacity) = style.fill.to_svg_paint();

        let mut svg = String::new();
        let _ = write!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{box_w}" height="{box_h}">"#
        );
        let _ = write!(
            svg,
            r#"<text x="{x}" y="{y}" font-family="{family}" font-size="{size}" letter-spacing="{ls}" text-anchor="{anchor}" fill="{fill}" fill-opacity="{fill_opacity}" xml:space="preserve">"#,
            y = size * 1.5,
            family = escape_xml(&style.font_family),
            ls = style.letter_spacing,
        );
        for (i, line) in lines.iter().enumerate() {
            let dy = if i == 0 { 0.0 } else { size * LINE_HEIGHT_EM };
            let _ = write!(
                svg,
                r#"<tspan x="{x}" dy="{dy}">{}</tspan>"#,
                escape_xml(line)
            );
        }
        svg.push_str("</text></svg>");
        svg
    }
}

impl RenderCollaborator for SvgTextRenderer {
    #[tracing::instrument(level = "trace", skip(self, style), fields(len = style.text.len()))]
    fn text(&self, style: &TextStyle) -> TextFxResult<Raster> {
        if !style.font_size.is_finite() || style.font_size <= 0.0 {
            return Err(TextFxError::render(format!(
                "font size must be > 0, got {}",
                style.font_size
            )));
        }
        if style.text.trim().is_empty() {
            return Raster::transparent(0, 0);
        }

        let svg = Self::build_svg(style);
        let opts = usvg::Options {
            fontdb: self.fontdb.clone(),
            ..Default::default()
        };
        let tree = usvg::Tree::from_str(&svg, &opts).context("parse text svg")?;
        if !tree.root().has_children() {
            return Err(TextFxError::render(format!(
                "no font could render text in family '{}'",
                style.font_family
            )));
        }

        let bbox = tree.root().abs_bounding_box();
        let x0 = bbox.x().floor();
        let y0 = bbox.y().floor();
        let w = (bbox.right().ceil() - x0).max(1.0) as u32;
        let h = (bbox.bottom().ceil() - y0).max(1.0) as u32;
        if w > MAX_RASTER_DIM || h > MAX_RASTER_DIM {
            return Err(TextFxError::render(format!(
                "text raster size too large: {w}x{h}"
            )));
        }

        let mut pixmap = resvg::tiny_skia::Pixmap::new(w, h)
            .ok_or_else(|| TextFxError::render("failed to allocate text pixmap"))?;
        resvg::render(
            &tree,
            resvg::tiny_skia::Transform::from_translate(-x0, -y0),
            &mut pixmap.as_mut(),
        );
        Raster::from_premul_rgba8(w, h, pixmap.take())
    }
}

fn load_fonts_from_dir(db: &mut usvg::fontdb::Database, dir: &Path) {
    let Ok(rd) = std::fs::read_dir(dir) else {
        tracing::warn!(dir = %dir.display(), "font directory is not readable");
        return;
    };

    for entry in rd.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(ext) = path.extension().and_then(|s| s.to_str()) else {
            continue;
        };
        let ext = ext.to_ascii_lowercase();
        if ext != "ttf" && ext != "otf" && ext != "ttc" {
            continue;
        }
        if let Err(err) = db.load_font_file(&path) {
            tracing::debug!(path = %path.display(), %err, "skipping font file");
        }
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg_text.rs"]
mod tests;
