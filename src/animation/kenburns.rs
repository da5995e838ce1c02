/// Pan/zoom direction for Ken Burns style motion.
///
/// Unrecognized names deserialize to [`ZoomDirection::Still`], which leaves the subject unscaled
/// and unmoved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoomDirection {
    Left,
    Right,
    #[default]
    In,
    Out,
    #[serde(other)]
    Still,
}

/// Pixel travel per unit of zoom amount for horizontal pans.
pub const PAN_RANGE_PER_AMOUNT: f64 = 1000.0;

/// Fixed zoomed-in framing used by horizontal pans, leaving room to travel.
pub const PAN_BASE_SCALE: f64 = 1.3;

/// Scale factor at `progress`.
pub fn zoom_scale(progress: f64, direction: ZoomDirection, amount: f64) -> f64 {
    match direction {
        ZoomDirection::Left | ZoomDirection::Right => PAN_BASE_SCALE + amount,
        ZoomDirection::In => 1.0 + amount * progress,
        ZoomDirection::Out => 1.0 + amount * (1.0 - progress),
        ZoomDirection::Still => 1.0,
    }
}

/// Horizontal offset at `progress`, in pixels.
pub fn zoom_translate(progress: f64, direction: ZoomDirection, amount: f64) -> f64 {
    let range = amount * PAN_RANGE_PER_AMOUNT;
    match direction {
        ZoomDirection::Right => progress * range - range / 2.0,
        ZoomDirection::Left => -(progress * range - range / 2.0),
        ZoomDirection::In | ZoomDirection::Out | ZoomDirection::Still => 0.0,
    }
}

/// Direction and amount of a Ken Burns move.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KenBurns {
    #[serde(default)]
    pub zoom_direction: ZoomDirection,
    #[serde(default = "default_zoom_amount")]
    pub zoom_amount: f64,
}

fn default_zoom_amount() -> f64 {
    0.1
}

impl Default for KenBurns {
    fn default() -> Self {
        Self {
            zoom_direction: ZoomDirection::default(),
            zoom_amount: default_zoom_amount(),
        }
    }
}

/// Scale and horizontal translation for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomParams {
    pub scale: f64,
    pub translate_x: f64,
}

impl KenBurns {
    pub fn new(zoom_direction: ZoomDirection, zoom_amount: f64) -> Self {
        Self {
            zoom_direction,
            zoom_amount,
        }
    }

    pub fn params(&self, progress: f64) -> ZoomParams {
        ZoomParams {
            scale: zoom_scale(progress, self.zoom_direction, self.zoom_amount),
            translate_x: zoom_translate(progress, self.zoom_direction, self.zoom_amount),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/kenburns.rs"]
mod tests;
