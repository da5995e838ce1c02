use crate::foundation::core::Rgba8Premul;
use crate::foundation::error::{TextFxError, TextFxResult};
use serde::{Deserialize, Serialize};

/// Straight-alpha colour with normalized `0..1` channels.
///
/// Deserializes from `"#RGB"`, `"#RRGGBB"`, `"#RRGGBBAA"`, CSS `rgb(…)`/`rgba(…)` strings,
/// `{r, g, b, a?}` objects or `[r, g, b, a?]` arrays.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub fn parse(s: &str) -> TextFxResult<Self> {
        let s = s.trim();
        if let Some(args) = s
            .strip_prefix("rgba(")
            .or_else(|| s.strip_prefix("rgb("))
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return parse_css_rgb(args).map_err(TextFxError::config);
        }
        parse_hex(s).map_err(TextFxError::config)
    }

    pub fn to_rgba8_premul(self) -> Rgba8Premul {
        fn to_u8(x: f64) -> u8 {
            (x.clamp(0.0, 1.0) * 255.0).round() as u8
        }

        let a = self.a.clamp(0.0, 1.0);
        let r = (self.r.clamp(0.0, 1.0) * a).clamp(0.0, 1.0);
        let g = (self.g.clamp(0.0, 1.0) * a).clamp(0.0, 1.0);
        let b = (self.b.clamp(0.0, 1.0) * a).clamp(0.0, 1.0);

        Rgba8Premul {
            r: to_u8(r),
            g: to_u8(g),
            b: to_u8(b),
            a: to_u8(a),
        }
    }

    /// `#rrggbb` fill plus separate opacity, as SVG wants them.
    pub fn to_svg_paint(self) -> (String, f64) {
        let c = |x: f64| (x.clamp(0.0, 1.0) * 255.0).round() as u8;
        (
            format!("#{:02x}{:02x}{:02x}", c(self.r), c(self.g), c(self.b)),
            self.a.clamp(0.0, 1.0),
        )
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Str(String),
            RgbaObj {
                r: f64,
                g: f64,
                b: f64,
                #[serde(default = "one")]
                a: f64,
            },
            Arr(Vec<f64>),
        }

        fn one() -> f64 {
            1.0
        }

        match Repr::deserialize(deserializer)? {
            Repr::Str(s) => Color::parse(&s).map_err(serde::de::Error::custom),
            Repr::RgbaObj { r, g, b, a } => Ok(Self::rgba(r, g, b, a)),
            Repr::Arr(v) => match v.as_slice() {
                [r, g, b] => Ok(Self::rgba(*r, *g, *b, 1.0)),
                [r, g, b, a] => Ok(Self::rgba(*r, *g, *b, *a)),
                _ => Err(serde::de::Error::custom(
                    "rgba array must have len 3 ([r,g,b]) or 4 ([r,g,b,a])",
                )),
            },
        }
    }
}

fn parse_hex(s: &str) -> Result<Color, String> {
    let s = s.strip_prefix('#').unwrap_or(s);

    fn hex_byte(pair: &str) -> Result<u8, String> {
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    if !s.is_ascii() {
        return Err(format!("invalid colour \"{s}\""));
    }

    let (r, g, b, a) = match s.len() {
        3 => {
            let dup = |i: usize| hex_byte(&s[i..i + 1].repeat(2));
            (dup(0)?, dup(1)?, dup(2)?, 255)
        }
        6 => (
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
            255,
        ),
        8 => (
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
            hex_byte(&s[6..8])?,
        ),
        _ => {
            return Err(
                "hex color must be #RGB, #RRGGBB or #RRGGBBAA (case-insensitive)".to_owned(),
            );
        }
    };

    Ok(Color::rgba(
        f64::from(r) / 255.0,
        f64::from(g) / 255.0,
        f64::from(b) / 255.0,
        f64::from(a) / 255.0,
    ))
}

// rgb(255, 0, 0) / rgba(255, 0, 0, 0.5): channels in 0..255, alpha in 0..1.
fn parse_css_rgb(args: &str) -> Result<Color, String> {
    let parts = args
        .split(',')
        .map(|p| {
            p.trim()
                .parse::<f64>()
                .map_err(|_| format!("invalid css colour component \"{}\"", p.trim()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    match parts.as_slice() {
        [r, g, b] => Ok(Color::rgba(r / 255.0, g / 255.0, b / 255.0, 1.0)),
        [r, g, b, a] => Ok(Color::rgba(r / 255.0, g / 255.0, b / 255.0, *a)),
        _ => Err("css rgb()/rgba() needs 3 or 4 components".to_owned()),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/color.rs"]
mod tests;
