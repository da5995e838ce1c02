/// Horizontal anchor of a placed object.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OriginX {
    Left,
    #[default]
    Center,
    Right,
}

impl OriginX {
    /// Fraction of the object's width that sits left of the anchor.
    pub fn factor(self) -> f64 {
        match self {
            Self::Left => 0.0,
            Self::Center => 0.5,
            Self::Right => 1.0,
        }
    }
}

/// Vertical anchor of a placed object.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OriginY {
    Top,
    #[default]
    Center,
    Bottom,
}

impl OriginY {
    /// Fraction of the object's height that sits above the anchor.
    pub fn factor(self) -> f64 {
        match self {
            Self::Top => 0.0,
            Self::Center => 0.5,
            Self::Bottom => 1.0,
        }
    }
}

/// Symbolic frame position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NamedPosition {
    Top,
    TopLeft,
    TopRight,
    #[default]
    Center,
    #[serde(alias = "center-left")]
    Left,
    #[serde(alias = "center-right")]
    Right,
    Bottom,
    BottomLeft,
    BottomRight,
}

/// Where an overlay sits in the frame.
///
/// Explicit coordinates are fractions of the frame size. Each axis left unset falls back to the
/// frame centre.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Position {
    Named(NamedPosition),
    #[serde(rename_all = "camelCase")]
    Explicit {
        #[serde(default)]
        x: Option<f64>,
        #[serde(default)]
        y: Option<f64>,
        #[serde(default)]
        origin_x: Option<OriginX>,
        #[serde(default)]
        origin_y: Option<OriginY>,
    },
}

impl Default for Position {
    fn default() -> Self {
        Self::Named(NamedPosition::Center)
    }
}

/// Concrete anchor point and origin for a placed object.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PositionProps {
    pub left: f64,
    pub top: f64,
    pub origin_x: OriginX,
    pub origin_y: OriginY,
}

/// Turns a [`Position`] into concrete coordinates for a frame size.
pub trait LayoutResolver: Send + Sync {
    fn position_of(&self, position: &Position, width: f64, height: f64) -> PositionProps;
}

/// Margin-based layout: edges sit `margin` of the frame size inside the border.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DefaultLayout {
    pub margin: f64,
}

impl Default for DefaultLayout {
    fn default() -> Self {
        Self { margin: 0.05 }
    }
}

impl LayoutResolver for DefaultLayout {
    fn position_of(&self, position: &Position, width: f64, height: f64) -> PositionProps {
        let mut out = PositionProps {
            left: width / 2.0,
            top: height / 2.0,
            origin_x: OriginX::Center,
            origin_y: OriginY::Center,
        };

        match *position {
            Position::Named(named) => {
                use NamedPosition as N;
                match named {
                    N::Top | N::TopLeft | N::TopRight => {
                        out.origin_y = OriginY::Top;
                        out.top = height * self.margin;
                    }
                    N::Bottom | N::BottomLeft | N::BottomRight => {
                        out.origin_y = OriginY::Bottom;
                        out.top = height * (1.0 - self.margin);
                    }
                    N::Center | N::Left | N::Right => {}
                }
                match named {
                    N::Left | N::TopLeft | N::BottomLeft => {
                        out.origin_x = OriginX::Left;
                        out.left = width * self.margin;
                    }
                    N::Right | N::TopRight | N::BottomRight => {
                        out.origin_x = OriginX::Right;
                        out.left = width * (1.0 - self.margin);
                    }
                    N::Center | N::Top | N::Bottom => {}
                }
            }
            Position::Explicit {
                x,
                y,
                origin_x,
                origin_y,
            } => {
                if let Some(x) = x {
                    out.origin_x = origin_x.unwrap_or(OriginX::Left);
                    out.left = width * x;
                }
                if let Some(y) = y {
                    out.origin_y = origin_y.unwrap_or(OriginY::Top);
                    out.top = height * y;
                }
            }
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/position.rs"]
mod tests;
