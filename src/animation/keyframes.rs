use crate::foundation::core::Vec2;
use crate::foundation::error::{TextFxError, TextFxResult};

/// Interpolation contract for keyframe property types.
pub trait Lerp: Sized {
    /// Interpolate from `a` to `b` with normalized factor `t` in `[0, 1]`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }
}

/// Property set carried by every checkpoint of a track.
///
/// Fixed records always have the same shape. Open property lists override [`same_shape`] so a
/// track can reject checkpoints that declare different property names.
///
/// [`same_shape`]: TrackProps::same_shape
pub trait TrackProps: Lerp + Clone {
    /// Whether `self` and `other` declare the same properties.
    fn same_shape(&self, _other: &Self) -> bool {
        true
    }
}

impl TrackProps for f64 {}
impl TrackProps for Vec2 {}

/// Ordered `(name, value)` property list for call sites that need open property names.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Props(Vec<(String, f64)>);

impl Props {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Append a property, builder style.
    pub fn with(mut self, name: impl Into<String>, value: f64) -> Self {
        self.0.push((name.into(), value));
        self
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, v)| *v)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Lerp for Props {
    // Shapes are checked by `KeyframeTrack::new`; names come from `a`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self(
            a.0.iter()
                .zip(b.0.iter())
                .map(|((name, av), (_, bv))| (name.clone(), f64::lerp(av, bv, t)))
                .collect(),
        )
    }
}

impl TrackProps for Props {
    fn same_shape(&self, other: &Self) -> bool {
        self.0.len() == other.0.len() && self.names().eq(other.names())
    }
}

/// A property snapshot at a point in normalized time.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Checkpoint<P> {
    pub t: f64,
    pub props: P,
}

impl<P> Checkpoint<P> {
    pub fn new(t: f64, props: P) -> Self {
        Self { t, props }
    }
}

/// Validated, immutable sequence of checkpoints ordered by `t`.
#[derive(Clone, Debug, PartialEq)]
pub struct KeyframeTrack<P> {
    checkpoints: Vec<Checkpoint<P>>, // sorted by t, non-empty
}

impl<P: TrackProps> KeyframeTrack<P> {
    /// Build a track, rejecting empty input, non-finite or descending `t`, and checkpoints whose
    /// property shape differs from the first one.
    pub fn new(checkpoints: Vec<Checkpoint<P>>) -> TextFxResult<Self> {
        let Some(first) = checkpoints.first() else {
            return Err(TextFxError::validation(
                "keyframe track must have at least one checkpoint",
            ));
        };
        if let Some(bad) = checkpoints.iter().position(|c| !c.t.is_finite()) {
            return Err(TextFxError::validation(format!(
                "keyframe track checkpoint {bad} has non-finite t"
            )));
        }
        if let Some(i) = checkpoints.windows(2).position(|w| w[0].t > w[1].t) {
            return Err(TextFxError::validation(format!(
                "keyframe track t must be non-decreasing (checkpoint {} has t={} after t={})",
                i + 1,
                checkpoints[i + 1].t,
                checkpoints[i].t
            )));
        }
        if let Some(bad) = checkpoints
            .iter()
            .position(|c| !c.props.same_shape(&first.props))
        {
            return Err(TextFxError::validation(format!(
                "keyframe track checkpoint {bad} declares a different property set"
            )));
        }
        Ok(Self { checkpoints })
    }

    pub fn checkpoints(&self) -> &[Checkpoint<P>] {
        &self.checkpoints
    }

    /// Sample the track at `progress`.
    ///
    /// Values hold at the first/last checkpoint outside the track's time span. Between
    /// checkpoints properties are interpolated linearly. When several checkpoints share a `t`, the
    /// last one wins from that instant on.
    pub fn interpolate(&self, progress: f64) -> P {
        let first = &self.checkpoints[0];
        let last = &self.checkpoints[self.checkpoints.len() - 1];

        if progress.is_nan() || progress < first.t {
            return first.props.clone();
        }
        if progress >= last.t {
            return last.props.clone();
        }

        // first.t <= progress < last.t, so 1 <= idx < len and `a` is the last checkpoint at or
        // before progress.
        let idx = self.checkpoints.partition_point(|c| c.t <= progress);
        let a = &self.checkpoints[idx - 1];
        let b = &self.checkpoints[idx];
        if progress == a.t {
            return a.props.clone();
        }

        let local = (progress - a.t) / (b.t - a.t);
        P::lerp(&a.props, &b.props, local)
    }
}

/// Convenience wrapper over [`KeyframeTrack::interpolate`].
pub fn interpolate<P: TrackProps>(track: &KeyframeTrack<P>, progress: f64) -> P {
    track.interpolate(progress)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/keyframes.rs"]
mod tests;
