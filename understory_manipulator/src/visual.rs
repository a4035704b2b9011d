// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The composed transform applied to the element.
//!
//! A [`VisualTransform`] is an ordered list of stages, outermost first. Its
//! [`Display`](core::fmt::Display) output is CSS `transform` text, which is
//! what a DOM-backed style sink assigns. Other renderers can read the stages
//! directly or use [`VisualTransform::to_affine`] when no warp is present.
//!
//! Scale and rotate stages act about the element center, like the default CSS
//! `transform-origin`.

use core::fmt;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Affine, Size, Vec2};
use smallvec::SmallVec;
use understory_homography::ProjectiveMatrix;

/// One stage of a [`VisualTransform`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransformStage {
    /// Translation in pixels.
    Translate(Vec2),
    /// Perspective warp, applied about the element center.
    Projective(ProjectiveMatrix),
    /// Per-axis scale factors.
    Scale(Vec2),
    /// Clockwise rotation in degrees.
    Rotate(f64),
}

impl fmt::Display for TransformStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Translate(t) => write!(f, "translate({}px,{}px)", t.x, t.y),
            Self::Projective(m) => {
                f.write_str("translate(-50%, -50%) matrix3d(")?;
                for (i, v) in m.to_column_major().into_iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", fixed10(v))?;
                }
                f.write_str(") translate(50%, 50%)")
            }
            Self::Scale(s) => write!(f, "scale({}, {})", s.x, s.y),
            Self::Rotate(deg) => write!(f, "rotate({deg}deg)"),
        }
    }
}

/// Rounds to ten decimals.
fn fixed10(v: f64) -> f64 {
    let r = (v * 1e10).round() / 1e10;
    if r == 0.0 { 0.0 } else { r }
}

/// An ordered composition of [`TransformStage`]s, outermost first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VisualTransform {
    stages: SmallVec<[TransformStage; 4]>,
}

impl VisualTransform {
    /// An empty transform.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an inner stage.
    pub fn push(&mut self, stage: TransformStage) {
        self.stages.push(stage);
    }

    /// The stages, outermost first.
    #[must_use]
    pub fn stages(&self) -> &[TransformStage] {
        &self.stages
    }

    /// Returns `true` if the transform contains a perspective warp.
    #[must_use]
    pub fn is_projective(&self) -> bool {
        self.stages
            .iter()
            .any(|s| matches!(s, TransformStage::Projective(_)))
    }

    /// The equivalent affine map for an element of `size`, in its local frame.
    ///
    /// Returns `None` when the transform contains a perspective warp.
    #[must_use]
    pub fn to_affine(&self, size: Size) -> Option<Affine> {
        let origin = size.to_vec2() / 2.0;
        let mut inner = Affine::IDENTITY;
        for stage in &self.stages {
            let m = match *stage {
                TransformStage::Translate(t) => Affine::translate(t),
                TransformStage::Scale(s) => Affine::scale_non_uniform(s.x, s.y),
                TransformStage::Rotate(deg) => Affine::rotate(deg.to_radians()),
                TransformStage::Projective(_) => return None,
            };
            inner *= m;
        }
        Some(Affine::translate(origin) * inner * Affine::translate(-origin))
    }
}

impl fmt::Display for VisualTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, stage) in self.stages.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{stage}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use kurbo::Point;

    #[test]
    fn css_text_joins_stages() {
        let mut t = VisualTransform::new();
        t.push(TransformStage::Translate(Vec2::new(10.0, -2.5)));
        t.push(TransformStage::Scale(Vec2::new(1.5, 1.0)));
        t.push(TransformStage::Rotate(90.0));
        assert_eq!(
            t.to_string(),
            "translate(10px,-2.5px) scale(1.5, 1) rotate(90deg)"
        );
    }

    #[test]
    fn projective_stage_is_centered_matrix3d() {
        let stage = TransformStage::Projective(ProjectiveMatrix::IDENTITY);
        assert_eq!(
            stage.to_string(),
            "translate(-50%, -50%) matrix3d(1,0,0,0,0,1,0,0,0,0,1,0,0,0,0,1) translate(50%, 50%)"
        );
    }

    #[test]
    fn matrix_values_are_rounded() {
        assert_eq!(fixed10(0.123_456_789_012_3), 0.123_456_789);
        assert_eq!(fixed10(-1e-12), 0.0);
    }

    #[test]
    fn affine_acts_about_center() {
        let mut t = VisualTransform::new();
        t.push(TransformStage::Translate(Vec2::ZERO));
        t.push(TransformStage::Scale(Vec2::new(2.0, 2.0)));
        let a = t.to_affine(Size::new(10.0, 10.0)).unwrap();
        // The center is fixed, corners move outwards.
        assert_eq!(a * Point::new(5.0, 5.0), Point::new(5.0, 5.0));
        assert_eq!(a * Point::new(0.0, 0.0), Point::new(-5.0, -5.0));
    }

    #[test]
    fn warp_has_no_affine() {
        let mut t = VisualTransform::new();
        t.push(TransformStage::Projective(ProjectiveMatrix::IDENTITY));
        assert!(t.is_projective());
        assert!(t.to_affine(Size::new(1.0, 1.0)).is_none());
    }
}
