//! SQT (scale, rotation, translation) reference-frame transforms.
//!
//! An [`Sqt`] maps a frame's local space into its parent space as
//! `p -> s * R(q) * p + t`, with a uniform scale `s`, a unit quaternion `q`,
//! and a translation `t`. All math runs in double precision; only the
//! renderer export narrows to `f32`.
//!
//! None of the operations validate their inputs. Rotation axes must already
//! be normalized, and inverting a zero scale yields non-finite values. Use
//! [`Sqt::try_inverse`] where a checked inverse is wanted.

use std::ops::Mul;

use glam::{DQuat, DVec3, Mat4};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Similarity transform: uniform scale, rotation, translation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sqt {
    scale: f64,
    rotation: DQuat,
    translation: DVec3,
}

/// Rotation of `theta` radians about a unit `axis`.
#[inline]
fn axis_angle(theta: f64, axis: DVec3) -> DQuat {
    let (sin, cos) = (theta * 0.5).sin_cos();
    DQuat::from_xyzw(axis.x * sin, axis.y * sin, axis.z * sin, cos)
}

impl Sqt {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        rotation: DQuat::IDENTITY,
        translation: DVec3::ZERO,
    };

    /// Create a new identity transform.
    #[inline]
    pub const fn new() -> Self {
        Self::IDENTITY
    }

    /// Create a transform from its components.
    ///
    /// `rotation` must be a unit quaternion.
    #[inline]
    pub const fn from_scale_rotation_translation(
        scale: f64,
        rotation: DQuat,
        translation: DVec3,
    ) -> Self {
        Self {
            scale,
            rotation,
            translation,
        }
    }

    /// Uniform scale factor.
    #[inline]
    pub const fn scale(&self) -> f64 {
        self.scale
    }

    /// Rotation quaternion.
    #[inline]
    pub const fn rotation(&self) -> DQuat {
        self.rotation
    }

    /// Translation vector.
    #[inline]
    pub const fn translation(&self) -> DVec3 {
        self.translation
    }

    /// Set the rotation to `theta` radians about `axis`, replacing any prior
    /// rotation. `axis` must be normalized.
    pub fn set_rotation(&mut self, theta: f64, axis: DVec3) {
        self.rotation = axis_angle(theta, axis);
    }

    /// Set the rotation directly from a unit quaternion.
    pub fn set_rotation_quat(&mut self, rotation: DQuat) {
        self.rotation = rotation;
    }

    /// Apply an additional rotation of `theta` radians about `axis` on top of
    /// the current orientation. `axis` must be normalized.
    ///
    /// The new rotation is composed on the left: `q = q' * q`.
    pub fn rotate(&mut self, theta: f64, axis: DVec3) {
        self.rotation = axis_angle(theta, axis) * self.rotation;
    }

    /// Set the translation.
    pub fn set_translation(&mut self, translation: DVec3) {
        self.translation = translation;
    }

    /// Add to the translation.
    pub fn translate(&mut self, delta: DVec3) {
        self.translation += delta;
    }

    /// Set the uniform scale.
    pub fn set_scale(&mut self, scale: f64) {
        self.scale = scale;
    }

    /// Multiply the uniform scale by `factor`.
    pub fn scale_by(&mut self, factor: f64) {
        self.scale *= factor;
    }

    /// Apply scale and rotation to a direction-like vector, ignoring the
    /// translation.
    ///
    /// Computed as the sandwich product `q * (s v) * conj(q)`.
    pub fn transform_rel(&self, v: DVec3) -> DVec3 {
        let s = self.scale;
        let p = DQuat::from_xyzw(v.x * s, v.y * s, v.z * s, 0.0);
        let r = self.rotation * p * self.rotation.conjugate();
        DVec3::new(r.x, r.y, r.z)
    }

    /// Apply the full transform to a position-like vector.
    #[inline]
    pub fn transform_abs(&self, v: DVec3) -> DVec3 {
        self.transform_rel(v) + self.translation
    }

    /// Transform equivalent to applying `other` first, then `self`.
    pub fn compose(&self, other: &Sqt) -> Sqt {
        Sqt {
            scale: self.scale * other.scale,
            rotation: self.rotation * other.rotation,
            translation: self.transform_abs(other.translation),
        }
    }

    /// Inverse transform, so that `self.compose(&self.inverse())` is the
    /// identity.
    ///
    /// A zero scale produces non-finite components.
    pub fn inverse(&self) -> Sqt {
        let mut inv = Sqt {
            scale: 1.0 / self.scale,
            rotation: self.rotation.conjugate(),
            translation: DVec3::ZERO,
        };
        inv.translation = inv.transform_rel(-self.translation);
        inv
    }

    /// Inverse transform, rejecting a zero or non-finite scale.
    pub fn try_inverse(&self) -> Result<Sqt> {
        if self.scale == 0.0 || !self.scale.is_finite() {
            return Err(Error::DegenerateTransform(format!(
                "cannot invert scale {}",
                self.scale
            )));
        }
        Ok(self.inverse())
    }

    /// Row-major 4x4 affine matrix for a graphics pipeline.
    ///
    /// The upper 3x3 block is the quaternion rotation matrix scaled by `s`,
    /// the last column holds the translation and the last row is
    /// `[0, 0, 0, 1]`, so `[x' y' z' 1]^T = M [x y z 1]^T`.
    pub fn matrix(&self) -> [f32; 16] {
        let DQuat { x, y, z, w } = self.rotation;
        let s = self.scale;
        let t = self.translation;
        [
            ((1.0 - 2.0 * y * y - 2.0 * z * z) * s) as f32,
            ((2.0 * x * y - 2.0 * z * w) * s) as f32,
            ((2.0 * x * z + 2.0 * y * w) * s) as f32,
            t.x as f32,
            ((2.0 * x * y + 2.0 * z * w) * s) as f32,
            ((1.0 - 2.0 * x * x - 2.0 * z * z) * s) as f32,
            ((2.0 * y * z - 2.0 * x * w) * s) as f32,
            t.y as f32,
            ((2.0 * x * z - 2.0 * y * w) * s) as f32,
            ((2.0 * y * z + 2.0 * x * w) * s) as f32,
            ((1.0 - 2.0 * x * x - 2.0 * y * y) * s) as f32,
            t.z as f32,
            0.0,
            0.0,
            0.0,
            1.0,
        ]
    }

    /// The same matrix as [`Sqt::matrix`] as a glam `Mat4` (column-major).
    pub fn to_mat4(&self) -> Mat4 {
        Mat4::from_cols_array(&self.matrix()).transpose()
    }
}

impl Default for Sqt {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Sqt {
    type Output = Sqt;

    /// `a * b` applies `b` first, then `a`.
    fn mul(self, rhs: Sqt) -> Sqt {
        self.compose(&rhs)
    }
}
