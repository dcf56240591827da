// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::error::MatrixError;
use crate::math::{Mat4, Quat, Vec3};

/// Scale, rotation and translation triple (TRS).
///
/// Conventions:
/// - `scale` is non-uniform and applied first, then `rotation`, then
///   `translation`: `M = T · R · S`.
/// - `rotation` is expected to be a unit quaternion; it is used as given.
/// - Mirrored transforms are represented with a negative Z scale, which is
///   also what [`Mat4::decompose`] produces.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    translation: Vec3,
    rotation: Quat,
    scale: Vec3,
}

impl Transform {
    /// Identity transform (no translation, no rotation, unit scale).
    #[must_use]
    pub const fn identity() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Quat::identity(),
            scale: Vec3::ONE,
        }
    }

    /// Creates a transform from components.
    #[must_use]
    pub const fn new(translation: Vec3, rotation: Quat, scale: Vec3) -> Self {
        Self {
            translation,
            rotation,
            scale,
        }
    }

    /// Translation component.
    #[must_use]
    pub const fn translation(&self) -> Vec3 {
        self.translation
    }

    /// Rotation component.
    #[must_use]
    pub const fn rotation(&self) -> Quat {
        self.rotation
    }

    /// Scale component.
    #[must_use]
    pub const fn scale(&self) -> Vec3 {
        self.scale
    }

    /// Composes `T · R · S`.
    #[must_use]
    pub fn to_mat4(&self) -> Mat4 {
        Mat4::from_translation(self.translation)
            .multiply(&Mat4::from_quat(&self.rotation))
            .multiply(&Mat4::from_scale(self.scale))
    }

    /// Decomposes `m`; see [`Mat4::decompose`].
    ///
    /// # Errors
    /// [`MatrixError::DegenerateScale`] when an axis has (near) zero length.
    pub fn from_mat4(m: &Mat4) -> Result<Self, MatrixError> {
        m.decompose()
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<Transform> for Mat4 {
    fn from(value: Transform) -> Self {
        value.to_mat4()
    }
}

impl TryFrom<Mat4> for Transform {
    type Error = MatrixError;

    fn try_from(value: Mat4) -> Result<Self, Self::Error> {
        value.decompose()
    }
}
