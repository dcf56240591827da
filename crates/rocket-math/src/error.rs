// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use thiserror::Error;

use crate::math::Vec3;

/// Errors produced by matrix operations that can fail on degenerate input.
///
/// Every other operation is total over `f32` and may yield `NaN`/`Inf` for
/// pathological geometry (e.g. zero-width orthographic bounds).
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MatrixError {
    /// The determinant is within [`crate::math::TOLERANCE`] of zero.
    #[error("matrix is singular (determinant {determinant})")]
    Singular {
        /// Determinant that failed the tolerance check.
        determinant: f32,
    },
    /// An axis of the rotation/scale block is too short to factor a rotation out.
    ///
    /// `scale` and `translation` were still extracted and are valid.
    #[error("degenerate scale {scale:?}; rotation cannot be recovered")]
    DegenerateScale {
        /// Per-axis scale (Z negated for mirrored matrices).
        scale: Vec3,
        /// Translation column.
        translation: Vec3,
    },
    /// Half the field of view is a multiple of 90°, so `tan` is undefined.
    #[error("invalid field of view: {degrees} degrees")]
    InvalidFieldOfView {
        /// Requested field of view in degrees.
        degrees: f32,
    },
    /// A raw float buffer could not be viewed as packed `Vec4` quadruples.
    #[error("layout error: {0}")]
    Layout(#[from] bytemuck::PodCastError),
}
