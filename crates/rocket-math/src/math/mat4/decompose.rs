// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Recovery of scale, rotation and translation from a composed `T · R · S`
//! matrix.

use tracing::debug;

use crate::error::MatrixError;
use crate::math::{Mat4, Quat, Vec3, TOLERANCE};
use crate::transform::Transform;

impl Mat4 {
    /// Translation column.
    pub fn translation_component(&self) -> Vec3 {
        Vec3::new(self.data[12], self.data[13], self.data[14])
    }

    /// Per-axis scale: the lengths of columns 0, 1 and 2.
    ///
    /// Mirrored matrices (negative determinant) report a negative Z scale;
    /// X and Y are always non-negative.
    pub fn scale_component(&self) -> Vec3 {
        let [x, y, z] = self.axes();
        let mut sz = z.length();
        if self.determinant() < 0.0 {
            sz = -sz;
        }
        Vec3::new(x.length(), y.length(), sz)
    }

    /// Rotation with scale factored out.
    ///
    /// # Errors
    /// [`MatrixError::DegenerateScale`] when any axis scale is below `TOLERANCE`.
    pub fn rotation_component(&self) -> Result<Quat, MatrixError> {
        self.decompose().map(|trs| trs.rotation())
    }

    /// Splits the matrix into scale, rotation and translation.
    ///
    /// For `M = T · R · S` with non-zero scale this returns `(s, ±r, t)`; the
    /// quaternion sign is not canonicalized. Mirrored matrices come back with
    /// a negative Z scale and a proper rotation.
    ///
    /// # Errors
    /// [`MatrixError::DegenerateScale`] when any axis scale is below
    /// `TOLERANCE`; the error still carries the valid scale and translation.
    ///
    /// # Examples
    /// ```
    /// use rocket_math::{Mat4, Vec3};
    /// let m = Mat4::translation(1.0, 2.0, 3.0).multiply(&Mat4::scale(2.0, 2.0, 2.0));
    /// let trs = m.decompose().unwrap();
    /// assert_eq!(trs.translation(), Vec3::new(1.0, 2.0, 3.0));
    /// assert_eq!(trs.scale(), Vec3::new(2.0, 2.0, 2.0));
    /// ```
    pub fn decompose(&self) -> Result<Transform, MatrixError> {
        let translation = self.translation_component();
        let scale = self.scale_component();
        let (sx, sy, sz) = (scale.x(), scale.y(), scale.z());

        if sx < TOLERANCE || sy < TOLERANCE || sz.abs() < TOLERANCE {
            debug!(?scale, "rotation not recoverable from degenerate axis");
            return Err(MatrixError::DegenerateScale { scale, translation });
        }

        let [x, y, z] = self.axes();
        let x = x.scale(1.0 / sx);
        let y = y.scale(1.0 / sy);
        let z = z.scale(1.0 / sz);

        Ok(Transform::new(
            translation,
            quat_from_axes(&x, &y, &z),
            scale,
        ))
    }

    fn axes(&self) -> [Vec3; 3] {
        let m = &self.data;
        [
            Vec3::new(m[0], m[1], m[2]),
            Vec3::new(m[4], m[5], m[6]),
            Vec3::new(m[8], m[9], m[10]),
        ]
    }
}

/// Converts orthonormal rotation columns to a quaternion.
///
/// Pivots on the trace when it dominates, otherwise on the largest diagonal
/// element, so the square root argument stays well away from zero.
fn quat_from_axes(x: &Vec3, y: &Vec3, z: &Vec3) -> Quat {
    let trace = x.x() + y.y() + z.z() + 1.0;

    if trace > 1.0 {
        let s = 0.5 / trace.sqrt();
        Quat::new(
            (y.z() - z.y()) * s,
            (z.x() - x.z()) * s,
            (x.y() - y.x()) * s,
            0.25 / s,
        )
    } else if x.x() > y.y() && x.x() > z.z() {
        let s = 0.5 / (1.0 + x.x() - y.y() - z.z()).sqrt();
        Quat::new(
            0.25 / s,
            (y.x() + x.y()) * s,
            (z.x() + x.z()) * s,
            (y.z() - z.y()) * s,
        )
    } else if y.y() > z.z() {
        let s = 0.5 / (1.0 + y.y() - x.x() - z.z()).sqrt();
        Quat::new(
            (y.x() + x.y()) * s,
            0.25 / s,
            (z.y() + y.z()) * s,
            (z.x() - x.z()) * s,
        )
    } else {
        let s = 0.5 / (1.0 + z.z() - x.x() - y.y()).sqrt();
        Quat::new(
            (z.x() + x.z()) * s,
            (z.y() + y.z()) * s,
            0.25 / s,
            (x.y() - y.x()) * s,
        )
    }
}
