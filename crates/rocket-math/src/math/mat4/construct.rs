// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Factory constructors: view, projection, billboard, reflection and the
//! elementary rotation/scale/translation matrices.

use core::f32::consts::FRAC_PI_2;

use tracing::debug;

use crate::error::MatrixError;
use crate::math::{
    canonicalize_zero, deg_to_rad, Mat4, Plane, Quat, Vec3, AXIS_NORMALIZE_MIN, EPSILON,
};

impl Mat4 {
    /// Builds a view matrix looking from `eye` towards `target`.
    ///
    /// The basis is built by Gram-Schmidt: `z = normalize(eye - target)`,
    /// `x = normalize(up × z)`, `y = normalize(z × x)`. The axes form the rows
    /// of the rotation block and the translation is `-dot(axis, eye)`.
    ///
    /// Axes are normalized whenever their length reaches `TOLERANCE`, so
    /// eye and target may be arbitrarily close. `up` must not be parallel to
    /// the view direction; the result is degenerate (zero X axis) otherwise.
    pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        let up = up.normalize_or_self();
        let z = eye.sub(&target).normalize_or_self();
        let x = up.cross(&z).normalize_or_self();
        let y = z.cross(&x).normalize_or_self();

        Self::new([
            x.x(),
            y.x(),
            z.x(),
            0.0,
            x.y(),
            y.y(),
            z.y(),
            0.0,
            x.z(),
            y.z(),
            z.z(),
            0.0,
            -x.dot(&eye),
            -y.dot(&eye),
            -z.dot(&eye),
            1.0,
        ])
    }

    /// Builds a right-handed perspective projection.
    ///
    /// `fov_degrees` is the full vertical field of view. Clip depth maps to
    /// `[-1, 1]`.
    ///
    /// # Errors
    /// [`MatrixError::InvalidFieldOfView`] when half the field of view is a
    /// multiple of 90° (including zero), where `tan` is undefined or zero.
    pub fn perspective(
        fov_degrees: f32,
        aspect: f32,
        z_near: f32,
        z_far: f32,
    ) -> Result<Self, MatrixError> {
        let theta = deg_to_rad(fov_degrees) * 0.5;
        // Rounding can land just below a multiple of π/2, so test both sides.
        let rem = (theta % FRAC_PI_2).abs();
        if rem < EPSILON || FRAC_PI_2 - rem < EPSILON {
            debug!(fov_degrees, "perspective rejected: tan(fov/2) undefined");
            return Err(MatrixError::InvalidFieldOfView {
                degrees: fov_degrees,
            });
        }
        let f_n = 1.0 / (z_far - z_near);
        let factor = 1.0 / theta.tan();

        let mut out = Self::ZERO;
        out.data[0] = (1.0 / aspect) * factor;
        out.data[5] = factor;
        out.data[10] = -(z_far + z_near) * f_n;
        out.data[11] = -1.0;
        out.data[14] = -2.0 * z_far * z_near * f_n;
        Ok(out)
    }

    /// Overwrites `self` with a perspective projection.
    ///
    /// On error `self` is left untouched.
    ///
    /// # Errors
    /// See [`Mat4::perspective`].
    pub fn set_perspective(
        &mut self,
        fov_degrees: f32,
        aspect: f32,
        z_near: f32,
        z_far: f32,
    ) -> Result<(), MatrixError> {
        *self = Self::perspective(fov_degrees, aspect, z_near, z_far)?;
        Ok(())
    }

    /// Centered orthographic projection of a `width` × `height` view volume.
    pub fn orthographic(width: f32, height: f32, z_near: f32, z_far: f32) -> Self {
        let half_width = width / 2.0;
        let half_height = height / 2.0;
        Self::orthographic_off_center(
            -half_width,
            half_width,
            -half_height,
            half_height,
            z_near,
            z_far,
        )
    }

    /// Orthographic projection of an arbitrary box.
    ///
    /// Bounds are not checked: `left == right`, `bottom == top` or
    /// `z_near == z_far` yield non-finite elements.
    pub fn orthographic_off_center(
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        z_near: f32,
        z_far: f32,
    ) -> Self {
        let mut out = Self::ZERO;
        out.data[0] = 2.0 / (right - left);
        out.data[5] = 2.0 / (top - bottom);
        out.data[10] = 1.0 / (z_near - z_far);
        out.data[12] = (left + right) / (left - right);
        out.data[13] = (top + bottom) / (bottom - top);
        out.data[14] = z_near / (z_near - z_far);
        out.data[15] = 1.0;
        out
    }

    /// Orients an object at `object` so it faces `camera`.
    ///
    /// When the camera sits on the object (squared distance ≤ `EPSILON`) the
    /// rotation stays identity and only the translation is set.
    pub fn billboard(object: Vec3, camera: Vec3, camera_up: Vec3) -> Self {
        Self::billboard_impl(object, camera, camera_up, None)
    }

    /// Like [`Mat4::billboard`], but falls back to facing against
    /// `camera_forward` when the camera sits on the object.
    pub fn billboard_with_forward(
        object: Vec3,
        camera: Vec3,
        camera_up: Vec3,
        camera_forward: Vec3,
    ) -> Self {
        Self::billboard_impl(object, camera, camera_up, Some(camera_forward))
    }

    fn billboard_impl(
        object: Vec3,
        camera: Vec3,
        camera_up: Vec3,
        camera_forward: Option<Vec3>,
    ) -> Self {
        let sufficient_delta = camera.sub(&object).length_squared() > EPSILON;

        let mut out = Self::translation(object.x(), object.y(), object.z());

        let target = match camera_forward {
            _ if sufficient_delta => camera,
            Some(forward) => object.sub(&forward),
            None => return out,
        };

        // Billboard rotation is the inverse (transpose) of the look-at rotation.
        let look = Self::look_at(object, target, camera_up);
        for row in 0..3 {
            for col in 0..3 {
                out.set_element(row, col, look.get(col, row));
            }
        }
        out
    }

    /// Householder reflection across `plane`.
    ///
    /// Rotation block `I - 2·n⊗n`, translation `-2d·n`.
    pub fn reflection(plane: &Plane) -> Self {
        let n = plane.normal();
        let k = -2.0 * plane.distance();
        let (nx, ny, nz) = (n.x(), n.y(), n.z());

        let xy = -2.0 * nx * ny;
        let xz = -2.0 * nx * nz;
        let yz = -2.0 * ny * nz;

        Self::new([
            1.0 - 2.0 * nx * nx,
            xy,
            xz,
            0.0,
            xy,
            1.0 - 2.0 * ny * ny,
            yz,
            0.0,
            xz,
            yz,
            1.0 - 2.0 * nz * nz,
            0.0,
            k * nx,
            k * ny,
            k * nz,
            1.0,
        ])
    }

    /// Builds a non-uniform scale matrix.
    pub const fn scale(sx: f32, sy: f32, sz: f32) -> Self {
        Self::new([
            sx, 0.0, 0.0, 0.0, // col 0
            0.0, sy, 0.0, 0.0, // col 1
            0.0, 0.0, sz, 0.0, // col 2
            0.0, 0.0, 0.0, 1.0, // col 3
        ])
    }

    /// Builds a scale matrix from a vector of per-axis factors.
    pub const fn from_scale(scale: Vec3) -> Self {
        Self::scale(scale.x(), scale.y(), scale.z())
    }

    /// Builds a translation matrix.
    ///
    /// Column-major layout: translation occupies the last column.
    pub const fn translation(tx: f32, ty: f32, tz: f32) -> Self {
        Self::new([
            1.0, 0.0, 0.0, 0.0, // col 0
            0.0, 1.0, 0.0, 0.0, // col 1
            0.0, 0.0, 1.0, 0.0, // col 2
            tx, ty, tz, 1.0, // col 3 (translation)
        ])
    }

    /// Builds a translation matrix from a vector.
    pub const fn from_translation(t: Vec3) -> Self {
        Self::translation(t.x(), t.y(), t.z())
    }

    /// Rotation matrix for quaternion `q`.
    ///
    /// `q` is used as given; pass a unit quaternion (see [`Quat::to_mat4`]
    /// for a normalizing variant).
    pub fn from_quat(q: &Quat) -> Self {
        let (x, y, z, w) = (q.x(), q.y(), q.z(), q.w());
        let x2 = x + x;
        let y2 = y + y;
        let z2 = z + z;

        let xx2 = x * x2;
        let yy2 = y * y2;
        let zz2 = z * z2;
        let xy2 = x * y2;
        let xz2 = x * z2;
        let yz2 = y * z2;
        let wx2 = w * x2;
        let wy2 = w * y2;
        let wz2 = w * z2;

        Self::new([
            1.0 - yy2 - zz2,
            xy2 + wz2,
            xz2 - wy2,
            0.0,
            xy2 - wz2,
            1.0 - xx2 - zz2,
            yz2 + wx2,
            0.0,
            xz2 + wy2,
            yz2 - wx2,
            1.0 - xx2 - yy2,
            0.0,
            0.0,
            0.0,
            0.0,
            1.0,
        ])
    }

    /// Builds a rotation of `angle` radians about `axis` (Rodrigues).
    ///
    /// The axis is renormalized only when its squared length is off unit by
    /// more than `f32::EPSILON` and its length exceeds
    /// [`AXIS_NORMALIZE_MIN`]; shorter axes are used unnormalized.
    pub fn rotation_axis_angle(axis: Vec3, angle: f32) -> Self {
        let (mut x, mut y, mut z) = (axis.x(), axis.y(), axis.z());

        let n_sq = x * x + y * y + z * z;
        if (n_sq - 1.0).abs() > f32::EPSILON {
            let n = n_sq.sqrt();
            if n > AXIS_NORMALIZE_MIN {
                let inv = 1.0 / n;
                x *= inv;
                y *= inv;
                z *= inv;
            }
        }

        let (s, c) = angle.sin_cos();
        let t = 1.0 - c;
        let tx = t * x;
        let ty = t * y;
        let tz = t * z;
        let txy = tx * y;
        let txz = tx * z;
        let tyz = ty * z;
        let sx = s * x;
        let sy = s * y;
        let sz = s * z;

        Self::new([
            c + tx * x,
            txy + sz,
            txz - sy,
            0.0,
            txy - sz,
            c + ty * y,
            tyz + sx,
            0.0,
            txz + sy,
            tyz - sx,
            c + tz * z,
            0.0,
            0.0,
            0.0,
            0.0,
            1.0,
        ])
    }

    /// Builds a rotation matrix around the X axis by `angle` radians.
    #[rustfmt::skip]
    pub fn rotation_x(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        let (s, c, ns) = (canonicalize_zero(s), canonicalize_zero(c), canonicalize_zero(-s));
        Self::new([
            1.0, 0.0, 0.0, 0.0,
            0.0, c,   s,   0.0,
            0.0, ns,  c,   0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Builds a rotation matrix around the Y axis by `angle` radians.
    #[rustfmt::skip]
    pub fn rotation_y(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        let (s, c, ns) = (canonicalize_zero(s), canonicalize_zero(c), canonicalize_zero(-s));
        Self::new([
            c,   0.0, ns,  0.0,
            0.0, 1.0, 0.0, 0.0,
            s,   0.0, c,   0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Builds a rotation matrix around the Z axis by `angle` radians.
    #[rustfmt::skip]
    pub fn rotation_z(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        let (s, c, ns) = (canonicalize_zero(s), canonicalize_zero(c), canonicalize_zero(-s));
        Self::new([
            c,   s,   0.0, 0.0,
            ns,  c,   0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Builds a rotation matrix from Euler angles in radians.
    ///
    /// Starts from identity and post-multiplies `rotate_y(yaw)`,
    /// `rotate_x(pitch)`, `rotate_z(roll)` in that order, i.e.
    /// `R = R_y(yaw) · R_x(pitch) · R_z(roll)`.
    ///
    /// # Examples
    /// ```
    /// use core::f32::consts::FRAC_PI_2;
    /// use rocket_math::{Mat4, Vec3};
    /// // Yaw=90°: +Z maps to +X
    /// let r = Mat4::rotation_from_euler(FRAC_PI_2, 0.0, 0.0);
    /// let v = r.transform_direction(&Vec3::UNIT_Z);
    /// assert!((v.x() - 1.0).abs() < 1e-6);
    /// ```
    pub fn rotation_from_euler(yaw: f32, pitch: f32, roll: f32) -> Self {
        Self::IDENTITY
            .rotated_y(yaw)
            .rotated_x(pitch)
            .rotated_z(roll)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn billboard_without_forward_at_camera_is_translation_only() {
        let p = Vec3::new(1.0, 2.0, 3.0);
        let m = Mat4::billboard(p, p, Vec3::UNIT_Y);
        assert_eq!(m, Mat4::translation(1.0, 2.0, 3.0));
    }

    #[test]
    fn zero_field_of_view_is_rejected() {
        assert_eq!(
            Mat4::perspective(0.0, 1.0, 0.1, 100.0),
            Err(MatrixError::InvalidFieldOfView { degrees: 0.0 })
        );
        assert!(Mat4::perspective(360.0, 1.0, 0.1, 100.0).is_err());
    }

    #[test]
    fn set_perspective_keeps_previous_contents_on_error() {
        let mut m = Mat4::translation(4.0, 5.0, 6.0);
        assert!(m.set_perspective(180.0, 1.0, 0.1, 100.0).is_err());
        assert_eq!(m, Mat4::translation(4.0, 5.0, 6.0));
        assert!(m.set_perspective(60.0, 1.0, 0.1, 100.0).is_ok());
        assert_eq!(m.get(3, 2), -1.0);
    }
}
