// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::math::{Mat4, Vec3, EPSILON};

/// Quaternion stored as `(x, y, z, w)` with `w` the scalar part.
///
/// * All angles are expressed in radians.
/// * Rotations are expected to be unit quaternions; [`Mat4::from_quat`] does
///   not renormalize.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Quat {
    data: [f32; 4],
}

impl Quat {
    /// Creates a quaternion from components.
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { data: [x, y, z, w] }
    }

    /// Returns the identity quaternion.
    pub const fn identity() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    /// Returns the quaternion as an array.
    pub const fn to_array(self) -> [f32; 4] {
        self.data
    }

    /// X component.
    pub const fn x(&self) -> f32 {
        self.data[0]
    }

    /// Y component.
    pub const fn y(&self) -> f32 {
        self.data[1]
    }

    /// Z component.
    pub const fn z(&self) -> f32 {
        self.data[2]
    }

    /// W (scalar) component.
    pub const fn w(&self) -> f32 {
        self.data[3]
    }

    /// Constructs a quaternion from a rotation axis and angle in radians.
    ///
    /// Returns the identity quaternion when the axis length is ≤ `EPSILON`.
    pub fn from_axis_angle(axis: Vec3, angle: f32) -> Self {
        let len_sq = axis.length_squared();
        if len_sq <= EPSILON * EPSILON {
            return Self::identity();
        }
        let norm_axis = axis.scale(1.0 / len_sq.sqrt());
        let (sin_half, cos_half) = (angle * 0.5).sin_cos();
        let scaled = norm_axis.scale(sin_half);
        Self::new(scaled.x(), scaled.y(), scaled.z(), cos_half)
    }

    /// Hamilton product of two quaternions (`self * other`).
    ///
    /// Operand order matters: the result applies `other` first, then `self`,
    /// matching [`Mat4::multiply`] on the corresponding rotation matrices.
    ///
    /// # Examples
    /// ```
    /// use core::f32::consts::FRAC_PI_2;
    /// use rocket_math::{Quat, Vec3};
    /// let yaw = Quat::from_axis_angle(Vec3::UNIT_Y, FRAC_PI_2);
    /// let pitch = Quat::from_axis_angle(Vec3::UNIT_X, FRAC_PI_2);
    /// assert_ne!(yaw.multiply(&pitch).to_array(), pitch.multiply(&yaw).to_array());
    /// ```
    pub fn multiply(&self, other: &Self) -> Self {
        let [ax, ay, az, aw] = self.data;
        let [bx, by, bz, bw] = other.data;

        Self::new(
            aw * bx + ax * bw + ay * bz - az * by,
            aw * by - ax * bz + ay * bw + az * bx,
            aw * bz + ax * by - ay * bx + az * bw,
            aw * bw - ax * bx - ay * by - az * bz,
        )
    }

    /// 4D dot product; `|dot| ≈ 1` for two unit quaternions encoding the same rotation.
    pub fn dot(&self, other: &Self) -> f32 {
        self.data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a * b)
            .sum()
    }

    /// Quaternion norm.
    pub fn length(&self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Normalises the quaternion; returns identity when norm is ~0.
    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len <= EPSILON {
            return Self::identity();
        }
        let inv = 1.0 / len;
        Self::new(
            self.x() * inv,
            self.y() * inv,
            self.z() * inv,
            self.w() * inv,
        )
    }

    /// Converts the normalized quaternion to a rotation matrix.
    pub fn to_mat4(&self) -> Mat4 {
        Mat4::from_quat(&self.normalize())
    }
}

impl Default for Quat {
    fn default() -> Self {
        Self::identity()
    }
}

/// Components are taken verbatim as `(x, y, z, w)`; normalization is not enforced.
impl From<[f32; 4]> for Quat {
    fn from(value: [f32; 4]) -> Self {
        Self { data: value }
    }
}
