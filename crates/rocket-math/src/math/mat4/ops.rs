// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Elementwise arithmetic, matrix products, transpose and the post-multiply
//! composition helpers (`rotate_*`, `scale_*`, `translate`).

use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::math::{Mat4, Quat, Vec3, Vec4};

impl Mat4 {
    fn map(&self, f: impl Fn(f32) -> f32) -> Self {
        Self::new(self.data.map(f))
    }

    fn zip_with(&self, rhs: &Self, f: impl Fn(f32, f32) -> f32) -> Self {
        let mut out = [0.0; 16];
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = f(self.data[i], rhs.data[i]);
        }
        Self::new(out)
    }

    /// Adds `scalar` to every element.
    pub fn add_scalar(&self, scalar: f32) -> Self {
        self.map(|v| v + scalar)
    }

    /// Subtracts `scalar` from every element.
    pub fn sub_scalar(&self, scalar: f32) -> Self {
        self.map(|v| v - scalar)
    }

    /// Multiplies every element by `scalar`.
    pub fn multiply_scalar(&self, scalar: f32) -> Self {
        self.map(|v| v * scalar)
    }

    /// Negates every element in place.
    pub fn negate(&mut self) {
        *self = -*self;
    }

    /// Multiplies the matrix with another matrix (`self * rhs`).
    ///
    /// The product applies `rhs` first, then `self`, when transforming column
    /// vectors. The result is accumulated in a local buffer, so either operand
    /// may be the value being assigned to.
    ///
    /// # Examples
    /// ```
    /// use rocket_math::Mat4;
    /// let a = Mat4::identity();
    /// let b = Mat4::scale(2.0, 3.0, 4.0);
    /// assert_eq!(a.multiply(&b).to_array(), b.to_array());
    /// ```
    pub fn multiply(&self, rhs: &Self) -> Self {
        let mut out = [0.0; 16];
        for col in 0..4 {
            for row in 0..4 {
                let mut sum = 0.0;
                for k in 0..4 {
                    sum += self.get(row, k) * rhs.get(k, col);
                }
                out[Self::index(row, col)] = sum;
            }
        }
        Self::new(out)
    }

    /// Returns the transpose.
    pub fn transposed(&self) -> Self {
        let mut out = [0.0; 16];
        for col in 0..4 {
            for row in 0..4 {
                out[Self::index(col, row)] = self.get(row, col);
            }
        }
        Self::new(out)
    }

    /// Transposes in place.
    pub fn transpose(&mut self) {
        *self = self.transposed();
    }

    /// `self · R(q)`.
    pub fn rotated(&self, q: &Quat) -> Self {
        self.multiply(&Self::from_quat(q))
    }

    /// Post-multiplies by the rotation for `q`.
    pub fn rotate(&mut self, q: &Quat) {
        *self = self.rotated(q);
    }

    /// `self · R(axis, angle)`.
    pub fn rotated_axis_angle(&self, axis: Vec3, angle: f32) -> Self {
        self.multiply(&Self::rotation_axis_angle(axis, angle))
    }

    /// Post-multiplies by an axis-angle rotation.
    pub fn rotate_axis_angle(&mut self, axis: Vec3, angle: f32) {
        *self = self.rotated_axis_angle(axis, angle);
    }

    /// `self · R_x(angle)`.
    pub fn rotated_x(&self, angle: f32) -> Self {
        self.multiply(&Self::rotation_x(angle))
    }

    /// Post-multiplies by a rotation about X.
    pub fn rotate_x(&mut self, angle: f32) {
        *self = self.rotated_x(angle);
    }

    /// `self · R_y(angle)`.
    pub fn rotated_y(&self, angle: f32) -> Self {
        self.multiply(&Self::rotation_y(angle))
    }

    /// Post-multiplies by a rotation about Y.
    pub fn rotate_y(&mut self, angle: f32) {
        *self = self.rotated_y(angle);
    }

    /// `self · R_z(angle)`.
    pub fn rotated_z(&self, angle: f32) -> Self {
        self.multiply(&Self::rotation_z(angle))
    }

    /// Post-multiplies by a rotation about Z.
    pub fn rotate_z(&mut self, angle: f32) {
        *self = self.rotated_z(angle);
    }

    /// `self · S(sx, sy, sz)`.
    pub fn scaled(&self, sx: f32, sy: f32, sz: f32) -> Self {
        self.multiply(&Self::scale(sx, sy, sz))
    }

    /// Post-multiplies by a non-uniform scale.
    pub fn scale_by(&mut self, sx: f32, sy: f32, sz: f32) {
        *self = self.scaled(sx, sy, sz);
    }

    /// `self · S(s, s, s)`.
    pub fn scaled_uniform(&self, s: f32) -> Self {
        self.scaled(s, s, s)
    }

    /// Post-multiplies by a uniform scale.
    pub fn scale_uniform(&mut self, s: f32) {
        *self = self.scaled_uniform(s);
    }

    /// `self · T(tx, ty, tz)`.
    pub fn translated(&self, tx: f32, ty: f32, tz: f32) -> Self {
        self.multiply(&Self::translation(tx, ty, tz))
    }

    /// Post-multiplies by a translation.
    pub fn translate(&mut self, tx: f32, ty: f32, tz: f32) {
        *self = self.translated(tx, ty, tz);
    }
}

impl Add for Mat4 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        self.zip_with(&rhs, |a, b| a + b)
    }
}

impl Add<f32> for Mat4 {
    type Output = Self;
    fn add(self, rhs: f32) -> Self::Output {
        self.add_scalar(rhs)
    }
}

impl AddAssign for Mat4 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl AddAssign<f32> for Mat4 {
    fn add_assign(&mut self, rhs: f32) {
        *self = self.add_scalar(rhs);
    }
}

impl Sub for Mat4 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        self.zip_with(&rhs, |a, b| a - b)
    }
}

impl Sub<f32> for Mat4 {
    type Output = Self;
    fn sub(self, rhs: f32) -> Self::Output {
        self.sub_scalar(rhs)
    }
}

impl SubAssign for Mat4 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl SubAssign<f32> for Mat4 {
    fn sub_assign(&mut self, rhs: f32) {
        *self = self.sub_scalar(rhs);
    }
}

impl Neg for Mat4 {
    type Output = Self;
    fn neg(self) -> Self::Output {
        self.map(|v| -v)
    }
}

impl Mul for Mat4 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl Mul<&Mat4> for Mat4 {
    type Output = Self;
    fn mul(self, rhs: &Mat4) -> Self::Output {
        self.multiply(rhs)
    }
}

impl Mul<f32> for Mat4 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self::Output {
        self.multiply_scalar(rhs)
    }
}

impl Mul<Vec4> for Mat4 {
    type Output = Vec4;
    fn mul(self, rhs: Vec4) -> Self::Output {
        self.transform_vec4(&rhs)
    }
}

impl MulAssign for Mat4 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(&rhs);
    }
}

impl MulAssign<&Mat4> for Mat4 {
    fn mul_assign(&mut self, rhs: &Mat4) {
        *self = self.multiply(rhs);
    }
}

impl MulAssign<f32> for Mat4 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = self.multiply_scalar(rhs);
    }
}
