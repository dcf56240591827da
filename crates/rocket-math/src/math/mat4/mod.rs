// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use bytemuck::{Pod, Zeroable};

use crate::error::MatrixError;
use crate::math::{Vec3, Vec4};

mod construct;
mod decompose;
mod invert;
mod ops;

/// Column‑major 4×4 matrix.
///
/// - Element `(row, col)` lives at `col * 4 + row`; translation occupies
///   indices 12, 13, 14.
/// - Matrices act on column vectors on the right (`M · v`), so
///   `a.multiply(&b)` applies `b` first, then `a`.
/// - [`Mat4::from_row_major`] accepts values in human reading order and
///   transposes them into storage.
///
/// # Examples
/// ```
/// use rocket_math::{Mat4, Vec3};
/// let t = Mat4::translation(5.0, -3.0, 2.0);
/// let p = Vec3::new(2.0, 4.0, -1.0);
/// assert_eq!(t.transform_point(&p).to_array(), [7.0, 1.0, 1.0]);
/// ```
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Mat4 {
    data: [f32; 16],
}

impl Mat4 {
    /// The identity matrix.
    pub const IDENTITY: Self = Self::new([
        1.0, 0.0, 0.0, 0.0, // col 0
        0.0, 1.0, 0.0, 0.0, // col 1
        0.0, 0.0, 1.0, 0.0, // col 2
        0.0, 0.0, 0.0, 1.0, // col 3
    ]);

    /// The all-zero matrix.
    pub const ZERO: Self = Self::new([0.0; 16]);

    /// Returns the identity matrix.
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Returns the all-zero matrix.
    pub const fn zero() -> Self {
        Self::ZERO
    }

    /// Creates a matrix from column-major array data.
    pub const fn new(data: [f32; 16]) -> Self {
        Self { data }
    }

    /// Creates a matrix from sixteen values in row-major reading order
    /// (`m11, m12, m13, m14, m21, …, m44`).
    ///
    /// # Examples
    /// ```
    /// use rocket_math::Mat4;
    /// let m = Mat4::from_row_major([
    ///     1.0, 0.0, 0.0, 7.0,
    ///     0.0, 1.0, 0.0, 8.0,
    ///     0.0, 0.0, 1.0, 9.0,
    ///     0.0, 0.0, 0.0, 1.0,
    /// ]);
    /// assert_eq!(m, Mat4::translation(7.0, 8.0, 9.0));
    /// ```
    pub const fn from_row_major(rows: [f32; 16]) -> Self {
        let mut data = [0.0; 16];
        let mut row = 0;
        while row < 4 {
            let mut col = 0;
            while col < 4 {
                data[Self::index(row, col)] = rows[row * 4 + col];
                col += 1;
            }
            row += 1;
        }
        Self { data }
    }

    /// Linear storage offset of `(row, col)`.
    ///
    /// Both indices must be below 4; debug builds assert this.
    #[inline]
    pub const fn index(row: usize, col: usize) -> usize {
        debug_assert!(row < 4 && col < 4, "matrix index out of range");
        col * 4 + row
    }

    /// Element at `(row, col)`.
    #[inline]
    pub const fn get(&self, row: usize, col: usize) -> f32 {
        self.data[Self::index(row, col)]
    }

    /// Overwrites the element at `(row, col)`.
    #[inline]
    pub fn set_element(&mut self, row: usize, col: usize, value: f32) {
        self.data[Self::index(row, col)] = value;
    }

    /// Column `col` as `[row0, row1, row2, row3]`.
    pub fn column(&self, col: usize) -> [f32; 4] {
        let base = col * 4;
        [
            self.data[base],
            self.data[base + 1],
            self.data[base + 2],
            self.data[base + 3],
        ]
    }

    /// Row `row` as `[col0, col1, col2, col3]`.
    pub fn row(&self, row: usize) -> [f32; 4] {
        [
            self.get(row, 0),
            self.get(row, 1),
            self.get(row, 2),
            self.get(row, 3),
        ]
    }

    /// Returns the matrix as a column‑major array.
    pub const fn to_array(self) -> [f32; 16] {
        self.data
    }

    /// Borrows the column-major storage.
    pub const fn as_array(&self) -> &[f32; 16] {
        &self.data
    }

    /// Raw bytes of the column-major storage, ready for a GPU upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// Returns `true` only for the exact identity bit pattern.
    ///
    /// No tolerance is applied; `-0.0` off the diagonal is not identity.
    pub fn is_identity(&self) -> bool {
        self.data
            .iter()
            .zip(Self::IDENTITY.data.iter())
            .all(|(a, b)| a.to_bits() == b.to_bits())
    }

    /// Resets to the identity matrix.
    pub fn set_identity(&mut self) {
        *self = Self::IDENTITY;
    }

    /// Resets every element to zero.
    pub fn set_zero(&mut self) {
        *self = Self::ZERO;
    }

    /// Copies another matrix into `self`.
    pub fn set(&mut self, other: &Self) {
        self.data = other.data;
    }

    /// Overwrites `self` with row-major values (see [`Mat4::from_row_major`]).
    pub fn set_row_major(&mut self, rows: [f32; 16]) {
        *self = Self::from_row_major(rows);
    }

    fn column_xyz(&self, col: usize) -> Vec3 {
        let base = col * 4;
        Vec3::new(self.data[base], self.data[base + 1], self.data[base + 2])
    }

    /// Local +Y axis (column 1).
    pub fn up_vector(&self) -> Vec3 {
        self.column_xyz(1)
    }

    /// Local −Y axis.
    pub fn down_vector(&self) -> Vec3 {
        -self.column_xyz(1)
    }

    /// Local +X axis (column 0).
    pub fn right_vector(&self) -> Vec3 {
        self.column_xyz(0)
    }

    /// Local −X axis.
    pub fn left_vector(&self) -> Vec3 {
        -self.column_xyz(0)
    }

    /// Local −Z axis; cameras look down −Z.
    pub fn forward_vector(&self) -> Vec3 {
        -self.column_xyz(2)
    }

    /// Local +Z axis (column 2).
    pub fn back_vector(&self) -> Vec3 {
        self.column_xyz(2)
    }

    fn transform_xyzw(&self, x: f32, y: f32, z: f32, w: f32) -> [f32; 4] {
        let m = &self.data;
        [
            m[0] * x + m[4] * y + m[8] * z + m[12] * w,
            m[1] * x + m[5] * y + m[9] * z + m[13] * w,
            m[2] * x + m[6] * y + m[10] * z + m[14] * w,
            m[3] * x + m[7] * y + m[11] * z + m[15] * w,
        ]
    }

    /// Transforms a point (`w = 1`, no perspective divide).
    pub fn transform_point(&self, point: &Vec3) -> Vec3 {
        let [x, y, z, _] = self.transform_xyzw(point.x(), point.y(), point.z(), 1.0);
        Vec3::new(x, y, z)
    }

    /// Transforms a direction vector (ignores translation, `w = 0`).
    pub fn transform_direction(&self, direction: &Vec3) -> Vec3 {
        let [x, y, z, _] = self.transform_xyzw(direction.x(), direction.y(), direction.z(), 0.0);
        Vec3::new(x, y, z)
    }

    /// Full 4×4 × 4×1 product.
    pub fn transform_vec4(&self, v: &Vec4) -> Vec4 {
        Vec4::from(self.transform_xyzw(v.x(), v.y(), v.z(), v.w()))
    }

    /// Transforms every vector of `vectors` in place.
    pub fn transform_vec4_slice(&self, vectors: &mut [Vec4]) {
        for v in vectors.iter_mut() {
            *v = self.transform_vec4(v);
        }
    }

    /// Transforms a packed `[x, y, z, w, x, y, z, w, …]` buffer in place.
    ///
    /// # Errors
    /// [`MatrixError::Layout`] when the buffer length is not a multiple of four.
    pub fn transform_raw(&self, floats: &mut [f32]) -> Result<(), MatrixError> {
        let vectors: &mut [Vec4] = bytemuck::try_cast_slice_mut(floats)?;
        self.transform_vec4_slice(vectors);
        Ok(())
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<[f32; 16]> for Mat4 {
    fn from(value: [f32; 16]) -> Self {
        Self { data: value }
    }
}

impl AsRef<[f32; 16]> for Mat4 {
    fn as_ref(&self) -> &[f32; 16] {
        &self.data
    }
}
