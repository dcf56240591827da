// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use tracing::debug;

use crate::error::MatrixError;
use crate::math::{Mat4, TOLERANCE};

/// 2×2 minors: `a` from columns 0/1, `b` from columns 2/3.
struct Minors {
    a: [f32; 6],
    b: [f32; 6],
}

impl Minors {
    fn of(m: &[f32; 16]) -> Self {
        Self {
            a: [
                m[0] * m[5] - m[1] * m[4],
                m[0] * m[6] - m[2] * m[4],
                m[0] * m[7] - m[3] * m[4],
                m[1] * m[6] - m[2] * m[5],
                m[1] * m[7] - m[3] * m[5],
                m[2] * m[7] - m[3] * m[6],
            ],
            b: [
                m[8] * m[13] - m[9] * m[12],
                m[8] * m[14] - m[10] * m[12],
                m[8] * m[15] - m[11] * m[12],
                m[9] * m[14] - m[10] * m[13],
                m[9] * m[15] - m[11] * m[13],
                m[10] * m[15] - m[11] * m[14],
            ],
        }
    }

    fn determinant(&self) -> f32 {
        let [a0, a1, a2, a3, a4, a5] = self.a;
        let [b0, b1, b2, b3, b4, b5] = self.b;
        a0 * b5 - a1 * b4 + a2 * b3 + a3 * b2 - a4 * b1 + a5 * b0
    }
}

impl Mat4 {
    /// Determinant via Laplace expansion over 2×2 minors.
    pub fn determinant(&self) -> f32 {
        Minors::of(&self.data).determinant()
    }

    /// Returns the inverse (`adjugate / det`).
    ///
    /// # Errors
    /// [`MatrixError::Singular`] when `|det| <= TOLERANCE`.
    ///
    /// # Examples
    /// ```
    /// use rocket_math::{Mat4, MatrixError};
    /// let t = Mat4::translation(1.0, 2.0, 3.0);
    /// assert_eq!(t.inverse(), Ok(Mat4::translation(-1.0, -2.0, -3.0)));
    /// assert!(matches!(Mat4::ZERO.inverse(), Err(MatrixError::Singular { .. })));
    /// ```
    pub fn inverse(&self) -> Result<Self, MatrixError> {
        let m = &self.data;
        let minors = Minors::of(m);
        let det = minors.determinant();

        if det.abs() <= TOLERANCE {
            debug!(determinant = det, "matrix not invertible");
            return Err(MatrixError::Singular { determinant: det });
        }

        let [a0, a1, a2, a3, a4, a5] = minors.a;
        let [b0, b1, b2, b3, b4, b5] = minors.b;

        let adjugate = Self::new([
            m[5] * b5 - m[6] * b4 + m[7] * b3,
            -m[1] * b5 + m[2] * b4 - m[3] * b3,
            m[13] * a5 - m[14] * a4 + m[15] * a3,
            -m[9] * a5 + m[10] * a4 - m[11] * a3,
            -m[4] * b5 + m[6] * b2 - m[7] * b1,
            m[0] * b5 - m[2] * b2 + m[3] * b1,
            -m[12] * a5 + m[14] * a2 - m[15] * a1,
            m[8] * a5 - m[10] * a2 + m[11] * a1,
            m[4] * b4 - m[5] * b2 + m[7] * b0,
            -m[0] * b4 + m[1] * b2 - m[3] * b0,
            m[12] * a4 - m[13] * a2 + m[15] * a0,
            -m[8] * a4 + m[9] * a2 - m[11] * a0,
            -m[4] * b3 + m[5] * b1 - m[6] * b0,
            m[0] * b3 - m[1] * b1 + m[2] * b0,
            -m[12] * a3 + m[13] * a1 - m[14] * a0,
            m[8] * a3 - m[9] * a1 + m[10] * a0,
        ]);

        Ok(adjugate.multiply_scalar(1.0 / det))
    }

    /// Inverts in place; `self` is unchanged on error.
    ///
    /// # Errors
    /// See [`Mat4::inverse`].
    pub fn invert(&mut self) -> Result<(), MatrixError> {
        *self = self.inverse()?;
        Ok(())
    }
}
