//! Row-major 4×4 matrices.
//!
//! [`RowMatrix`] follows the row-vector convention: a point is transformed
//! as `p' = p * M`, the 3×3 linear part sits in rows/columns 0–2 and the
//! translation is stored in row 3, with `rows[3][3] == 1`. Every builder in
//! this crate produces this one layout, so products of its matrices chain
//! left to right (`local * parent`).

use std::ops::Mul;

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use crate::angles::{DEG_TO_RAD, EulerAngles};
use crate::error::MathError;

/// A 4×4 matrix stored row by row, translation in row 3.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RowMatrix {
    /// The four rows, each `[c0, c1, c2, c3]`.
    pub rows: [[f32; 4]; 4],
}

impl RowMatrix {
    /// Number of elements in a flattened matrix.
    pub const LEN: usize = 16;

    /// The identity matrix.
    pub const IDENTITY: Self = Self {
        rows: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    /// All zeros.
    pub const ZERO: Self = Self {
        rows: [[0.0; 4]; 4],
    };

    /// Create a matrix from its rows.
    #[must_use]
    pub const fn from_rows(rows: [[f32; 4]; 4]) -> Self {
        Self { rows }
    }

    /// Rotation matrix for `angles` with `origin` as its translation.
    ///
    /// Angles are in degrees (pitch, yaw, roll). Row 0 is the forward axis,
    /// row 1 the right axis, row 2 the up axis and row 3 the origin.
    #[must_use]
    pub fn from_euler(angles: EulerAngles, origin: Vec3) -> Self {
        let (sp, cp) = sin_cos_deg(angles.pitch);
        let (sy, cy) = sin_cos_deg(angles.yaw);
        let (sr, cr) = sin_cos_deg(angles.roll);

        Self {
            rows: [
                [cp * cy, cp * sy, sp, 0.0],
                [sr * sp * cy - cr * sy, sr * sp * sy + cr * cy, -sr * cp, 0.0],
                [-(cr * sp * cy + sr * sy), cy * sr - cr * sp * sy, cr * cp, 0.0],
                [origin.x, origin.y, origin.z, 1.0],
            ],
        }
    }

    /// Matrix product `self * rhs`.
    ///
    /// With the row-vector convention this applies `self` first, then `rhs`.
    #[must_use]
    pub fn multiply(&self, rhs: &Self) -> Self {
        let mut out = Self::ZERO;
        for i in 0..4 {
            for j in 0..4 {
                let mut sum = 0.0;
                for k in 0..4 {
                    sum += self.rows[i][k] * rhs.rows[k][j];
                }
                out.rows[i][j] = sum;
            }
        }
        out
    }

    /// The translation stored in row 3.
    #[must_use]
    pub fn translation(&self) -> Vec3 {
        self.row_axis(3)
    }

    /// The first three elements of row `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index > 3`.
    #[must_use]
    pub fn row_axis(&self, index: usize) -> Vec3 {
        let r = self.rows[index];
        Vec3::new(r[0], r[1], r[2])
    }

    /// Transform a point (w = 1) by this matrix.
    #[must_use]
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        let m = &self.rows;
        Vec3::new(
            p.x * m[0][0] + p.y * m[1][0] + p.z * m[2][0] + m[3][0],
            p.x * m[0][1] + p.y * m[1][1] + p.z * m[2][1] + m[3][1],
            p.x * m[0][2] + p.y * m[1][2] + p.z * m[2][2] + m[3][2],
        )
    }

    /// Flatten into 16 elements, row by row.
    #[must_use]
    pub fn to_flat(&self) -> [f32; 16] {
        let mut out = [0.0; 16];
        for (i, row) in self.rows.iter().enumerate() {
            out[i * 4..i * 4 + 4].copy_from_slice(row);
        }
        out
    }

    /// Returns `true` if every element is within `eps` of `other`'s.
    #[must_use]
    pub fn abs_diff_eq(&self, other: &Self, eps: f32) -> bool {
        self.rows
            .iter()
            .flatten()
            .zip(other.rows.iter().flatten())
            .all(|(a, b)| (a - b).abs() <= eps)
    }
}

fn sin_cos_deg(degrees: f32) -> (f32, f32) {
    let rad = degrees * DEG_TO_RAD;
    (rad.sin(), rad.cos())
}

impl Default for RowMatrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for RowMatrix {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl From<[[f32; 4]; 4]> for RowMatrix {
    fn from(rows: [[f32; 4]; 4]) -> Self {
        Self { rows }
    }
}

impl From<RowMatrix> for [[f32; 4]; 4] {
    fn from(m: RowMatrix) -> Self {
        m.rows
    }
}

impl TryFrom<&[f32]> for RowMatrix {
    type Error = MathError;

    /// Read a flat, row-by-row slice of exactly 16 elements.
    fn try_from(flat: &[f32]) -> Result<Self, MathError> {
        if flat.len() != Self::LEN {
            return Err(MathError::MatrixLength {
                expected: Self::LEN,
                actual: flat.len(),
            });
        }
        let mut out = Self::ZERO;
        for (row, chunk) in out.rows.iter_mut().zip(flat.chunks_exact(4)) {
            row.copy_from_slice(chunk);
        }
        Ok(out)
    }
}

/// Rows become glam columns, so the glam matrix applies the same transform
/// under glam's column-vector convention (`Mat4 * v`).
impl From<RowMatrix> for Mat4 {
    fn from(m: RowMatrix) -> Self {
        Mat4::from_cols_array_2d(&m.rows)
    }
}

impl From<Mat4> for RowMatrix {
    fn from(m: Mat4) -> Self {
        Self {
            rows: m.to_cols_array_2d(),
        }
    }
}
