//! Positions and Euler angles.
//!
//! Both types are three `f32`s, but they mean different things: a
//! [`Position`] is a point in world space, an [`EulerAngles`] is an
//! orientation in degrees. Keeping them apart stops an orientation from
//! being fed where a location is expected. Converting between them (or to a
//! bare [`Vec3`]) is always explicit via `From`.

use std::ops::{Mul, Sub};

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::matrix::RowMatrix;

/// Degrees-to-radians factor used by every angle conversion in this crate.
pub(crate) const DEG_TO_RAD: f32 = std::f32::consts::PI / 180.0;

/// A point or direction in world space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Position(pub Vec3);

impl Position {
    /// The world origin.
    pub const ORIGIN: Self = Self(Vec3::ZERO);

    /// Create a position from its coordinates.
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self(Vec3::new(x, y, z))
    }

    /// Dot product of the two positions taken as vectors.
    #[must_use]
    pub fn dot(self, other: Self) -> f32 {
        self.0.dot(other.0)
    }
}

impl From<Vec3> for Position {
    fn from(v: Vec3) -> Self {
        Self(v)
    }
}

impl From<Position> for Vec3 {
    fn from(p: Position) -> Self {
        p.0
    }
}

/// Offset from `rhs` to `self`.
impl Sub for Position {
    type Output = Vec3;

    fn sub(self, rhs: Self) -> Vec3 {
        self.0 - rhs.0
    }
}

/// An orientation as pitch, yaw and roll, in degrees.
///
/// Laid out as a [`Vec3`] with pitch in X, yaw in Y and roll in Z, which is
/// what the `From` conversions produce and consume.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EulerAngles {
    /// Rotation about the lateral axis, in degrees.
    pub pitch: f32,
    /// Rotation about the vertical axis, in degrees.
    pub yaw: f32,
    /// Rotation about the forward axis, in degrees.
    pub roll: f32,
}

impl EulerAngles {
    /// No rotation.
    pub const ZERO: Self = Self {
        pitch: 0.0,
        yaw: 0.0,
        roll: 0.0,
    };

    /// Create a new orientation.
    #[must_use]
    pub const fn new(pitch: f32, yaw: f32, roll: f32) -> Self {
        Self { pitch, yaw, roll }
    }

    /// Unit forward direction for this pitch and yaw. Roll does not affect
    /// the forward axis and is ignored.
    ///
    /// Equal to row 0 of [`EulerAngles::to_matrix`].
    #[must_use]
    pub fn forward(self) -> Vec3 {
        let (sp, cp) = (self.pitch * DEG_TO_RAD).sin_cos();
        let (sy, cy) = (self.yaw * DEG_TO_RAD).sin_cos();
        Vec3::new(cp * cy, cp * sy, sp)
    }

    /// The forward, right and up axes of this orientation, read from rows
    /// 0, 1 and 2 of the rotation matrix.
    #[must_use]
    pub fn axes(self) -> (Vec3, Vec3, Vec3) {
        let m = self.to_matrix();
        (m.row_axis(0), m.row_axis(1), m.row_axis(2))
    }

    /// Rotation matrix for this orientation with no translation.
    #[must_use]
    pub fn to_matrix(self) -> RowMatrix {
        RowMatrix::from_euler(self, Vec3::ZERO)
    }

    /// Returns `true` if every component is finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.pitch.is_finite() && self.yaw.is_finite() && self.roll.is_finite()
    }
}

impl From<Vec3> for EulerAngles {
    fn from(v: Vec3) -> Self {
        Self {
            pitch: v.x,
            yaw: v.y,
            roll: v.z,
        }
    }
}

impl From<EulerAngles> for Vec3 {
    fn from(a: EulerAngles) -> Self {
        Vec3::new(a.pitch, a.yaw, a.roll)
    }
}

impl Sub for EulerAngles {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self {
            pitch: self.pitch - rhs.pitch,
            yaw: self.yaw - rhs.yaw,
            roll: self.roll - rhs.roll,
        }
    }
}

impl Mul<f32> for EulerAngles {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self {
            pitch: self.pitch * rhs,
            yaw: self.yaw * rhs,
            roll: self.roll * rhs,
        }
    }
}
