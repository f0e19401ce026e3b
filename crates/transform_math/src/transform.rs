//! Rotation, translation and scale.
//!
//! [`Transform`] is what a host hands over once per frame for each entity
//! that needs a world matrix. It is consumed by
//! [`Transform::to_matrix_with_scale`] and not kept around.

use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::matrix::RowMatrix;

/// A 3D transform: quaternion rotation, translation and per-axis scale.
///
/// The rotation must be a unit quaternion. That is a precondition on the
/// caller: nothing here normalises or checks it, and a non-unit quaternion
/// yields a skewed matrix.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Transform {
    /// Rotation as a unit quaternion.
    pub rotation: Quat,
    /// World-space translation.
    pub translation: Vec3,
    /// Per-axis scale. Zero is allowed and gives a singular matrix.
    pub scale: Vec3,
}

impl Transform {
    /// The identity transform: origin, no rotation, unit scale.
    pub const IDENTITY: Self = Self {
        rotation: Quat::IDENTITY,
        translation: Vec3::ZERO,
        scale: Vec3::ONE,
    };

    /// Create a transform from all three parts.
    #[must_use]
    pub fn new(rotation: Quat, translation: Vec3, scale: Vec3) -> Self {
        Self {
            rotation,
            translation,
            scale,
        }
    }

    /// Create a transform with the given translation and default rotation/scale.
    #[must_use]
    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Self::IDENTITY
        }
    }

    /// Create a transform with translation and rotation.
    #[must_use]
    pub fn from_translation_rotation(translation: Vec3, rotation: Quat) -> Self {
        Self {
            rotation,
            translation,
            ..Self::IDENTITY
        }
    }

    /// Replace the scale.
    #[must_use]
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Row-major world matrix: scaled rotation in rows 0–2, translation in
    /// row 3. Same layout as [`RowMatrix::from_euler`].
    ///
    /// Row `i` of the rotation block is the rotated basis axis `i`
    /// multiplied by the matching scale component.
    #[must_use]
    pub fn to_matrix_with_scale(&self) -> RowMatrix {
        let [x, y, z, w] = self.rotation.to_array();
        let s = self.scale;
        let t = self.translation;

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

        RowMatrix::from_rows([
            [
                (1.0 - (yy2 + zz2)) * s.x,
                (xy2 + wz2) * s.x,
                (xz2 - wy2) * s.x,
                0.0,
            ],
            [
                (xy2 - wz2) * s.y,
                (1.0 - (xx2 + zz2)) * s.y,
                (yz2 + wx2) * s.y,
                0.0,
            ],
            [
                (xz2 + wy2) * s.z,
                (yz2 - wx2) * s.z,
                (1.0 - (xx2 + yy2)) * s.z,
                0.0,
            ],
            [t.x, t.y, t.z, 1.0],
        ])
    }

    /// [`Transform::to_matrix_with_scale`] in glam's column-vector layout.
    #[must_use]
    pub fn to_mat4(&self) -> Mat4 {
        self.to_matrix_with_scale().into()
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
