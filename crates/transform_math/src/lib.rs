//! # transform_math
//!
//! Spatial transform math for a real-time simulation host. Re-exports
//! [`glam`] for the native vector types and defines:
//!
//! - [`angles`] — [`Position`] and [`EulerAngles`], two distinct wrappers
//!   over the same three-float layout.
//! - [`matrix`] — [`RowMatrix`], a row-major 4×4 matrix with translation in
//!   row 3, plus the Euler-to-matrix builder and matrix multiplication.
//! - [`transform`] — [`Transform`] (quaternion, translation, scale) and its
//!   matrix builder.
//! - [`aim`] — [`calc_rotation`], the smoothed look-at angle calculation.
//! - [`convert`] — plain `#[repr(C)]` layouts for interop with external
//!   vector libraries, with lossless conversions both ways.
//! - [`error`] — errors for the few structurally fallible conversions.
//!
//! Every function is pure and allocation-free.
//!
//! ## Usage
//!
//! ```rust
//! use transform_math::{calc_rotation, EulerAngles, Position, RowMatrix, Vec3};
//!
//! let eye = Position::new(0.0, 0.0, 0.0);
//! let target = Position::new(10.0, 10.0, 0.0);
//!
//! let angles = calc_rotation(eye, target, EulerAngles::ZERO, 0.0);
//! assert!((angles.yaw - 45.0).abs() < 1e-4);
//!
//! let world = RowMatrix::from_euler(angles, eye.into());
//! assert_eq!(world.translation(), Vec3::from(eye));
//! ```

pub mod aim;
pub mod angles;
pub mod convert;
pub mod error;
pub mod matrix;
pub mod transform;

// Re-export glam types for convenience.
pub use glam::{Mat4, Quat, Vec2, Vec3, Vec4};

pub use aim::{AngleSolver, calc_rotation, calc_rotation_with};
pub use angles::{EulerAngles, Position};
pub use convert::{Color, RawColor, RawVec2, RawVec3};
pub use error::MathError;
pub use matrix::RowMatrix;
pub use transform::Transform;
