//! Look-at angles with smoothing.
//!
//! [`calc_rotation`] turns an observer at `source` toward `destination` and
//! optionally eases the result toward the orientation it had last tick. It
//! keeps no state: the host passes the previous result back in as
//! `orig` on the next call.
//!
//! ## Degenerate input
//!
//! The default [`AngleSolver::Legacy`] derives yaw from `atan(dy / dx)` and
//! pitch from `atan(dz / hyp)`, where `hyp` is the horizontal distance.
//!
//! - Shared X only: `dy / dx` is ±∞ and `atan` maps it to a finite ±90°
//!   yaw. The quadrant flip then keys on the sign bit of `dx`. A `+0.0`
//!   offset points at the destination. A `-0.0` offset (for example
//!   `source.x == -0.0`, `destination.x == 0.0`) still counts as
//!   `dx >= 0` but has already flipped the infinity, so the yaw faces
//!   away from the destination. This quirk is kept for compatibility.
//! - Shared X and Y: yaw is NaN. Pitch is ±90° if Z differs, NaN if the
//!   points coincide.
//!
//! Non-finite results are returned as-is. Callers that cannot tolerate
//! them either discard such results or opt into [`AngleSolver::Atan2`].
//! It is finite for every finite input and faces the destination for
//! either sign of a zero `dx`. That is a deliberate behaviour change for
//! those degenerate cases.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::angles::{EulerAngles, Position};
use crate::error::MathError;

/// How yaw and pitch are derived from the offset between two points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AngleSolver {
    /// `atan` with a manual quadrant flip. Propagates NaN/∞ on degenerate
    /// input.
    #[default]
    Legacy,
    /// `atan2`. Same angles as [`AngleSolver::Legacy`] wherever the X
    /// offset is non-zero, and finite everywhere.
    Atan2,
}

impl AngleSolver {
    /// Lower-case name, as accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Legacy => "legacy",
            Self::Atan2 => "atan2",
        }
    }
}

impl fmt::Display for AngleSolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AngleSolver {
    type Err = MathError;

    fn from_str(s: &str) -> Result<Self, MathError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "legacy" => Ok(Self::Legacy),
            "atan2" => Ok(Self::Atan2),
            other => Err(MathError::UnknownSolver(other.to_string())),
        }
    }
}

/// Euler angles (pitch, yaw; roll is always zero before smoothing) that
/// point from `source` toward `destination`, eased toward `orig`.
///
/// When `smooth > 0` and the new yaw is within 180° of `orig.yaw`, every
/// component moves from the new value back toward `orig` by the fraction
/// `smooth`: `angles - (angles - orig) * smooth`. A `smooth` of 0 returns
/// the raw target angles, 1 returns `orig`.
///
/// Uses [`AngleSolver::Legacy`]; see the module docs for degenerate input.
#[must_use]
pub fn calc_rotation(
    source: Position,
    destination: Position,
    orig: EulerAngles,
    smooth: f32,
) -> EulerAngles {
    calc_rotation_with(AngleSolver::Legacy, source, destination, orig, smooth)
}

/// [`calc_rotation`] with an explicit [`AngleSolver`].
#[must_use]
pub fn calc_rotation_with(
    solver: AngleSolver,
    source: Position,
    destination: Position,
    orig: EulerAngles,
    smooth: f32,
) -> EulerAngles {
    let diff = source - destination;
    let hyp = (diff.x * diff.x + diff.y * diff.y).sqrt();

    let (pitch, yaw) = match solver {
        AngleSolver::Legacy => {
            let mut yaw = (diff.y / diff.x).atan().to_degrees();
            let pitch = -(diff.z / hyp).atan().to_degrees();
            // `atan` only covers half the circle; flip into the half that
            // faces the destination.
            if diff.x >= 0.0 {
                if yaw > 0.0 {
                    yaw -= 180.0;
                } else {
                    yaw += 180.0;
                }
            }
            (pitch, yaw)
        }
        AngleSolver::Atan2 => {
            let mut yaw = (-diff.y).atan2(-diff.x).to_degrees();
            // Legacy output lives in (-180, 180].
            if yaw <= -180.0 {
                yaw += 360.0;
            }
            let pitch = (-diff.z).atan2(hyp).to_degrees();
            (pitch, yaw)
        }
    };

    let mut angles = EulerAngles::new(pitch, yaw, 0.0);

    if !angles.is_finite() {
        debug!(
            ?source,
            ?destination,
            ?angles,
            "look-at angles are not finite for degenerate input"
        );
    }

    if smooth > 0.0 && (angles.yaw - orig.yaw).abs() < 180.0 {
        angles = angles - (angles - orig) * smooth;
    }

    angles
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    const EPS: f32 = 1e-4;

    fn origin() -> Position {
        Position::ORIGIN
    }

    #[test]
    fn test_destination_along_positive_x() {
        let a = calc_rotation(origin(), Position::new(1.0, 0.0, 0.0), EulerAngles::ZERO, 0.0);
        // diff.x < 0, so no quadrant flip: yaw stays at atan(-0) = 0.
        assert_eq!(a.yaw, 0.0);
        assert_eq!(a.pitch, 0.0);
        assert_eq!(a.roll, 0.0);
    }

    #[test]
    fn test_destination_along_negative_x_flips_to_180() {
        let a = calc_rotation(origin(), Position::new(-1.0, 0.0, 0.0), EulerAngles::ZERO, 0.0);
        assert_eq!(a.yaw, 180.0);
        assert_eq!(a.pitch, 0.0);
    }

    #[test]
    fn test_quadrants() {
        let cases = [
            ((1.0, 1.0), 45.0),
            ((-1.0, 1.0), 135.0),
            ((-1.0, -1.0), -135.0),
            ((1.0, -1.0), -45.0),
        ];
        for ((x, y), expected) in cases {
            let a = calc_rotation(origin(), Position::new(x, y, 0.0), EulerAngles::ZERO, 0.0);
            assert!((a.yaw - expected).abs() < EPS, "({x}, {y}) gave {}", a.yaw);
        }
    }

    #[test]
    fn test_pitch_up_is_positive() {
        let a = calc_rotation(origin(), Position::new(1.0, 0.0, 1.0), EulerAngles::ZERO, 0.0);
        assert!((a.pitch - 45.0).abs() < EPS);
        let b = calc_rotation(origin(), Position::new(1.0, 0.0, -1.0), EulerAngles::ZERO, 0.0);
        assert!((b.pitch + 45.0).abs() < EPS);
    }

    #[test]
    fn test_forward_points_at_destination() {
        let source = Position::new(2.0, -1.0, 0.5);
        let destination = Position::new(-3.0, 4.0, 6.0);
        let a = calc_rotation(source, destination, EulerAngles::ZERO, 0.0);
        let expected = (destination - source).normalize();
        assert!((a.forward() - expected).abs().max_element() < EPS);
    }

    #[test]
    fn test_smoothing_interpolates() {
        let orig = EulerAngles::new(0.0, 10.0, 0.0);
        let a = calc_rotation(origin(), Position::new(10.0, 10.0, 0.0), orig, 0.5);
        assert!((a.yaw - 27.5).abs() < EPS);
        assert_eq!(a.roll, 0.0);
    }

    #[test]
    fn test_smoothing_stays_between_orig_and_target() {
        let destination = Position::new(3.0, 7.0, 2.0);
        let orig = EulerAngles::new(-5.0, 20.0, 3.0);
        let target = calc_rotation(origin(), destination, orig, 0.0);
        for smooth in [0.1, 0.25, 0.5, 0.9] {
            let a = calc_rotation(origin(), destination, orig, smooth);
            let (lo, hi) = if orig.yaw < target.yaw {
                (orig.yaw, target.yaw)
            } else {
                (target.yaw, orig.yaw)
            };
            assert!(a.yaw > lo && a.yaw < hi, "smooth {smooth} gave {}", a.yaw);
        }
    }

    #[test]
    fn test_smoothing_applies_to_roll() {
        let orig = EulerAngles::new(0.0, 0.0, 40.0);
        let a = calc_rotation(origin(), Position::new(1.0, 0.0, 0.0), orig, 0.25);
        assert!((a.roll - 10.0).abs() < EPS);
    }

    #[test]
    fn test_full_smoothing_returns_orig() {
        let orig = EulerAngles::new(5.0, 30.0, 0.0);
        let a = calc_rotation(origin(), Position::new(1.0, 1.0, 0.0), orig, 1.0);
        assert!((a.yaw - orig.yaw).abs() < EPS);
        assert!((a.pitch - orig.pitch).abs() < EPS);
    }

    #[test]
    fn test_smoothing_skipped_across_wrap() {
        // Target yaw is ~170°, previous was -170°: 340° apart, no easing.
        let orig = EulerAngles::new(0.0, -170.0, 0.0);
        let destination = Position::new(-1.0, 0.176_326_98, 0.0);
        let target = calc_rotation(origin(), destination, EulerAngles::ZERO, 0.0);
        let a = calc_rotation(origin(), destination, orig, 0.5);
        assert_eq!(a, target);
    }

    #[test]
    fn test_negative_smooth_is_ignored() {
        let orig = EulerAngles::new(0.0, 10.0, 0.0);
        let destination = Position::new(1.0, 1.0, 0.0);
        let a = calc_rotation(origin(), destination, orig, -0.5);
        assert_eq!(a, calc_rotation(origin(), destination, orig, 0.0));
    }

    #[test]
    fn test_same_point_is_not_finite() {
        let p = Position::new(1.0, 2.0, 3.0);
        let a = calc_rotation(p, p, EulerAngles::ZERO, 0.0);
        assert!(a.pitch.is_nan());
        assert!(a.yaw.is_nan());
    }

    #[test]
    fn test_vertical_offset_has_nan_yaw() {
        let a = calc_rotation(origin(), Position::new(0.0, 0.0, 2.0), EulerAngles::ZERO, 0.0);
        assert!(a.yaw.is_nan());
        // dz / hyp is -inf, and atan(-inf) is finite.
        assert!((a.pitch - 90.0).abs() < EPS);
    }

    #[test]
    fn test_atan2_agrees_with_legacy() {
        let source = Position::new(0.5, -0.25, 1.0);
        for x in [-3.0_f32, -0.5, 0.75, 4.0] {
            for y in [-2.0_f32, -0.1, 0.0, 0.3, 5.0] {
                for z in [-1.0_f32, 0.0, 2.5] {
                    let destination = Position::new(x, y, z);
                    let legacy = calc_rotation(source, destination, EulerAngles::ZERO, 0.0);
                    let hardened = calc_rotation_with(
                        AngleSolver::Atan2,
                        source,
                        destination,
                        EulerAngles::ZERO,
                        0.0,
                    );
                    assert!(
                        (legacy.yaw - hardened.yaw).abs() < 1e-3,
                        "{destination:?}: {legacy:?} vs {hardened:?}"
                    );
                    assert!((legacy.pitch - hardened.pitch).abs() < 1e-3);
                }
            }
        }
    }

    #[test]
    fn test_shared_x_gives_finite_yaw() {
        // diff.x is +0.0 here; dy / dx is ±inf and atan(±inf) is ±90°.
        for (dy, expected) in [(1.0_f32, 90.0_f32), (-1.0, -90.0)] {
            let destination = Position::new(0.0, dy, 0.0);
            let legacy = calc_rotation(origin(), destination, EulerAngles::ZERO, 0.0);
            assert!(legacy.is_finite());
            assert!((legacy.yaw - expected).abs() < EPS, "{legacy:?}");

            let hardened = calc_rotation_with(
                AngleSolver::Atan2,
                origin(),
                destination,
                EulerAngles::ZERO,
                0.0,
            );
            assert!((hardened.yaw - expected).abs() < EPS);
            assert!((legacy.forward() - Vec3::new(0.0, dy, 0.0)).abs().max_element() < EPS);
        }
    }

    #[test]
    fn test_negative_zero_x_offset_faces_away_under_legacy() {
        // -0.0 - 0.0 keeps the sign bit: dy / dx flips to +inf, yet the
        // `dx >= 0` flip still fires.
        let source = Position::new(-0.0, 0.0, 0.0);
        let destination = Position::new(0.0, 1.0, 0.0);

        let legacy = calc_rotation(source, destination, EulerAngles::ZERO, 0.0);
        assert!((legacy.yaw + 90.0).abs() < EPS, "{legacy:?}");
        assert!(legacy.forward().y < 0.0);

        let hardened =
            calc_rotation_with(AngleSolver::Atan2, source, destination, EulerAngles::ZERO, 0.0);
        assert!((hardened.yaw - 90.0).abs() < EPS);
    }

    #[test]
    fn test_atan2_is_finite_on_degenerate_input() {
        let p = Position::new(1.0, 2.0, 3.0);
        let same = calc_rotation_with(AngleSolver::Atan2, p, p, EulerAngles::ZERO, 0.0);
        assert!(same.is_finite());

        let above = calc_rotation_with(
            AngleSolver::Atan2,
            p,
            Position::new(1.0, 2.0, 10.0),
            EulerAngles::ZERO,
            0.0,
        );
        assert!(above.is_finite());
        assert!((above.pitch - 90.0).abs() < EPS);
    }

    #[test]
    fn test_solver_parse() {
        assert_eq!("legacy".parse::<AngleSolver>().unwrap(), AngleSolver::Legacy);
        assert_eq!(" ATAN2 ".parse::<AngleSolver>().unwrap(), AngleSolver::Atan2);
        assert_eq!(
            "atan".parse::<AngleSolver>().unwrap_err(),
            MathError::UnknownSolver("atan".to_string())
        );
        assert_eq!(AngleSolver::Atan2.to_string(), "atan2");
    }
}
