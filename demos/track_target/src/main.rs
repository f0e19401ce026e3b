//! Track target — aims an observer at an orbiting target once per tick.
//!
//! The target sits on a turntable: its local [`Transform`] is chained onto
//! a spinning parent matrix, and the observer's orientation is threaded
//! from one tick to the next through [`calc_rotation_with`]. Tune the run
//! with `TRACK_SMOOTHING`, `TRACK_TICKS` and `TRACK_SOLVER`; the per-tick
//! angles are logged and the full trace is printed as JSON at the end.

mod config;

use anyhow::Result;
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use config::TrackConfig;
use transform_math::{
    EulerAngles, Position, RawVec3, RowMatrix, Transform, Vec3, calc_rotation_with,
};

/// Where the observer stands.
const OBSERVER: Position = Position::new(0.0, 0.0, 0.0);
/// Centre of the turntable the target rides on.
const TURNTABLE_CENTRE: Vec3 = Vec3::new(20.0, 0.0, 0.0);
/// Turntable rotation per tick, in degrees.
const SPIN_PER_TICK: f32 = 9.0;

/// One tick of the trace.
#[derive(Debug, Serialize)]
struct Frame {
    tick: u32,
    target: RawVec3,
    angles: EulerAngles,
}

/// World position of the target at `tick`.
fn target_position(local: &Transform, tick: u32) -> Position {
    let turntable = RowMatrix::from_euler(
        EulerAngles::new(0.0, tick as f32 * SPIN_PER_TICK, 0.0),
        TURNTABLE_CENTRE,
    );
    let world = local.to_matrix_with_scale() * turntable;
    world.translation().into()
}

fn run(config: &TrackConfig) -> Vec<Frame> {
    let local = Transform::from_translation(Vec3::new(5.0, 0.0, 3.0));
    let mut angles = EulerAngles::ZERO;
    let mut frames = Vec::with_capacity(config.ticks as usize);

    for tick in 0..config.ticks {
        let target = target_position(&local, tick);
        let next = calc_rotation_with(config.solver, OBSERVER, target, angles, config.smoothing);

        // Keep last tick's orientation rather than feed NaN forward.
        if next.is_finite() {
            angles = next;
        } else {
            warn!(tick, ?target, "discarding non-finite orientation");
        }

        info!(
            tick,
            pitch = angles.pitch,
            yaw = angles.yaw,
            "observer orientation"
        );
        frames.push(Frame {
            tick,
            target: target.into(),
            angles,
        });
    }

    frames
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("track_target=info".parse()?))
        .init();

    let config = TrackConfig::from_env()?;
    info!(
        smoothing = config.smoothing,
        ticks = config.ticks,
        solver = %config.solver,
        "tracking starting"
    );

    let frames = run(&config);
    println!("{}", serde_json::to_string_pretty(&frames)?);

    Ok(())
}
