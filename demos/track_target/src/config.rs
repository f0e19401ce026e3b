//! Tracker configuration.

use std::str::FromStr;

use anyhow::{Context, Result};
use transform_math::AngleSolver;

/// Environment variable overriding [`TrackConfig::smoothing`].
pub const ENV_SMOOTHING: &str = "TRACK_SMOOTHING";
/// Environment variable overriding [`TrackConfig::ticks`].
pub const ENV_TICKS: &str = "TRACK_TICKS";
/// Environment variable overriding [`TrackConfig::solver`] (`legacy` or `atan2`).
pub const ENV_SOLVER: &str = "TRACK_SOLVER";

/// Configuration for one tracking run.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackConfig {
    /// Fraction of the previous orientation kept each tick, in `[0, 1]`.
    pub smoothing: f32,
    /// Number of ticks to simulate.
    pub ticks: u32,
    /// How look-at angles are derived.
    pub solver: AngleSolver,
}

impl Default for TrackConfig {
    fn default() -> Self {
        Self {
            smoothing: 0.5,
            ticks: 20,
            solver: AngleSolver::Legacy,
        }
    }
}

impl TrackConfig {
    /// Defaults, overridden by any `TRACK_*` variables that are set.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but does not parse.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`TrackConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(smoothing) = parse_var::<f32>(&lookup, ENV_SMOOTHING)? {
            config = config.with_smoothing(smoothing);
        }
        if let Some(ticks) = parse_var::<u32>(&lookup, ENV_TICKS)? {
            config = config.with_ticks(ticks);
        }
        if let Some(solver) = lookup(ENV_SOLVER) {
            let solver: AngleSolver = solver
                .parse()
                .with_context(|| format!("invalid {ENV_SOLVER}"))?;
            config = config.with_solver(solver);
        }
        Ok(config)
    }

    /// Override the smoothing factor. Values outside `[0, 1]` are clamped.
    #[must_use]
    pub fn with_smoothing(mut self, smoothing: f32) -> Self {
        self.smoothing = smoothing.clamp(0.0, 1.0);
        self
    }

    /// Override the number of ticks.
    #[must_use]
    pub fn with_ticks(mut self, ticks: u32) -> Self {
        self.ticks = ticks;
        self
    }

    /// Override the angle solver.
    #[must_use]
    pub fn with_solver(mut self, solver: AngleSolver) -> Self {
        self.solver = solver;
        self
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .with_context(|| format!("invalid {key}: {raw:?}"))
        })
        .transpose()
}
