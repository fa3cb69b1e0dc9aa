use crate::{ChainError, Result};

/// Densification step the history length budget is measured in, in world units.
pub const REFERENCE_STEP: f32 = 0.1;

/// Per-instance tuning of a [`ChainFollower`](crate::ChainFollower).
///
/// Fields are public so a chain can be described with struct-update syntax:
///
/// ```
/// # use slither_chain::ChainConfig;
/// let config = ChainConfig {
///     spacing: 0.4,
///     enable_turn_rate_clamp: true,
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ChainConfig {
    /// Arc length between consecutive segments, in world units.
    pub spacing: f32,
    /// Fraction of the remaining distance a segment covers each tick, in `(0, 1]`.
    pub position_lerp: f32,
    /// Maximum segment angular speed, in degrees per second.
    pub turn_speed: f32,
    /// Time constant of the heading spring, in seconds.
    pub rotation_smooth_time: f32,
    /// How many samples further down the path to look when the local tangent degenerates.
    pub tangent_window: usize,
    pub max_history_points: usize,
    /// Limit each tick's heading change to `turn_speed * dt` after smoothing.
    pub enable_turn_rate_clamp: bool,
    /// Counter-rotate the segment container so the head's spin does not leak into the body.
    pub enable_root_stabilization: bool,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            spacing: 0.25,
            position_lerp: 0.85,
            turn_speed: 720.,
            rotation_smooth_time: 0.07,
            tangent_window: 2,
            max_history_points: 8192,
            enable_turn_rate_clamp: false,
            enable_root_stabilization: false,
        }
    }
}

impl ChainConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.spacing.is_finite() || self.spacing <= 0. {
            return Err(invalid(format!(
                "spacing must be positive, got {}",
                self.spacing
            )));
        }
        if !(self.position_lerp > 0. && self.position_lerp <= 1.) {
            return Err(invalid(format!(
                "position_lerp must be in (0, 1], got {}",
                self.position_lerp
            )));
        }
        if !self.turn_speed.is_finite() || self.turn_speed <= 0. {
            return Err(invalid(format!(
                "turn_speed must be positive, got {}",
                self.turn_speed
            )));
        }
        if !self.rotation_smooth_time.is_finite() || self.rotation_smooth_time <= 0. {
            return Err(invalid(format!(
                "rotation_smooth_time must be positive, got {}",
                self.rotation_smooth_time
            )));
        }
        if self.tangent_window == 0 {
            return Err(invalid("tangent_window must be at least 1".to_string()));
        }
        if self.max_history_points < 2 {
            return Err(invalid(format!(
                "max_history_points must be at least 2, got {}",
                self.max_history_points
            )));
        }
        Ok(())
    }

    /// History entries needed to cover `segment_count` segments plus some slack.
    ///
    /// Best effort: it assumes samples roughly [`REFERENCE_STEP`] apart, which is not what the
    /// recorder guarantees.
    pub fn required_history(&self, segment_count: usize) -> usize {
        ((segment_count + 2) as f32 * (self.spacing / REFERENCE_STEP)).ceil() as usize
    }
}

fn invalid(reason: String) -> ChainError {
    ChainError::InvalidConfig(reason)
}
