use bevy::math::Vec2;

use crate::{
    math::{heading_of, move_towards_angle, smooth_damp_angle, wrap_angle},
    ChainConfig, PathSample,
};

/// Rendered state of one chain link.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub position: Vec2,
    /// Heading in degrees, kept in `[-180, 180]`.
    pub angle: f32,
    /// Heading spring velocity in degrees per second.
    pub angular_velocity: f32,
}

impl Segment {
    pub fn new(position: Vec2, angle: f32) -> Self {
        Self {
            position,
            angle: wrap_angle(angle),
            angular_velocity: 0.,
        }
    }

    pub fn pose(&self) -> SegmentPose {
        SegmentPose {
            position: self.position,
            angle: self.angle,
        }
    }

    /// Moves this segment one tick closer to `target`.
    pub fn smooth_toward(&mut self, target: &PathSample, config: &ChainConfig, dt: f32) {
        self.position = self.position.lerp(target.position, config.position_lerp);

        let target_angle = heading_of(target.tangent);
        let mut velocity = self.angular_velocity;
        let smoothed = smooth_damp_angle(
            self.angle,
            target_angle,
            &mut velocity,
            config.rotation_smooth_time,
            config.turn_speed,
            dt,
        );
        self.angular_velocity = velocity;

        let angle = if config.enable_turn_rate_clamp {
            move_towards_angle(self.angle, smoothed, config.turn_speed * dt)
        } else {
            smoothed
        };
        self.angle = wrap_angle(angle);
    }
}

/// What a renderer needs to draw a segment.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SegmentPose {
    pub position: Vec2,
    pub angle: f32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::delta_angle;

    fn target(position: Vec2, tangent: Vec2) -> PathSample {
        PathSample {
            position,
            tangent,
            history_index: 0,
            distance: 0.,
        }
    }

    #[test]
    fn position_moves_by_the_lerp_factor() {
        let config = ChainConfig::default();
        let mut segment = Segment::new(Vec2::ZERO, 0.);
        segment.smooth_toward(&target(Vec2::new(1., 0.), Vec2::X), &config, 0.02);
        assert!((segment.position.x - 0.85).abs() < 1e-5);
    }

    #[test]
    fn heading_settles_on_the_tangent() {
        let config = ChainConfig::default();
        let mut segment = Segment::new(Vec2::ZERO, 0.);
        let goal = target(Vec2::ZERO, Vec2::Y);
        for _ in 0..100 {
            segment.smooth_toward(&goal, &config, 0.02);
        }
        assert!(delta_angle(segment.angle, 90.).abs() < 0.5);
    }

    #[test]
    fn heading_wraps_across_the_seam() {
        let config = ChainConfig::default();
        let mut segment = Segment::new(Vec2::ZERO, 170.);
        let goal = target(Vec2::ZERO, Vec2::new(-1., -0.1));
        for _ in 0..100 {
            segment.smooth_toward(&goal, &config, 0.02);
            assert!((-180. ..=180.).contains(&segment.angle));
        }
        let expected = heading_of(Vec2::new(-1., -0.1));
        assert!(delta_angle(segment.angle, expected).abs() < 0.5);
    }

    #[test]
    fn turn_rate_clamp_bounds_each_tick() {
        let config = ChainConfig {
            turn_speed: 90.,
            rotation_smooth_time: 0.01,
            enable_turn_rate_clamp: true,
            ..Default::default()
        };
        let mut segment = Segment::new(Vec2::ZERO, 0.);
        let goal = target(Vec2::ZERO, Vec2::Y);
        let mut previous = segment.angle;
        for _ in 0..10 {
            segment.smooth_toward(&goal, &config, 0.1);
            assert!(delta_angle(previous, segment.angle).abs() <= 9. + 1e-3);
            previous = segment.angle;
        }
    }
}
