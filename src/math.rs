use bevy::math::Vec2;

// all angles in this module are in degrees, counter-clockwise from +X

/// Wraps `t` into `[0, length]`.
pub fn repeat(t: f32, length: f32) -> f32 {
    (t - (t / length).floor() * length).clamp(0., length)
}

/// Shortest signed difference between two headings, in `(-180, 180]`.
pub fn delta_angle(current: f32, target: f32) -> f32 {
    let mut delta = repeat(target - current, 360.);
    if delta > 180. {
        delta -= 360.;
    }
    delta
}

/// Brings any heading back into `[-180, 180]`.
pub fn wrap_angle(angle: f32) -> f32 {
    if (-180. ..=180.).contains(&angle) {
        return angle;
    }
    repeat(angle + 180., 360.) - 180.
}

pub fn move_towards(current: f32, target: f32, max_delta: f32) -> f32 {
    if (target - current).abs() <= max_delta {
        return target;
    }
    current + (target - current).signum() * max_delta
}

/// Like [`move_towards`], but takes the short way around the circle.
pub fn move_towards_angle(current: f32, target: f32, max_delta: f32) -> f32 {
    let delta = delta_angle(current, target);
    if -max_delta < delta && delta < max_delta {
        return target;
    }
    move_towards(current, current + delta, max_delta)
}

/// Critically damped spring toward `target`.
///
/// `velocity` is the caller-owned spring state and must be carried between calls. The change
/// per call is limited so the implied speed never exceeds `max_speed`, and the result never
/// overshoots `target`.
pub fn smooth_damp(
    current: f32,
    target: f32,
    velocity: &mut f32,
    smooth_time: f32,
    max_speed: f32,
    delta_seconds: f32,
) -> f32 {
    let smooth_time = smooth_time.max(0.0001);
    let omega = 2. / smooth_time;
    let x = omega * delta_seconds;
    let exp = 1. / (1. + x + 0.48 * x * x + 0.235 * x * x * x);

    let original_target = target;
    let max_change = max_speed * smooth_time;
    let change = (current - target).clamp(-max_change, max_change);
    let target = current - change;

    let temp = (*velocity + omega * change) * delta_seconds;
    *velocity = (*velocity - omega * temp) * exp;
    let mut output = target + (change + temp) * exp;

    if (original_target - current > 0.) == (output > original_target) {
        output = original_target;
        *velocity = 0.;
    }
    output
}

/// [`smooth_damp`] over headings: the spring is aimed at the nearest equivalent of `target`.
pub fn smooth_damp_angle(
    current: f32,
    target: f32,
    velocity: &mut f32,
    smooth_time: f32,
    max_speed: f32,
    delta_seconds: f32,
) -> f32 {
    let target = current + delta_angle(current, target);
    smooth_damp(current, target, velocity, smooth_time, max_speed, delta_seconds)
}

pub fn heading_of(direction: Vec2) -> f32 {
    direction.y.atan2(direction.x).to_degrees()
}

pub fn heading_direction(heading: f32) -> Vec2 {
    let (sin, cos) = heading.to_radians().sin_cos();
    Vec2::new(cos, sin)
}

/// Rotates `v` counter-clockwise by `angle` degrees.
pub fn rotate(v: Vec2, angle: f32) -> Vec2 {
    heading_direction(angle).rotate(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn delta_angle_takes_the_short_way() {
        assert!((delta_angle(170., -170.) - 20.).abs() < EPS);
        assert!((delta_angle(-170., 170.) + 20.).abs() < EPS);
        assert!((delta_angle(0., 90.) - 90.).abs() < EPS);
        assert!((delta_angle(720., 10.) - 10.).abs() < EPS);
    }

    #[test]
    fn wrap_angle_stays_in_range() {
        for angle in [-900., -181., -180., 0., 179., 181., 540., 1234.5] {
            let wrapped = wrap_angle(angle);
            assert!((-180. ..=180.).contains(&wrapped), "{angle} -> {wrapped}");
            assert!(delta_angle(angle, wrapped).abs() < 1e-3);
        }
    }

    #[test]
    fn move_towards_angle_is_rate_limited() {
        assert_eq!(move_towards_angle(0., 90., 10.), 10.);
        assert_eq!(move_towards_angle(0., 5., 10.), 5.);
        // crosses the seam instead of spinning the long way
        assert!((move_towards_angle(175., -175., 4.) - 179.).abs() < EPS);
    }

    #[test]
    fn smooth_damp_converges_without_overshoot() {
        let mut value = 0.;
        let mut velocity = 0.;
        let mut last = value;
        for _ in 0..200 {
            value = smooth_damp(value, 45., &mut velocity, 0.07, 720., 0.02);
            assert!(value <= 45. + EPS);
            assert!(value >= last - EPS);
            last = value;
        }
        assert!((value - 45.).abs() < 1e-2);
    }

    #[test]
    fn smooth_damp_respects_max_speed() {
        let mut velocity = 0.;
        let value = smooth_damp(0., 1000., &mut velocity, 0.1, 100., 0.02);
        // the spring never chases more than max_speed * smooth_time away
        assert!(value <= 100. * 0.1);
    }

    #[test]
    fn smooth_damp_angle_wraps_across_the_seam() {
        let mut velocity = 0.;
        let value = smooth_damp_angle(170., -170., &mut velocity, 0.07, 720., 0.02);
        assert!(value > 170.);
        assert!(velocity > 0.);
    }

    #[test]
    fn heading_round_trip() {
        let dir = heading_direction(30.);
        assert!((heading_of(dir) - 30.).abs() < EPS);
        assert!(rotate(Vec2::X, 90.).abs_diff_eq(Vec2::Y, EPS));
    }
}
