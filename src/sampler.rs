use bevy::math::Vec2;

/// Directions shorter than `spacing * DEGENERATE_FRACTION` are treated as degenerate.
pub const DEGENERATE_FRACTION: f32 = 0.01;
/// Sub-segments shorter than `spacing * ZERO_LENGTH_FRACTION` snap to the cursor sample.
pub const ZERO_LENGTH_FRACTION: f32 = 0.0001;

/// Where one segment should sit on the recorded path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathSample {
    pub position: Vec2,
    /// Unit direction pointing toward the head.
    pub tangent: Vec2,
    /// Index of the history sample the point was interpolated from.
    pub history_index: usize,
    /// Arc length from the head to `position`.
    pub distance: f32,
}

/// Finds the point `spacing * (s + 1)` along `history` for every segment `s < count`.
///
/// `history` is newest first. The walk visits every sample at most once across all segments.
/// Returns an empty list when fewer than two samples have been recorded.
pub fn sample_path(
    history: &[Vec2],
    spacing: f32,
    count: usize,
    tangent_window: usize,
) -> Vec<PathSample> {
    if history.len() < 2 {
        return Vec::new();
    }

    let last = history.len() - 1;
    let zero_length = spacing * ZERO_LENGTH_FRACTION;
    let mut samples = Vec::with_capacity(count);
    let mut traveled = 0.;
    let mut cursor = 0;

    for s in 0..count {
        let target = spacing * (s + 1) as f32;

        while cursor < last {
            let d = history[cursor].distance(history[cursor + 1]);
            if traveled + d >= target {
                break;
            }
            traveled += d;
            cursor += 1;
        }

        let from = history[cursor];
        let to = history[(cursor + 1).min(last)];
        let seg_len = from.distance(to);
        let t = if seg_len > zero_length {
            ((target - traveled) / seg_len).clamp(0., 1.)
        } else {
            0.
        };

        samples.push(PathSample {
            position: from.lerp(to, t),
            tangent: tangent_at(history, cursor, tangent_window, spacing),
            history_index: cursor,
            distance: traveled + seg_len * t,
        });
    }
    samples
}

/// Local path direction at `index`, looking further down the path when neighbours coincide.
///
/// What counts as coinciding is relative to `spacing`.
pub fn tangent_at(history: &[Vec2], index: usize, window: usize, spacing: f32) -> Vec2 {
    let last = history.len().saturating_sub(1);
    let a = index.min(last);
    let degenerate_sqr = (spacing * DEGENERATE_FRACTION).powi(2);

    let candidates = [
        history[a] - history[(a + 1).min(last)],
        history[a] - history[(a + window.max(1)).min(last)],
        history[0] - history[1.min(last)],
    ];
    candidates
        .into_iter()
        .find(|dir| dir.length_squared() > degenerate_sqr)
        .map(Vec2::normalize)
        .unwrap_or(Vec2::X)
}
