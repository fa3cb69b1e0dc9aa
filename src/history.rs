use std::collections::VecDeque;

use bevy::math::Vec2;

/// Motion below `spacing * JITTER_FRACTION` is not recorded.
pub const JITTER_FRACTION: f32 = 0.25;
/// Upper bound on samples inserted for one head update.
pub const MAX_STEPS_PER_RECORD: usize = 4;

/// Past head positions, newest first.
///
/// Never empty: it is seeded with the head position when the chain is built.
#[derive(Clone, Debug)]
pub struct PathHistory {
    samples: VecDeque<Vec2>,
}

impl PathHistory {
    pub fn new(head: Vec2) -> Self {
        let mut samples = VecDeque::new();
        samples.push_front(head);
        Self { samples }
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Most recently recorded head position.
    pub fn newest(&self) -> Vec2 {
        self.samples[0]
    }

    pub fn oldest(&self) -> Vec2 {
        self.samples[self.samples.len() - 1]
    }

    pub fn iter(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.samples.iter().copied()
    }

    /// Newest-first view as one slice, rearranging storage if needed.
    pub fn contiguous(&mut self) -> &[Vec2] {
        self.samples.make_contiguous()
    }

    /// Densifies the path from the last recorded point to `head` and returns how many samples
    /// were added.
    ///
    /// Large jumps are approximated by at most [`MAX_STEPS_PER_RECORD`] evenly spaced samples.
    pub fn record(&mut self, head: Vec2, spacing: f32) -> usize {
        let last = self.newest();
        let dist = last.distance(head);
        if dist < spacing * JITTER_FRACTION {
            return 0;
        }

        let steps = ((dist / spacing).floor() as usize).clamp(1, MAX_STEPS_PER_RECORD);
        for i in 1..=steps {
            let t = i as f32 / steps as f32;
            self.samples.push_front(last.lerp(head, t));
        }
        steps
    }

    /// Drops samples beyond `required`, then beyond `max_points`. Returns how many were dropped.
    pub fn trim(&mut self, required: usize, max_points: usize) -> usize {
        let before = self.samples.len();
        // the seed sample always survives
        self.samples.truncate(required.max(1));
        self.samples.truncate(max_points.max(1));
        before - self.samples.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn ignores_jitter_below_threshold() {
        let mut history = PathHistory::new(Vec2::ZERO);
        assert_eq!(history.record(Vec2::new(0.06, 0.), 0.25), 0);
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn records_small_moves_as_one_sample() {
        let mut history = PathHistory::new(Vec2::ZERO);
        assert_eq!(history.record(Vec2::new(0.1, 0.), 0.25), 1);
        assert_eq!(history.newest(), Vec2::new(0.1, 0.));
        assert_eq!(history.oldest(), Vec2::ZERO);
    }

    #[test]
    fn densifies_newest_first() {
        let mut history = PathHistory::new(Vec2::ZERO);
        assert_eq!(history.record(Vec2::new(0.75, 0.), 0.25), 3);
        let xs: Vec<f32> = history.iter().map(|p| p.x).collect();
        let expected = [0.75, 0.5, 0.25, 0.];
        for (x, e) in xs.iter().zip(expected) {
            assert!((x - e).abs() < EPS, "{xs:?}");
        }
    }

    #[test]
    fn caps_large_jumps() {
        let mut history = PathHistory::new(Vec2::ZERO);
        assert_eq!(history.record(Vec2::new(10., 0.), 0.25), MAX_STEPS_PER_RECORD);
        assert_eq!(history.len(), MAX_STEPS_PER_RECORD + 1);
        assert!(history
            .iter()
            .nth(1)
            .unwrap()
            .abs_diff_eq(Vec2::new(7.5, 0.), EPS));
    }

    #[test]
    fn trim_applies_both_bounds() {
        let mut history = PathHistory::new(Vec2::ZERO);
        for i in 1..=20 {
            history.record(Vec2::new(i as f32 * 0.1, 0.), 0.25);
        }
        assert_eq!(history.len(), 21);

        assert_eq!(history.trim(15, 100), 6);
        assert_eq!(history.len(), 15);
        assert_eq!(history.trim(15, 10), 5);
        assert_eq!(history.len(), 10);
        assert!(history.newest().abs_diff_eq(Vec2::new(2., 0.), EPS));
    }
}
