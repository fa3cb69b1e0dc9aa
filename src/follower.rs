use bevy::{log::{debug, trace}, math::Vec2, prelude::Component};

use crate::{
    math::{rotate, wrap_angle},
    sample_path, ChainConfig, ChainError, PathHistory, Result, Segment, SegmentPose,
};

/// A chain of segments trailing a head along the path it has traveled.
///
/// Starts out uninitialized; [`initialize`](Self::initialize) builds the body, after which
/// [`tick`](Self::tick) is called once per fixed step with the head's latest position. Each tick
/// records the head, resamples the path at `spacing` intervals, eases every segment toward its
/// sample and trims history no segment can reach any more.
#[derive(Component, Clone, Debug)]
pub struct ChainFollower {
    config: ChainConfig,
    body: Option<ChainBody>,
}

#[derive(Clone, Debug)]
struct ChainBody {
    history: PathHistory,
    segments: Vec<Segment>,
    head_position: Vec2,
    head_rotation: f32,
}

impl ChainBody {
    fn push_segment(&mut self) {
        let (position, angle) = match self.segments.last() {
            Some(tail) => (tail.position, tail.angle),
            None => (self.history.oldest(), self.head_rotation),
        };
        self.segments.push(Segment::new(position, angle));
    }
}

impl ChainFollower {
    pub fn new(config: ChainConfig) -> Self {
        Self { config, body: None }
    }

    /// Builds an already initialized chain.
    pub fn spawned(config: ChainConfig, initial_segments: usize, head: Vec2) -> Result<Self> {
        let mut follower = Self::new(config);
        follower.initialize(initial_segments, head)?;
        Ok(follower)
    }

    pub fn config(&self) -> &ChainConfig {
        &self.config
    }

    pub fn is_initialized(&self) -> bool {
        self.body.is_some()
    }

    /// (Re)builds the body with `initial_segments` segments stacked on `head`.
    pub fn initialize(&mut self, initial_segments: usize, head: Vec2) -> Result<()> {
        self.initialize_facing(initial_segments, head, 0.)
    }

    /// Like [`initialize`](Self::initialize), with segments starting at the head's heading.
    pub fn initialize_facing(
        &mut self,
        initial_segments: usize,
        head: Vec2,
        head_rotation: f32,
    ) -> Result<()> {
        self.config.validate()?;

        let mut body = ChainBody {
            history: PathHistory::new(head),
            segments: Vec::with_capacity(initial_segments),
            head_position: head,
            head_rotation: wrap_angle(head_rotation),
        };
        for _ in 0..initial_segments {
            body.push_segment();
        }
        self.body = Some(body);

        debug!(
            "chain initialized with {} segments at {:?}",
            initial_segments, head
        );
        Ok(())
    }

    /// Advances the chain by one fixed step of `tick_duration` seconds.
    ///
    /// `head_rotation` (degrees) is only needed when the head spins and the host composes
    /// segment transforms under it, see [`segment_local_pose`](Self::segment_local_pose).
    pub fn tick(
        &mut self,
        head: Vec2,
        head_rotation: Option<f32>,
        tick_duration: f32,
    ) -> Result<()> {
        let Self { config, body } = self;
        let body = body.as_mut().ok_or(ChainError::NotInitialized)?;
        if !tick_duration.is_finite() || tick_duration <= 0. {
            return Err(ChainError::InvalidTickDuration(tick_duration));
        }

        if let Some(rotation) = head_rotation {
            body.head_rotation = wrap_angle(rotation);
        }
        body.head_position = head;

        let recorded = body.history.record(head, config.spacing);

        let targets = sample_path(
            body.history.contiguous(),
            config.spacing,
            body.segments.len(),
            config.tangent_window,
        );
        for (segment, target) in body.segments.iter_mut().zip(&targets) {
            segment.smooth_toward(target, config, tick_duration);
        }

        let required = config.required_history(body.segments.len());
        let dropped = body.history.trim(required, config.max_history_points);

        trace!(
            "chain tick: +{} -{} history samples, {} retained",
            recorded,
            dropped,
            body.history.len()
        );
        Ok(())
    }

    /// Grows the chain by one segment stacked on the current tail. Returns the new count.
    pub fn add_segment(&mut self) -> Result<usize> {
        let body = self.body.as_mut().ok_or(ChainError::NotInitialized)?;
        body.push_segment();
        debug!("chain grew to {} segments", body.segments.len());
        Ok(body.segments.len())
    }

    pub fn segment_count(&self) -> usize {
        self.body.as_ref().map_or(0, |body| body.segments.len())
    }

    /// World-space pose of segment `index`, 0 being the one nearest the head.
    pub fn segment_pose(&self, index: usize) -> Result<SegmentPose> {
        self.segment(index).map(Segment::pose)
    }

    pub fn segments(&self) -> impl Iterator<Item = SegmentPose> + '_ {
        self.body
            .iter()
            .flat_map(|body| body.segments.iter().map(Segment::pose))
    }

    /// Rotation (degrees) the segment container applies relative to the head.
    ///
    /// With root stabilization this cancels the head's spin, otherwise it is zero and the
    /// container turns with the head.
    pub fn root_rotation(&self) -> f32 {
        match &self.body {
            Some(body) if self.config.enable_root_stabilization => -body.head_rotation,
            _ => 0.,
        }
    }

    /// Pose of segment `index` relative to a container parented to the head and rotated by
    /// [`root_rotation`](Self::root_rotation).
    pub fn segment_local_pose(&self, index: usize) -> Result<SegmentPose> {
        let pose = self.segment_pose(index)?;
        let (head_position, head_rotation) = self
            .body
            .as_ref()
            .map_or((Vec2::ZERO, 0.), |body| (body.head_position, body.head_rotation));
        let frame_rotation = head_rotation + self.root_rotation();
        Ok(SegmentPose {
            position: rotate(pose.position - head_position, -frame_rotation),
            angle: wrap_angle(pose.angle - frame_rotation),
        })
    }

    pub fn history_len(&self) -> usize {
        self.body.as_ref().map_or(0, |body| body.history.len())
    }

    /// Recorded head positions, newest first.
    pub fn history(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.body.iter().flat_map(|body| body.history.iter())
    }

    fn segment(&self, index: usize) -> Result<&Segment> {
        let segments = self.body.as_ref().map_or(&[][..], |body| &body.segments[..]);
        segments.get(index).ok_or(ChainError::IndexOutOfRange {
            index,
            len: segments.len(),
        })
    }
}
