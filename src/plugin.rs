use bevy::prelude::*;

use crate::ChainFollower;

/// Segment count a chain is built with on its first fixed step. Removed once consumed.
#[derive(Component, Clone, Copy, Debug)]
pub struct InitialSegments(pub usize);

/// Container the segment entities of `chain` hang under. Spawn it as a child of the head.
#[derive(Component, Clone, Copy, Debug)]
pub struct SegmentsRoot {
    pub chain: Entity,
}

/// Rendered link `index` of the chain living on entity `chain`. Spawn it under the chain's
/// [`SegmentsRoot`].
#[derive(Component, Clone, Copy, Debug)]
pub struct ChainSegment {
    pub chain: Entity,
    pub index: usize,
}

/// Fixed-step systems driving every [`ChainFollower`]. Order head movement before this set.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChainSystems;

pub struct ChainFollowerPlugin;

impl Plugin for ChainFollowerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            (initialize_chains, advance_chains, sync_segment_transforms)
                .chain()
                .in_set(ChainSystems),
        );
    }
}

/// Z rotation of a head transform, in degrees.
pub fn head_rotation(transform: &Transform) -> f32 {
    let (z, _, _) = transform.rotation.to_euler(EulerRot::ZYX);
    z.to_degrees()
}

pub fn initialize_chains(
    mut commands: Commands,
    mut chains: Query<(Entity, &mut ChainFollower, &InitialSegments, &Transform)>,
) {
    for (entity, mut follower, initial, transform) in &mut chains {
        commands.entity(entity).remove::<InitialSegments>();
        if follower.is_initialized() {
            continue;
        }
        match follower.initialize_facing(
            initial.0,
            transform.translation.truncate(),
            head_rotation(transform),
        ) {
            Ok(()) => info!("chain {:?} spawned with {} segments", entity, initial.0),
            Err(err) => warn!("chain {:?} not initialized: {}", entity, err),
        }
    }
}

pub fn advance_chains(
    time: Res<Time<Fixed>>,
    mut chains: Query<(Entity, &mut ChainFollower, &Transform)>,
) {
    let tick_duration = time.timestep().as_secs_f32();
    for (entity, mut follower, transform) in &mut chains {
        if !follower.is_initialized() {
            continue;
        }
        let head = transform.translation.truncate();
        if let Err(err) = follower.tick(head, Some(head_rotation(transform)), tick_duration) {
            warn!("chain {:?} tick rejected: {}", entity, err);
        }
    }
}

pub fn sync_segment_transforms(
    chains: Query<&ChainFollower>,
    mut roots: Query<(&SegmentsRoot, &mut Transform), Without<ChainSegment>>,
    mut segments: Query<(&ChainSegment, &mut Transform), Without<SegmentsRoot>>,
) {
    for (root, mut transform) in &mut roots {
        if let Ok(follower) = chains.get(root.chain) {
            transform.rotation = Quat::from_rotation_z(follower.root_rotation().to_radians());
        }
    }

    for (segment, mut transform) in &mut segments {
        let Ok(follower) = chains.get(segment.chain) else {
            continue;
        };
        // segment entities can briefly outnumber the chain while a spawn is in flight
        let Ok(pose) = follower.segment_local_pose(segment.index) else {
            continue;
        };
        transform.translation = pose.position.extend(transform.translation.z);
        transform.rotation = Quat::from_rotation_z(pose.angle.to_radians());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ChainConfig;

    fn app() -> App {
        let mut app = App::new();
        app.insert_resource(Time::<Fixed>::from_seconds(0.02));
        app.add_systems(
            Update,
            (initialize_chains, advance_chains, sync_segment_transforms).chain(),
        );
        app
    }

    fn spawn_chain(app: &mut App, config: ChainConfig, segments: usize) -> Entity {
        app.world
            .spawn((
                ChainFollower::new(config),
                InitialSegments(segments),
                Transform::default(),
            ))
            .id()
    }

    fn move_head(app: &mut App, head: Entity, to: Vec2, rotation: f32) {
        let mut transform = app.world.get_mut::<Transform>(head).unwrap();
        transform.translation = to.extend(0.);
        transform.rotation = Quat::from_rotation_z(rotation.to_radians());
    }

    #[test]
    fn chains_initialize_then_follow_the_head() {
        let mut app = app();
        let head = spawn_chain(&mut app, ChainConfig::default(), 3);

        app.update();
        let follower = app.world.get::<ChainFollower>(head).unwrap();
        assert!(follower.is_initialized());
        assert_eq!(follower.segment_count(), 3);
        assert!(app.world.get::<InitialSegments>(head).is_none());

        move_head(&mut app, head, Vec2::new(1., 0.), 0.);
        for _ in 0..100 {
            app.update();
        }
        let follower = app.world.get::<ChainFollower>(head).unwrap();
        let pose = follower.segment_pose(0).unwrap();
        assert!(pose.position.abs_diff_eq(Vec2::new(0.75, 0.), 1e-3));
    }

    #[test]
    fn invalid_chains_stay_uninitialized() {
        let mut app = app();
        let config = ChainConfig {
            spacing: -1.,
            ..Default::default()
        };
        let head = spawn_chain(&mut app, config, 3);

        app.update();
        app.update();
        let follower = app.world.get::<ChainFollower>(head).unwrap();
        assert!(!follower.is_initialized());
        assert!(app.world.get::<InitialSegments>(head).is_none());
    }

    #[test]
    fn segment_transforms_are_written_in_the_root_frame() {
        let mut app = app();
        let config = ChainConfig {
            enable_root_stabilization: true,
            ..Default::default()
        };
        let head = spawn_chain(&mut app, config, 2);
        let root = app
            .world
            .spawn((SegmentsRoot { chain: head }, Transform::default()))
            .id();
        let segment = app
            .world
            .spawn((
                ChainSegment {
                    chain: head,
                    index: 1,
                },
                Transform::from_xyz(0., 0., -0.5),
            ))
            .id();

        app.update();
        move_head(&mut app, head, Vec2::new(1., 0.), 90.);
        for _ in 0..50 {
            app.update();
        }

        let root_rotation = app.world.get::<Transform>(root).unwrap().rotation;
        assert!(root_rotation.abs_diff_eq(Quat::from_rotation_z(-90f32.to_radians()), 1e-4));

        let follower = app.world.get::<ChainFollower>(head).unwrap();
        let world = follower.segment_pose(1).unwrap();
        let transform = app.world.get::<Transform>(segment).unwrap();
        assert!(transform
            .translation
            .truncate()
            .abs_diff_eq(world.position - Vec2::new(1., 0.), 1e-4));
        assert_eq!(transform.translation.z, -0.5);
    }
}
