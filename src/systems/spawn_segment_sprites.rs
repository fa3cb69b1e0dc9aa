use bevy::{
    prelude::*,
    sprite::MaterialMesh2dBundle,
};

use slither_chain::{
    ChainFollower,
    ChainSegment,
    SegmentsRoot,
};

use crate::{
    SegmentAssets,
    SEGMENT_Z_STEP,
};

/// Gives every chain link that has no sprite yet one, placed where the chain already has it.
pub fn spawn_segment_sprites(
    mut commands: Commands,
    chains: Query<&ChainFollower>,
    roots: Query<(Entity, &SegmentsRoot)>,
    segments: Query<&ChainSegment>,
    assets: Res<SegmentAssets>,
) {
    for (root_entity, root) in &roots {
        let Ok(follower) = chains.get(root.chain) else {
            continue;
        };
        let spawned = segments
            .iter()
            .filter(|segment| segment.chain == root.chain)
            .count();

        for index in spawned..follower.segment_count() {
            let Ok(pose) = follower.segment_local_pose(index) else {
                continue;
            };
            let depth = -SEGMENT_Z_STEP * (index + 1) as f32;
            let segment = commands
                .spawn((
                    ChainSegment {
                        chain: root.chain,
                        index,
                    },
                    MaterialMesh2dBundle {
                        mesh: assets.mesh.clone().into(),
                        material: assets.material.clone(),
                        transform: Transform {
                            translation: pose.position.extend(depth),
                            rotation: Quat::from_rotation_z(pose.angle.to_radians()),
                            ..default()
                        },
                        ..default()
                    },
                ))
                .id();
            commands.entity(root_entity).add_child(segment);
        }
    }
}
