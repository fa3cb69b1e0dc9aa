use bevy::{
    prelude::*,
    sprite::MaterialMesh2dBundle,
};

use slither_chain::{
    ChainConfig,
    ChainFollower,
    InitialSegments,
    SegmentsRoot,
};

use crate::{
    AimDirection,
    Snake,
    INITIAL_SEGMENTS,
    SNAKE_HEAD_RADIUS,
    SNAKE_LAYER,
};

pub fn spawn_snake(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut color_materials: ResMut<Assets<ColorMaterial>>,
) {
    let head = commands
        .spawn((
            Snake,
            AimDirection(Vec2::X),
            // the head spins, so keep the body container from spinning along with it
            ChainFollower::new(ChainConfig {
                enable_root_stabilization: true,
                ..default()
            }),
            InitialSegments(INITIAL_SEGMENTS),
            MaterialMesh2dBundle {
                mesh: meshes
                    .add(shape::Circle::new(SNAKE_HEAD_RADIUS).into())
                    .into(),
                material: color_materials.add(ColorMaterial::from(Color::GREEN)),
                transform: Transform::from_translation(Vec3::new(0., 0., SNAKE_LAYER)),
                ..default()
            },
        ))
        .id();

    commands.entity(head).with_children(|parent| {
        parent.spawn((SegmentsRoot { chain: head }, SpatialBundle::default()));
    });
}
