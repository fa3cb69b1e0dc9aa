use bevy::{
    prelude::*,
    sprite::MaterialMesh2dBundle,
};

use rand::Rng;

use crate::{
    Food,
    ARENA_HALF_EXTENT,
    FOOD_LAYER,
    FOOD_RADIUS,
};

pub fn spawn_food(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    let mut rng = rand::thread_rng();
    let boundary = ARENA_HALF_EXTENT - FOOD_RADIUS;
    let food_location = Vec3::new(
        rng.gen_range(-boundary..boundary),
        rng.gen_range(-boundary..boundary),
        FOOD_LAYER,
    );

    commands.spawn((
        Food,
        MaterialMesh2dBundle {
            mesh: meshes.add(shape::Circle::new(FOOD_RADIUS).into()).into(),
            material: materials.add(ColorMaterial::from(Color::RED)),
            transform: Transform::from_translation(food_location),
            ..default()
        },
    ));
}
