use bevy::prelude::*;

use slither_chain::{
    head_rotation,
    math::{heading_direction, heading_of, move_towards_angle},
};

use crate::{
    AimDirection,
    SlitherSettings,
    Snake,
    ARENA_HALF_EXTENT,
    SNAKE_HEAD_RADIUS,
};

/// Turns the head toward the aim at a bounded rate and pushes it forward every fixed step.
pub fn slither_movement(
    time: Res<Time>,
    settings: Res<SlitherSettings>,
    mut snake: Query<(&mut Transform, &AimDirection), With<Snake>>,
) {
    let Ok((mut head_transform, aim)) = snake.get_single_mut() else {
        return;
    };
    let delta_seconds = time.delta_seconds();

    let angle = move_towards_angle(
        head_rotation(&head_transform),
        heading_of(aim.0),
        settings.turn_speed * delta_seconds,
    );
    head_transform.rotation = Quat::from_rotation_z(angle.to_radians());

    let forward = heading_direction(angle);
    head_transform.translation += (forward * settings.move_speed * delta_seconds).extend(0.);

    let boundary = ARENA_HALF_EXTENT - SNAKE_HEAD_RADIUS;
    head_transform.translation.x = head_transform.translation.x.clamp(-boundary, boundary);
    head_transform.translation.y = head_transform.translation.y.clamp(-boundary, boundary);
}
