use bevy::prelude::*;

use crate::{
    CameraSettings,
    Snake,
};

pub fn camera_follow(
    time: Res<Time>,
    settings: Res<CameraSettings>,
    snake: Query<&Transform, (With<Snake>, Without<Camera2d>)>,
    mut camera: Query<&mut Transform, (With<Camera2d>, Without<Snake>)>,
) {
    let (Ok(head), Ok(mut camera_transform)) = (snake.get_single(), camera.get_single_mut()) else {
        return;
    };
    let desired = head.translation.truncate().extend(camera_transform.translation.z);
    let blend = 1. - (-settings.follow_sharpness * time.delta_seconds()).exp();
    camera_transform.translation = camera_transform.translation.lerp(desired, blend);
    camera_transform.rotation = Quat::IDENTITY;
}
