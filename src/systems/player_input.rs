use bevy::prelude::*;

use crate::{
    AimDirection,
    SlitherSettings,
    Snake,
};

pub fn player_input(
    keys: Res<Input<KeyCode>>,
    gamepads: Res<Gamepads>,
    axes: Res<Axis<GamepadAxis>>,
    settings: Res<SlitherSettings>,
    mut snake: Query<&mut AimDirection, With<Snake>>,
) {
    let Ok(mut aim) = snake.get_single_mut() else {
        return;
    };

    let mut requested = Vec2::ZERO;
    if keys.pressed(KeyCode::W) || keys.pressed(KeyCode::Up) {
        requested.y += 1.;
    }
    if keys.pressed(KeyCode::S) || keys.pressed(KeyCode::Down) {
        requested.y -= 1.;
    }
    if keys.pressed(KeyCode::D) || keys.pressed(KeyCode::Right) {
        requested.x += 1.;
    }
    if keys.pressed(KeyCode::A) || keys.pressed(KeyCode::Left) {
        requested.x -= 1.;
    }

    // keyboard wins over the stick when both are in use
    if requested == Vec2::ZERO {
        if let Some(gamepad) = gamepads.iter().next() {
            let axis_x = GamepadAxis {
                gamepad,
                axis_type: GamepadAxisType::LeftStickX,
            };
            let axis_y = GamepadAxis {
                gamepad,
                axis_type: GamepadAxisType::LeftStickY,
            };
            if let (Some(x), Some(y)) = (axes.get(axis_x), axes.get(axis_y)) {
                requested = Vec2::new(x, y);
            }
        }
    }

    if requested.length_squared() >= settings.input_deadzone * settings.input_deadzone {
        aim.0 = requested.normalize();
    }
}
