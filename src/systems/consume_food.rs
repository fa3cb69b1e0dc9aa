use bevy::prelude::*;

use slither_chain::ChainFollower;

use crate::{
    Food,
    Game,
    Snake,
    FOOD_RADIUS,
    SNAKE_HEAD_RADIUS,
};

pub fn consume_food(
    mut commands: Commands,
    food: Query<(Entity, &Transform), With<Food>>,
    mut snake: Query<(&Transform, &mut ChainFollower), With<Snake>>,
    mut game: ResMut<Game>,
) {
    let Ok((head, mut follower)) = snake.get_single_mut() else {
        return;
    };
    let head = head.translation.truncate();

    for (food_entity, food) in &food {
        if food.translation.truncate().distance(head) >= SNAKE_HEAD_RADIUS + FOOD_RADIUS {
            continue;
        }
        commands.entity(food_entity).despawn();
        match follower.add_segment() {
            Ok(segments) => {
                game.score += 1;
                info!("food eaten, score {} with {} segments", game.score, segments);
            }
            Err(err) => warn!("could not grow the snake: {}", err),
        }
    }
}
