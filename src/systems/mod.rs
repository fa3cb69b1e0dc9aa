mod player_input;
pub use player_input::player_input;

mod slither_movement;
pub use slither_movement::slither_movement;

mod spawn_snake;
pub use spawn_snake::spawn_snake;

mod spawn_segment_sprites;
pub use spawn_segment_sprites::spawn_segment_sprites;

mod spawn_food;
pub use spawn_food::spawn_food;

mod consume_food;
pub use consume_food::consume_food;

mod camera_follow;
pub use camera_follow::camera_follow;
