#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use bevy::{
    prelude::*,
    window::PresentMode,
};

use slither_chain::{ChainFollowerPlugin, ChainSystems};

mod systems;
use systems::*;

// visual layers
const SNAKE_LAYER: f32 = 0.;
const FOOD_LAYER: f32 = -1.;
// segments stack just under the head, each one below the previous
const SEGMENT_Z_STEP: f32 = 0.001;

// fixed step the chain defaults are tuned for
const FIXED_TIMESTEP: f64 = 0.02;
const PIXELS_PER_UNIT: f32 = 100.;

const SNAKE_HEAD_RADIUS: f32 = 0.2;
const FOOD_RADIUS: f32 = 0.1;
const INITIAL_SEGMENTS: usize = 6;
const ARENA_HALF_EXTENT: f32 = 8.;

fn main() {
    App::new()
        .add_plugins((
            DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Slither".to_string(),
                    present_mode: PresentMode::AutoVsync,
                    // Tells wasm to resize the window according to the available canvas
                    fit_canvas_to_parent: true,
                    // Tells wasm not to override default event handling, like F5, Ctrl+R etc.
                    prevent_default_event_handling: false,
                    ..default()
                }),
                ..default()
            }),
            ChainFollowerPlugin,
        ))
        .insert_resource(Time::<Fixed>::from_seconds(FIXED_TIMESTEP))
        .insert_resource(ClearColor(Color::rgb(0.04, 0.04, 0.04)))
        .init_resource::<Game>()
        .init_resource::<SlitherSettings>()
        .init_resource::<CameraSettings>()
        .add_systems(Startup, (setup, spawn_snake))
        .add_systems(
            FixedUpdate,
            (
                slither_movement.before(ChainSystems),
                consume_food.after(ChainSystems),
            ),
        )
        .add_systems(
            Update,
            (
                player_input,
                spawn_segment_sprites,
                spawn_food.run_if(not(any_with_component::<Food>())),
                camera_follow,
                bevy::window::close_on_esc,
            ),
        )
        .run();
}

#[derive(Resource, Default)]
pub struct Game {
    score: usize,
}

#[derive(Resource)]
pub struct SlitherSettings {
    /// World units per second.
    pub move_speed: f32,
    /// Head turn rate in degrees per second.
    pub turn_speed: f32,
    /// Stick deflection below this keeps the previous aim.
    pub input_deadzone: f32,
}

impl Default for SlitherSettings {
    fn default() -> Self {
        Self {
            move_speed: 5.5,
            turn_speed: 540.,
            input_deadzone: 0.15,
        }
    }
}

#[derive(Resource)]
pub struct CameraSettings {
    pub follow_sharpness: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            follow_sharpness: 12.,
        }
    }
}

#[derive(Resource)]
pub struct SegmentAssets {
    mesh: Handle<Mesh>,
    material: Handle<ColorMaterial>,
}

#[derive(Component)]
pub struct Snake;

/// Last direction the player steered toward.
#[derive(Component)]
pub struct AimDirection(Vec2);

#[derive(Component)]
pub struct Food;

fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    let mut camera = Camera2dBundle::default();
    camera.projection.scale = 1. / PIXELS_PER_UNIT;
    commands.spawn(camera);

    commands.insert_resource(SegmentAssets {
        mesh: meshes.add(shape::Quad::new(Vec2::new(0.3, 0.22)).into()),
        material: materials.add(ColorMaterial::from(Color::rgb(0.2, 0.7, 0.3))),
    });
}
