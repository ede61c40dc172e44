use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::math::primitives::Circle;
use bevy::log::{Level, LogPlugin};
use bevy::window::WindowResolution;
use log::LevelFilter;

use crate::simulation::scenario::Scenario;
use crate::simulation::states::{NVec2, Rgb};

/// Index of the orbiting body a circle is drawn for
#[derive(Component)]
struct BodyIndex(pub usize);

pub fn run_2d(scenario: Scenario, log_level: LevelFilter) {
    info!("run_2d: starting Bevy 2D viewer with {} bodies", scenario.system.bodies.len());

    let display = scenario.engine.display.clone();

    App::new()
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(scenario)
        .add_plugins(DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: display.title,
                    resolution: WindowResolution::new(display.width, display.height),
                    ..Default::default()
                }),
                ..Default::default()
            })
            .set(log_plugin(log_level)))
        .add_systems(Startup, setup_bodies_system)
        .add_systems(Update, (physics_step_system, sync_transforms_system).chain())
        .run();
}

/// Bevy's subscriber has no "off" level; `Off` keeps errors only
fn log_plugin(level: LevelFilter) -> LogPlugin {
    let level = match level {
        LevelFilter::Off | LevelFilter::Error => Level::ERROR,
        LevelFilter::Warn => Level::WARN,
        LevelFilter::Info => Level::INFO,
        LevelFilter::Debug => Level::DEBUG,
        LevelFilter::Trace => Level::TRACE,
    };
    LogPlugin {
        level,
        ..Default::default()
    }
}

/// Physical position (m) -> display position; y points down on screen like
/// image coordinates, with the central body at the window center
fn to_display(x: &NVec2, scale: f64) -> Vec2 {
    Vec2::new((x.x / scale) as f32, -(x.y / scale) as f32)
}

fn to_color(c: Rgb) -> Color {
    Color::srgb_u8(c[0], c[1], c[2])
}

fn setup_bodies_system(mut commands: Commands, scenario: Res<Scenario>, mut meshes: ResMut<Assets<Mesh>>, mut materials: ResMut<Assets<ColorMaterial>>) {
    commands.spawn(Camera2dBundle::default());

    let scale = scenario.engine.display.scale;
    let central = &scenario.system.central;

    commands.spawn(MaterialMesh2dBundle {
        mesh: Mesh2dHandle(meshes.add(Circle::new(central.radius as f32))),
        material: materials.add(ColorMaterial::from(to_color(central.color))),
        transform: Transform::from_translation(to_display(&central.x, scale).extend(0.0)),
        ..Default::default()
    });

    for (i, body) in scenario.system.bodies.iter().enumerate() {
        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(body.radius as f32))),
                material: materials.add(ColorMaterial::from(to_color(body.color))),
                transform: Transform::from_translation(to_display(&body.x, scale).extend(1.0)),
                ..Default::default()
            },
            BodyIndex(i),
        ));
    }
}

/// One tick per frame; the snapshot is swapped while this system holds
/// exclusive access, so the sync below never sees a half-updated collection
fn physics_step_system(mut scenario: ResMut<Scenario>) {
    scenario.step();
}

fn sync_transforms_system(scenario: Res<Scenario>, mut query: Query<(&BodyIndex, &mut Transform)>) {
    let scale = scenario.engine.display.scale;
    for (BodyIndex(i), mut transform) in &mut query {
        if let Some(b) = scenario.system.bodies.get(*i) {
            let p = to_display(&b.x, scale);
            transform.translation.x = p.x;
            transform.translation.y = p.y;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_reaches_bevy() {
        assert_eq!(log_plugin(LevelFilter::Debug).level, Level::DEBUG);
        assert_eq!(log_plugin(LevelFilter::Warn).level, Level::WARN);
        assert_eq!(log_plugin(LevelFilter::Off).level, Level::ERROR);
    }
}
