use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use rand::prelude::*;
use rand::rngs::StdRng;
use tracing::{debug, info};

use super::blob::{Blob, BlobColor, advance_blob};
use super::mouse::{MouseBlob, MouseFollower};
use super::repulsion::repel_pair;
use super::settings::{SimulationCommand, SimulationConfig, SimulationLifecycle};
use super::spawn::{BlobPreset, random_blob, random_blob_at};
use super::visual::Viewport;
use crate::config::*;

/// Resource: the RNG behind the random walk and spawning.
#[derive(Resource)]
pub struct BlobRng(pub StdRng);

impl Default for BlobRng {
    fn default() -> Self {
        Self(StdRng::seed_from_u64(rand::random()))
    }
}

/// Resource: which preset `Startup` and `Reset` populate the background with.
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct StartupPreset(pub BlobPreset);

/// Keep `Viewport` up to date (resizes / DPI changes).
pub fn update_viewport(windows: Query<&Window, With<PrimaryWindow>>, mut viewport: ResMut<Viewport>) {
    let Ok(window) = windows.single() else {
        return;
    };
    let size = window.size();
    if viewport.size != size {
        viewport.size = size;
    }
}

/// Spawn the camera, the mouse blob and the startup preset.
pub fn spawn_background(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    viewport: Res<Viewport>,
    preset: Res<StartupPreset>,
) {
    commands.spawn(Camera2d);
    populate(&mut commands, &mut meshes, &mut materials, &viewport, preset.0);
}

fn populate(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<ColorMaterial>,
    viewport: &Viewport,
    preset: BlobPreset,
) {
    spawn_mouse_blob(commands, meshes, materials);
    for blob in preset.blobs() {
        spawn_blob(commands, meshes, materials, viewport, blob);
    }
    info!(?preset, "background populated");
}

/// Spawn one blob entity: a translucent glow disc with a denser solid core on top.
pub fn spawn_blob(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<ColorMaterial>,
    viewport: &Viewport,
    blob: Blob,
) -> Entity {
    let world = viewport.to_world(blob.position);
    let glow = meshes.add(Circle::new(blob.glow_radius));
    let core = meshes.add(Circle::new(blob.solid_radius));
    let glow_mat = materials.add(blob.color.with_alpha(GLOW_ALPHA * 0.5));
    let core_mat = materials.add(blob.color.with_alpha(GLOW_ALPHA));

    commands
        .spawn((
            blob,
            Mesh2d(glow),
            MeshMaterial2d(glow_mat),
            Transform::from_xyz(world.x, world.y, 0.0),
            children![(
                Mesh2d(core),
                MeshMaterial2d(core_mat),
                Transform::from_xyz(0.0, 0.0, 0.01),
            )],
        ))
        .id()
}

fn spawn_mouse_blob(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<ColorMaterial>,
) -> Entity {
    let [r, g, b] = MOUSE_BLOB_COLOR;
    commands
        .spawn((
            MouseBlob,
            Mesh2d(meshes.add(Circle::new(MOUSE_BLOB_RADIUS))),
            MeshMaterial2d(materials.add(BlobColor::new(r, g, b).with_alpha(MOUSE_BLOB_ALPHA))),
            Transform::from_xyz(0.0, 0.0, 1.0),
        ))
        .id()
}

/// The pointer position is already in viewport pixels; just record it.
pub fn track_cursor(windows: Query<&Window, With<PrimaryWindow>>, mut follower: ResMut<MouseFollower>) {
    let Ok(window) = windows.single() else {
        return;
    };
    if let Some(cursor) = window.cursor_position() {
        follower.set_target(cursor);
    }
}

/// Keyboard / mouse bindings -> `SimulationCommand`s.
pub fn read_input(
    keys: Res<ButtonInput<KeyCode>>,
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    time: Res<Time<Real>>,
    mut clicks: Local<DoubleClick>,
    mut out: MessageWriter<SimulationCommand>,
) {
    if keys.just_pressed(KeyCode::KeyP) {
        out.write(SimulationCommand::Toggle);
    }
    if keys.just_pressed(KeyCode::Space) {
        out.write(SimulationCommand::SpawnRandomBlob);
    }
    if keys.just_pressed(KeyCode::Equal) {
        out.write(SimulationCommand::AdjustEntropy(ENTROPY_STEP));
    }
    if keys.just_pressed(KeyCode::Minus) {
        out.write(SimulationCommand::AdjustEntropy(-ENTROPY_STEP));
    }
    if keys.just_pressed(KeyCode::KeyR) {
        out.write(SimulationCommand::Reset);
    }

    if buttons.just_pressed(MouseButton::Left) && clicks.press(time.elapsed_secs_f64()) {
        let cursor = windows.single().ok().and_then(|w| w.cursor_position());
        if let Some(position) = cursor {
            out.write(SimulationCommand::SpawnRandomBlobAt(position));
        }
    }
}

/// Pairs up left presses: the second press within `DOUBLE_CLICK_SECS` of
/// the first completes a double click, and the pair is then consumed.
#[derive(Default, Debug, Clone, Copy)]
pub struct DoubleClick {
    last_press: Option<f64>,
}

impl DoubleClick {
    /// Register a press at `now` (seconds); true when it completes a double click.
    pub fn press(&mut self, now: f64) -> bool {
        match self.last_press {
            Some(previous) if now - previous <= DOUBLE_CLICK_SECS => {
                self.last_press = None;
                true
            }
            _ => {
                self.last_press = Some(now);
                false
            }
        }
    }
}

/// Window title line for the current knobs, e.g. `blob-background | entropy 1.0 | running`.
pub fn status_line(config: &SimulationConfig, lifecycle: &SimulationLifecycle) -> String {
    let state = if !lifecycle.active {
        "torn down"
    } else if config.paused {
        "paused"
    } else {
        "running"
    };
    format!("blob-background | entropy {:.1} | {state}", config.entropy)
}

/// Mirror entropy and pause state into the primary window's title.
pub fn show_status_in_title(
    config: Res<SimulationConfig>,
    lifecycle: Res<SimulationLifecycle>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
    if !config.is_changed() && !lifecycle.is_changed() {
        return;
    }
    let Ok(mut window) = windows.single_mut() else {
        return;
    };
    window.title = status_line(&config, &lifecycle);
}

/// The single place where commands mutate the simulation.
#[allow(clippy::too_many_arguments)]
pub fn apply_commands(
    mut incoming: MessageReader<SimulationCommand>,
    mut config: ResMut<SimulationConfig>,
    mut lifecycle: ResMut<SimulationLifecycle>,
    mut rng: ResMut<BlobRng>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    viewport: Res<Viewport>,
    preset: Res<StartupPreset>,
    q_entities: Query<Entity, Or<(With<Blob>, With<MouseBlob>)>>,
) {
    for &command in incoming.read() {
        if command.apply_to_config(&mut config) {
            continue;
        }

        match command {
            SimulationCommand::SpawnRandomBlob | SimulationCommand::SpawnRandomBlobAt(_) => {
                if !lifecycle.active {
                    debug!(?command, "ignored: simulation torn down");
                    continue;
                }
                let blob = match command {
                    SimulationCommand::SpawnRandomBlobAt(position) => random_blob_at(position, &mut rng.0),
                    _ => random_blob(&viewport, &mut rng.0),
                };
                info!(
                    position = ?blob.position,
                    solid_radius = blob.solid_radius,
                    color = %blob.color,
                    "blob spawned"
                );
                spawn_blob(&mut commands, &mut meshes, &mut materials, &viewport, blob);
            }
            SimulationCommand::Teardown => {
                teardown(&mut commands, &q_entities, &mut lifecycle);
            }
            SimulationCommand::Reset => {
                teardown(&mut commands, &q_entities, &mut lifecycle);
                populate(&mut commands, &mut meshes, &mut materials, &viewport, preset.0);
                lifecycle.active = true;
            }
            _ => {}
        }
    }
}

fn teardown(
    commands: &mut Commands,
    q_entities: &Query<Entity, Or<(With<Blob>, With<MouseBlob>)>>,
    lifecycle: &mut SimulationLifecycle,
) {
    let mut despawned = 0usize;
    for entity in q_entities.iter() {
        commands.entity(entity).despawn();
        despawned += 1;
    }
    lifecycle.active = false;
    info!(despawned, "background torn down");
}

/// Per-frame kinematics for every blob in one pass.
pub fn advance_blobs(
    time: Res<Time>,
    config: Res<SimulationConfig>,
    viewport: Res<Viewport>,
    mut rng: ResMut<BlobRng>,
    mut q_blobs: Query<(&mut Blob, &mut Transform)>,
) {
    if config.paused {
        return;
    }
    let dt = time.delta_secs();
    for (mut blob, mut tf) in &mut q_blobs {
        advance_blob(&mut blob, &mut *tf, &config, &viewport, dt, &mut rng.0);
    }
}

/// Pairwise repulsion, on the fixed clock.
pub fn repel_blobs(time: Res<Time>, mut q_blobs: Query<&mut Blob>) {
    let dt = time.delta_secs();
    let mut pairs = q_blobs.iter_combinations_mut::<2>();
    while let Some([mut a, mut b]) = pairs.fetch_next() {
        repel_pair(&mut a, &mut b, dt);
    }
}

/// Ease the mouse blob toward the pointer.
pub fn follow_mouse(
    config: Res<SimulationConfig>,
    viewport: Res<Viewport>,
    mut follower: ResMut<MouseFollower>,
    mut q_mouse: Query<&mut Transform, With<MouseBlob>>,
) {
    if !follower.step(config.paused) {
        return;
    }
    for mut tf in &mut q_mouse {
        follower.sync_visual(&mut *tf, &viewport);
    }
}

/// Native-only quit: press Esc or Q to exit the app.
/// (No-op on wasm32.)
pub fn exit_on_esc_or_q_if_native(keys: Res<ButtonInput<KeyCode>>, mut exit: MessageWriter<AppExit>) {
    if cfg!(not(target_arch = "wasm32")) && keys.any_just_pressed([KeyCode::Escape, KeyCode::KeyQ]) {
        exit.write(AppExit::Success);
    }
}
