use bevy::prelude::*;

pub mod blob;
pub mod debug;
pub mod mouse;
pub mod repulsion;
pub mod settings;
pub mod simulation;
pub mod spawn;
pub mod systems;
pub mod visual;

pub use blob::{Blob, BlobColor};
pub use mouse::{MouseBlob, MouseFollower};
pub use settings::{SimulationCommand, SimulationConfig, SimulationLifecycle};
pub use simulation::Simulation;
pub use spawn::BlobPreset;
pub use visual::{VisualHandle, Viewport};

use settings::simulation_active;
use systems::{
    BlobRng, StartupPreset, advance_blobs, apply_commands, exit_on_esc_or_q_if_native,
    follow_mouse, read_input, repel_blobs, show_status_in_title, spawn_background, track_cursor,
    update_viewport,
};

/// Plug this into your App with `.add_plugins(BackgroundPlugin::default())`.
#[derive(Default)]
pub struct BackgroundPlugin {
    pub preset: BlobPreset,
}

impl Plugin for BackgroundPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Viewport>()
            .init_resource::<SimulationConfig>()
            .init_resource::<SimulationLifecycle>()
            .init_resource::<MouseFollower>()
            .init_resource::<BlobRng>()
            .init_resource::<debug::DebugOverlay>()
            .insert_resource(StartupPreset(self.preset))
            .add_message::<SimulationCommand>()
            // Size the viewport before the preset is placed in it
            .add_systems(Startup, (update_viewport, spawn_background).chain())
            // One tick per rendered frame; commands land before the blobs move
            .add_systems(
                Update,
                (
                    update_viewport,
                    track_cursor,
                    read_input,
                    apply_commands,
                    (advance_blobs, follow_mouse).run_if(simulation_active),
                    show_status_in_title,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    debug::toggle_debug_overlay,
                    debug::draw_blob_gizmos.run_if(debug::debug_overlay_enabled),
                    exit_on_esc_or_q_if_native,
                ),
            )
            // Repulsion keeps its own cadence (set the rate in main via Time::<Fixed>)
            .add_systems(FixedUpdate, repel_blobs.run_if(simulation_active));
    }
}
