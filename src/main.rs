use bevy::prelude::*;

use blob_background::background::BackgroundPlugin;
use blob_background::config::REPULSION_HZ;

fn main() {
    App::new()
        // Solid black background
        .insert_resource(ClearColor(Color::BLACK))
        // Configure the fixed timestep clock (used by the repulsion pass)
        .insert_resource(Time::<Fixed>::from_hz(REPULSION_HZ))
        // Bevy's core engine features
        .add_plugins(DefaultPlugins)
        // Blobs, mouse blob, controls
        .add_plugins(BackgroundPlugin::default())
        .run();
}
