use bevy::prelude::*;

use super::blob::Blob;
use super::mouse::MouseFollower;
use super::visual::Viewport;

/// Resource: draw solid radii and the pointer target as gizmos.
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct DebugOverlay(pub bool);

pub fn toggle_debug_overlay(keys: Res<ButtonInput<KeyCode>>, mut overlay: ResMut<DebugOverlay>) {
    if keys.just_pressed(KeyCode::F1) {
        overlay.0 = !overlay.0;
    }
}

pub fn debug_overlay_enabled(overlay: Res<DebugOverlay>) -> bool {
    overlay.0
}

pub fn draw_blob_gizmos(
    mut gizmos: Gizmos,
    viewport: Res<Viewport>,
    follower: Res<MouseFollower>,
    q_blobs: Query<&Blob>,
) {
    for blob in &q_blobs {
        let center = viewport.to_world(blob.position);
        gizmos.circle_2d(center, blob.solid_radius, blob.color.with_alpha(1.0));
        // velocity is tiny (a few px/frame); scale it up so it is visible
        gizmos.line_2d(
            center,
            center + Vec2::new(blob.velocity.x, -blob.velocity.y) * 20.0,
            Color::WHITE,
        );
    }

    // Alpha 0.25 for the target, 1.0 for where the mouse blob actually is
    gizmos.circle_2d(
        viewport.to_world(follower.target),
        8.0,
        Color::srgba(1.0, 0.0, 0.0, 0.25),
    );
    gizmos.circle_2d(
        viewport.to_world(follower.current),
        8.0,
        Color::srgba(1.0, 0.0, 0.0, 1.0),
    );
}
