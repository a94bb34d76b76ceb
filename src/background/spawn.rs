use bevy::prelude::*;
use rand::prelude::*;

use super::blob::{Blob, BlobColor};
use super::visual::Viewport;
use crate::config::{
    SPAWN_GLOW_EXTRA_MIN, SPAWN_GLOW_EXTRA_SPAN, SPAWN_MAX_SPEED, SPAWN_SOLID_RADIUS_MIN,
    SPAWN_SOLID_RADIUS_SPAN,
};

/// Three random channel values in shuffled order.
pub fn random_bright_color<R: Rng + ?Sized>(rng: &mut R) -> BlobColor {
    let mut channels: [u8; 3] = [rng.random(), rng.random(), rng.random()];
    channels.shuffle(rng);
    BlobColor(channels)
}

/// A random blob centered on `position` (viewport pixels).
///
/// Solid radius is a whole number in `[50, 350]`, the glow reaches
/// `[200, 700]` further out, and each velocity axis is in `[-5, 5)`.
pub fn random_blob_at<R: Rng + ?Sized>(position: Vec2, rng: &mut R) -> Blob {
    let solid_radius = (rng.random::<f32>() * SPAWN_SOLID_RADIUS_SPAN).round() + SPAWN_SOLID_RADIUS_MIN;
    let glow_extra = (rng.random::<f32>() * SPAWN_GLOW_EXTRA_SPAN).round() + SPAWN_GLOW_EXTRA_MIN;
    let velocity = Vec2::new(
        rng.random::<f32>() * 2.0 * SPAWN_MAX_SPEED - SPAWN_MAX_SPEED,
        rng.random::<f32>() * 2.0 * SPAWN_MAX_SPEED - SPAWN_MAX_SPEED,
    );

    Blob::new(
        position,
        velocity,
        solid_radius,
        solid_radius + glow_extra,
        random_bright_color(rng),
    )
}

/// A random blob somewhere inside the viewport.
pub fn random_blob<R: Rng + ?Sized>(viewport: &Viewport, rng: &mut R) -> Blob {
    let position = Vec2::new(
        rng.random::<f32>() * viewport.width(),
        rng.random::<f32>() * viewport.height(),
    );
    random_blob_at(position, rng)
}

/// Hand-tuned starting sets. Velocities are deliberately far above the
/// entropy clamp; the first frame pulls them back in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BlobPreset {
    #[default]
    Small,
    Full,
}

impl BlobPreset {
    pub fn blobs(self) -> Vec<Blob> {
        let table: &[PresetEntry] = match self {
            BlobPreset::Small => &SMALL_BLOBS,
            BlobPreset::Full => &FULL_BLOBS,
        };
        table.iter().map(PresetEntry::to_blob).collect()
    }
}

struct PresetEntry {
    solid: f32,
    glow: f32,
    color: [u8; 3],
    velocity: [f32; 2],
    position: [f32; 2],
}

impl PresetEntry {
    fn to_blob(&self) -> Blob {
        Blob::new(
            Vec2::from_array(self.position),
            Vec2::from_array(self.velocity),
            self.solid,
            self.glow,
            BlobColor(self.color),
        )
    }
}

const fn entry(solid: f32, glow: f32, color: [u8; 3], velocity: [f32; 2], position: [f32; 2]) -> PresetEntry {
    PresetEntry {
        solid,
        glow,
        color,
        velocity,
        position,
    }
}

const SMALL_BLOBS: [PresetEntry; 4] = [
    entry(100.0, 300.0, [255, 100, 100], [200.0, -190.0], [1400.0, 500.0]),
    entry(100.0, 300.0, [255, 100, 255], [30.0, 300.0], [100.0, 500.0]),
    entry(300.0, 600.0, [255, 255, 120], [60.0, 220.0], [1600.0, 500.0]),
    entry(200.0, 400.0, [0, 100, 100], [500.0, 300.0], [800.0, 800.0]),
];

const FULL_BLOBS: [PresetEntry; 9] = [
    entry(100.0, 300.0, [255, 100, 255], [30.0, 300.0], [100.0, 500.0]),
    entry(200.0, 400.0, [0, 100, 100], [500.0, 300.0], [800.0, 800.0]),
    entry(150.0, 350.0, [255, 120, 60], [-200.0, 180.0], [600.0, 400.0]),
    entry(250.0, 500.0, [80, 200, 255], [120.0, -250.0], [1200.0, 700.0]),
    entry(180.0, 320.0, [200, 80, 255], [-150.0, -100.0], [400.0, 300.0]),
    entry(300.0, 600.0, [255, 255, 120], [60.0, 220.0], [1600.0, 500.0]),
    entry(120.0, 280.0, [100, 255, 180], [-80.0, 260.0], [900.0, 200.0]),
    entry(100.0, 300.0, [100, 100, 255], [-300.0, 10.0], [740.0, 500.0]),
    entry(100.0, 300.0, [255, 100, 100], [200.0, -190.0], [1400.0, 500.0]),
];
