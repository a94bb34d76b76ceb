use std::fmt;

use bevy::prelude::*;
use rand::prelude::*;

use super::settings::SimulationConfig;
use super::visual::{VisualHandle, Viewport};
use crate::config::{ACCELERATION_PER_ENTROPY, MAX_VELOCITY_PER_ENTROPY};

/// RGB triplet used for the glow. Displays like a CSS channel list: `"255, 100, 100"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlobColor(pub [u8; 3]);

impl BlobColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    pub fn with_alpha(self, alpha: f32) -> Color {
        let [r, g, b] = self.0;
        Color::srgba_u8(r, g, b, (alpha.clamp(0.0, 1.0) * 255.0).round() as u8)
    }
}

impl fmt::Display for BlobColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "{r}, {g}, {b}")
    }
}

/// One floating blob. Lives on an entity next to the `Transform` it drives.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Blob {
    /// Center in viewport pixels (origin top-left, +Y down).
    pub position: Vec2,
    /// Displacement applied once per frame.
    pub velocity: Vec2,
    /// Collision/overlap radius.
    pub solid_radius: f32,
    /// Rendering only; expected to be >= `solid_radius`.
    pub glow_radius: f32,
    pub color: BlobColor,
}

impl Blob {
    pub fn new(
        position: Vec2,
        velocity: Vec2,
        solid_radius: f32,
        glow_radius: f32,
        color: BlobColor,
    ) -> Self {
        Self {
            position,
            velocity,
            solid_radius,
            glow_radius,
            color,
        }
    }

    // --------------------- Kinematics steps ---------------------

    /// Random walk on velocity: each axis gets `uniform(-0.5, 0.5) * entropy * 20 * dt`.
    pub fn apply_random_walk<R: Rng + ?Sized>(&mut self, entropy: f32, dt: f32, rng: &mut R) {
        let acceleration = entropy * ACCELERATION_PER_ENTROPY;
        let jitter = Vec2::new(
            rng.random::<f32>() - 0.5,
            rng.random::<f32>() - 0.5,
        );
        self.velocity += jitter * acceleration * dt;
    }

    /// Clamp each velocity component to `[-entropy * 1.5, entropy * 1.5]`.
    ///
    /// Written as `min(max(v, lo), hi)` rather than `f32::clamp`: negative
    /// entropy inverts the range, which must not panic mid-frame.
    pub fn clamp_velocity(&mut self, entropy: f32) {
        let limit = entropy * MAX_VELOCITY_PER_ENTROPY;
        self.velocity.x = self.velocity.x.max(-limit).min(limit);
        self.velocity.y = self.velocity.y.max(-limit).min(limit);
    }

    /// Velocity is a per-frame displacement: it is added as-is, not scaled by `dt`.
    pub fn integrate(&mut self) {
        self.position += self.velocity;
    }

    /// Reflect the velocity on any axis that left the viewport, then clamp
    /// the position back inside it.
    pub fn keep_in_bounds(&mut self, viewport: &Viewport) {
        let size = viewport.size;

        if self.position.x < 0.0 || self.position.x > size.x {
            self.velocity.x = -self.velocity.x;
        }
        if self.position.y < 0.0 || self.position.y > size.y {
            self.velocity.y = -self.velocity.y;
        }

        self.position.x = self.position.x.max(0.0).min(size.x);
        self.position.y = self.position.y.max(0.0).min(size.y);
    }

    /// One frame of motion. Does nothing at all while paused.
    ///
    /// Returns whether the blob moved, so callers can skip visual writes.
    pub fn advance<R: Rng + ?Sized>(
        &mut self,
        config: &SimulationConfig,
        viewport: &Viewport,
        dt: f32,
        rng: &mut R,
    ) -> bool {
        if config.paused {
            return false;
        }

        self.apply_random_walk(config.entropy, dt, rng);
        self.clamp_velocity(config.entropy);
        self.integrate();
        self.keep_in_bounds(viewport);
        true
    }

    /// Place `handle` on this blob's center.
    pub fn sync_visual<H: VisualHandle + ?Sized>(&self, handle: &mut H, viewport: &Viewport) {
        handle.set_translation(viewport.to_world(self.position));
    }
}

/// `advance` followed by a visual write when the blob actually moved.
pub fn advance_blob<H, R>(
    blob: &mut Blob,
    handle: &mut H,
    config: &SimulationConfig,
    viewport: &Viewport,
    dt: f32,
    rng: &mut R,
) where
    H: VisualHandle + ?Sized,
    R: Rng + ?Sized,
{
    if blob.advance(config, viewport, dt, rng) {
        blob.sync_visual(handle, viewport);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;

    fn blob_at(position: Vec2, velocity: Vec2) -> Blob {
        Blob::new(position, velocity, 100.0, 300.0, BlobColor::new(255, 100, 100))
    }

    #[derive(Default)]
    struct Recorder(Vec<Vec2>);

    impl VisualHandle for Recorder {
        fn set_translation(&mut self, translation: Vec2) {
            self.0.push(translation);
        }
    }

    #[test]
    fn paused_update_changes_nothing() {
        let mut rng = StdRng::seed_from_u64(1);
        let config = SimulationConfig {
            paused: true,
            entropy: 1.0,
        };
        let viewport = Viewport::new(800.0, 600.0);
        let mut blob = blob_at(Vec2::new(1400.0, 500.0), Vec2::new(200.0, -190.0));
        let before = blob;
        let mut recorder = Recorder::default();

        advance_blob(&mut blob, &mut recorder, &config, &viewport, 0.016, &mut rng);

        assert_eq!(blob, before);
        assert!(recorder.0.is_empty());
    }

    #[test]
    fn velocity_stays_within_entropy_limit() {
        let mut rng = StdRng::seed_from_u64(2);
        let viewport = Viewport::new(1920.0, 1080.0);
        for entropy in [0.5_f32, 1.0, 3.0] {
            let config = SimulationConfig {
                paused: false,
                entropy,
            };
            let mut blob = blob_at(Vec2::new(500.0, 500.0), Vec2::new(500.0, -300.0));
            for _ in 0..200 {
                blob.advance(&config, &viewport, 0.5, &mut rng);
                assert!(blob.velocity.x.abs() <= entropy * 1.5 + 1e-6);
                assert!(blob.velocity.y.abs() <= entropy * 1.5 + 1e-6);
            }
        }
    }

    #[test]
    fn position_stays_inside_viewport() {
        let mut rng = StdRng::seed_from_u64(3);
        let viewport = Viewport::new(640.0, 480.0);
        let config = SimulationConfig {
            paused: false,
            entropy: 10.0,
        };
        let mut blob = blob_at(Vec2::new(1600.0, -50.0), Vec2::new(15.0, -15.0));
        for _ in 0..500 {
            blob.advance(&config, &viewport, 0.016, &mut rng);
            assert!((0.0..=640.0).contains(&blob.position.x));
            assert!((0.0..=480.0).contains(&blob.position.y));
        }
    }

    #[test]
    fn out_of_bounds_reflects_then_clamps() {
        let viewport = Viewport::new(100.0, 100.0);
        let mut blob = blob_at(Vec2::new(105.0, -3.0), Vec2::new(2.0, -1.0));
        blob.keep_in_bounds(&viewport);
        assert_eq!(blob.position, Vec2::new(100.0, 0.0));
        assert_eq!(blob.velocity, Vec2::new(-2.0, 1.0));

        // On the edge is still in bounds: no reflection.
        blob.keep_in_bounds(&viewport);
        assert_eq!(blob.velocity, Vec2::new(-2.0, 1.0));
    }

    #[test]
    fn integration_ignores_dt() {
        let mut rng = StdRng::seed_from_u64(4);
        let viewport = Viewport::new(1000.0, 1000.0);
        // Zero entropy: no random walk, and the clamp pins velocity to zero.
        let config = SimulationConfig {
            paused: false,
            entropy: 0.0,
        };
        let mut blob = blob_at(Vec2::new(500.0, 500.0), Vec2::new(1.0, 1.0));
        blob.advance(&config, &viewport, 10.0, &mut rng);
        assert_eq!(blob.position, Vec2::new(500.0, 500.0));

        let mut blob = blob_at(Vec2::new(500.0, 500.0), Vec2::new(1.0, -1.0));
        blob.integrate();
        assert_eq!(blob.position, Vec2::new(501.0, 499.0));
    }

    #[test]
    fn negative_entropy_does_not_panic() {
        let mut rng = StdRng::seed_from_u64(5);
        let viewport = Viewport::new(800.0, 600.0);
        let config = SimulationConfig {
            paused: false,
            entropy: -2.0,
        };
        let mut blob = blob_at(Vec2::new(400.0, 300.0), Vec2::new(0.5, 0.5));
        blob.advance(&config, &viewport, 0.016, &mut rng);
        assert_eq!(blob.velocity, Vec2::new(-3.0, -3.0));
        assert!(viewport.contains(blob.position));
    }

    #[test]
    fn moving_blob_writes_world_translation() {
        let mut rng = StdRng::seed_from_u64(6);
        let viewport = Viewport::new(800.0, 600.0);
        let config = SimulationConfig::default();
        let mut blob = blob_at(Vec2::new(400.0, 300.0), Vec2::ZERO);
        let mut recorder = Recorder::default();

        advance_blob(&mut blob, &mut recorder, &config, &viewport, 0.016, &mut rng);

        assert_eq!(recorder.0, vec![viewport.to_world(blob.position)]);
    }

    #[test]
    fn color_displays_as_channel_list() {
        assert_eq!(BlobColor::new(255, 100, 100).to_string(), "255, 100, 100");
    }
}
