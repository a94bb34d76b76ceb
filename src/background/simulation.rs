use bevy::prelude::*;
use rand::prelude::*;
use rand::rngs::StdRng;
use tracing::{debug, info};

use super::blob::{Blob, advance_blob};
use super::mouse::MouseFollower;
use super::repulsion::repel_all;
use super::settings::SimulationConfig;
use super::spawn::{BlobPreset, random_blob, random_blob_at};
use super::visual::{VisualHandle, Viewport};

/// Engine-free simulation context.
///
/// Owns the blobs (and one visual handle per blob), the mouse follower, the
/// shared config and the RNG. Drive it with `tick` once per frame and
/// `repulsion_pass` at whatever cadence the caller picks.
pub struct Simulation<H: VisualHandle> {
    blobs: Vec<Blob>,
    handles: Vec<H>,
    mouse: MouseFollower,
    mouse_handle: H,
    config: SimulationConfig,
    viewport: Viewport,
    rng: StdRng,
    active: bool,
}

impl<H: VisualHandle> Simulation<H> {
    pub fn new(viewport: Viewport, mouse_handle: H, seed: u64) -> Self {
        Self {
            blobs: Vec::new(),
            handles: Vec::new(),
            mouse: MouseFollower::default(),
            mouse_handle,
            config: SimulationConfig::default(),
            viewport,
            rng: StdRng::seed_from_u64(seed),
            active: true,
        }
    }

    /// Seed with a preset, creating one handle per blob.
    pub fn with_preset(mut self, preset: BlobPreset, mut make_handle: impl FnMut(&Blob) -> H) -> Self {
        for blob in preset.blobs() {
            let handle = make_handle(&blob);
            self.add_blob(blob, handle);
        }
        self
    }

    // --------------------- Accessors ---------------------

    pub fn blobs(&self) -> &[Blob] {
        &self.blobs
    }

    pub fn handles(&self) -> &[H] {
        &self.handles
    }

    pub fn mouse(&self) -> &MouseFollower {
        &self.mouse
    }

    pub fn mouse_handle(&self) -> &H {
        &self.mouse_handle
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    // --------------------- Spawn / configuration ---------------------

    pub fn add_blob(&mut self, blob: Blob, mut handle: H) -> usize {
        blob.sync_visual(&mut handle, &self.viewport);
        self.blobs.push(blob);
        self.handles.push(handle);
        debug!(count = self.blobs.len(), "blob added");
        self.blobs.len() - 1
    }

    pub fn spawn_random_blob(&mut self, handle: H) -> usize {
        let blob = random_blob(&self.viewport, &mut self.rng);
        self.add_blob(blob, handle)
    }

    pub fn spawn_random_blob_with_position(&mut self, position: Vec2, handle: H) -> usize {
        let blob = random_blob_at(position, &mut self.rng);
        self.add_blob(blob, handle)
    }

    pub fn pause_simulation(&mut self) {
        self.config.pause_simulation();
    }

    pub fn resume_simulation(&mut self) {
        self.config.resume_simulation();
    }

    pub fn toggle_simulation(&mut self) {
        self.config.toggle_simulation();
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.config.set_paused(paused);
    }

    pub fn set_entropy(&mut self, entropy: f32) {
        self.config.set_entropy(entropy);
    }

    pub fn adjust_entropy(&mut self, delta: f32) {
        self.config.adjust_entropy(delta);
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn set_mouse_target(&mut self, target: Vec2) {
        self.mouse.set_target(target);
    }

    // --------------------- Loops ---------------------

    /// One rendered frame: every blob's kinematics, then the mouse blob.
    pub fn tick(&mut self, dt: f32) {
        if !self.active {
            return;
        }

        for (blob, handle) in self.blobs.iter_mut().zip(self.handles.iter_mut()) {
            advance_blob(blob, handle, &self.config, &self.viewport, dt, &mut self.rng);
        }

        if self.mouse.step(self.config.paused) {
            self.mouse.sync_visual(&mut self.mouse_handle, &self.viewport);
        }
    }

    /// Pairwise repulsion with its own `dt`. Ignores the pause flag.
    pub fn repulsion_pass(&mut self, dt: f32) -> usize {
        if !self.active {
            return 0;
        }
        repel_all(&mut self.blobs, dt)
    }

    /// Drop every blob and stop all loops.
    pub fn teardown(&mut self) {
        info!(blobs = self.blobs.len(), "simulation torn down");
        self.blobs.clear();
        self.handles.clear();
        self.active = false;
    }

    /// Teardown followed by a fresh preset; the loops run again afterwards.
    pub fn reset(&mut self, preset: BlobPreset, mut make_handle: impl FnMut(&Blob) -> H) {
        self.teardown();
        self.active = true;
        for blob in preset.blobs() {
            let handle = make_handle(&blob);
            self.add_blob(blob, handle);
        }
    }
}
