use bevy::prelude::*;
use tracing::info;

use crate::config::DEFAULT_ENTROPY;

/// Process-wide knobs read by every loop each frame.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct SimulationConfig {
    pub paused: bool,
    /// Scales both the random walk and the velocity clamp. Not bounded.
    pub entropy: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            paused: false,
            entropy: DEFAULT_ENTROPY,
        }
    }
}

impl SimulationConfig {
    pub fn pause_simulation(&mut self) {
        self.set_paused(true);
    }

    pub fn resume_simulation(&mut self) {
        self.set_paused(false);
    }

    pub fn toggle_simulation(&mut self) {
        self.set_paused(!self.paused);
    }

    pub fn set_paused(&mut self, paused: bool) {
        if self.paused != paused {
            info!(paused, "simulation pause state changed");
        }
        self.paused = paused;
    }

    pub fn set_entropy(&mut self, entropy: f32) {
        info!(entropy, "entropy set");
        self.entropy = entropy;
    }

    pub fn adjust_entropy(&mut self, delta: f32) {
        self.set_entropy(self.entropy + delta);
    }
}

/// Whether the loops are running at all. Cleared by a teardown.
#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimulationLifecycle {
    pub active: bool,
}

impl Default for SimulationLifecycle {
    fn default() -> Self {
        Self { active: true }
    }
}

/// Run condition for every per-frame loop.
pub fn simulation_active(lifecycle: Res<SimulationLifecycle>) -> bool {
    lifecycle.active
}

/// Requests from input handling (or any other caller) to change the simulation.
/// Applied in one place so that all mutation goes through the setters above.
#[derive(Message, Clone, Copy, Debug, PartialEq)]
pub enum SimulationCommand {
    SpawnRandomBlob,
    /// Position in viewport pixels.
    SpawnRandomBlobAt(Vec2),
    Pause,
    Resume,
    Toggle,
    SetPaused(bool),
    SetEntropy(f32),
    AdjustEntropy(f32),
    Teardown,
    Reset,
}

impl SimulationCommand {
    /// Apply the commands that only touch `SimulationConfig`.
    /// Returns `false` for the ones that need the ECS (spawn / lifecycle).
    pub fn apply_to_config(self, config: &mut SimulationConfig) -> bool {
        match self {
            SimulationCommand::Pause => config.pause_simulation(),
            SimulationCommand::Resume => config.resume_simulation(),
            SimulationCommand::Toggle => config.toggle_simulation(),
            SimulationCommand::SetPaused(paused) => config.set_paused(paused),
            SimulationCommand::SetEntropy(entropy) => config.set_entropy(entropy),
            SimulationCommand::AdjustEntropy(delta) => config.adjust_entropy(delta),
            SimulationCommand::SpawnRandomBlob
            | SimulationCommand::SpawnRandomBlobAt(_)
            | SimulationCommand::Teardown
            | SimulationCommand::Reset => return false,
        }
        true
    }
}
