use bevy::prelude::*;

use super::visual::{VisualHandle, Viewport};
use crate::config::MOUSE_LERP_SPEED;

/// Marker for the entity that trails the pointer. It never takes part in
/// the repulsion pass.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct MouseBlob;

/// Resource: the mouse blob's smoothed position chasing the live pointer.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct MouseFollower {
    /// Where the mouse blob is drawn (viewport pixels).
    pub current: Vec2,
    /// Last known pointer position (viewport pixels).
    pub target: Vec2,
    /// Larger = lazier. Each step closes `1 / lerp_speed` of the gap.
    pub lerp_speed: f32,
}

impl Default for MouseFollower {
    fn default() -> Self {
        Self::new(MOUSE_LERP_SPEED)
    }
}

impl MouseFollower {
    pub fn new(lerp_speed: f32) -> Self {
        Self {
            current: Vec2::ZERO,
            target: Vec2::ZERO,
            lerp_speed,
        }
    }

    pub fn set_target(&mut self, target: Vec2) {
        self.target = target;
    }

    /// `current += (target - current) / lerp_speed`, skipped while paused.
    pub fn step(&mut self, paused: bool) -> bool {
        if paused {
            return false;
        }
        self.current += (self.target - self.current) / self.lerp_speed;
        true
    }

    pub fn sync_visual<H: VisualHandle + ?Sized>(&self, handle: &mut H, viewport: &Viewport) {
        handle.set_translation(viewport.to_world(self.current));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_step_closes_a_twentieth_of_the_gap() {
        let mut follower = MouseFollower::default();
        follower.set_target(Vec2::new(100.0, 100.0));
        assert!(follower.step(false));
        assert_eq!(follower.current, Vec2::new(5.0, 5.0));
    }

    #[test]
    fn paused_follower_keeps_target_but_does_not_move() {
        let mut follower = MouseFollower::default();
        follower.set_target(Vec2::new(40.0, -20.0));
        assert!(!follower.step(true));
        assert_eq!(follower.current, Vec2::ZERO);
        assert_eq!(follower.target, Vec2::new(40.0, -20.0));

        follower.step(false);
        assert_eq!(follower.current, Vec2::new(2.0, -1.0));
    }

    #[test]
    fn converges_on_target() {
        let mut follower = MouseFollower::default();
        follower.set_target(Vec2::new(300.0, 200.0));
        for _ in 0..500 {
            follower.step(false);
        }
        assert!(follower.current.distance(follower.target) < 1e-3);
    }
}
