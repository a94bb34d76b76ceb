use bevy::prelude::*;

/// Something the simulation can place on screen.
///
/// The simulation only ever writes a 2D translation; everything else about
/// how a blob looks is decided by whoever created the handle.
pub trait VisualHandle {
    fn set_translation(&mut self, translation: Vec2);
}

/// Bevy entities: move in the XY plane, keep the layer (`z`) untouched.
impl VisualHandle for Transform {
    fn set_translation(&mut self, translation: Vec2) {
        self.translation.x = translation.x;
        self.translation.y = translation.y;
    }
}

/// Headless runs have nothing to draw.
impl VisualHandle for () {
    fn set_translation(&mut self, _translation: Vec2) {}
}

/// Resource: window size in logical pixels.
///
/// Blob positions live in viewport space (origin top-left, +Y down) so they
/// can be compared against the cursor position directly.
#[derive(Resource, Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    pub size: Vec2,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            size: Vec2::new(1280.0, 720.0),
        }
    }
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
        }
    }

    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// Viewport space -> Bevy 2D world space (origin at the window center, +Y up).
    pub fn to_world(&self, position: Vec2) -> Vec2 {
        Vec2::new(
            position.x - 0.5 * self.size.x,
            0.5 * self.size.y - position.y,
        )
    }

    pub fn contains(&self, position: Vec2) -> bool {
        (0.0..=self.size.x).contains(&position.x) && (0.0..=self.size.y).contains(&position.y)
    }
}
