//! Spawn position.

use serde::Serialize;

/// A point in the world plus the direction the player faces.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    /// Horizontal rotation in degrees.
    pub yaw: f32,
    /// Vertical rotation in degrees.
    pub pitch: f32,
}

impl Position {
    /// Creates a position facing yaw 0, pitch 0.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z,
            yaw: 0.0,
            pitch: 0.0,
        }
    }

    /// Returns a copy with the given rotation.
    pub fn with_rotation(self, yaw: f32, pitch: f32) -> Self {
        Self { yaw, pitch, ..self }
    }
}
