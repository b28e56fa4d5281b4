//! Tunables for the animated background.

use std::time::Duration;

use serde::Deserialize;

/// Background animator settings, read from the `[background]` config table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BackgroundSettings {
    /// Draw the animated background at all.
    pub enabled: bool,
    /// Fixed seed for reproducible scenes. Random when absent.
    pub seed: Option<u64>,
    /// Target frames per second.
    pub fps: u32,
    /// Number of decorative objects.
    pub object_count: usize,
    /// Particles in each of the three layers.
    pub particles_per_layer: usize,
    /// Maximum number of points kept per trail.
    pub trail_length: usize,
    /// Clamp the proximity glow so emissive channels stay within `0.0..=1.0`.
    pub clamp_emissive: bool,
}

impl Default for BackgroundSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            seed: None,
            fps: 30,
            object_count: 25,
            particles_per_layer: 200,
            trail_length: 8,
            clamp_emissive: true,
        }
    }
}

impl BackgroundSettings {
    /// Time between frames at the configured rate.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.fps.clamp(1, 240) as f64)
    }
}
