//! Artwork configuration.
//!
//! Defaults mirror the published artwork's constants; hosts override
//! individual fields (most commonly the sample base path and the reseed
//! policy) and leave the rest alone.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where per-interaction randomness comes from.
///
/// The original sources were inconsistent here: some variants reseeded
/// interactions from the artwork seed, others fell back to system
/// randomness. The choice is an explicit configuration knob.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReseedPolicy {
    /// Every interaction derives its RNG from the artwork seed and the
    /// interaction counter; replaying the same clicks replays the piece.
    #[default]
    Seeded,
    /// Every interaction draws a fresh seed from system entropy; the
    /// piece diverges from the recorded seed after the first click.
    SystemEntropy,
}

/// Spring parameters handed to the animation scheduler for every line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpringConfig {
    pub mass: f64,
    pub tension: f64,
    pub friction: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            mass: 1.0,
            tension: 200.0,
            friction: 25.0,
        }
    }
}

/// Configuration for composition generation and interaction sequencing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtworkConfig {
    /// Per-interaction randomness source.
    pub reseed: ReseedPolicy,
    /// Density draw range, inclusive of the low end.
    pub density_range: [f64; 2],
    /// Lower bound for per-side line counts.
    pub count_floor: u32,
    /// Per-side counts are capped at `floor(count_ceiling_factor / density)`.
    pub count_ceiling_factor: f64,
    /// Base length draw range for a line group.
    pub base_length_range: [f64; 2],
    /// Probability that a side uses noise-derived lengths instead of
    /// independent uniform draws.
    pub noise_length_probability: f64,
    /// Per-index animation/audio start offset in milliseconds.
    pub stagger_ms: u32,
    /// Delay applied to audio events on the interaction that unlocks the
    /// audio engine.
    pub unlock_settle_ms: u32,
    /// A pluck sample fires every this many audio steps.
    pub pluck_step_frequency: u32,
    /// Melody and bass samples fire every this many audio steps.
    pub accompaniment_step_frequency: u32,
    /// Directory holding the note sample files.
    pub sample_base_path: PathBuf,
    pub spring: SpringConfig,
}

impl Default for ArtworkConfig {
    fn default() -> Self {
        Self {
            reseed: ReseedPolicy::Seeded,
            density_range: [0.1, 0.3],
            count_floor: 40,
            count_ceiling_factor: 12.0,
            base_length_range: [1.0, 4.0],
            noise_length_probability: 0.9,
            stagger_ms: 10,
            unlock_settle_ms: 200,
            pluck_step_frequency: 10,
            accompaniment_step_frequency: 40,
            sample_base_path: PathBuf::from("audio"),
            spring: SpringConfig::default(),
        }
    }
}

impl ArtworkConfig {
    /// Upper bound for a per-side line count at the given density.
    pub fn count_ceiling(&self, density: f64) -> u32 {
        (self.count_ceiling_factor / density).floor() as u32
    }
}
