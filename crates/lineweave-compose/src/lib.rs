//! Lineweave Composition Backend
//!
//! Deterministic derivation of a line-field composition from a single
//! 32-bit seed: global layout parameters (layout type, density, theme,
//! color mode, counts, base lengths) and per-line state (length, color,
//! opacity) for both sides.
//!
//! # Determinism
//!
//! Given the same seed and [`lineweave_spec::ArtworkConfig`], the output
//! is identical across runs and platforms:
//!
//! - PCG32 drives every draw, wrapped in [`DeterministicRng`]
//! - interaction sub-seeds are derived with BLAKE3
//! - the noise permutation tables are built from the same RNG
//!
//! # Example
//!
//! ```
//! use lineweave_compose::generate_composition;
//! use lineweave_spec::ArtworkConfig;
//!
//! let config = ArtworkConfig::default();
//! let composition = generate_composition(42, &config).unwrap();
//! assert_eq!(composition.left.len(), composition.params.left_count as usize);
//! ```
//!
//! # Modules
//!
//! - [`rng`]: PCG32 wrapper and seed derivation
//! - [`draw`]: typed random draws (pick one/many, ints, decimals, coins)
//! - [`noise`]: seeded 2D simplex noise and the line-field sampler
//! - [`color`]: palettes, gradient interpolation, color assignment
//! - [`compose`]: composition generation and per-interaction regeneration

pub mod color;
pub mod compose;
pub mod draw;
pub mod noise;
pub mod rng;

// Re-export main types for convenience
pub use color::{interpolate_colors, theme_backgrounds, theme_palette, ColorAssigner};
pub use compose::{generate_composition, regenerate_lines, ComposeError, Composition};
pub use draw::{pick_bool, pick_decimal, pick_int, pick_many, pick_random, shuffle, DrawError};
pub use noise::{LineField, Noise2D, SimplexNoise};
pub use rng::DeterministicRng;
