//! Lineweave Interaction Sequencer
//!
//! The state machine behind each pointer-down on the artwork: it
//! regenerates the line snapshot through `lineweave-compose`, picks the
//! next scale sequence (never repeating the previous one), and schedules
//! the staggered animation targets and note-sample triggers that sweep
//! the line set.
//!
//! # Model
//!
//! All work is single-threaded and event-driven. One interaction produces
//! one atomic [`InteractionPlan`]; the host applies its visual targets
//! through the [`Animator`] seam and honors its timed [`AudioEvent`]s
//! through [`SamplePlayer`]. A new interaction supersedes the previous
//! plan: animations are interrupted, never enqueued, and the per-category
//! step counters reset unconditionally.
//!
//! # Example
//!
//! ```
//! use lineweave_compose::generate_composition;
//! use lineweave_sequence::Sequencer;
//! use lineweave_spec::ArtworkConfig;
//!
//! let config = ArtworkConfig::default();
//! let composition = generate_composition(42, &config).unwrap();
//! let mut sequencer = Sequencer::new(composition.params, config, 42).unwrap();
//!
//! let plan = sequencer.pointer_down().unwrap();
//! assert!(plan.unlock_audio); // first gesture unlocks the audio engine
//! ```
//!
//! # Modules
//!
//! - [`scale`]: the fixed scale-sequence catalog and no-repeat selection
//! - [`samples`]: the pluck/melody/bass sample bank
//! - [`track`]: per-category step counters with wrap-to-1 semantics
//! - [`sequencer`]: the pointer-down state machine and plan types

pub mod error;
pub mod samples;
pub mod scale;
pub mod sequencer;
pub mod track;

// Re-export main types
pub use error::SequenceError;
pub use samples::{SampleBank, SampleCategory, SampleRef};
pub use scale::{ScaleCatalog, ScaleSequence};
pub use sequencer::{
    Animator, AudioEvent, InteractionPlan, LineTarget, SamplePlayer, Sequencer,
};
pub use track::Track;
