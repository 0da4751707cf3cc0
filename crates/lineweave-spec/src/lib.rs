//! Lineweave Canonical Spec Library
//!
//! This crate provides the shared types for the Lineweave generative
//! line-field artwork: the enums that classify a composition (layout,
//! color mode, theme, side), the immutable per-instance parameter set,
//! the per-line target state, and the artwork configuration consumed by
//! the composition and sequencing backends.
//!
//! # Overview
//!
//! A Lineweave instance is derived once from a single seed. The
//! composition backend turns that seed into a [`CompositionParams`] plus
//! two ordered sequences of [`LineState`]; the sequencing backend replaces
//! those line states wholesale on every pointer interaction. Everything in
//! this crate is plain data: serializable, cloneable, and free of any
//! generation logic.
//!
//! # Modules
//!
//! - [`color`]: hex color newtype used throughout the parameter types
//! - [`config`]: artwork configuration and reseed policy
//! - [`params`]: composition enums, parameters, and per-line state

pub mod color;
pub mod config;
pub mod params;

// Re-export commonly used types at the crate root
pub use color::{HexColor, ParseColorError};
pub use config::{ArtworkConfig, ReseedPolicy, SpringConfig};
pub use params::{ColorMode, CompositionParams, LayoutType, LineState, Side, Theme};
