//! Composition generation.
//!
//! [`generate_composition`] is the one-time derivation of every global
//! layout parameter and both per-line state sequences from a single seed.
//! [`regenerate_lines`] rebuilds just the per-line fields and colors for
//! an interaction snapshot, leaving the parameters untouched.
//!
//! Draw order is load-bearing: every call consumes the RNG stream, so
//! reordering draws changes what a given seed produces.

use std::f64::consts::FRAC_PI_2;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use lineweave_spec::{
    ArtworkConfig, ColorMode, CompositionParams, LayoutType, LineState, Side, Theme,
};

use crate::color::{theme_backgrounds, theme_palette, ColorAssigner};
use crate::draw::{pick_bool, pick_decimal, pick_int, pick_random, DrawError};
use crate::noise::LineField;
use crate::rng::DeterministicRng;

/// Errors from composition generation. All indicate configuration or
/// programming faults; none are recoverable at runtime.
#[derive(Debug, Error)]
pub enum ComposeError {
    #[error(transparent)]
    Draw(#[from] DrawError),

    #[error("gradient interpolation requires at least 2 steps, got {steps}")]
    DegenerateInterpolation { steps: usize },
}

/// An immutable composition snapshot: the per-instance parameters plus the
/// initial per-line states for both sides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Composition {
    pub params: CompositionParams,
    pub left: Vec<LineState>,
    pub right: Vec<LineState>,
}

const LAYOUTS: [LayoutType; 3] = [LayoutType::BackToBack, LayoutType::Facing, LayoutType::Winding];

const COLOR_MODES: [ColorMode; 5] = [
    ColorMode::Plain,
    ColorMode::PlainDiff,
    ColorMode::Separated,
    ColorMode::Gradient,
    ColorMode::EveryOther,
];

const THEMES: [Theme; 2] = [Theme::Dark, Theme::Light];

/// Horizontal offset of the left group; cosmetic positioning only.
fn left_group_offset(rng: &mut DeterministicRng, layout: LayoutType) -> f64 {
    match layout {
        LayoutType::Facing => -pick_decimal(rng, 10.0, 12.0, 2),
        LayoutType::Winding => pick_decimal(rng, 3.0, 6.0, 2),
        LayoutType::BackToBack => -pick_decimal(rng, 0.2, 2.0, 2),
    }
}

/// Derive the full composition for an artwork instance.
///
/// Called once at startup by the owning component; the result is never
/// mutated, only superseded by interaction snapshots.
pub fn generate_composition(
    seed: u32,
    config: &ArtworkConfig,
) -> Result<Composition, ComposeError> {
    let rng = &mut DeterministicRng::new(seed);

    let rotation = *pick_random(rng, &[0.0, FRAC_PI_2])?;
    let density = pick_decimal(rng, config.density_range[0], config.density_range[1], 2);
    let layout_type = *pick_random(rng, &LAYOUTS)?;
    let color_mode = *pick_random(rng, &COLOR_MODES)?;

    let cloned_lengths = pick_bool(rng, 0.5);
    let cloned_counts = pick_bool(rng, 0.5);
    let cloned_noise = pick_bool(rng, 0.5);

    let theme = *pick_random(rng, &THEMES)?;
    let background = *pick_random(rng, theme_backgrounds(theme))?;
    let left_group_offset = left_group_offset(rng, layout_type);

    let count_ceiling = config.count_ceiling(density);
    let [min_len, max_len] = config.base_length_range;

    let left_count = pick_int(rng, config.count_floor, count_ceiling);
    let left_base_length = pick_decimal(rng, min_len, max_len, 3);
    let right_count = if cloned_counts {
        left_count
    } else {
        pick_int(rng, config.count_floor, count_ceiling)
    };
    let right_base_length = if cloned_lengths {
        left_base_length
    } else {
        pick_decimal(rng, min_len, max_len, 3)
    };

    // Thin lines dominate; one slot in four re-rolls a thicker depth.
    let thick_depth = pick_decimal(rng, 0.01, 0.05, 2);
    let line_depth = *pick_random(rng, &[0.01, 0.01, 0.01, thick_depth])?;
    let line_height = pick_decimal(rng, 0.03, 0.1, 3);

    let primary = *pick_random(rng, &theme_palette(theme))?;
    let secondary = *pick_random(rng, &theme_palette(theme))?;
    let color_separator_index = pick_int(rng, 0, (left_count + right_count) / 2);

    let params = CompositionParams {
        layout_type,
        color_mode,
        theme,
        density,
        rotation,
        background,
        line_depth,
        line_height,
        left_group_offset,
        left_count,
        right_count,
        left_base_length,
        right_base_length,
        primary,
        secondary,
        color_separator_index,
        cloned_lengths,
        cloned_counts,
        cloned_noise,
    };

    let assigner = ColorAssigner::new(
        color_mode,
        primary,
        secondary,
        color_separator_index,
        params.max_count() as usize,
    )?;
    let (left, right) = build_sides(&params, config, &assigner, rng);

    Ok(Composition {
        params,
        left,
        right,
    })
}

/// Rebuild both sides' line fields for an interaction snapshot: fresh
/// noise seeds, fresh primary/secondary colors from the theme palette,
/// noise aliasing per the original clone flag. Counts, base lengths, and
/// the separator index stay fixed for the artwork's lifetime.
pub fn regenerate_lines(
    params: &CompositionParams,
    config: &ArtworkConfig,
    rng: &mut DeterministicRng,
) -> Result<(Vec<LineState>, Vec<LineState>), ComposeError> {
    let palette = theme_palette(params.theme);
    let primary = *pick_random(rng, &palette)?;
    let secondary = *pick_random(rng, &palette)?;
    let assigner = ColorAssigner::new(
        params.color_mode,
        primary,
        secondary,
        params.color_separator_index,
        params.max_count() as usize,
    )?;
    Ok(build_sides(params, config, &assigner, rng))
}

fn build_sides(
    params: &CompositionParams,
    config: &ArtworkConfig,
    assigner: &ColorAssigner,
    rng: &mut DeterministicRng,
) -> (Vec<LineState>, Vec<LineState>) {
    let left_seed = rng.next_seed();
    let right_seed = if params.cloned_noise {
        left_seed
    } else {
        rng.next_seed()
    };

    let left = build_line_set(params, config, assigner, Side::Left, left_seed, rng);
    let right = build_line_set(params, config, assigner, Side::Right, right_seed, rng);
    (left, right)
}

fn build_line_set(
    params: &CompositionParams,
    config: &ArtworkConfig,
    assigner: &ColorAssigner,
    side: Side,
    noise_seed: u32,
    rng: &mut DeterministicRng,
) -> Vec<LineState> {
    let field = LineField::new(noise_seed);
    let count = params.count(side);
    let base_length = params.base_length(side);
    // Decided once for the whole line set.
    let noise_lengths = pick_bool(rng, config.noise_length_probability);
    let [min_len, max_len] = config.base_length_range;

    (0..count)
        .map(|index| {
            let raw_length = if noise_lengths {
                field.length(index, base_length)
            } else {
                pick_decimal(rng, min_len, max_len, 3)
            };
            // Mirrored strips must not cross through the origin.
            let target_length = match params.layout_type {
                LayoutType::BackToBack => raw_length.abs(),
                _ => raw_length,
            };

            LineState {
                index,
                target_length,
                color: assigner.assign(index, side),
                opacity: field.opacity(index),
            }
        })
        .collect()
}
