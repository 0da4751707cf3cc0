//! Palettes, gradient interpolation, and the color-assignment strategy.

use lineweave_spec::{ColorMode, HexColor, Side, Theme};

use crate::compose::ComposeError;

/// Foreground colors shared by both themes.
const BASE_COLORS: [HexColor; 12] = [
    HexColor::from_u32(0xdc202e),
    HexColor::from_u32(0x2d338b),
    HexColor::from_u32(0x76306b),
    HexColor::from_u32(0xea8c2d),
    HexColor::from_u32(0xc06e86),
    HexColor::from_u32(0x0f9ebe),
    HexColor::from_u32(0x1c6ff1),
    HexColor::from_u32(0xeb3434),
    HexColor::from_u32(0xcb4e4d),
    HexColor::from_u32(0xff48e6),
    HexColor::from_u32(0xbd22a8),
    HexColor::from_u32(0x249582),
];

const DARK_EXTRAS: [HexColor; 3] = [
    HexColor::from_u32(0xffffff),
    HexColor::from_u32(0x30f8a0),
    HexColor::from_u32(0xffce00),
];

const LIGHT_EXTRAS: [HexColor; 1] = [HexColor::from_u32(0x000000)];

/// Dark backgrounds; black is doubled so it wins half the draws.
const DARK_BACKGROUNDS: [HexColor; 4] = [
    HexColor::from_u32(0x000000),
    HexColor::from_u32(0x000000),
    HexColor::from_u32(0x111111),
    HexColor::from_u32(0x040b2d),
];

const LIGHT_BACKGROUNDS: [HexColor; 4] = [
    HexColor::from_u32(0xffffff),
    HexColor::from_u32(0xfff6d1),
    HexColor::from_u32(0xfff6d1),
    HexColor::from_u32(0xdbd8d0),
];

/// Foreground palette eligible under the given theme.
pub fn theme_palette(theme: Theme) -> Vec<HexColor> {
    let extras: &[HexColor] = match theme {
        Theme::Dark => &DARK_EXTRAS,
        Theme::Light => &LIGHT_EXTRAS,
    };
    BASE_COLORS.iter().chain(extras).copied().collect()
}

/// Background palette eligible under the given theme.
pub fn theme_backgrounds(theme: Theme) -> &'static [HexColor] {
    match theme {
        Theme::Dark => &DARK_BACKGROUNDS,
        Theme::Light => &LIGHT_BACKGROUNDS,
    }
}

/// Linear per-channel RGB interpolation producing `steps` colors inclusive
/// of both endpoints.
///
/// `steps <= 1` has no defined ratio (the divisor is `steps - 1`) and is
/// rejected rather than guessed at.
pub fn interpolate_colors(
    from: HexColor,
    to: HexColor,
    steps: usize,
) -> Result<Vec<HexColor>, ComposeError> {
    if steps <= 1 {
        return Err(ComposeError::DegenerateInterpolation { steps });
    }

    let start = from.channels().map(f64::from);
    let end = to.channels().map(f64::from);

    Ok((0..steps)
        .map(|i| {
            let ratio = i as f64 / (steps - 1) as f64;
            let channel = |c: usize| (start[c] + ratio * (end[c] - start[c])).round() as u8;
            HexColor::new(channel(0), channel(1), channel(2))
        })
        .collect())
}

/// Per-line color assignment for one composition snapshot.
///
/// All color-mode branching lives here; each snapshot builds one assigner
/// and queries it per line index and side.
#[derive(Debug, Clone)]
pub struct ColorAssigner {
    mode: ColorMode,
    primary: HexColor,
    secondary: HexColor,
    separator_index: u32,
    gradient: Vec<HexColor>,
}

impl ColorAssigner {
    /// Build an assigner; `gradient_steps` should be the larger of the two
    /// line counts so every index lands inside the gradient.
    pub fn new(
        mode: ColorMode,
        primary: HexColor,
        secondary: HexColor,
        separator_index: u32,
        gradient_steps: usize,
    ) -> Result<Self, ComposeError> {
        Ok(Self {
            mode,
            primary,
            secondary,
            separator_index,
            gradient: interpolate_colors(primary, secondary, gradient_steps)?,
        })
    }

    pub fn primary(&self) -> HexColor {
        self.primary
    }

    pub fn secondary(&self) -> HexColor {
        self.secondary
    }

    /// Color for the line at `index` on `side`.
    pub fn assign(&self, index: u32, side: Side) -> HexColor {
        match self.mode {
            ColorMode::Plain => self.primary,
            ColorMode::PlainDiff => match side {
                Side::Left => self.primary,
                Side::Right => self.secondary,
            },
            ColorMode::Separated => {
                if index < self.separator_index {
                    self.primary
                } else {
                    self.secondary
                }
            }
            ColorMode::Gradient => {
                let i = (index as usize).min(self.gradient.len() - 1);
                self.gradient[i]
            }
            ColorMode::EveryOther => {
                if index % 2 == 0 {
                    self.primary
                } else {
                    self.secondary
                }
            }
        }
    }
}
