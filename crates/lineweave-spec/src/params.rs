//! Composition enums, per-instance parameters, and per-line state.

use serde::{Deserialize, Serialize};

use crate::color::HexColor;

/// Geometric arrangement policy for the two line groups.
///
/// Chosen once per artwork instance; it selects the position/length
/// mapping applied by the presentation layer and whether generated
/// lengths are forced non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutType {
    /// Mirrored strips growing away from a shared spine.
    BackToBack,
    /// Two groups growing toward each other across a gap.
    Facing,
    /// Interleaved groups sharing one axis.
    Winding,
}

/// Policy mapping a line's index and side to a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorMode {
    /// Primary color everywhere.
    Plain,
    /// Primary on the left group, secondary on the right.
    PlainDiff,
    /// Primary below the separator index, secondary above.
    Separated,
    /// Gradient from primary to secondary across the index range.
    Gradient,
    /// Primary on even indices, secondary on odd.
    EveryOther,
}

/// Background/foreground palette family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Dark,
    Light,
}

/// One of the two independent line groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Left,
    Right,
}

/// Global layout parameters derived once per artwork instance.
///
/// Immutable after generation. Per-interaction regeneration replaces the
/// line states but never touches these values; the clone flags recorded
/// here keep later noise reseeding consistent with the initial draw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositionParams {
    pub layout_type: LayoutType,
    pub color_mode: ColorMode,
    pub theme: Theme,
    /// Vertical spacing between lines; also bounds the line counts.
    pub density: f64,
    /// Whole-composition rotation, either 0 or pi/2.
    pub rotation: f64,
    pub background: HexColor,
    /// Depth of each line's box, purely cosmetic.
    pub line_depth: f64,
    /// Thickness of each line's box, purely cosmetic.
    pub line_height: f64,
    /// Horizontal offset of the left group, keyed by layout type.
    pub left_group_offset: f64,
    pub left_count: u32,
    pub right_count: u32,
    pub left_base_length: f64,
    pub right_base_length: f64,
    pub primary: HexColor,
    pub secondary: HexColor,
    /// Index below which `ColorMode::Separated` assigns the primary color.
    pub color_separator_index: u32,
    /// Right base length was cloned from the left.
    pub cloned_lengths: bool,
    /// Right count was cloned from the left.
    pub cloned_counts: bool,
    /// Right noise field aliases the left one.
    pub cloned_noise: bool,
}

impl CompositionParams {
    /// Line count for the given side.
    pub fn count(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left_count,
            Side::Right => self.right_count,
        }
    }

    /// Base length for the given side.
    pub fn base_length(&self, side: Side) -> f64 {
        match side {
            Side::Left => self.left_base_length,
            Side::Right => self.right_base_length,
        }
    }

    /// Larger of the two line counts; sizes gradients and audio step ranges.
    pub fn max_count(&self) -> u32 {
        self.left_count.max(self.right_count)
    }
}

/// Target state for a single line strip.
///
/// Created at composition time and replaced wholesale on every
/// interaction; never partially mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineState {
    pub index: u32,
    pub target_length: f64,
    pub color: HexColor,
    /// In [0, 1].
    pub opacity: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn params() -> CompositionParams {
        CompositionParams {
            layout_type: LayoutType::Facing,
            color_mode: ColorMode::Gradient,
            theme: Theme::Dark,
            density: 0.2,
            rotation: 0.0,
            background: HexColor::from_u32(0x000000),
            line_depth: 0.01,
            line_height: 0.05,
            left_group_offset: -10.5,
            left_count: 47,
            right_count: 52,
            left_base_length: 2.125,
            right_base_length: 3.5,
            primary: HexColor::from_u32(0xdc202e),
            secondary: HexColor::from_u32(0x2d338b),
            color_separator_index: 30,
            cloned_lengths: false,
            cloned_counts: false,
            cloned_noise: true,
        }
    }

    #[test]
    fn test_side_accessors() {
        let p = params();
        assert_eq!(p.count(Side::Left), 47);
        assert_eq!(p.count(Side::Right), 52);
        assert_eq!(p.base_length(Side::Left), 2.125);
        assert_eq!(p.base_length(Side::Right), 3.5);
        assert_eq!(p.max_count(), 52);
    }

    #[test]
    fn test_params_serde_round_trip() {
        let p = params();
        let json = serde_json::to_string(&p).unwrap();
        let back: CompositionParams = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }

    #[test]
    fn test_enum_snake_case_encoding() {
        assert_eq!(
            serde_json::to_string(&LayoutType::BackToBack).unwrap(),
            "\"back_to_back\""
        );
        assert_eq!(
            serde_json::to_string(&ColorMode::EveryOther).unwrap(),
            "\"every_other\""
        );
        assert_eq!(serde_json::to_string(&Side::Left).unwrap(), "\"left\"");
    }
}
