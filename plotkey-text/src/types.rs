use strum::VariantNames;

use crate::error::PlotKeyTextError;

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, VariantNames)]
#[strum(serialize_all = "snake_case")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, VariantNames)]
#[strum(serialize_all = "snake_case")]
pub enum TextBaseline {
    Alphabetic,
    Top,
    Middle,
    #[default]
    Bottom,
}

/// Where a text is placed relative to its anchor point
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextAnchor {
    pub align: TextAlign,
    pub baseline: TextBaseline,
}

impl TextAnchor {
    pub fn new(align: TextAlign, baseline: TextBaseline) -> Self {
        Self { align, baseline }
    }

    /// Decode a ROOT alignment code `10 * h + v`.
    ///
    /// `h` is 1 (left), 2 (center) or 3 (right); `v` is 1 (bottom), 2 (middle) or 3 (top).
    pub fn from_root_code(code: i16) -> Result<Self, PlotKeyTextError> {
        let align = match code / 10 {
            1 => TextAlign::Left,
            2 => TextAlign::Center,
            3 => TextAlign::Right,
            _ => return Err(PlotKeyTextError::InvalidAlignCode(code)),
        };
        let baseline = match code % 10 {
            1 => TextBaseline::Bottom,
            2 => TextBaseline::Middle,
            3 => TextBaseline::Top,
            _ => return Err(PlotKeyTextError::InvalidAlignCode(code)),
        };
        Ok(Self { align, baseline })
    }

    /// Inverse of [`TextAnchor::from_root_code`]. The alphabetic baseline maps to bottom.
    pub fn root_code(&self) -> i16 {
        let h = match self.align {
            TextAlign::Left => 1,
            TextAlign::Center => 2,
            TextAlign::Right => 3,
        };
        let v = match self.baseline {
            TextBaseline::Alphabetic | TextBaseline::Bottom => 1,
            TextBaseline::Middle => 2,
            TextBaseline::Top => 3,
        };
        10 * h + v
    }
}
