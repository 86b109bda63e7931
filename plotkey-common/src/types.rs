use strum::VariantNames;

#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, VariantNames)]
#[strum(serialize_all = "snake_case")]
pub enum StrokeCap {
    #[default]
    Butt,
    Round,
    Square,
}

/// Line styles, numbered like ROOT's `Style_t` line styles
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, VariantNames)]
#[strum(serialize_all = "snake_case")]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
    DashDotted,
}

impl LineStyle {
    /// Unrecognized codes fall back to a solid line
    pub fn from_code(code: i16) -> Self {
        match code {
            2 => LineStyle::Dashed,
            3 => LineStyle::Dotted,
            4 => LineStyle::DashDotted,
            _ => LineStyle::Solid,
        }
    }

    pub fn code(&self) -> i16 {
        match self {
            LineStyle::Solid => 1,
            LineStyle::Dashed => 2,
            LineStyle::Dotted => 3,
            LineStyle::DashDotted => 4,
        }
    }

    /// Alternating dash/gap lengths in units of the stroke width.
    /// `None` for a continuous line.
    pub fn dash_array(&self) -> Option<Vec<f32>> {
        match self {
            LineStyle::Solid => None,
            LineStyle::Dashed => Some(vec![4.0, 2.0]),
            LineStyle::Dotted => Some(vec![1.0, 2.0]),
            LineStyle::DashDotted => Some(vec![4.0, 2.0, 1.0, 2.0]),
        }
    }
}

/// Fill styles, numbered like ROOT's fill style codes
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
pub enum FillStyle {
    Hollow,
    #[default]
    Solid,
    /// Hatch patterns (3000-3999). Renderers without pattern support fill them solid.
    Pattern(i16),
}

impl FillStyle {
    pub const SOLID_CODE: i16 = 1001;

    pub fn from_code(code: i16) -> Self {
        match code {
            0 => FillStyle::Hollow,
            3000..=3999 => FillStyle::Pattern(code),
            _ => FillStyle::Solid,
        }
    }

    pub fn code(&self) -> i16 {
        match self {
            FillStyle::Hollow => 0,
            FillStyle::Solid => Self::SOLID_CODE,
            FillStyle::Pattern(code) => *code,
        }
    }

    pub fn is_filled(&self) -> bool {
        !matches!(self, FillStyle::Hollow)
    }
}
