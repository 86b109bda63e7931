use std::collections::HashMap;
use std::fmt;
use std::ops::Add;
use std::str::FromStr;

use palette::Srgba;
use strum::{EnumString, VariantNames};

use crate::error::PlotKeyCommonError;

/// Index into a color table, compatible with ROOT's `Color_t` numbering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColorIndex(pub i16);

impl ColorIndex {
    pub const WHITE: ColorIndex = ColorIndex(0);
    pub const BLACK: ColorIndex = ColorIndex(1);
    pub const YELLOW: ColorIndex = ColorIndex(400);
    pub const GREEN: ColorIndex = ColorIndex(416);
    pub const CYAN: ColorIndex = ColorIndex(432);
    pub const BLUE: ColorIndex = ColorIndex(600);
    pub const MAGENTA: ColorIndex = ColorIndex(616);
    pub const RED: ColorIndex = ColorIndex(632);
    pub const ORANGE: ColorIndex = ColorIndex(800);
    pub const SPRING: ColorIndex = ColorIndex(820);
    pub const TEAL: ColorIndex = ColorIndex(840);
    pub const AZURE: ColorIndex = ColorIndex(860);
    pub const VIOLET: ColorIndex = ColorIndex(880);
    pub const PINK: ColorIndex = ColorIndex(900);
    pub const GRAY: ColorIndex = ColorIndex(920);
}

impl Add<i16> for ColorIndex {
    type Output = ColorIndex;

    fn add(self, offset: i16) -> Self::Output {
        ColorIndex(self.0.saturating_add(offset))
    }
}

impl fmt::Display for ColorIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Named colors of the ROOT color wheel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, VariantNames)]
#[strum(ascii_case_insensitive)]
pub enum NamedColor {
    #[strum(serialize = "kWhite", serialize = "white")]
    White,
    #[strum(serialize = "kBlack", serialize = "black")]
    Black,
    #[strum(serialize = "kGray", serialize = "gray", serialize = "grey")]
    Gray,
    #[strum(serialize = "kRed", serialize = "red")]
    Red,
    #[strum(serialize = "kGreen", serialize = "green")]
    Green,
    #[strum(serialize = "kBlue", serialize = "blue")]
    Blue,
    #[strum(serialize = "kYellow", serialize = "yellow")]
    Yellow,
    #[strum(serialize = "kMagenta", serialize = "magenta")]
    Magenta,
    #[strum(serialize = "kCyan", serialize = "cyan")]
    Cyan,
    #[strum(serialize = "kOrange", serialize = "orange")]
    Orange,
    #[strum(serialize = "kSpring", serialize = "spring")]
    Spring,
    #[strum(serialize = "kTeal", serialize = "teal")]
    Teal,
    #[strum(serialize = "kAzure", serialize = "azure")]
    Azure,
    #[strum(serialize = "kViolet", serialize = "violet")]
    Violet,
    #[strum(serialize = "kPink", serialize = "pink")]
    Pink,
}

impl NamedColor {
    pub fn index(&self) -> ColorIndex {
        match self {
            NamedColor::White => ColorIndex::WHITE,
            NamedColor::Black => ColorIndex::BLACK,
            NamedColor::Gray => ColorIndex::GRAY,
            NamedColor::Red => ColorIndex::RED,
            NamedColor::Green => ColorIndex::GREEN,
            NamedColor::Blue => ColorIndex::BLUE,
            NamedColor::Yellow => ColorIndex::YELLOW,
            NamedColor::Magenta => ColorIndex::MAGENTA,
            NamedColor::Cyan => ColorIndex::CYAN,
            NamedColor::Orange => ColorIndex::ORANGE,
            NamedColor::Spring => ColorIndex::SPRING,
            NamedColor::Teal => ColorIndex::TEAL,
            NamedColor::Azure => ColorIndex::AZURE,
            NamedColor::Violet => ColorIndex::VIOLET,
            NamedColor::Pink => ColorIndex::PINK,
        }
    }
}

impl From<NamedColor> for ColorIndex {
    fn from(value: NamedColor) -> Self {
        value.index()
    }
}

/// A color as supplied by callers: either a table index or an explicit RGBA value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    Index(ColorIndex),
    Rgba(Srgba),
}

impl Default for Color {
    fn default() -> Self {
        Color::Index(ColorIndex::BLACK)
    }
}

impl From<ColorIndex> for Color {
    fn from(value: ColorIndex) -> Self {
        Color::Index(value)
    }
}

impl From<NamedColor> for Color {
    fn from(value: NamedColor) -> Self {
        Color::Index(value.index())
    }
}

impl From<Srgba> for Color {
    fn from(value: Srgba) -> Self {
        Color::Rgba(value)
    }
}

impl FromStr for Color {
    type Err = PlotKeyCommonError;

    /// Parses a color name (`"kRed"`, `"azure"`) or a numeric index (`"4"`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(index) = s.parse::<i16>() {
            return Ok(Color::Index(ColorIndex(index)));
        }
        NamedColor::from_str(s)
            .map(Color::from)
            .map_err(|_| PlotKeyCommonError::UnknownColorName(s.to_string()))
    }
}

/// Replace the alpha channel of a color
pub fn with_alpha(color: Srgba, alpha: f32) -> Srgba {
    Srgba::new(color.red, color.green, color.blue, alpha)
}

pub fn to_rgba_array(color: Srgba) -> [f32; 4] {
    [color.red, color.green, color.blue, color.alpha]
}

/// Built-in colors: the basic indices 0-19 and the bases of the color wheel.
fn builtin_color(index: i16) -> Option<Srgba> {
    let rgb = match index {
        0 => (1.0, 1.0, 1.0),
        1 => (0.0, 0.0, 0.0),
        2 => (1.0, 0.0, 0.0),
        3 => (0.0, 1.0, 0.0),
        4 => (0.0, 0.0, 1.0),
        5 => (1.0, 1.0, 0.0),
        6 => (1.0, 0.0, 1.0),
        7 => (0.0, 1.0, 1.0),
        8 => (0.35, 0.83, 0.33),
        9 => (0.35, 0.33, 0.85),
        10 => (0.999, 0.999, 0.999),
        11 => (0.76, 0.75, 0.66),
        12 => (0.3, 0.3, 0.3),
        13 => (0.4, 0.4, 0.4),
        14 => (0.5, 0.5, 0.5),
        15 => (0.6, 0.6, 0.6),
        16 => (0.7, 0.7, 0.7),
        17 => (0.8, 0.8, 0.8),
        18 => (0.9, 0.9, 0.9),
        19 => (0.95, 0.95, 0.95),
        400 => (1.0, 1.0, 0.0),
        416 => (0.0, 1.0, 0.0),
        432 => (0.0, 1.0, 1.0),
        600 => (0.0, 0.0, 1.0),
        616 => (1.0, 0.0, 1.0),
        632 => (1.0, 0.0, 0.0),
        800 => (1.0, 0.8, 0.0),
        820 => (0.8, 1.0, 0.0),
        840 => (0.0, 1.0, 0.8),
        860 => (0.0, 0.8, 1.0),
        880 => (0.8, 0.0, 1.0),
        900 => (1.0, 0.0, 0.8),
        920 => (0.8, 0.8, 0.8),
        _ => return None,
    };
    Some(Srgba::new(rgb.0, rgb.1, rgb.2, 1.0))
}

/// Resolves [`Color`] values to RGBA.
///
/// Indices outside the built-in set, such as color wheel shades like
/// `ColorIndex::RED + 1`, must be registered before they can be resolved.
#[derive(Debug, Clone, Default)]
pub struct ColorTable {
    custom: HashMap<ColorIndex, Srgba>,
}

impl ColorTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or override) the color stored at an index
    pub fn register(&mut self, index: ColorIndex, color: Srgba) {
        self.custom.insert(index, color);
    }

    pub fn contains(&self, index: ColorIndex) -> bool {
        self.custom.contains_key(&index) || builtin_color(index.0).is_some()
    }

    pub fn resolve(&self, color: &Color) -> Result<Srgba, PlotKeyCommonError> {
        match color {
            Color::Rgba(rgba) => Ok(*rgba),
            Color::Index(index) => self
                .custom
                .get(index)
                .copied()
                .or_else(|| builtin_color(index.0))
                .ok_or(PlotKeyCommonError::UnknownColorIndex(index.0)),
        }
    }
}
