//! Drawing primitives expressed in normalized device coordinates (NDC).
//!
//! NDC span `[0, 1]` on both axes with the origin in the bottom left corner.
//! Coordinates outside that range are passed through to the surface unchanged.

use plotkey_common::color::Color;
use plotkey_common::types::{FillStyle, LineStyle};
use plotkey_text::types::TextAnchor;

use crate::error::PlotKeySceneGraphError;

/// A single line of text anchored at `(x, y)`.
///
/// Unset style attributes fall back to the defaults of the surface the text is drawn on.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub x: f32,
    pub y: f32,
    /// May contain TLatex-style markup
    pub text: String,
    pub color: Option<Color>,
    /// Fraction of the smaller surface dimension
    pub size: Option<f32>,
    pub anchor: Option<TextAnchor>,
}

impl TextPrimitive {
    pub fn new(x: f32, y: f32, text: impl Into<String>) -> Self {
        Self {
            x,
            y,
            text: text.into(),
            color: None,
            size: None,
            anchor: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fill {
    pub color: Color,
    pub style: FillStyle,
    /// Overrides the alpha channel of `color` when set
    pub alpha: Option<f32>,
}

impl Default for Fill {
    fn default() -> Self {
        Self {
            color: Color::default(),
            style: FillStyle::Solid,
            alpha: None,
        }
    }
}

/// A filled box spanning `(x1, y1)` to `(x2, y2)`
#[derive(Debug, Clone, PartialEq)]
pub struct PavePrimitive {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    /// Border width in pixels, `0` for no border
    pub border_size: u32,
    pub border_color: Color,
    pub fill: Fill,
}

impl PavePrimitive {
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32, fill: Fill) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            border_size: 0,
            border_color: Color::default(),
            fill,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LinePrimitive {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    /// Line width in pixels
    pub width: f32,
    pub color: Color,
    pub style: LineStyle,
}

/// A target that accepts drawing primitives, such as a [`crate::pad::Pad`].
///
/// Each call appends one drawable that the surface owns from then on.
pub trait DrawSurface {
    fn draw_text(&mut self, text: TextPrimitive) -> Result<(), PlotKeySceneGraphError>;

    fn draw_pave(&mut self, pave: PavePrimitive) -> Result<(), PlotKeySceneGraphError>;

    fn draw_line(&mut self, line: LinePrimitive) -> Result<(), PlotKeySceneGraphError>;
}

impl<S: DrawSurface + ?Sized> DrawSurface for &mut S {
    fn draw_text(&mut self, text: TextPrimitive) -> Result<(), PlotKeySceneGraphError> {
        (**self).draw_text(text)
    }

    fn draw_pave(&mut self, pave: PavePrimitive) -> Result<(), PlotKeySceneGraphError> {
        (**self).draw_pave(pave)
    }

    fn draw_line(&mut self, line: LinePrimitive) -> Result<(), PlotKeySceneGraphError> {
        (**self).draw_line(line)
    }
}
