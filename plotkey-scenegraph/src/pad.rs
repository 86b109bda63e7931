use palette::Srgba;
use plotkey_common::color::{to_rgba_array, with_alpha, Color, ColorIndex, ColorTable};
use plotkey_common::types::StrokeCap;
use plotkey_text::markup::{has_markup, to_display_text};
use plotkey_text::types::{TextAlign, TextAnchor, TextBaseline};
use tracing::trace;

use crate::error::PlotKeySceneGraphError;
use crate::marks::mark::SceneMark;
use crate::marks::rect::SceneRectMark;
use crate::marks::rule::SceneRuleMark;
use crate::marks::text::SceneTextMark;
use crate::scene_graph::SceneGraph;
use crate::surface::{DrawSurface, LinePrimitive, PavePrimitive, TextPrimitive};

/// Defaults applied to text that does not set its own style
#[derive(Debug, Clone, PartialEq)]
pub struct PadStyle {
    /// Fraction of the smaller pad dimension
    pub text_size: f32,
    pub text_color: Color,
    pub text_anchor: TextAnchor,
    pub font_family: String,
}

impl Default for PadStyle {
    fn default() -> Self {
        Self {
            text_size: 0.05,
            text_color: Color::Index(ColorIndex::BLACK),
            text_anchor: TextAnchor::new(TextAlign::Left, TextBaseline::Bottom),
            font_family: "Helvetica".to_string(),
        }
    }
}

/// A drawing surface of fixed pixel size that records what is drawn on it.
///
/// Primitives arrive in normalized device coordinates and are stored as
/// pixel-space marks, with the origin moved to the top left corner.
#[derive(Debug, Clone)]
pub struct Pad {
    width: f32,
    height: f32,
    style: PadStyle,
    colors: ColorTable,
    marks: Vec<SceneMark>,
}

impl Pad {
    pub fn new(width: f32, height: f32) -> Self {
        Self::with_style(width, height, PadStyle::default())
    }

    pub fn with_style(width: f32, height: f32, style: PadStyle) -> Self {
        Self {
            width,
            height,
            style,
            colors: ColorTable::new(),
            marks: Vec::new(),
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn style(&self) -> &PadStyle {
        &self.style
    }

    pub fn style_mut(&mut self) -> &mut PadStyle {
        &mut self.style
    }

    pub fn colors(&self) -> &ColorTable {
        &self.colors
    }

    pub fn register_color(&mut self, index: ColorIndex, color: Srgba) {
        self.colors.register(index, color);
    }

    /// Convert normalized device coordinates to pixels
    pub fn to_pixel(&self, x: f32, y: f32) -> [f32; 2] {
        [x * self.width, (1.0 - y) * self.height]
    }

    /// Text sizes are relative to the smaller of the two pad dimensions
    pub fn text_size_px(&self, size: f32) -> f32 {
        size * f32::min(self.width, self.height)
    }

    pub fn marks(&self) -> &[SceneMark] {
        &self.marks
    }

    pub fn clear(&mut self) {
        self.marks.clear();
    }

    pub fn into_scene_graph(self) -> SceneGraph {
        SceneGraph {
            marks: self.marks,
            width: self.width,
            height: self.height,
            origin: [0.0, 0.0],
        }
    }

    fn resolve(&self, color: &Color) -> Result<[f32; 4], PlotKeySceneGraphError> {
        Ok(to_rgba_array(self.colors.resolve(color)?))
    }
}

impl DrawSurface for Pad {
    fn draw_text(&mut self, text: TextPrimitive) -> Result<(), PlotKeySceneGraphError> {
        let color = self.resolve(text.color.as_ref().unwrap_or(&self.style.text_color))?;
        let size = text.size.unwrap_or(self.style.text_size);
        let anchor = text.anchor.unwrap_or(self.style.text_anchor);
        let display = if has_markup(&text.text) {
            to_display_text(&text.text)?
        } else {
            text.text.clone()
        };
        let [x, y] = self.to_pixel(text.x, text.y);

        let name = format!("text_{}", self.marks.len());
        trace!(mark = %name, x, y, size, text = %text.text, "drawing text");

        self.marks.push(
            SceneTextMark {
                name,
                text: display,
                markup: text.text,
                x,
                y,
                align: anchor.align,
                baseline: anchor.baseline,
                color,
                font: self.style.font_family.clone(),
                font_size: self.text_size_px(size),
                zindex: None,
            }
            .into(),
        );
        Ok(())
    }

    fn draw_pave(&mut self, pave: PavePrimitive) -> Result<(), PlotKeySceneGraphError> {
        let fill = if pave.fill.style.is_filled() {
            let color = self.colors.resolve(&pave.fill.color)?;
            let color = match pave.fill.alpha {
                Some(alpha) => with_alpha(color, alpha),
                None => color,
            };
            to_rgba_array(color)
        } else {
            [0.0, 0.0, 0.0, 0.0]
        };

        let (stroke, stroke_width) = if pave.border_size > 0 {
            (self.resolve(&pave.border_color)?, pave.border_size as f32)
        } else {
            ([0.0, 0.0, 0.0, 0.0], 0.0)
        };

        // (x1, y2) is the top left corner once the y axis is flipped
        let [x, y] = self.to_pixel(pave.x1, pave.y2);
        let [x2, y2] = self.to_pixel(pave.x2, pave.y1);

        let name = format!("pave_{}", self.marks.len());
        trace!(mark = %name, x, y, x2, y2, "drawing pave");

        self.marks.push(
            SceneRectMark {
                name,
                x,
                y,
                width: x2 - x,
                height: y2 - y,
                fill,
                stroke,
                stroke_width,
                zindex: None,
            }
            .into(),
        );
        Ok(())
    }

    fn draw_line(&mut self, line: LinePrimitive) -> Result<(), PlotKeySceneGraphError> {
        let stroke = self.resolve(&line.color)?;
        let [x, y] = self.to_pixel(line.x1, line.y1);
        let [x2, y2] = self.to_pixel(line.x2, line.y2);
        let stroke_dash = line
            .style
            .dash_array()
            .map(|dash| dash.iter().map(|d| d * line.width).collect());

        let name = format!("line_{}", self.marks.len());
        trace!(mark = %name, x, y, x2, y2, width = line.width, "drawing line");

        self.marks.push(
            SceneRuleMark {
                name,
                x,
                y,
                x2,
                y2,
                stroke,
                stroke_width: line.width,
                stroke_cap: StrokeCap::Butt,
                stroke_dash,
                zindex: None,
            }
            .into(),
        );
        Ok(())
    }
}
