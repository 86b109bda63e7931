use plotkey_common::color::Color;
use plotkey_scenegraph::surface::{DrawSurface, TextPrimitive};

use crate::error::PlotKeyGuidesError;

/// Draw a line of text at `(x, y)` in normalized coordinates.
///
/// `size` is a fraction of the surface. The alignment is left to the surface
/// default. `text` may contain TLatex-style markup.
pub fn draw_text_label<S: DrawSurface + ?Sized>(
    surface: &mut S,
    x: f32,
    y: f32,
    color: impl Into<Color>,
    text: &str,
    size: f32,
) -> Result<(), PlotKeyGuidesError> {
    surface.draw_text(TextPrimitive {
        color: Some(color.into()),
        size: Some(size),
        ..TextPrimitive::new(x, y, text)
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;
    use plotkey_common::color::NamedColor;
    use plotkey_scenegraph::pad::Pad;
    use plotkey_text::types::{TextAlign, TextBaseline};

    #[test]
    fn test_label_on_pad() -> Result<(), PlotKeyGuidesError> {
        let mut pad = Pad::new(800.0, 600.0);
        draw_text_label(&mut pad, 0.2, 0.85, NamedColor::Black, "#sqrt{s} = 13 TeV", 0.04)?;

        assert_eq!(pad.marks().len(), 1);
        let text = pad.marks()[0].as_text().unwrap();
        assert_eq!(text.text, "√s = 13 TeV");
        assert_eq!(text.align, TextAlign::Left);
        assert_eq!(text.baseline, TextBaseline::Bottom);
        assert_approx_eq!(f32, text.font_size, 24.0, epsilon = 1e-3);
        assert_approx_eq!(f32, text.x, 160.0, epsilon = 1e-3);
        assert_approx_eq!(f32, text.y, 90.0, epsilon = 1e-3);
        Ok(())
    }
}
