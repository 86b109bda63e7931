use plotkey_common::color::Color;
use plotkey_common::types::{FillStyle, LineStyle};
use plotkey_scenegraph::surface::{DrawSurface, Fill, LinePrimitive, PavePrimitive, TextPrimitive};
use plotkey_text::types::{TextAlign, TextAnchor, TextBaseline};
use std::io::{self, Write};
use tracing::{debug, warn};

use crate::error::PlotKeyGuidesError;

/// Text size the swatch geometry is derived from.
///
/// This is independent of the size the label is actually rendered at, which
/// is whatever default the surface carries.
pub const TEXT_SIZE_REFERENCE: f32 = 0.06;

/// Where the computed swatch bounds are reported
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SwatchDiagnostics {
    #[default]
    Off,
    /// Emit a `debug` level tracing event
    Log,
    /// Print the bounds to standard output
    Stdout,
}

/// Legend swatch settings
#[derive(Debug, Clone, PartialEq)]
pub struct SwatchConfig {
    pub text_size_reference: f32,

    /// Width of the accent line, in pixels
    pub line_width: f32,
    pub line_style: LineStyle,

    pub fill_style: FillStyle,

    /// Border width of the swatch box, in pixels
    pub border_size: u32,

    pub diagnostics: SwatchDiagnostics,
}

impl SwatchDiagnostics {
    /// Report the bounds of a drawn swatch. `Stdout` writes the line to `out`.
    pub fn report<W: Write>(&self, geometry: &SwatchGeometry, out: &mut W) -> io::Result<()> {
        match self {
            SwatchDiagnostics::Off => Ok(()),
            SwatchDiagnostics::Log => {
                debug!(
                    x1 = geometry.x1,
                    x2 = geometry.x2,
                    y1 = geometry.y1,
                    y2 = geometry.y2,
                    "{}",
                    geometry.diagnostic_line()
                );
                Ok(())
            }
            SwatchDiagnostics::Stdout => writeln!(out, "{}", geometry.diagnostic_line()),
        }
    }
}

impl Default for SwatchConfig {
    fn default() -> Self {
        Self {
            text_size_reference: TEXT_SIZE_REFERENCE,
            line_width: 4.0,
            line_style: LineStyle::Solid,
            fill_style: FillStyle::Solid,
            border_size: 0,
            diagnostics: SwatchDiagnostics::Off,
        }
    }
}

/// Bounds of a swatch box in normalized coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwatchGeometry {
    pub x1: f32,
    pub x2: f32,
    pub y1: f32,
    pub y2: f32,
}

impl SwatchGeometry {
    /// Place a box of width `box_size` to the left of a label anchored at `(x, y)`,
    /// vertically centered on the anchor
    pub fn compute(x: f32, y: f32, box_size: f32, config: &SwatchConfig) -> Self {
        let tsize = config.text_size_reference;
        let y1 = y - 0.25 * tsize;
        let y2 = y + 0.25 * tsize;
        let x2 = x - 0.3 * tsize;
        let x1 = x2 - box_size;
        Self { x1, x2, y1, y2 }
    }

    pub fn y_mid(&self) -> f32 {
        (self.y1 + self.y2) / 2.0
    }

    pub fn width(&self) -> f32 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> f32 {
        self.y2 - self.y1
    }

    pub fn diagnostic_line(&self) -> String {
        format!(
            "x1= {:.6} x2= {:.6} y1= {:.6} y2= {:.6}",
            self.x1, self.x2, self.y1, self.y2
        )
    }
}

/// Draw a legend entry: a label at `(x, y)` and a filled box left of it,
/// crossed by a horizontal accent line.
///
/// The label, box, and line are drawn in that order. An `alpha` of `0.0`
/// leaves the fill color untouched; any other value replaces its alpha.
/// The label's size and color are not set, so the surface defaults apply.
#[allow(clippy::too_many_arguments)]
pub fn draw_legend_swatch<S: DrawSurface + ?Sized>(
    surface: &mut S,
    x: f32,
    y: f32,
    box_size: f32,
    fill_color: impl Into<Color>,
    text: &str,
    line_color: impl Into<Color>,
    alpha: f32,
    config: &SwatchConfig,
) -> Result<SwatchGeometry, PlotKeyGuidesError> {
    surface.draw_text(TextPrimitive {
        anchor: Some(TextAnchor::new(TextAlign::Left, TextBaseline::Middle)),
        ..TextPrimitive::new(x, y, text)
    })?;

    let geometry = SwatchGeometry::compute(x, y, box_size, config);
    if let Err(err) = config.diagnostics.report(&geometry, &mut io::stdout().lock()) {
        warn!(%err, "failed to print swatch diagnostics");
    }

    surface.draw_pave(PavePrimitive {
        border_size: config.border_size,
        ..PavePrimitive::new(
            geometry.x1,
            geometry.y1,
            geometry.x2,
            geometry.y2,
            Fill {
                color: fill_color.into(),
                style: config.fill_style,
                alpha: (alpha != 0.0).then_some(alpha),
            },
        )
    })?;

    let y_mid = geometry.y_mid();
    surface.draw_line(LinePrimitive {
        x1: geometry.x1,
        y1: y_mid,
        x2: geometry.x2,
        y2: y_mid,
        width: config.line_width,
        color: line_color.into(),
        style: config.line_style,
    })?;

    Ok(geometry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn test_geometry_example() {
        let geometry = SwatchGeometry::compute(0.5, 0.5, 0.1, &SwatchConfig::default());
        assert_approx_eq!(f32, geometry.x1, 0.382, epsilon = 1e-6);
        assert_approx_eq!(f32, geometry.x2, 0.482, epsilon = 1e-6);
        assert_approx_eq!(f32, geometry.y1, 0.485, epsilon = 1e-6);
        assert_approx_eq!(f32, geometry.y2, 0.515, epsilon = 1e-6);
        assert_eq!(
            geometry.diagnostic_line(),
            "x1= 0.382000 x2= 0.482000 y1= 0.485000 y2= 0.515000"
        );
    }

    #[test]
    fn test_geometry_follows_reference_size() {
        let config = SwatchConfig {
            text_size_reference: 0.04,
            ..Default::default()
        };
        let geometry = SwatchGeometry::compute(0.3, 0.7, 0.05, &config);
        assert_approx_eq!(f32, geometry.height(), 0.02, epsilon = 1e-6);
        assert_approx_eq!(f32, geometry.x2, 0.288, epsilon = 1e-6);
        assert_approx_eq!(f32, geometry.width(), 0.05, epsilon = 1e-6);
    }

    #[test]
    fn test_stdout_report_writes_line() {
        let geometry = SwatchGeometry::compute(0.5, 0.5, 0.1, &SwatchConfig::default());
        let mut out = Vec::new();
        SwatchDiagnostics::Stdout.report(&geometry, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "x1= 0.382000 x2= 0.482000 y1= 0.485000 y2= 0.515000\n"
        );
    }

    #[test]
    fn test_off_and_log_report_write_nothing() {
        let geometry = SwatchGeometry::compute(0.5, 0.5, 0.1, &SwatchConfig::default());
        let mut out = Vec::new();
        SwatchDiagnostics::Off.report(&geometry, &mut out).unwrap();
        SwatchDiagnostics::Log.report(&geometry, &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_negative_box_size_inverts_box() {
        let geometry = SwatchGeometry::compute(0.5, 0.5, -0.1, &SwatchConfig::default());
        assert!(geometry.x1 > geometry.x2);
        assert_approx_eq!(f32, geometry.width(), -0.1, epsilon = 1e-6);
    }
}
