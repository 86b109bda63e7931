use lyon_path::geom::Point;
use lyon_path::Path;
use plotkey_common::types::StrokeCap;

use super::mark::SceneMark;

/// Dashed rules that would need more segments than this are drawn solid
pub const MAX_DASH_SEGMENTS: f32 = 10_000.0;

/// Straight line segment in pixel space
#[derive(Debug, Clone, PartialEq)]
pub struct SceneRuleMark {
    pub name: String,
    pub x: f32,
    pub y: f32,
    pub x2: f32,
    pub y2: f32,
    pub stroke: [f32; 4],
    pub stroke_width: f32,
    pub stroke_cap: StrokeCap,
    /// Alternating dash and gap lengths in pixels
    pub stroke_dash: Option<Vec<f32>>,
    pub zindex: Option<i32>,
}

impl SceneRuleMark {
    pub fn length(&self) -> f32 {
        ((self.x2 - self.x).powi(2) + (self.y2 - self.y).powi(2)).sqrt()
    }

    pub fn path(&self) -> Path {
        let (x0, y0, x1, y1) = (self.x, self.y, self.x2, self.y2);
        let rule_len = self.length();

        let mut path_builder = Path::builder().with_svg();

        let stroke_dash = self
            .stroke_dash
            .as_ref()
            .filter(|dash| !dash.is_empty() && dash.iter().all(|d| *d > 0.0))
            .filter(|dash| {
                let cycle: f32 = dash.iter().sum();
                rule_len / cycle * dash.len() as f32 <= MAX_DASH_SEGMENTS
            });

        let Some(stroke_dash) = stroke_dash.filter(|_| rule_len > 0.0) else {
            path_builder.move_to(Point::new(x0, y0));
            path_builder.line_to(Point::new(x1, y1));
            return path_builder.build();
        };

        // Components of unit vector along (x0,y0) to (x1,y1)
        let xhat = (x1 - x0) / rule_len;
        let yhat = (y1 - y0) / rule_len;

        let mut dash_idx = 0;
        let mut start_dash_dist: f32 = 0.0;
        let mut draw = true;

        while start_dash_dist < rule_len {
            // The final dash/gap is truncated to the end of the rule
            let end_dash_dist = f32::min(start_dash_dist + stroke_dash[dash_idx], rule_len);
            if end_dash_dist <= start_dash_dist {
                // The dash is below f32 resolution at this distance
                break;
            }

            if draw {
                path_builder.move_to(Point::new(
                    x0 + xhat * start_dash_dist,
                    y0 + yhat * start_dash_dist,
                ));
                path_builder.line_to(Point::new(
                    x0 + xhat * end_dash_dist,
                    y0 + yhat * end_dash_dist,
                ));
            }

            start_dash_dist = end_dash_dist;
            dash_idx = (dash_idx + 1) % stroke_dash.len();
            draw = !draw;
        }

        path_builder.build()
    }
}

impl Default for SceneRuleMark {
    fn default() -> Self {
        Self {
            name: "rule_mark".to_string(),
            x: 0.0,
            y: 0.0,
            x2: 0.0,
            y2: 0.0,
            stroke: [0.0, 0.0, 0.0, 1.0],
            stroke_width: 1.0,
            stroke_cap: StrokeCap::Butt,
            stroke_dash: None,
            zindex: None,
        }
    }
}

impl From<SceneRuleMark> for SceneMark {
    fn from(mark: SceneRuleMark) -> Self {
        SceneMark::Rule(mark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lyon_path::PathEvent;

    fn segments(path: &Path) -> Vec<(f32, f32)> {
        path.iter()
            .filter_map(|event| match event {
                PathEvent::Line { from, to } => Some((from.x, to.x)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_solid_rule_is_single_segment() {
        let rule = SceneRuleMark {
            x: 0.0,
            y: 5.0,
            x2: 10.0,
            y2: 5.0,
            ..Default::default()
        };
        assert_eq!(segments(&rule.path()), vec![(0.0, 10.0)]);
    }

    #[test]
    fn test_dashed_rule_truncates_last_dash() {
        let rule = SceneRuleMark {
            x: 0.0,
            y: 0.0,
            x2: 10.0,
            y2: 0.0,
            stroke_dash: Some(vec![4.0, 2.0]),
            ..Default::default()
        };
        assert_eq!(segments(&rule.path()), vec![(0.0, 4.0), (6.0, 10.0)]);
    }

    #[test]
    fn test_zero_length_dashed_rule() {
        let rule = SceneRuleMark {
            stroke_dash: Some(vec![4.0, 2.0]),
            ..Default::default()
        };
        assert!(segments(&rule.path()).len() <= 1);
    }

    #[test]
    fn test_tiny_dashes_fall_back_to_solid() {
        let rule = SceneRuleMark {
            x: 0.0,
            y: 0.0,
            x2: 100.0,
            y2: 0.0,
            stroke_dash: Some(vec![4e-7, 2e-7]),
            ..Default::default()
        };
        assert_eq!(segments(&rule.path()), vec![(0.0, 100.0)]);
    }

    #[test]
    fn test_dash_count_at_limit_stays_dashed() {
        let rule = SceneRuleMark {
            x: 0.0,
            y: 0.0,
            x2: 5000.0,
            y2: 0.0,
            stroke_dash: Some(vec![0.5, 0.5]),
            ..Default::default()
        };
        assert_eq!(segments(&rule.path()).len(), 5000);
    }
}
