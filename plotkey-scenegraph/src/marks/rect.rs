use lyon_path::geom::{Box2D, Point};
use lyon_path::{Path, Winding};

use super::mark::SceneMark;

/// Axis aligned rectangle in pixel space
///
/// `width` and `height` may be negative; the rectangle then extends to the
/// left of `x` or above `y`.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneRectMark {
    pub name: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub fill: [f32; 4],
    pub stroke: [f32; 4],
    pub stroke_width: f32,
    pub zindex: Option<i32>,
}

impl SceneRectMark {
    pub fn x2(&self) -> f32 {
        self.x + self.width
    }

    pub fn y2(&self) -> f32 {
        self.y + self.height
    }

    pub fn bounding_box(&self) -> Box2D<f32> {
        let x2 = self.x2();
        let y2 = self.y2();
        Box2D::new(
            Point::new(f32::min(self.x, x2), f32::min(self.y, y2)),
            Point::new(f32::max(self.x, x2), f32::max(self.y, y2)),
        )
    }

    pub fn has_stroke(&self) -> bool {
        self.stroke_width > 0.0 && self.stroke[3] > 0.0
    }

    pub fn path(&self) -> Path {
        let mut path_builder = Path::builder();
        path_builder.add_rectangle(&self.bounding_box(), Winding::Positive);
        path_builder.build()
    }
}

impl Default for SceneRectMark {
    fn default() -> Self {
        Self {
            name: "rect_mark".to_string(),
            x: 0.0,
            y: 0.0,
            width: 1.0,
            height: 1.0,
            fill: [0.0, 0.0, 0.0, 0.0],
            stroke: [0.0, 0.0, 0.0, 0.0],
            stroke_width: 0.0,
            zindex: None,
        }
    }
}

impl From<SceneRectMark> for SceneMark {
    fn from(mark: SceneRectMark) -> Self {
        SceneMark::Rect(mark)
    }
}
