use plotkey_text::types::{TextAlign, TextBaseline};

use super::mark::SceneMark;

#[derive(Debug, Clone, PartialEq)]
pub struct SceneTextMark {
    pub name: String,
    /// Display text, with markup already converted
    pub text: String,
    /// Text as supplied by the caller
    pub markup: String,
    pub x: f32,
    pub y: f32,
    pub align: TextAlign,
    pub baseline: TextBaseline,
    pub color: [f32; 4],
    pub font: String,
    pub font_size: f32,
    pub zindex: Option<i32>,
}

impl Default for SceneTextMark {
    fn default() -> Self {
        Self {
            name: "text_mark".to_string(),
            text: String::new(),
            markup: String::new(),
            x: 0.0,
            y: 0.0,
            align: TextAlign::Left,
            baseline: TextBaseline::Bottom,
            color: [0.0, 0.0, 0.0, 1.0],
            font: "sans serif".to_string(),
            font_size: 10.0,
            zindex: None,
        }
    }
}

impl From<SceneTextMark> for SceneMark {
    fn from(mark: SceneTextMark) -> Self {
        SceneMark::Text(mark)
    }
}
