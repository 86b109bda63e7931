use crate::marks::rect::SceneRectMark;
use crate::marks::rule::SceneRuleMark;
use crate::marks::text::SceneTextMark;

#[derive(Debug, Clone, PartialEq)]
pub enum SceneMark {
    Rect(SceneRectMark),
    Rule(SceneRuleMark),
    Text(SceneTextMark),
}

impl SceneMark {
    pub fn zindex(&self) -> Option<i32> {
        match self {
            Self::Rect(mark) => mark.zindex,
            Self::Rule(mark) => mark.zindex,
            Self::Text(mark) => mark.zindex,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Rect(mark) => &mark.name,
            Self::Rule(mark) => &mark.name,
            Self::Text(mark) => &mark.name,
        }
    }

    pub fn as_rect(&self) -> Option<&SceneRectMark> {
        let Self::Rect(mark) = self else {
            return None;
        };
        Some(mark)
    }

    pub fn as_rule(&self) -> Option<&SceneRuleMark> {
        let Self::Rule(mark) = self else {
            return None;
        };
        Some(mark)
    }

    pub fn as_text(&self) -> Option<&SceneTextMark> {
        let Self::Text(mark) = self else {
            return None;
        };
        Some(mark)
    }
}
