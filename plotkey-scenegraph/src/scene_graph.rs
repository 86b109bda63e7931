use crate::marks::mark::SceneMark;

/// Marks in pixel space, in the order they were drawn
#[derive(Debug, Clone, PartialEq)]
pub struct SceneGraph {
    pub marks: Vec<SceneMark>,
    pub width: f32,
    pub height: f32,
    pub origin: [f32; 2],
}

impl SceneGraph {
    pub fn children(&self) -> &[SceneMark] {
        &self.marks
    }

    pub fn get_mark(&self, index: usize) -> Option<&SceneMark> {
        self.marks.get(index)
    }

    pub fn find_mark(&self, name: &str) -> Option<&SceneMark> {
        self.marks.iter().find(|mark| mark.name() == name)
    }

    /// Marks in paint order. Marks without a zindex count as zindex 0,
    /// and marks with equal zindex keep their draw order.
    pub fn marks_sorted_by_zindex(&self) -> Vec<&SceneMark> {
        let mut marks: Vec<&SceneMark> = self.marks.iter().collect();
        marks.sort_by_key(|mark| mark.zindex().unwrap_or(0));
        marks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marks::rect::SceneRectMark;
    use crate::marks::rule::SceneRuleMark;
    use crate::marks::text::SceneTextMark;

    fn scene() -> SceneGraph {
        SceneGraph {
            marks: vec![
                SceneTextMark {
                    name: "label".to_string(),
                    zindex: Some(1),
                    ..Default::default()
                }
                .into(),
                SceneRectMark {
                    name: "box".to_string(),
                    ..Default::default()
                }
                .into(),
                SceneRuleMark {
                    name: "line".to_string(),
                    ..Default::default()
                }
                .into(),
            ],
            width: 100.0,
            height: 100.0,
            origin: [0.0, 0.0],
        }
    }

    #[test]
    fn test_sort_by_zindex_is_stable() {
        let scene = scene();
        let names: Vec<_> = scene
            .marks_sorted_by_zindex()
            .into_iter()
            .map(|m| m.name().to_string())
            .collect();
        assert_eq!(names, vec!["box", "line", "label"]);
    }

    #[test]
    fn test_lookup() {
        let scene = scene();
        assert!(scene.get_mark(1).and_then(|m| m.as_rect()).is_some());
        assert!(scene.get_mark(3).is_none());
        assert!(scene.find_mark("line").and_then(|m| m.as_rule()).is_some());
        assert!(scene.find_mark("missing").is_none());
    }
}
