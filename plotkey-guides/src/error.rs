use plotkey_scenegraph::error::PlotKeySceneGraphError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlotKeyGuidesError {
    #[error("Drawing failed: {0}")]
    SceneGraph(#[from] PlotKeySceneGraphError),
}
