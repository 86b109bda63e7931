use plotkey_common::error::PlotKeyCommonError;
use plotkey_text::error::PlotKeyTextError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlotKeySceneGraphError {
    #[error("Color error: {0}")]
    Color(#[from] PlotKeyCommonError),

    #[error("Markup error: {0}")]
    Markup(#[from] PlotKeyTextError),
}
