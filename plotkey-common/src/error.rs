use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlotKeyCommonError {
    #[error("Unknown color index: {0}")]
    UnknownColorIndex(i16),

    #[error("Unknown color name: `{0}`")]
    UnknownColorName(String),
}
