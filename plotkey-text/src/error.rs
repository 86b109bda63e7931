use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlotKeyTextError {
    #[error("Invalid text alignment code: {0}")]
    InvalidAlignCode(i16),

    #[error("Unbalanced braces in markup at byte {position}: `{text}`")]
    UnbalancedBraces { text: String, position: usize },

    #[error("Missing argument for `#{command}` in markup: `{text}`")]
    MissingArgument { command: String, text: String },
}
