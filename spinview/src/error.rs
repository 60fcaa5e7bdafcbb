use thiserror::Error;

use crate::ViewerPhase;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum Error {
    #[error("invalid viewer config: {message}")]
    InvalidConfig { message: String },

    #[cfg(feature = "json")]
    #[error("failed to parse viewer config JSON: {message}")]
    ConfigParse { message: String },

    #[error("frame index {index} is outside a ring of {frame_count} frames")]
    FrameOutOfRange { index: usize, frame_count: usize },

    #[error("failed to load texture #{index} from '{url}': {message}")]
    TextureLoad {
        index: usize,
        url: String,
        message: String,
    },

    #[error("cannot {action} while the viewer is {phase}")]
    InvalidPhase {
        action: &'static str,
        phase: ViewerPhase,
    },
}
