use thiserror::Error;

use lumos_core::CoreError;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("failed to load font '{family}': {reason}")]
    FontLoad { family: String, reason: String },
}
