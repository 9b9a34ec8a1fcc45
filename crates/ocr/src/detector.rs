use thiserror::Error;

use crate::paddle;
use crate::types::Token;

#[derive(Debug, Error)]
pub enum OcrError {
    #[error("Image decode error: {0}")]
    ImageDecode(String),
    #[error("Detection engine error: {0}")]
    Engine(String),
    #[error("Malformed engine output: {0}")]
    Output(#[from] serde_json::Error),
}

/// Abstraction over a text detection + recognition engine.
/// Implementations accept raw PNG/JPEG image bytes and return every text
/// region they found, in the engine's own order.
pub trait TextDetector: Send + Sync {
    fn detect(&self, image_bytes: &[u8]) -> Result<Vec<Token>, OcrError>;
}

// ── Mock backend (always available, used for tests) ───────────────────────────

/// Returns a pre-set token list regardless of the image.
pub struct MockDetector {
    pub tokens: Vec<Token>,
}

impl MockDetector {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    /// Replay a saved engine result (see [`paddle::tokens_from_json`]).
    pub fn from_engine_json(json: &str) -> Result<Self, OcrError> {
        Ok(Self::new(paddle::tokens_from_json(json)?))
    }
}

impl TextDetector for MockDetector {
    fn detect(&self, _image_bytes: &[u8]) -> Result<Vec<Token>, OcrError> {
        Ok(self.tokens.clone())
    }
}
