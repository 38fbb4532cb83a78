//! Extraction adapter used when no extraction backend is configured
//!
//! Reports every message and photo as "nothing found", so the ledger service
//! answers with its usual fallback replies while explicit commands keep
//! working.

use async_trait::async_trait;
use tracing::debug;

use application::{
    ApplicationError,
    ports::{ExtractedTransaction, ExtractionPort},
};

/// Extraction port that never finds a transaction
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableExtractionAdapter;

impl UnavailableExtractionAdapter {
    /// Create the adapter
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ExtractionPort for UnavailableExtractionAdapter {
    async fn extract_from_text(
        &self,
        text: &str,
    ) -> Result<Option<ExtractedTransaction>, ApplicationError> {
        debug!(text_len = text.len(), "No extraction backend, ignoring free text");
        Ok(None)
    }

    async fn extract_from_image(
        &self,
        image: Vec<u8>,
    ) -> Result<Option<ExtractedTransaction>, ApplicationError> {
        debug!(image_len = image.len(), "No extraction backend, ignoring photo");
        Ok(None)
    }
}
