//! Speech port - Interface for transcribing voice notes

use async_trait::async_trait;
use domain::AudioFormat;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for speech-to-text backends
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SpeechPort: Send + Sync {
    /// Transcribe a voice note
    ///
    /// # Arguments
    /// * `audio_data` - Raw audio bytes
    /// * `format` - Container/codec of the audio
    ///
    /// # Returns
    /// The transcript, or `None` if nothing intelligible was heard
    async fn transcribe(
        &self,
        audio_data: Vec<u8>,
        format: AudioFormat,
    ) -> Result<Option<String>, ApplicationError>;
}
