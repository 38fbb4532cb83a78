//! Audio container formats accepted for voice notes

use serde::{Deserialize, Serialize};
use std::fmt;

/// Format of an incoming voice note
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AudioFormat {
    /// OGG container, the format messengers use for voice notes
    #[default]
    Ogg,
    /// Raw Opus stream
    Opus,
    /// MP3
    Mp3,
    /// WAV
    Wav,
}

impl AudioFormat {
    /// MIME type sent to the transcription service
    #[must_use]
    pub const fn mime_type(&self) -> &'static str {
        match self {
            Self::Ogg => "audio/ogg",
            Self::Opus => "audio/opus",
            Self::Mp3 => "audio/mpeg",
            Self::Wav => "audio/wav",
        }
    }

    /// Guess the format from a file extension (case-insensitive, dot optional)
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.trim_start_matches('.').to_lowercase().as_str() {
            "ogg" | "oga" => Some(Self::Ogg),
            "opus" => Some(Self::Opus),
            "mp3" => Some(Self::Mp3),
            "wav" => Some(Self::Wav),
            _ => None,
        }
    }
}

impl fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ogg => "ogg",
            Self::Opus => "opus",
            Self::Mp3 => "mp3",
            Self::Wav => "wav",
        })
    }
}
