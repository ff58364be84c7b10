//! Preloaded sound clips

use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;

use rodio::Decoder;

/// An encoded sound held in memory so each play only has to decode.
#[derive(Clone)]
pub struct Clip {
    name: String,
    bytes: Arc<[u8]>,
}

impl Clip {
    /// Wrap encoded bytes, checking that they decode.
    ///
    /// # Errors
    ///
    /// Returns [`AudioError::Decode`] if rodio cannot read the format.
    pub fn from_bytes(name: impl Into<String>, bytes: Arc<[u8]>) -> Result<Self, AudioError> {
        let clip = Self {
            name: name.into(),
            bytes,
        };
        clip.decoder()?;
        Ok(clip)
    }

    /// Read and check a clip from disk.
    ///
    /// # Errors
    ///
    /// Returns an IO error if the file cannot be read, or a decode error.
    pub fn from_file(name: impl Into<String>, path: impl AsRef<Path>) -> Result<Self, AudioError> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(name, bytes.into())
    }

    /// Fresh decoder positioned at the start of the clip.
    ///
    /// # Errors
    ///
    /// Returns [`AudioError::Decode`] if the bytes are not a supported format.
    pub fn decoder(&self) -> Result<Decoder<Cursor<Arc<[u8]>>>, AudioError> {
        Decoder::new(Cursor::new(Arc::clone(&self.bytes)))
            .map_err(|e| AudioError::Decode(e.to_string()))
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Encoded size in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl std::fmt::Debug for Clip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Clip")
            .field("name", &self.name)
            .field("bytes", &self.bytes.len())
            .finish()
    }
}

/// Errors that can occur during audio operations
#[derive(thiserror::Error, Debug)]
pub enum AudioError {
    /// IO error reading file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Error decoding audio data
    #[error("Decode error: {0}")]
    Decode(String),
    /// No audio device available
    #[error("No audio output device available")]
    NoDevice,
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal mono 16-bit PCM WAV with `samples` silent frames
    fn silent_wav(samples: u32) -> Vec<u8> {
        let data_len = samples * 2;
        let mut wav = Vec::new();
        wav.extend_from_slice(b"RIFF");
        wav.extend_from_slice(&(36 + data_len).to_le_bytes());
        wav.extend_from_slice(b"WAVEfmt ");
        wav.extend_from_slice(&16u32.to_le_bytes());
        wav.extend_from_slice(&1u16.to_le_bytes()); // PCM
        wav.extend_from_slice(&1u16.to_le_bytes()); // mono
        wav.extend_from_slice(&8000u32.to_le_bytes());
        wav.extend_from_slice(&16000u32.to_le_bytes());
        wav.extend_from_slice(&2u16.to_le_bytes());
        wav.extend_from_slice(&16u16.to_le_bytes());
        wav.extend_from_slice(b"data");
        wav.extend_from_slice(&data_len.to_le_bytes());
        wav.resize(wav.len() + data_len as usize, 0);
        wav
    }

    #[test]
    fn test_clip_from_wav_bytes() {
        let clip = Clip::from_bytes("pickup", silent_wav(800).into()).unwrap();
        assert_eq!(clip.name(), "pickup");
        assert_eq!(clip.len(), 44 + 1600);
        assert!(clip.decoder().is_ok());
    }

    #[test]
    fn test_garbage_rejected() {
        let result = Clip::from_bytes("noise", Arc::from(&b"definitely not audio"[..]));
        assert!(matches!(result, Err(AudioError::Decode(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = Clip::from_file("pickup", "/nonexistent/cosmo/pickup.wav");
        assert!(matches!(result, Err(AudioError::Io(_))));
    }
}
