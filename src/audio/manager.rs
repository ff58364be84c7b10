//! Audio output and one-shot playback

use std::path::Path;

use rodio::{OutputStream, OutputStreamBuilder, Sink, mixer::Mixer};
use rustc_hash::FxHashMap;

use super::source::{AudioError, Clip};

/// Anything that can play a named one-shot sound.
///
/// Playback is fire-and-forget: implementations must return immediately
/// and swallow their own failures.
pub trait SoundPlayer {
    /// Start `name` at `volume` (0.0 to 1.0). Unknown names are ignored.
    fn play(&mut self, name: &str, volume: f32);
}

/// Plays preloaded clips on the default output device.
pub struct AudioManager {
    /// The output stream (must be kept alive)
    _stream: OutputStream,
    /// The mixer sinks are connected to
    mixer: Mixer,
    clips: FxHashMap<String, Clip>,
}

impl AudioManager {
    /// Open the default output device
    ///
    /// # Errors
    ///
    /// Returns an error if no audio output device is available
    pub fn new() -> Result<Self, AudioError> {
        let stream = OutputStreamBuilder::from_default_device()
            .map_err(|_| AudioError::NoDevice)?
            .open_stream()
            .map_err(|_| AudioError::NoDevice)?;
        let mixer = stream.mixer().clone();

        Ok(Self {
            _stream: stream,
            mixer,
            clips: FxHashMap::default(),
        })
    }

    /// Register a clip under `name`, replacing any previous one
    pub fn insert(&mut self, name: impl Into<String>, clip: Clip) {
        self.clips.insert(name.into(), clip);
    }

    /// Load a clip from disk
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or decoded
    pub fn load(&mut self, name: &str, path: impl AsRef<Path>) -> Result<(), AudioError> {
        let clip = Clip::from_file(name, path)?;
        self.insert(name, clip);
        Ok(())
    }

    /// Load a clip if the file exists.
    ///
    /// Returns `Ok(false)` when there is no such file; a missing asset just
    /// means the game plays silently.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or decoded
    pub fn load_optional(&mut self, name: &str, path: impl AsRef<Path>) -> Result<bool, AudioError> {
        let path = path.as_ref();
        if !path.is_file() {
            log::debug!("No audio asset at {}, '{name}' stays silent", path.display());
            return Ok(false);
        }
        self.load(name, path)?;
        Ok(true)
    }
}

impl SoundPlayer for AudioManager {
    fn play(&mut self, name: &str, volume: f32) {
        let Some(clip) = self.clips.get(name) else {
            return;
        };
        match clip.decoder() {
            Ok(source) => {
                let sink = Sink::connect_new(&self.mixer);
                sink.set_volume(volume.max(0.0));
                sink.append(source);
                // Keeps playing after the handle is dropped.
                sink.detach();
            }
            Err(e) => log::warn!("Could not play '{name}': {e}"),
        }
    }
}

impl std::fmt::Debug for AudioManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AudioManager")
            .field("clips", &self.clips.len())
            .finish_non_exhaustive()
    }
}

/// Player for hosts without an output device. Remembers what it was asked
/// to play.
#[derive(Debug, Default, Clone)]
pub struct SilentPlayer {
    played: Vec<(String, f32)>,
}

impl SilentPlayer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every request so far, in order
    #[must_use]
    pub fn played(&self) -> &[(String, f32)] {
        &self.played
    }
}

impl SoundPlayer for SilentPlayer {
    fn play(&mut self, name: &str, volume: f32) {
        self.played.push((name.to_owned(), volume));
    }
}

/// Open the default device and preload the pickup sound if present,
/// falling back to a [`SilentPlayer`] when there is no device.
#[must_use]
pub fn default_player(pickup_path: &Path) -> Box<dyn SoundPlayer> {
    match AudioManager::new() {
        Ok(mut manager) => {
            if let Err(e) = manager.load_optional(super::PICKUP_SOUND, pickup_path) {
                log::warn!("Ignoring unusable pickup sound: {e}");
            }
            Box::new(manager)
        }
        Err(e) => {
            log::warn!("{e}; continuing without sound");
            Box::new(SilentPlayer::new())
        }
    }
}
