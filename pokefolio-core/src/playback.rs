//! Background music for the whole session.
//!
//! [`PlaybackController`] owns the single audio resource through an
//! [`AudioBackend`]. `is_playing` only changes when the resource reports a
//! transition via [`PlaybackController::handle_event`]; requesting playback
//! never flips it optimistically.

use crate::error::PlaybackError;
use serde::{Deserialize, Serialize};

/// Looping track played for the whole session.
pub const AUDIO_ASSET: &str = "assets/sounds/battle.mp3";
pub const DEFAULT_VOLUME: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioPlaybackState {
    pub is_playing: bool,
    pub volume: f64,
    pub is_muted: bool,
}

impl Default for AudioPlaybackState {
    fn default() -> Self {
        Self {
            is_playing: false,
            volume: DEFAULT_VOLUME,
            is_muted: false,
        }
    }
}

/// Transitions reported by the audio resource itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaEvent {
    Play,
    Pause,
    Ended,
    Error,
}

/// The platform audio resource.
pub trait AudioBackend {
    fn set_loop(&mut self, looping: bool);
    fn set_volume(&mut self, volume: f64);
    fn set_muted(&mut self, muted: bool);

    /// Ask the resource to start.
    ///
    /// # Errors
    ///
    /// Returns [`PlaybackError::Blocked`] when the platform refuses playback
    /// that was not triggered by a user gesture.
    fn play(&mut self) -> Result<(), PlaybackError>;
    fn pause(&mut self);

    /// Drop the underlying media source. Called once, from `destroy`.
    fn release(&mut self);
}

impl<B: AudioBackend + ?Sized> AudioBackend for Box<B> {
    fn set_loop(&mut self, looping: bool) {
        (**self).set_loop(looping);
    }
    fn set_volume(&mut self, volume: f64) {
        (**self).set_volume(volume);
    }
    fn set_muted(&mut self, muted: bool) {
        (**self).set_muted(muted);
    }
    fn play(&mut self) -> Result<(), PlaybackError> {
        (**self).play()
    }
    fn pause(&mut self) {
        (**self).pause();
    }
    fn release(&mut self) {
        (**self).release();
    }
}

pub type SubscriptionId = usize;

type Subscriber = Box<dyn Fn(&AudioPlaybackState)>;

pub struct PlaybackController<B> {
    backend: Option<B>,
    state: AudioPlaybackState,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: SubscriptionId,
}

impl<B> std::fmt::Debug for PlaybackController<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaybackController")
            .field("state", &self.state)
            .field("destroyed", &self.backend.is_none())
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl<B: AudioBackend> PlaybackController<B> {
    /// Configure `backend` (looping, default volume) and try to start right away.
    ///
    /// A blocked attempt leaves playback paused until [`Self::enable_autoplay`]
    /// runs from a user gesture.
    pub fn initialize(mut backend: B) -> Self {
        let state = AudioPlaybackState::default();
        backend.set_loop(true);
        backend.set_volume(state.volume);
        backend.set_muted(state.is_muted);
        let mut controller = Self {
            backend: Some(backend),
            state,
            subscribers: Vec::new(),
            next_subscription: 0,
        };
        controller.play();
        controller
    }

    #[must_use]
    pub const fn current_state(&self) -> AudioPlaybackState {
        self.state
    }

    #[must_use]
    pub const fn is_destroyed(&self) -> bool {
        self.backend.is_none()
    }

    pub fn play(&mut self) {
        let Some(backend) = self.backend.as_mut() else {
            return;
        };
        match backend.play() {
            Ok(()) => log::debug!("playback requested"),
            Err(PlaybackError::Blocked) => {
                log::info!("autoplay blocked by the browser; waiting for a user gesture");
            }
        }
    }

    pub fn pause(&mut self) {
        if let Some(backend) = self.backend.as_mut() {
            backend.pause();
        }
    }

    /// Apply `volume` clamped to `[0, 1]`. NaN is ignored.
    pub fn set_volume(&mut self, volume: f64) {
        if volume.is_nan() {
            return;
        }
        let Some(backend) = self.backend.as_mut() else {
            return;
        };
        let clamped = volume.clamp(0.0, 1.0);
        backend.set_volume(clamped);
        self.update(|state| state.volume = clamped);
    }

    pub fn mute(&mut self) {
        self.set_muted(true);
    }

    pub fn unmute(&mut self) {
        self.set_muted(false);
    }

    pub fn toggle_mute(&mut self) {
        self.set_muted(!self.state.is_muted);
    }

    /// Called from user-gesture handlers: unmute and retry playback.
    pub fn enable_autoplay(&mut self) {
        if self.backend.is_none() {
            return;
        }
        self.unmute();
        self.play();
    }

    /// Record a transition reported by the audio resource.
    pub fn handle_event(&mut self, event: MediaEvent) {
        if self.backend.is_none() {
            return;
        }
        match event {
            MediaEvent::Play => {
                log::info!("background music playing");
                self.update(|state| state.is_playing = true);
            }
            MediaEvent::Pause | MediaEvent::Ended => self.update(|state| state.is_playing = false),
            MediaEvent::Error => {
                log::error!("background music failed to load or decode");
                self.update(|state| state.is_playing = false);
            }
        }
    }

    /// Pause and release the resource. Every later call is a no-op.
    pub fn destroy(&mut self) {
        if let Some(mut backend) = self.backend.take() {
            backend.pause();
            backend.release();
            self.subscribers.clear();
            log::debug!("playback controller destroyed");
        }
    }

    /// Attach `callback`; it receives the current state at once and every
    /// later change.
    pub fn subscribe(&mut self, callback: impl Fn(&AudioPlaybackState) + 'static) -> SubscriptionId {
        let id = self.next_subscription;
        self.next_subscription += 1;
        if self.backend.is_some() {
            callback(&self.state);
            self.subscribers.push((id, Box::new(callback)));
        }
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
    }

    fn set_muted(&mut self, muted: bool) {
        let Some(backend) = self.backend.as_mut() else {
            return;
        };
        backend.set_muted(muted);
        self.update(|state| state.is_muted = muted);
    }

    fn update(&mut self, apply: impl FnOnce(&mut AudioPlaybackState)) {
        let before = self.state;
        apply(&mut self.state);
        if before != self.state {
            for (_, subscriber) in &self.subscribers {
                subscriber(&self.state);
            }
        }
    }
}
