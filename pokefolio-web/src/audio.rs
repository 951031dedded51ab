//! Background music wiring: the browser audio backend and the shared handle
//! the component tree uses to reach the single [`PlaybackController`].

use pokefolio_core::{
    AUDIO_ASSET, AudioBackend, AudioPlaybackState, MediaEvent, PlaybackController, PlaybackError,
};
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

type SharedController = Rc<RefCell<PlaybackController<Box<dyn AudioBackend>>>>;

/// Cheap-to-clone handle on the session's playback controller.
///
/// Equality is identity: two handles are equal when they drive the same
/// controller.
#[derive(Clone)]
pub struct AudioHandle(SharedController);

impl PartialEq for AudioHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl std::fmt::Debug for AudioHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("AudioHandle").field(&self.0.try_borrow().ok()).finish()
    }
}

impl AudioHandle {
    /// Initialize a controller around `backend` (this issues the first play attempt).
    #[must_use]
    pub fn new(backend: Box<dyn AudioBackend>) -> Self {
        Self(Rc::new(RefCell::new(PlaybackController::initialize(backend))))
    }

    /// A handle whose backend makes no sound.
    #[must_use]
    pub fn silent() -> Self {
        Self::new(Box::new(SilentBackend))
    }

    /// Run `action` against the controller.
    ///
    /// Returns `None` when the controller is already borrowed, which only
    /// happens if a subscriber tries to drive playback from inside a
    /// notification.
    pub fn with<R>(
        &self,
        action: impl FnOnce(&mut PlaybackController<Box<dyn AudioBackend>>) -> R,
    ) -> Option<R> {
        match self.0.try_borrow_mut() {
            Ok(mut controller) => Some(action(&mut controller)),
            Err(_) => {
                log::warn!("playback controller busy; dropping request");
                None
            }
        }
    }

    #[must_use]
    pub fn state(&self) -> AudioPlaybackState {
        self.0
            .try_borrow()
            .map(|controller| controller.current_state())
            .unwrap_or_default()
    }

    pub fn enable_autoplay(&self) {
        self.with(PlaybackController::enable_autoplay);
    }

    pub fn toggle_mute(&self) {
        self.with(PlaybackController::toggle_mute);
    }

    pub fn set_volume(&self, volume: f64) {
        self.with(|controller| controller.set_volume(volume));
    }

    pub fn handle_event(&self, event: MediaEvent) {
        self.with(|controller| controller.handle_event(event));
    }

    pub fn destroy(&self) {
        self.with(PlaybackController::destroy);
    }

    #[cfg(target_arch = "wasm32")]
    fn downgrade(&self) -> std::rc::Weak<RefCell<PlaybackController<Box<dyn AudioBackend>>>> {
        Rc::downgrade(&self.0)
    }
}

/// Backend for targets without an audio device (native builds, tests).
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentBackend;

impl AudioBackend for SilentBackend {
    fn set_loop(&mut self, _looping: bool) {}
    fn set_volume(&mut self, _volume: f64) {}
    fn set_muted(&mut self, _muted: bool) {}
    fn play(&mut self) -> Result<(), PlaybackError> {
        Ok(())
    }
    fn pause(&mut self) {}
    fn release(&mut self) {}
}

/// An `<audio>` element playing the session track.
pub struct HtmlAudioBackend {
    element: web_sys::HtmlAudioElement,
}

impl HtmlAudioBackend {
    /// Create the element for `src` without attaching it to the document.
    ///
    /// # Errors
    /// Returns the JavaScript error when the element cannot be constructed.
    pub fn new(src: &str) -> Result<Self, wasm_bindgen::JsValue> {
        let element = web_sys::HtmlAudioElement::new_with_src(src)?;
        element.set_preload("auto");
        Ok(Self { element })
    }

    #[must_use]
    pub fn element(&self) -> web_sys::HtmlAudioElement {
        self.element.clone()
    }
}

impl AudioBackend for HtmlAudioBackend {
    fn set_loop(&mut self, looping: bool) {
        self.element.set_loop(looping);
    }

    fn set_volume(&mut self, volume: f64) {
        self.element.set_volume(volume);
    }

    fn set_muted(&mut self, muted: bool) {
        self.element.set_muted(muted);
    }

    fn play(&mut self) -> Result<(), PlaybackError> {
        let promise = self.element.play().map_err(|_| PlaybackError::Blocked)?;
        watch_play_attempt(promise);
        Ok(())
    }

    fn pause(&mut self) {
        let _ = self.element.pause();
    }

    fn release(&mut self) {
        self.element.set_onplay(None);
        self.element.set_onpause(None);
        self.element.set_onended(None);
        self.element.set_onerror(None);
        let _ = self.element.remove_attribute("src");
        self.element.load();
    }
}

/// The browser settles a play attempt asynchronously; a rejection there is
/// the usual autoplay refusal.
#[cfg(target_arch = "wasm32")]
fn watch_play_attempt(promise: js_sys::Promise) {
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(err) = wasm_bindgen_futures::JsFuture::from(promise).await {
            log::info!(
                "autoplay blocked by the browser ({}); waiting for a user gesture",
                crate::dom::js_error_message(&err)
            );
        }
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn watch_play_attempt(promise: js_sys::Promise) {
    let _ = promise;
}

/// Forward the element's own play/pause/ended/error events to the controller.
#[cfg(target_arch = "wasm32")]
fn bind_media_events(element: &web_sys::HtmlAudioElement, handle: &AudioHandle) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let listener = |event: MediaEvent| {
        let weak = handle.downgrade();
        Closure::<dyn FnMut()>::new(move || {
            if let Some(controller) = weak.upgrade() {
                AudioHandle(controller).handle_event(event);
            }
        })
        .into_js_value()
    };
    element.set_onplay(Some(listener(MediaEvent::Play).unchecked_ref()));
    element.set_onpause(Some(listener(MediaEvent::Pause).unchecked_ref()));
    element.set_onended(Some(listener(MediaEvent::Ended).unchecked_ref()));
    element.set_onerror(Some(listener(MediaEvent::Error).unchecked_ref()));
}

/// The controller for this session: the real track in the browser, silence
/// everywhere else.
#[cfg(target_arch = "wasm32")]
#[must_use]
pub fn create_audio_handle() -> AudioHandle {
    match HtmlAudioBackend::new(&crate::paths::asset_path(AUDIO_ASSET)) {
        Ok(backend) => {
            let element = backend.element();
            let handle = AudioHandle::new(Box::new(backend));
            bind_media_events(&element, &handle);
            handle
        }
        Err(err) => {
            log::error!(
                "could not create the audio element: {}",
                crate::dom::js_error_message(&err)
            );
            AudioHandle::silent()
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[must_use]
pub fn create_audio_handle() -> AudioHandle {
    log::debug!("no audio device on this target; {AUDIO_ASSET} stays silent");
    AudioHandle::silent()
}

/// Observable playback state, kept current through a controller subscription.
#[hook]
pub fn use_audio_state(audio: &AudioHandle) -> AudioPlaybackState {
    let state = use_state_eq(|| audio.state());
    {
        let state = state.clone();
        use_effect_with(audio.clone(), move |audio| {
            let subscription = audio.with(|controller| {
                controller.subscribe(move |current| state.set(*current))
            });
            let audio = audio.clone();
            move || {
                if let Some(id) = subscription {
                    audio.with(|controller| controller.unsubscribe(id));
                }
            }
        });
    }
    *state
}
