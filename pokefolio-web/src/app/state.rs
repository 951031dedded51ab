use crate::audio::AudioHandle;
use crate::data::{self, SharedSource};
use pokefolio_core::SiteConfiguration;
use std::cell::Cell;
use std::rc::Rc;
use yew::prelude::*;

/// Session flag recording that the landing intro has already played.
#[derive(Clone, Debug, Default)]
pub struct IntroFlag(Rc<Cell<bool>>);

impl PartialEq for IntroFlag {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl IntroFlag {
    #[must_use]
    pub fn played(&self) -> bool {
        self.0.get()
    }

    pub fn mark_played(&self) {
        self.0.set(true);
    }
}

/// Config source handle compared by identity.
#[derive(Clone)]
pub struct SourceHandle(pub SharedSource);

impl PartialEq for SourceHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl std::fmt::Debug for SourceHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SourceHandle")
    }
}

/// Everything the shell hands down to the pages.
#[derive(Clone, Debug, PartialEq)]
pub struct AppContext {
    /// Site configuration as loaded by the shell; `None` until it arrives or
    /// when it failed to load.
    pub site: Option<Rc<SiteConfiguration>>,
    pub source: SourceHandle,
    pub audio: AudioHandle,
    pub intro: IntroFlag,
}

impl AppContext {
    /// A context for components rendered outside the shell.
    #[must_use]
    pub fn detached() -> Self {
        Self {
            site: None,
            source: SourceHandle(data::default_source()),
            audio: AudioHandle::silent(),
            intro: IntroFlag::default(),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub site: UseStateHandle<Option<Rc<SiteConfiguration>>>,
    pub source: UseStateHandle<SourceHandle>,
    pub audio: UseStateHandle<AudioHandle>,
    pub intro: UseStateHandle<IntroFlag>,
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        site: use_state(|| None::<Rc<SiteConfiguration>>),
        source: use_state(|| SourceHandle(data::default_source())),
        audio: use_state(crate::audio::create_audio_handle),
        intro: use_state(IntroFlag::default),
    }
}

impl AppState {
    #[must_use]
    pub fn context(&self) -> AppContext {
        AppContext {
            site: (*self.site).clone(),
            source: (*self.source).clone(),
            audio: (*self.audio).clone(),
            intro: (*self.intro).clone(),
        }
    }
}

/// The shell's context, or a detached one when rendered standalone.
#[hook]
pub fn use_app_context() -> AppContext {
    let shell = use_context::<AppContext>();
    let fallback = use_memo(shell.is_none(), |&standalone| detached_if(standalone));
    match shell {
        Some(ctx) => ctx,
        None => (*fallback).clone().unwrap_or_else(AppContext::detached),
    }
}

fn detached_if(standalone: bool) -> Option<AppContext> {
    standalone.then(AppContext::detached)
}
