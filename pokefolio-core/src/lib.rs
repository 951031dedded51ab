//! Pokefolio core
//!
//! Platform-agnostic logic behind the battle-themed portfolio: typed site and
//! view configuration, destination resolution, list selection, background
//! music control and the contact relay. Every platform concern sits behind a
//! trait ([`ConfigSource`], [`AudioBackend`], [`MailRelay`]) so the browser
//! app, the tester CLI and the tests can each plug in their own.

pub mod config;
pub mod contact;
pub mod error;
pub mod loader;
pub mod playback;
pub mod resolver;
pub mod selection;
pub mod view;

pub use config::{BattleOption, ComponentKind, EmailConfig, SITE_CONFIG_FILE, SiteConfiguration};
pub use contact::{
    ContactError, ContactField, ContactForm, ContactFormState, ContactRelay, FieldError,
    MailRelay, SUCCESS_RESET_MS, SubmitStatus, TemplateParams, ValidationErrors, is_valid_email,
};
pub use error::{ConfigError, PlaybackError, RelayError, ResolveError};
pub use loader::{ConfigLoader, ConfigSource, MemoryConfigSource};
pub use playback::{
    AUDIO_ASSET, AudioBackend, AudioPlaybackState, DEFAULT_VOLUME, MediaEvent, PlaybackController,
    SubscriptionId,
};
pub use resolver::{ResolvedView, ViewResolver};
pub use selection::{PARTY_SLOTS, PickerState, Selection, party_slots};
pub use view::{
    BagItem, DialogItem, PickerItem, PickerStats, ViewConfiguration, ViewDocument, ViewItems,
};

/// Base path of the static data documents, relative to the deployment root.
pub const DATA_BASE_PATH: &str = "assets/data/";
