//! Configuration sources for the browser and for native builds.

use async_trait::async_trait;
use pokefolio_core::{ConfigError, ConfigSource, SITE_CONFIG_FILE};
use std::pin::pin;
use std::rc::Rc;

/// Every config fetch gives up after this long.
pub const FETCH_TIMEOUT_MS: u32 = 10_000;

/// Shared, type-erased source handed down through the app context.
pub type SharedSource = Rc<dyn ConfigSource>;

/// Fetches documents over HTTP from the deployed data directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WebConfigSource {
    timeout_ms: u32,
}

impl Default for WebConfigSource {
    fn default() -> Self {
        Self {
            timeout_ms: FETCH_TIMEOUT_MS,
        }
    }
}

impl WebConfigSource {
    #[must_use]
    pub const fn with_timeout(timeout_ms: u32) -> Self {
        Self { timeout_ms }
    }
}

#[cfg(target_arch = "wasm32")]
#[async_trait(?Send)]
impl ConfigSource for WebConfigSource {
    async fn fetch_text(&self, file: &str) -> Result<String, ConfigError> {
        race_timeout(
            file,
            self.timeout_ms,
            fetch_document(file),
            crate::dom::sleep_ms(self.timeout_ms),
        )
        .await
    }
}

/// Resolve `request`, or fail with [`ConfigError::Timeout`] once `timer`
/// fires first. A timer that errors leaves the request to finish on its own.
///
/// # Errors
///
/// The request's own error, or `Timeout` naming `file` and `after_ms`.
#[allow(clippy::future_not_send)]
pub async fn race_timeout<R, T, E>(
    file: &str,
    after_ms: u32,
    request: R,
    timer: T,
) -> Result<String, ConfigError>
where
    R: Future<Output = Result<String, ConfigError>>,
    T: Future<Output = Result<(), E>>,
{
    use futures::future::{Either, select};

    let request = pin!(request);
    let timer = pin!(timer);
    match select(request, timer).await {
        Either::Left((result, _)) => result,
        Either::Right((Ok(()), _)) => {
            log::warn!("{file} did not answer within {after_ms} ms");
            Err(ConfigError::Timeout {
                file: file.to_string(),
                after_ms,
            })
        }
        Either::Right((Err(_), request)) => request.await,
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait(?Send)]
impl ConfigSource for WebConfigSource {
    async fn fetch_text(&self, file: &str) -> Result<String, ConfigError> {
        Err(ConfigError::Fetch {
            file: file.to_string(),
            message: "HTTP fetch is only available in the browser".to_string(),
        })
    }
}

#[cfg(target_arch = "wasm32")]
#[allow(clippy::future_not_send)]
async fn fetch_document(file: &str) -> Result<String, ConfigError> {
    use crate::dom;

    let fetch_error = |message: String| ConfigError::Fetch {
        file: file.to_string(),
        message,
    };
    let url = crate::paths::data_path(file);
    log::debug!("fetching {url}");

    let response = dom::fetch_response(&url)
        .await
        .map_err(|err| fetch_error(dom::js_error_message(&err)))?;
    if !response.ok() {
        return Err(fetch_error(format!(
            "HTTP {status}: {status_text}",
            status = response.status(),
            status_text = response.status_text()
        )));
    }
    dom::response_text(&response)
        .await
        .map_err(|err| fetch_error(dom::js_error_message(&err)))
}

/// The shipped documents compiled into the binary.
///
/// Used for native builds (server-side rendering, tests) where there is no
/// HTTP origin to fetch from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmbeddedConfigSource;

impl EmbeddedConfigSource {
    /// Raw text of a shipped document, if `file` is one.
    #[must_use]
    pub fn document(file: &str) -> Option<&'static str> {
        let body = match file.trim_start_matches('/') {
            SITE_CONFIG_FILE => include_str!("../static/assets/data/site-config.json"),
            "experience.json" => include_str!("../static/assets/data/experience.json"),
            "projects.json" => include_str!("../static/assets/data/projects.json"),
            "skills.json" => include_str!("../static/assets/data/skills.json"),
            "contact.json" => include_str!("../static/assets/data/contact.json"),
            _ => return None,
        };
        Some(body)
    }
}

#[async_trait(?Send)]
impl ConfigSource for EmbeddedConfigSource {
    async fn fetch_text(&self, file: &str) -> Result<String, ConfigError> {
        Self::document(file)
            .map(str::to_string)
            .ok_or_else(|| ConfigError::Fetch {
                file: file.to_string(),
                message: "HTTP 404: Not Found".to_string(),
            })
    }
}

/// The source the running app uses on this target.
#[cfg(target_arch = "wasm32")]
#[must_use]
pub fn default_source() -> SharedSource {
    Rc::new(WebConfigSource::default())
}

#[cfg(not(target_arch = "wasm32"))]
#[must_use]
pub fn default_source() -> SharedSource {
    Rc::new(EmbeddedConfigSource)
}
