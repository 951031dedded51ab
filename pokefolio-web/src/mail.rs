//! EmailJS REST client implementing the core [`MailRelay`].

use async_trait::async_trait;
use pokefolio_core::{EmailConfig, MailRelay, RelayError, TemplateParams};
use serde::Serialize;

pub const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a TemplateParams,
}

/// JSON body of an EmailJS send call.
///
/// # Errors
/// Returns the serializer error; with these plain string fields it does not
/// happen in practice.
pub fn request_body(
    credentials: &EmailConfig,
    params: &TemplateParams,
) -> Result<String, serde_json::Error> {
    serde_json::to_string(&SendRequest {
        service_id: &credentials.service_id,
        template_id: &credentials.template_id,
        user_id: &credentials.public_key,
        template_params: params,
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailJsRelay {
    endpoint: String,
}

impl Default for EmailJsRelay {
    fn default() -> Self {
        Self {
            endpoint: EMAILJS_SEND_URL.to_string(),
        }
    }
}

impl EmailJsRelay {
    #[must_use]
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[cfg(target_arch = "wasm32")]
#[async_trait(?Send)]
impl MailRelay for EmailJsRelay {
    async fn send(
        &self,
        credentials: &EmailConfig,
        params: &TemplateParams,
    ) -> Result<(), RelayError> {
        use crate::dom;

        let body = request_body(credentials, params)
            .map_err(|err| RelayError::Transport(err.to_string()))?;
        let response = dom::post_json(&self.endpoint, &body)
            .await
            .map_err(|err| RelayError::Transport(dom::js_error_message(&err)))?;
        if response.ok() {
            return Ok(());
        }
        let message = dom::response_text(&response)
            .await
            .unwrap_or_else(|_| response.status_text());
        Err(RelayError::Rejected {
            status: response.status(),
            message,
        })
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait(?Send)]
impl MailRelay for EmailJsRelay {
    async fn send(
        &self,
        credentials: &EmailConfig,
        params: &TemplateParams,
    ) -> Result<(), RelayError> {
        let _ = (credentials, params);
        Err(RelayError::Transport(format!(
            "{} is only reachable from the browser",
            self.endpoint
        )))
    }
}
