//! Contact form validation and delivery through the mail relay.

use crate::config::{EmailConfig, SiteConfiguration};
use crate::error::RelayError;
use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;

pub const NAME_MIN_CHARS: usize = 2;
pub const MESSAGE_MIN_CHARS: usize = 10;
/// How long the success toast stays before the form returns to idle.
pub const SUCCESS_RESET_MS: u32 = 5_000;
pub const SEND_FAILED_MESSAGE: &str =
    "Failed to send message. Please try again or email directly.";

const EMAIL_MAX_CHARS: usize = 254;
const EMAIL_LOCAL_MAX_CHARS: usize = 64;

static EMAIL_RE: Lazy<Option<Regex>> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*$",
    )
    .ok()
});

/// Syntactic email check in the spirit of the HTML `type=email` rule.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    if value.len() > EMAIL_MAX_CHARS {
        return false;
    }
    let Some((local, _)) = value.split_once('@') else {
        return false;
    };
    if local.len() > EMAIL_LOCAL_MAX_CHARS {
        return false;
    }
    EMAIL_RE.as_ref().is_some_and(|re| re.is_match(value))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Message];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Message => "Message",
        }
    }

    /// Form control id / name attribute.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

impl std::fmt::Display for ContactField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{0} is required")]
    Required(ContactField),
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("{field} must be at least {min} characters")]
    TooShort { field: ContactField, min: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Error)]
#[error("contact form has {} invalid field(s)", .errors.len())]
pub struct ValidationErrors {
    errors: BTreeMap<ContactField, FieldError>,
}

impl ValidationErrors {
    #[must_use]
    pub fn get(&self, field: ContactField) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ContactField, &FieldError)> {
        self.errors.iter().map(|(field, err)| (*field, err))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    #[must_use]
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    /// First failing rule for `field`: required, then format, then length.
    #[must_use]
    pub fn field_error(&self, field: ContactField) -> Option<FieldError> {
        let value = self.value(field);
        if value.is_empty() {
            return Some(FieldError::Required(field));
        }
        match field {
            ContactField::Email if !is_valid_email(value) => Some(FieldError::InvalidEmail),
            ContactField::Name => min_length(field, value, NAME_MIN_CHARS),
            ContactField::Message => min_length(field, value, MESSAGE_MIN_CHARS),
            ContactField::Email => None,
        }
    }

    /// Validate every field.
    ///
    /// # Errors
    ///
    /// Returns the failing rule of each invalid field.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let errors: BTreeMap<_, _> = ContactField::ALL
            .into_iter()
            .filter_map(|field| self.field_error(field).map(|err| (field, err)))
            .collect();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors { errors })
        }
    }

    #[must_use]
    pub fn template_params(&self, to_name: &str) -> TemplateParams {
        TemplateParams {
            from_name: self.name.clone(),
            from_email: self.email.clone(),
            message: self.message.clone(),
            to_name: to_name.to_string(),
        }
    }
}

fn min_length(field: ContactField, value: &str, min: usize) -> Option<FieldError> {
    (value.chars().count() < min).then_some(FieldError::TooShort { field, min })
}

/// Parameters handed to the mail relay template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub message: String,
    pub to_name: String,
}

/// External transactional-email service.
#[async_trait(?Send)]
pub trait MailRelay {
    /// Deliver one message.
    ///
    /// # Errors
    ///
    /// Returns a [`RelayError`] when the relay is unreachable or refuses.
    async fn send(&self, credentials: &EmailConfig, params: &TemplateParams)
    -> Result<(), RelayError>;
}

#[derive(Debug, Error)]
pub enum ContactError {
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    #[error(transparent)]
    Relay(#[from] RelayError),
}

/// Validates a form and forwards it with the site's relay credentials.
#[derive(Debug, Clone)]
pub struct ContactRelay<R> {
    relay: R,
}

impl<R: MailRelay> ContactRelay<R> {
    pub const fn new(relay: R) -> Self {
        Self { relay }
    }

    /// Validate `form` and send it. Nothing reaches the relay when validation fails.
    ///
    /// # Errors
    ///
    /// Returns [`ContactError::Validation`] or [`ContactError::Relay`].
    pub async fn submit(
        &self,
        form: &ContactForm,
        site: &SiteConfiguration,
    ) -> Result<(), ContactError> {
        form.validate()?;
        let params = form.template_params(&site.trainer_name);
        self.relay
            .send(&site.email_config, &params)
            .await
            .inspect_err(|err| log::error!("email send error: {err}"))?;
        log::info!("contact message delivered");
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Success,
    Error,
}

/// UI-facing state of the contact form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactFormState {
    pub form: ContactForm,
    pub touched: BTreeSet<ContactField>,
    pub status: SubmitStatus,
    pub is_submitting: bool,
    pub error_message: Option<String>,
}

impl ContactFormState {
    /// Record typed input. The field is not marked touched until it loses
    /// focus or a submit fails.
    pub fn update(&mut self, field: ContactField, value: String) {
        self.form.set(field, value);
    }

    pub fn touch(&mut self, field: ContactField) {
        self.touched.insert(field);
    }

    /// Message to show under `field`; untouched fields show nothing.
    #[must_use]
    pub fn visible_error(&self, field: ContactField) -> Option<String> {
        if !self.touched.contains(&field) {
            return None;
        }
        self.form.field_error(field).map(|err| err.to_string())
    }

    /// Start a submission and return the form to send.
    ///
    /// # Errors
    ///
    /// When the form is invalid every field is marked touched and the errors
    /// are returned; no submission starts.
    pub fn begin_submit(&mut self) -> Result<ContactForm, ValidationErrors> {
        if let Err(errors) = self.form.validate() {
            self.touched.extend(ContactField::ALL);
            return Err(errors);
        }
        self.is_submitting = true;
        self.status = SubmitStatus::Idle;
        self.error_message = None;
        Ok(self.form.clone())
    }

    pub fn finish_submit(&mut self, outcome: &Result<(), ContactError>) {
        self.is_submitting = false;
        match outcome {
            Ok(()) => {
                self.status = SubmitStatus::Success;
                self.form = ContactForm::default();
                self.touched.clear();
            }
            Err(_) => {
                self.status = SubmitStatus::Error;
                self.error_message = Some(SEND_FAILED_MESSAGE.to_string());
            }
        }
    }

    /// Dismiss the success toast.
    pub fn clear_success(&mut self) {
        if self.status == SubmitStatus::Success {
            self.status = SubmitStatus::Idle;
        }
    }
}
