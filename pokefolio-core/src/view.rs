//! Per-destination view documents and their typed item shapes.

use crate::config::ComponentKind;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PickerStats {
    pub years: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

/// Profile-like entry shown by the picker (one per role or company).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickerItem {
    pub id: String,
    pub name: String,
    pub sprite: String,
    pub level: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub stats: PickerStats,
}

/// Project entry shown by the item bag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BagItem {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
}

impl BagItem {
    #[must_use]
    pub const fn has_links(&self) -> bool {
        self.github_url.is_some() || self.live_url.is_some()
    }
}

/// Label/value row shown by the dialog box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogItem {
    pub label: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// A view document exactly as stored: items are left as raw JSON until the
/// owning battle option tells us which shape to expect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewDocument {
    pub view_type: String,
    pub title: String,
    pub items: Vec<Value>,
    #[serde(default)]
    pub contact_form: bool,
}

/// Items of a view, typed by the renderer that will display them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewItems {
    Picker(Vec<PickerItem>),
    Bag(Vec<BagItem>),
    Dialog(Vec<DialogItem>),
}

impl ViewItems {
    #[must_use]
    pub const fn kind(&self) -> ComponentKind {
        match self {
            Self::Picker(_) => ComponentKind::Picker,
            Self::Bag(_) => ComponentKind::Bag,
            Self::Dialog(_) => ComponentKind::Dialog,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Picker(items) => items.len(),
            Self::Bag(items) => items.len(),
            Self::Dialog(items) => items.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewConfiguration {
    pub view_type: String,
    pub title: String,
    pub items: ViewItems,
    pub contact_form: bool,
}

impl ViewDocument {
    /// Parse a view document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Schema`] naming `file` when the envelope
    /// (`viewType`, `title`, `items`) is malformed.
    pub fn from_json(file: &str, json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|source| ConfigError::Schema {
            file: file.to_string(),
            source,
        })
    }

    /// Check every item against the shape `kind` renders.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Schema`] naming `file` on the first item that
    /// does not fit.
    pub fn into_typed(self, kind: ComponentKind, file: &str) -> Result<ViewConfiguration, ConfigError> {
        let raw = Value::Array(self.items);
        let schema = |source| ConfigError::Schema {
            file: file.to_string(),
            source,
        };
        let items = match kind {
            ComponentKind::Picker => ViewItems::Picker(serde_json::from_value(raw).map_err(schema)?),
            ComponentKind::Bag => ViewItems::Bag(serde_json::from_value(raw).map_err(schema)?),
            ComponentKind::Dialog => ViewItems::Dialog(serde_json::from_value(raw).map_err(schema)?),
        };
        Ok(ViewConfiguration {
            view_type: self.view_type,
            title: self.title,
            items,
            contact_form: self.contact_form,
        })
    }
}
