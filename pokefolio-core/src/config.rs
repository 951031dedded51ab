use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// File name of the site-wide configuration under the data base path.
pub const SITE_CONFIG_FILE: &str = "site-config.json";

/// Presentation variant a battle option renders with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComponentKind {
    #[serde(alias = "pokemon-picker")]
    Picker,
    #[serde(alias = "item-bag")]
    Bag,
    #[serde(alias = "dialog-box")]
    Dialog,
}

impl ComponentKind {
    pub const ALL: [Self; 3] = [Self::Picker, Self::Bag, Self::Dialog];

    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Picker => "picker",
            Self::Bag => "bag",
            Self::Dialog => "dialog",
        }
    }
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Credentials for the transactional mail relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

/// A routable destination shown in the main menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleOption {
    pub id: String,
    pub label: String,
    pub route: String,
    pub component: ComponentKind,
    pub config_file: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfiguration {
    pub page_title: String,
    pub trainer_name: String,
    pub email_config: EmailConfig,
    pub battle_options: Vec<BattleOption>,
}

impl SiteConfiguration {
    /// Parse and validate a site configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Schema`] when the JSON does not match the model
    /// (including unknown component kinds) and
    /// [`ConfigError::DuplicateBattleOption`] when two options share an id.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(|source| ConfigError::Schema {
            file: SITE_CONFIG_FILE.to_string(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that declare the same option id twice.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DuplicateBattleOption`] naming the first repeated id.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = BTreeSet::new();
        for option in &self.battle_options {
            if !seen.insert(option.id.as_str()) {
                return Err(ConfigError::DuplicateBattleOption {
                    id: option.id.clone(),
                });
            }
        }
        Ok(())
    }

    /// Exact, case-sensitive lookup; the first match wins.
    #[must_use]
    pub fn find_option(&self, id: &str) -> Option<&BattleOption> {
        self.battle_options.iter().find(|option| option.id == id)
    }
}
