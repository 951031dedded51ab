//! Problems a config pack can have, found through the same loader and
//! resolver the web app uses.

use pokefolio_core::{
    BattleOption, ConfigError, ConfigSource, ResolveError, ResolvedView, ViewItems, ViewResolver,
};
use serde::Serialize;

/// The picker shows the lead plus five party slots.
pub const PICKER_VISIBLE: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub severity: Severity,
    /// Battle option the finding belongs to; `None` for site-level problems.
    pub option: Option<String>,
    pub file: Option<String>,
    pub message: String,
}

impl Finding {
    fn error(option: Option<&str>, file: Option<&str>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            option: option.map(str::to_string),
            file: file.map(str::to_string),
            message: message.into(),
        }
    }

    fn warning(option: &BattleOption, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            option: Some(option.id.clone()),
            file: Some(option.config_file.clone()),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PackReport {
    pub data_dir: String,
    pub options_checked: usize,
    pub findings: Vec<Finding>,
}

impl PackReport {
    pub fn errors(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warnings(&self) -> usize {
        self.count(Severity::Warning)
    }

    /// Whether the run should fail; `strict` promotes warnings.
    pub fn failed(&self, strict: bool) -> bool {
        self.errors() > 0 || (strict && self.warnings() > 0)
    }

    fn count(&self, severity: Severity) -> usize {
        self.findings
            .iter()
            .filter(|finding| finding.severity == severity)
            .count()
    }
}

/// Load the site configuration from `source`, then resolve and lint every
/// battle option it declares.
pub async fn check_pack<S: ConfigSource>(source: S, data_dir: &str) -> PackReport {
    let resolver = ViewResolver::new(source);
    let mut report = PackReport {
        data_dir: data_dir.to_string(),
        ..PackReport::default()
    };

    let site = match resolver.loader().load_site_config().await {
        Ok(site) => site,
        Err(err) => {
            log::error!("site configuration rejected: {err}");
            report
                .findings
                .push(Finding::error(None, err.file(), err.to_string()));
            return report;
        }
    };

    for option in &site.battle_options {
        report.options_checked += 1;
        log::info!("checking `{}` ({})", option.id, option.config_file);
        report.findings.extend(lint_route(option));
        match resolver.resolve_view(&option.id).await {
            Ok(resolved) => report.findings.extend(lint_view(&resolved)),
            Err(err) => report.findings.push(resolve_failure(option, &err)),
        }
    }
    report
}

fn resolve_failure(option: &BattleOption, err: &ResolveError) -> Finding {
    let message = match err {
        ResolveError::Config(ConfigError::Fetch { .. } | ConfigError::Timeout { .. }) => {
            format!("view document missing or unreadable: {err}")
        }
        ResolveError::Config(ConfigError::Schema { .. }) => {
            format!("view document does not fit the `{}` kind: {err}", option.component)
        }
        _ => err.to_string(),
    };
    Finding::error(Some(&option.id), Some(&option.config_file), message)
}

/// The menu links by id, so a differing `route` is never used.
pub fn lint_route(option: &BattleOption) -> Option<Finding> {
    let expected = format!("/{}", option.id);
    (option.route != expected).then(|| {
        Finding::warning(
            option,
            format!(
                "route `{}` is ignored; the menu links to `{expected}`",
                option.route
            ),
        )
    })
}

/// Content warnings for a view that resolved cleanly.
pub fn lint_view(resolved: &ResolvedView) -> Vec<Finding> {
    let option = &resolved.option;
    let items = &resolved.view.items;
    let mut findings = Vec::new();

    if items.is_empty() {
        findings.push(Finding::warning(option, "item list is empty"));
    }
    match items {
        ViewItems::Picker(entries) if entries.len() > PICKER_VISIBLE => {
            findings.push(Finding::warning(
                option,
                format!(
                    "{} picker items but only {PICKER_VISIBLE} are shown",
                    entries.len()
                ),
            ));
        }
        ViewItems::Dialog(rows) => {
            for row in rows {
                if let Some(link) = row.link.as_deref()
                    && !is_supported_link(link)
                {
                    findings.push(Finding::warning(
                        option,
                        format!("`{}` links to `{link}`, not an http(s) or mailto URL", row.label),
                    ));
                }
            }
        }
        _ => {}
    }
    findings
}

fn is_supported_link(link: &str) -> bool {
    ["http://", "https://", "mailto:"]
        .iter()
        .any(|scheme| link.starts_with(scheme))
}
