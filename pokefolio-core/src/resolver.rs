use crate::config::{BattleOption, ComponentKind};
use crate::error::ResolveError;
use crate::loader::{ConfigLoader, ConfigSource};
use crate::view::ViewConfiguration;

/// A destination ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedView {
    pub component: ComponentKind,
    pub option: BattleOption,
    pub view: ViewConfiguration,
}

/// Maps a destination id to its renderer kind and view configuration.
///
/// Holds no state between calls; resolving the same id twice fetches twice.
#[derive(Debug, Clone)]
pub struct ViewResolver<S> {
    loader: ConfigLoader<S>,
}

impl<S: ConfigSource> ViewResolver<S> {
    pub const fn new(source: S) -> Self {
        Self {
            loader: ConfigLoader::new(source),
        }
    }

    pub const fn loader(&self) -> &ConfigLoader<S> {
        &self.loader
    }

    /// Resolve `destination_id` against a freshly loaded site configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::NotFound`] without touching any view document
    /// when the id is unknown, and [`ResolveError::Config`] when either
    /// document cannot be fetched or does not fit its schema.
    pub async fn resolve_view(&self, destination_id: &str) -> Result<ResolvedView, ResolveError> {
        let site = self.loader.load_site_config().await?;
        let option = site
            .find_option(destination_id)
            .cloned()
            .ok_or_else(|| ResolveError::NotFound(destination_id.to_string()))?;
        let document = self.loader.load_view_config(&option.config_file).await?;
        let view = document.into_typed(option.component, &option.config_file)?;
        log::debug!(
            "resolved `{destination_id}` to {} view from {}",
            option.component,
            option.config_file
        );
        Ok(ResolvedView {
            component: option.component,
            option,
            view,
        })
    }
}
