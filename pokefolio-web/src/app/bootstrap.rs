use crate::app::state::AppState;
use crate::data::SharedSource;
use pokefolio_core::{ConfigLoader, SiteConfiguration};
use std::rc::Rc;
use yew::prelude::*;

/// Load the site configuration for the shell. Failures are logged and leave
/// the shell without one; nothing else depends on it succeeding.
#[allow(clippy::future_not_send)]
pub async fn load_site(source: SharedSource) -> Option<Rc<SiteConfiguration>> {
    match ConfigLoader::new(source).load_site_config().await {
        Ok(site) => Some(Rc::new(site)),
        Err(err) => {
            log::error!("failed to load site configuration: {err}");
            None
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_bootstrap(app_state: &AppState) {
    let site = app_state.site.clone();
    let source = app_state.source.0.clone();

    use_effect_with((), move |()| {
        wasm_bindgen_futures::spawn_local(async move {
            if let Some(loaded) = load_site(source).await {
                crate::dom::set_title(&loaded.page_title);
                site.set(Some(loaded));
            }
        });
        || {}
    });
}

#[cfg(not(target_arch = "wasm32"))]
#[hook]
pub fn use_bootstrap(app_state: &AppState) {
    let _ = app_state;
}

/// Site configuration for a page, fetched fresh from `source` on mount.
#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_site_config(source: &SharedSource) -> Option<Rc<SiteConfiguration>> {
    let site = use_state(|| None::<Rc<SiteConfiguration>>);
    {
        let site = site.clone();
        let source = source.clone();
        use_effect_with((), move |()| {
            wasm_bindgen_futures::spawn_local(async move {
                if let Some(loaded) = load_site(source).await {
                    site.set(Some(loaded));
                }
            });
            || {}
        });
    }
    (*site).clone()
}

#[cfg(not(target_arch = "wasm32"))]
#[hook]
pub fn use_site_config(source: &SharedSource) -> Option<Rc<SiteConfiguration>> {
    let _ = source;
    let site = use_state(|| None::<Rc<SiteConfiguration>>);
    (*site).clone()
}

/// Tear the playback controller down when the shell unmounts.
#[hook]
pub fn use_audio_teardown(app_state: &AppState) {
    let audio = (*app_state.audio).clone();
    use_effect_with((), move |()| move || audio.destroy());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::EmbeddedConfigSource;
    use futures::executor::block_on;
    use pokefolio_core::MemoryConfigSource;
    use yew::LocalServerRenderer;

    #[test]
    fn shipped_site_configuration_loads() {
        let site = block_on(load_site(Rc::new(EmbeddedConfigSource))).expect("site config");
        assert!(!site.page_title.is_empty());
        assert!(!site.battle_options.is_empty());
    }

    #[test]
    fn missing_site_configuration_yields_none() {
        assert!(block_on(load_site(Rc::new(MemoryConfigSource::new()))).is_none());
    }

    #[function_component(BootstrapHarness)]
    fn bootstrap_harness() -> Html {
        let app_state = crate::app::state::use_app_state();
        use_bootstrap(&app_state);
        use_audio_teardown(&app_state);
        html! { <p>{ if app_state.site.is_some() { "loaded" } else { "pending" } }</p> }
    }

    #[test]
    fn bootstrap_hooks_render_server_side() {
        let html = block_on(LocalServerRenderer::<BootstrapHarness>::new().render());
        assert!(html.contains("pending"));
    }
}
