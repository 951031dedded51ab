#![cfg(target_arch = "wasm32")]

use pokefolio_core::{AUDIO_ASSET, MediaEvent, MemoryConfigSource};
use pokefolio_web::app::{App, AppContext};
use pokefolio_web::app::state::SourceHandle;
use pokefolio_web::audio::{AudioHandle, HtmlAudioBackend};
use pokefolio_web::pages::battle::{BattlePage, INTRO_MS};
use pokefolio_web::{a11y, dom};
use std::rc::Rc;
use wasm_bindgen_test::*;
use yew::prelude::*;
use yew::Renderer;
use yew_router::history::{AnyHistory, MemoryHistory};
use yew_router::Router;

wasm_bindgen_test_configure!(run_in_browser);

fn ensure_app_root() -> web_sys::Element {
    let doc = dom::document();
    if let Some(root) = doc.get_element_by_id("app") {
        root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create app root");
    root.set_id("app");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append app root");
    root
}

#[wasm_bindgen_test]
fn audio_element_follows_controller_settings() {
    let backend = HtmlAudioBackend::new(AUDIO_ASSET).expect("audio element");
    let element = backend.element();
    let audio = AudioHandle::new(Box::new(backend));

    assert!(element.loop_());
    audio.set_volume(0.25);
    assert!((element.volume() - 0.25).abs() < f64::EPSILON);
    audio.toggle_mute();
    assert!(element.muted());
    audio.enable_autoplay();
    assert!(!element.muted());

    audio.handle_event(MediaEvent::Play);
    assert!(audio.state().is_playing);
    audio.destroy();
    assert!(element.get_attribute("src").is_none());
}

#[wasm_bindgen_test]
async fn app_mounts_shell_and_status_region() {
    Renderer::<App>::with_root(ensure_app_root()).render();
    dom::sleep_ms(50).await.expect("timer");

    let doc = dom::document();
    assert!(doc.get_element_by_id("main").is_some());
    assert!(doc.get_element_by_id(a11y::STATUS_REGION_ID).is_some());
    assert!(doc.query_selector(".audio-controls").ok().flatten().is_some());
}

#[wasm_bindgen_test]
fn status_region_receives_announcements() {
    let doc = dom::document();
    let region = doc.get_element_by_id(a11y::STATUS_REGION_ID).unwrap_or_else(|| {
        let region = doc.create_element("p").expect("create region");
        region.set_id(a11y::STATUS_REGION_ID);
        doc.body()
            .expect("document body")
            .append_child(&region)
            .expect("append region");
        region
    });
    a11y::set_status("Selected BAG");
    assert_eq!(region.text_content().as_deref(), Some("Selected BAG"));
}

#[derive(Properties, PartialEq)]
struct UnloadableSiteProps {
    ctx: AppContext,
}

#[function_component(UnloadableSite)]
fn unloadable_site(p: &UnloadableSiteProps) -> Html {
    let history = AnyHistory::from(MemoryHistory::new());
    html! {
        <Router history={history}>
            <ContextProvider<AppContext> context={p.ctx.clone()}>
                <BattlePage />
            </ContextProvider<AppContext>>
        </Router>
    }
}

#[wasm_bindgen_test]
async fn intro_finishes_when_the_site_never_loads() {
    let ctx = AppContext {
        source: SourceHandle(Rc::new(MemoryConfigSource::new())),
        ..AppContext::detached()
    };
    let intro = ctx.intro.clone();
    Renderer::<UnloadableSite>::with_root_and_props(ensure_app_root(), UnloadableSiteProps { ctx })
        .render();

    dom::sleep_ms(50).await.expect("timer");
    assert!(!intro.played());
    dom::sleep_ms(INTRO_MS + 200).await.expect("timer");
    assert!(intro.played());
}
