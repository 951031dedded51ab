use crate::components::audio_controls::AudioControls;
use crate::pages::battle::BattlePage;
use crate::pages::dynamic_view::DynamicViewPage;
use crate::pages::not_found::NotFoundPage;
use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod bootstrap;
pub mod state;

pub use state::{AppContext, IntroFlag, use_app_context};

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    let router_base = crate::paths::router_base().map(AttrValue::from);
    html! {
        <BrowserRouter basename={router_base}>
            <AppShell />
        </BrowserRouter>
    }
}

/// Everything below the router: context, audio controls and the routed page.
#[function_component(AppShell)]
pub fn app_shell() -> Html {
    let app_state = state::use_app_state();
    bootstrap::use_bootstrap(&app_state);
    bootstrap::use_audio_teardown(&app_state);

    let context = app_state.context();
    let enable_audio = {
        let audio = context.audio.clone();
        Callback::from(move |()| audio.enable_autoplay())
    };
    let on_click = enable_audio.reform(|_: MouseEvent| ());
    let on_keydown = enable_audio.reform(|_: KeyboardEvent| ());

    html! {
        <ContextProvider<AppContext> context={context.clone()}>
            <div class="app-shell" onclick={on_click} onkeydown={on_keydown}>
                <style>{ crate::a11y::visible_focus_css() }</style>
                <a class="sr-only" href="#main">{ "Skip to content" }</a>
                <AudioControls audio={context.audio.clone()} />
                <main id="main" class="game-screen">
                    <Switch<Route> render={switch} />
                </main>
                <p id={crate::a11y::STATUS_REGION_ID} class="sr-only" aria-live="polite"></p>
            </div>
        </ContextProvider<AppContext>>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Battle => html! { <BattlePage /> },
        Route::View { destination } => html! {
            <DynamicViewPage destination={AttrValue::from(destination)} />
        },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}
