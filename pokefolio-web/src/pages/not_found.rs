use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

/// Panel shown when routing fails to match a known view.
#[derive(Properties, PartialEq)]
pub struct Props {
    pub on_go_home: Callback<()>,
}

#[function_component(NotFound)]
pub fn not_found(props: &Props) -> Html {
    let go_home = props.on_go_home.reform(|_: MouseEvent| ());

    html! {
        <section class="panel not-found" aria-live="assertive">
            <h1>{ "404" }</h1>
            <p>{ "You can't go that way! This route leads nowhere." }</p>
            <button type="button" onclick={go_home}>
                { "◀ BACK TO BATTLE" }
            </button>
        </section>
    }
}

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    let navigator = use_navigator();
    let on_go_home = Callback::from(move |()| {
        if let Some(nav) = navigator.as_ref() {
            nav.push(&Route::Battle);
        }
    });
    html! { <NotFound on_go_home={on_go_home} /> }
}
