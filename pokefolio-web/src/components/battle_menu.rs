use crate::a11y::set_status;
use crate::paths::asset_path;
use crate::router::Route;
use pokefolio_core::BattleOption;
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct BattleMenuProps {
    pub options: Rc<Vec<BattleOption>>,
    /// Ignore activation (the intro is still on screen).
    #[prop_or_default]
    pub disabled: bool,
    /// Play the entrance animation; only wanted on the first display.
    #[prop_or_default]
    pub animate_entrance: bool,
    #[prop_or_default]
    pub on_select: Option<Callback<BattleOption>>,
}

/// Roving focus for arrow keys; wraps at both ends.
#[must_use]
pub fn next_focus(current: usize, key: &str, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    match key {
        "ArrowDown" | "ArrowRight" => Some((current + 1) % len),
        "ArrowUp" | "ArrowLeft" => Some((current + len - 1) % len),
        "Home" => Some(0),
        "End" => Some(len - 1),
        _ => None,
    }
}

#[function_component(BattleMenu)]
pub fn battle_menu(p: &BattleMenuProps) -> Html {
    let focus_idx = use_state_eq(|| 0_usize);
    let list_ref = use_node_ref();
    let navigator = use_navigator();
    use_focus_effect(list_ref.clone(), &focus_idx);

    let on_keydown = {
        let focus_idx = focus_idx.clone();
        let len = p.options.len();
        Callback::from(move |e: KeyboardEvent| {
            if let Some(next) = next_focus(*focus_idx, &e.key(), len) {
                focus_idx.set(next);
                e.prevent_default();
            }
        })
    };

    let mut classes = classes!("battle-menu");
    if p.animate_entrance {
        classes.push("battle-menu--enter");
    }
    if p.disabled {
        classes.push("battle-menu--disabled");
    }
    let setsize = p.options.len().to_string();

    html! {
        <nav class={classes} aria-label="Battle options" onkeydown={on_keydown}>
            <ul role="menu" ref={list_ref}>
                { for p.options.iter().enumerate().map(|(idx, option)| {
                    let route = Route::for_option(&option.id);
                    let href = asset_path(&route.to_path());
                    let onclick = {
                        let option = option.clone();
                        let disabled = p.disabled;
                        let on_select = p.on_select.clone();
                        let navigator = navigator.clone();
                        Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            if disabled {
                                e.stop_propagation();
                                return;
                            }
                            set_status(&format!("Selected {}", option.label));
                            if let Some(cb) = on_select.as_ref() {
                                cb.emit(option.clone());
                            }
                            if let Some(nav) = navigator.as_ref() {
                                nav.push(&Route::for_option(&option.id));
                            }
                        })
                    };
                    html! {
                        <li role="none" class="battle-menu__item">
                            <a
                                role="menuitem"
                                href={href}
                                data-option-id={option.id.clone()}
                                tabindex={ if *focus_idx == idx { "0" } else { "-1" } }
                                aria-disabled={p.disabled.to_string()}
                                aria-posinset={(idx + 1).to_string()}
                                aria-setsize={setsize.clone()}
                                onclick={onclick}
                            >
                                <span class="battle-menu__cursor" aria-hidden="true">{ "▶" }</span>
                                { option.label.clone() }
                            </a>
                        </li>
                    }
                }) }
            </ul>
        </nav>
    }
}

#[cfg(target_arch = "wasm32")]
#[hook]
fn use_focus_effect(list_ref: NodeRef, focus_idx: &UseStateHandle<usize>) {
    use wasm_bindgen::JsCast;

    use_effect_with(**focus_idx, move |idx| {
        if let Some(list) = list_ref.cast::<web_sys::Element>() {
            let sel = format!("[role='menuitem'][aria-posinset='{}']", idx + 1);
            if let Ok(Some(el)) = list.query_selector(&sel) {
                let _ = el
                    .dyn_into::<web_sys::HtmlElement>()
                    .ok()
                    .map(|e| e.focus());
            }
        }
    });
}

#[cfg(not(target_arch = "wasm32"))]
#[hook]
fn use_focus_effect(list_ref: NodeRef, focus_idx: &UseStateHandle<usize>) {
    let _ = (list_ref, focus_idx);
}
