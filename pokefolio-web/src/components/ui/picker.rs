use super::ItemList;
use super::detail_panel::DetailPanel;
use crate::paths::media_src;
use pokefolio_core::{PickerItem, PickerState, party_slots};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct PickerProps {
    pub title: AttrValue,
    pub items: ItemList<PickerItem>,
}

/// Party screen: the lead entry on the left, five party slots on the right.
#[function_component(Picker)]
pub fn picker(p: &PickerProps) -> Html {
    let state = use_state_eq(|| PickerState::for_len(p.items.len()));
    {
        let state = state.clone();
        use_effect_with(p.items.clone(), move |items| {
            state.set(PickerState::for_len(items.len()));
        });
    }

    let select = {
        let state = state.clone();
        let len = p.items.len();
        Callback::from(move |index: usize| state.set(state.select(index, len)))
    };
    let dismiss = {
        let state = state.clone();
        Callback::from(move |()| state.set(state.dismiss()))
    };

    let entry_class = |index: usize, base: &'static str| {
        let mut classes = classes!(base);
        if state.selection.is_selected(index) {
            classes.push("selected");
        }
        classes
    };

    let lead = p.items.first().map_or_else(
        || html! { <p class="picker__empty">{ "No POKéMON in your party yet." }</p> },
        |lead| {
            let onclick = select.reform(|_: MouseEvent| 0);
            html! {
                <button
                    type="button"
                    class={entry_class(0, "picker__lead")}
                    aria-pressed={state.selection.is_selected(0).to_string()}
                    onclick={onclick}
                >
                    <img class="picker__sprite" src={media_src(&lead.sprite)} alt={lead.name.clone()} />
                    <span class="picker__name">{ lead.name.clone() }</span>
                    <span class="picker__level">{ lead.level.clone() }</span>
                    <span class="picker__hp" aria-hidden="true"></span>
                </button>
            }
        },
    );

    let slots = party_slots(&*p.items);
    let detail = state
        .detail_index()
        .and_then(|index| p.items.get(index))
        .map(|item| html! { <DetailPanel item={item.clone()} on_close={dismiss.clone()} /> })
        .unwrap_or_default();

    html! {
        <section class="picker" aria-label={p.title.clone()}>
            <h2 class="picker__title">{ p.title.clone() }</h2>
            <div class="picker__layout">
                { lead }
                <ul class="picker__party">
                    { for slots.iter().enumerate().map(|(slot, item)| {
                        let index = slot + 1;
                        match item {
                            Some(item) => {
                                let onclick = select.reform(move |_: MouseEvent| index);
                                html! {
                                    <li>
                                        <button
                                            type="button"
                                            class={entry_class(index, "picker__slot")}
                                            aria-pressed={state.selection.is_selected(index).to_string()}
                                            onclick={onclick}
                                        >
                                            <img class="picker__sprite" src={media_src(&item.sprite)} alt="" />
                                            <span class="picker__name">{ item.name.clone() }</span>
                                            <span class="picker__level">{ item.level.clone() }</span>
                                        </button>
                                    </li>
                                }
                            }
                            None => html! {
                                <li class="picker__slot picker__slot--empty" aria-hidden="true"></li>
                            },
                        }
                    }) }
                </ul>
            </div>
            <p class="picker__prompt">{ "Choose a POKéMON." }</p>
            { detail }
        </section>
    }
}
