use super::ItemList;
use pokefolio_core::{BagItem, Selection};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ItemBagProps {
    pub title: AttrValue,
    pub items: ItemList<BagItem>,
}

#[function_component(ItemBag)]
pub fn item_bag(p: &ItemBagProps) -> Html {
    let selection = use_state_eq(|| Selection::for_len(p.items.len()));
    {
        let selection = selection.clone();
        use_effect_with(p.items.clone(), move |items| {
            selection.set(Selection::for_len(items.len()));
        });
    }

    let select = {
        let selection = selection.clone();
        let len = p.items.len();
        Callback::from(move |index: usize| selection.set(selection.select(index, len)))
    };

    let selected = selection.index().and_then(|index| p.items.get(index));

    html! {
        <section class="item-bag" aria-label={p.title.clone()}>
            <h2 class="item-bag__title">{ p.title.clone() }</h2>
            <div class="item-bag__layout">
                <ul class="item-bag__list" role="listbox" aria-label={p.title.clone()}>
                    { for p.items.iter().enumerate().map(|(index, item)| {
                        let is_selected = selection.is_selected(index);
                        let onclick = select.reform(move |_: MouseEvent| index);
                        html! {
                            <li
                                role="option"
                                class={classes!("item-bag__entry", is_selected.then_some("selected"))}
                                aria-selected={is_selected.to_string()}
                                onclick={onclick}
                            >
                                <span class="item-bag__cursor" aria-hidden="true">
                                    { if is_selected { "▶" } else { "" } }
                                </span>
                                { item.name.clone() }
                            </li>
                        }
                    }) }
                    if p.items.is_empty() {
                        <li class="item-bag__empty">{ "The bag is empty." }</li>
                    }
                </ul>
                { selected.map(render_details).unwrap_or_default() }
            </div>
        </section>
    }
}

fn render_details(item: &BagItem) -> Html {
    html! {
        <article class="item-bag__details" aria-live="polite">
            <h3>{ item.name.clone() }</h3>
            <p class="item-bag__description">{ item.description.clone() }</p>
            if !item.technologies.is_empty() {
                <ul class="item-bag__tech" aria-label="Technologies">
                    { for item.technologies.iter().map(|tech| html! { <li class="tech-tag">{ tech.clone() }</li> }) }
                </ul>
            }
            if item.has_links() {
                <div class="item-bag__links">
                    { external_link(item.github_url.as_deref(), "GitHub") }
                    { external_link(item.live_url.as_deref(), "Live Demo") }
                </div>
            }
        </article>
    }
}

fn external_link(href: Option<&str>, label: &'static str) -> Html {
    href.map(|href| {
        html! {
            <a class="item-bag__link" href={href.to_string()} target="_blank" rel="noopener noreferrer">
                { label }
            </a>
        }
    })
    .unwrap_or_default()
}
