use crate::paths::media_src;
use pokefolio_core::PickerItem;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct DetailPanelProps {
    pub item: PickerItem,
    pub on_close: Callback<()>,
}

/// Summary card for one picker entry, shown until dismissed.
#[function_component(DetailPanel)]
pub fn detail_panel(p: &DetailPanelProps) -> Html {
    let on_close = p.on_close.reform(|_: MouseEvent| ());
    let on_keydown = {
        let cb = p.on_close.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                e.prevent_default();
                cb.emit(());
            }
        })
    };
    let item = &p.item;
    let title_id = format!("detail-title-{}", item.id);

    html! {
        <aside
            class="detail-panel"
            role="dialog"
            aria-labelledby={title_id.clone()}
            onkeydown={on_keydown}
        >
            <header class="detail-panel__header">
                <img class="detail-panel__sprite" src={media_src(&item.sprite)} alt="" />
                <h3 id={title_id}>{ item.name.clone() }</h3>
                <span class="detail-panel__level">{ item.level.clone() }</span>
                <button type="button" class="detail-panel__close" aria-label="Close details" onclick={on_close}>
                    { "✕" }
                </button>
            </header>
            <dl class="detail-panel__stats">
                <dt>{ "TYPE" }</dt>
                <dd class="type-badge">{ item.kind.clone() }</dd>
                <dt>{ "YEARS" }</dt>
                <dd>{ item.stats.years.clone() }</dd>
            </dl>
            <p class="detail-panel__description">{ item.description.clone() }</p>
            if !item.stats.skills.is_empty() {
                <ul class="detail-panel__skills" aria-label="Skills">
                    { for item.stats.skills.iter().map(|skill| html! { <li>{ skill.clone() }</li> }) }
                </ul>
            }
        </aside>
    }
}
