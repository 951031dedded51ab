use super::ItemList;
use super::contact_form::ContactForm;
use crate::paths::is_external;
use pokefolio_core::{DialogItem, SiteConfiguration};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct DialogBoxProps {
    pub title: AttrValue,
    pub items: ItemList<DialogItem>,
    /// Render the contact form beneath the rows.
    #[prop_or_default]
    pub contact_form: bool,
    /// Needed by the contact form for relay credentials and the recipient name.
    #[prop_or_default]
    pub site: Option<Rc<SiteConfiguration>>,
}

#[function_component(DialogBox)]
pub fn dialog_box(p: &DialogBoxProps) -> Html {
    html! {
        <section class="dialog-box" aria-label={p.title.clone()}>
            <h2 class="dialog-box__title">{ p.title.clone() }</h2>
            <dl class="dialog-box__rows">
                { for p.items.iter().map(render_row) }
            </dl>
            if p.contact_form {
                <ContactForm site={p.site.clone()} />
            }
        </section>
    }
}

fn render_row(item: &DialogItem) -> Html {
    let value = match item.link.as_deref() {
        Some(link) if link.starts_with("http://") || link.starts_with("https://") => html! {
            <a href={link.to_string()} target="_blank" rel="noopener noreferrer">{ item.value.clone() }</a>
        },
        Some(link) if is_external(link) => html! {
            <a href={link.to_string()}>{ item.value.clone() }</a>
        },
        Some(link) => html! {
            <a href={crate::paths::asset_path(link)}>{ item.value.clone() }</a>
        },
        None => html! { { item.value.clone() } },
    };
    html! {
        <div class="dialog-box__row">
            <dt>{ item.label.clone() }</dt>
            <dd>{ value }</dd>
        </div>
    }
}
