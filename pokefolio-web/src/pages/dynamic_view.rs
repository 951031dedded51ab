use crate::app::use_app_context;
use crate::components::ui::ItemList;
use crate::components::ui::dialog_box::DialogBox;
use crate::components::ui::item_bag::ItemBag;
use crate::components::ui::picker::Picker;
use crate::router::Route;
use pokefolio_core::{
    BagItem, ComponentKind, DialogItem, PickerItem, ResolveError, ResolvedView, SiteConfiguration,
    ViewItems,
};
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;

/// Render-ready content of a resolved destination.
#[derive(Clone, Debug, PartialEq)]
pub enum ViewContent {
    Picker(ItemList<PickerItem>),
    Bag(ItemList<BagItem>),
    Dialog {
        rows: ItemList<DialogItem>,
        contact_form: bool,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct ReadyView {
    pub title: AttrValue,
    pub content: ViewContent,
}

impl ReadyView {
    #[must_use]
    pub const fn kind(&self) -> ComponentKind {
        match self.content {
            ViewContent::Picker(_) => ComponentKind::Picker,
            ViewContent::Bag(_) => ComponentKind::Bag,
            ViewContent::Dialog { .. } => ComponentKind::Dialog,
        }
    }
}

impl From<ResolvedView> for ReadyView {
    fn from(resolved: ResolvedView) -> Self {
        let view = resolved.view;
        let content = match view.items {
            ViewItems::Picker(items) => ViewContent::Picker(items.into()),
            ViewItems::Bag(items) => ViewContent::Bag(items.into()),
            ViewItems::Dialog(rows) => ViewContent::Dialog {
                rows: rows.into(),
                contact_form: view.contact_form,
            },
        };
        Self {
            title: AttrValue::from(view.title),
            content,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState {
    Loading,
    Ready(Rc<ReadyView>),
    NotFound(AttrValue),
    Failed(AttrValue),
}

impl ViewState {
    /// Turn a resolution outcome into UI state, logging failures.
    #[must_use]
    pub fn from_outcome(outcome: Result<ResolvedView, ResolveError>) -> Self {
        match outcome {
            Ok(resolved) => Self::Ready(Rc::new(resolved.into())),
            Err(ResolveError::NotFound(id)) => {
                log::error!("view not found: {id}");
                Self::NotFound(AttrValue::from(id))
            }
            Err(ResolveError::Config(err)) => {
                log::error!("error loading view: {err}");
                Self::Failed(AttrValue::from(err.to_string()))
            }
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct ViewBodyProps {
    pub state: ViewState,
    #[prop_or_default]
    pub site: Option<Rc<SiteConfiguration>>,
    pub on_back: Callback<()>,
}

/// Everything on a destination screen below the route: back control plus
/// loading, error or the chosen variant.
#[function_component(ViewBody)]
pub fn view_body(p: &ViewBodyProps) -> Html {
    let on_back = p.on_back.reform(|_: MouseEvent| ());
    let kind = match &p.state {
        ViewState::Ready(view) => view.kind().tag(),
        _ => "none",
    };

    let body = match &p.state {
        ViewState::Loading => html! {
            <div class="dynamic-view__loading" role="status" aria-live="polite">{ "Loading..." }</div>
        },
        ViewState::NotFound(id) => html! {
            <div class="dynamic-view__missing" role="alert">
                <h2>{ "Nothing here!" }</h2>
                <p>{ format!("There is no battle option called \"{id}\".") }</p>
            </div>
        },
        ViewState::Failed(_) => html! {
            <div class="dynamic-view__missing" role="alert">
                <h2>{ "It's not very effective..." }</h2>
                <p>{ "This view could not be loaded. Try again in a moment." }</p>
            </div>
        },
        ViewState::Ready(view) => match &view.content {
            ViewContent::Picker(items) => html! {
                <Picker title={view.title.clone()} items={items.clone()} />
            },
            ViewContent::Bag(items) => html! {
                <ItemBag title={view.title.clone()} items={items.clone()} />
            },
            ViewContent::Dialog { rows, contact_form } => html! {
                <DialogBox
                    title={view.title.clone()}
                    items={rows.clone()}
                    contact_form={*contact_form}
                    site={p.site.clone()}
                />
            },
        },
    };

    html! {
        <section class="dynamic-view" data-component={kind}>
            <button type="button" class="dynamic-view__back" onclick={on_back}>{ "◀ BACK" }</button>
            { body }
        </section>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct DynamicViewPageProps {
    pub destination: AttrValue,
}

#[function_component(DynamicViewPage)]
pub fn dynamic_view_page(p: &DynamicViewPageProps) -> Html {
    let ctx = use_app_context();
    let state = use_state_eq(|| ViewState::Loading);
    let navigator = use_navigator();
    use_resolve_effect(p.destination.clone(), &ctx.source.0, state.clone());

    let on_back = Callback::from(move |()| {
        if let Some(nav) = navigator.as_ref() {
            nav.push(&Route::Battle);
        }
    });

    html! {
        <ViewBody state={(*state).clone()} site={ctx.site.clone()} on_back={on_back} />
    }
}

#[cfg(target_arch = "wasm32")]
#[hook]
fn use_resolve_effect(
    destination: AttrValue,
    source: &crate::data::SharedSource,
    state: UseStateHandle<ViewState>,
) {
    let source = source.clone();
    use_effect_with(destination, move |destination| {
        state.set(ViewState::Loading);
        let destination = destination.to_string();
        wasm_bindgen_futures::spawn_local(async move {
            let resolver = pokefolio_core::ViewResolver::new(source);
            state.set(ViewState::from_outcome(
                resolver.resolve_view(&destination).await,
            ));
        });
    });
}

#[cfg(not(target_arch = "wasm32"))]
#[hook]
fn use_resolve_effect(
    destination: AttrValue,
    source: &crate::data::SharedSource,
    state: UseStateHandle<ViewState>,
) {
    let _ = (destination, source, state);
}
