use crate::mail::EmailJsRelay;
use pokefolio_core::{
    ContactError, ContactField, ContactFormState, RelayError, SiteConfiguration, SubmitStatus,
};
use std::rc::Rc;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

pub const SUCCESS_MESSAGE: &str = "Message sent! Thanks for reaching out.";

pub enum ContactAction {
    Update(ContactField, String),
    Touch(ContactField),
    Submit,
    Finished(Rc<Result<(), ContactError>>),
    ClearSuccess,
}

#[derive(Default, PartialEq)]
pub struct ContactModel(pub ContactFormState);

impl Reducible for ContactModel {
    type Action = ContactAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = self.0.clone();
        match action {
            ContactAction::Update(field, value) => next.update(field, value),
            ContactAction::Touch(field) => next.touch(field),
            ContactAction::Submit => {
                let _ = next.begin_submit();
            }
            ContactAction::Finished(outcome) => next.finish_submit(&outcome),
            ContactAction::ClearSuccess => next.clear_success(),
        }
        Rc::new(Self(next))
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct ContactFormProps {
    #[prop_or_default]
    pub site: Option<Rc<SiteConfiguration>>,
}

/// Contact form wired to the mail relay.
#[function_component(ContactForm)]
pub fn contact_form(p: &ContactFormProps) -> Html {
    let model = use_reducer(ContactModel::default);

    let on_change = {
        let model = model.dispatcher();
        Callback::from(move |(field, value)| model.dispatch(ContactAction::Update(field, value)))
    };
    let on_blur = {
        let model = model.dispatcher();
        Callback::from(move |field| model.dispatch(ContactAction::Touch(field)))
    };
    let on_submit = {
        let model = model.clone();
        let site = p.site.clone();
        Callback::from(move |()| {
            if model.0.is_submitting {
                return;
            }
            let mut probe = model.0.clone();
            let Ok(form) = probe.begin_submit() else {
                model.dispatch(ContactAction::Submit);
                return;
            };
            model.dispatch(ContactAction::Submit);
            let Some(site) = site.clone() else {
                log::error!("contact form submitted before the site configuration loaded");
                let outcome = Err(ContactError::Relay(RelayError::Transport(
                    "site configuration unavailable".to_string(),
                )));
                model.dispatch(ContactAction::Finished(Rc::new(outcome)));
                return;
            };
            deliver(form, site, model.dispatcher());
        })
    };

    html! {
        <ContactFormView
            state={model.0.clone()}
            on_change={on_change}
            on_blur={on_blur}
            on_submit={on_submit}
        />
    }
}

#[cfg(target_arch = "wasm32")]
fn deliver(
    form: pokefolio_core::ContactForm,
    site: Rc<SiteConfiguration>,
    model: UseReducerDispatcher<ContactModel>,
) {
    use pokefolio_core::{ContactRelay, SUCCESS_RESET_MS};

    wasm_bindgen_futures::spawn_local(async move {
        let outcome = ContactRelay::new(EmailJsRelay::default())
            .submit(&form, &site)
            .await;
        let delivered = outcome.is_ok();
        crate::a11y::set_status(if delivered {
            SUCCESS_MESSAGE
        } else {
            pokefolio_core::contact::SEND_FAILED_MESSAGE
        });
        model.dispatch(ContactAction::Finished(Rc::new(outcome)));
        if delivered {
            let _ = crate::dom::sleep_ms(SUCCESS_RESET_MS).await;
            model.dispatch(ContactAction::ClearSuccess);
        }
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn deliver(
    form: pokefolio_core::ContactForm,
    site: Rc<SiteConfiguration>,
    model: UseReducerDispatcher<ContactModel>,
) {
    let _ = (form, site, EmailJsRelay::default());
    log::warn!("mail relay unavailable outside the browser");
    let outcome = Err(ContactError::Relay(RelayError::Transport(
        "mail relay unavailable outside the browser".to_string(),
    )));
    model.dispatch(ContactAction::Finished(Rc::new(outcome)));
}

#[derive(Properties, PartialEq, Clone)]
pub struct ContactFormViewProps {
    pub state: ContactFormState,
    pub on_change: Callback<(ContactField, String)>,
    pub on_blur: Callback<ContactField>,
    pub on_submit: Callback<()>,
}

/// Markup of the contact form for a given state.
#[function_component(ContactFormView)]
pub fn contact_form_view(p: &ContactFormViewProps) -> Html {
    let onsubmit = p.on_submit.reform(|e: SubmitEvent| e.prevent_default());
    let state = &p.state;

    let status = match state.status {
        SubmitStatus::Idle => Html::default(),
        SubmitStatus::Success => html! {
            <p class="contact-form__status contact-form__status--success" role="status">
                { SUCCESS_MESSAGE }
            </p>
        },
        SubmitStatus::Error => html! {
            <p class="contact-form__status contact-form__status--error" role="alert">
                { state.error_message.clone().unwrap_or_default() }
            </p>
        },
    };

    html! {
        <form class="contact-form" novalidate={true} onsubmit={onsubmit} aria-busy={state.is_submitting.to_string()}>
            { for ContactField::ALL.into_iter().map(|field| render_field(p, field)) }
            <button type="submit" class="contact-form__submit" disabled={state.is_submitting}>
                { if state.is_submitting { "SENDING..." } else { "SEND" } }
            </button>
            { status }
        </form>
    }
}

fn render_field(p: &ContactFormViewProps, field: ContactField) -> Html {
    let id = format!("contact-{}", field.key());
    let error_id = format!("{id}-error");
    let error = p.state.visible_error(field);
    let value = p.state.form.value(field).to_string();
    let onblur = p.on_blur.reform(move |_: FocusEvent| field);

    let control = if field == ContactField::Message {
        let oninput = p.on_change.reform(move |e: InputEvent| {
            let target: HtmlTextAreaElement = e.target_unchecked_into();
            (field, target.value())
        });
        html! {
            <textarea
                id={id.clone()}
                name={field.key()}
                rows="5"
                value={value}
                aria-invalid={error.is_some().to_string()}
                aria-describedby={error_id.clone()}
                disabled={p.state.is_submitting}
                oninput={oninput}
                onblur={onblur}
            />
        }
    } else {
        let oninput = p.on_change.reform(move |e: InputEvent| {
            let target: HtmlInputElement = e.target_unchecked_into();
            (field, target.value())
        });
        let kind = if field == ContactField::Email { "email" } else { "text" };
        html! {
            <input
                id={id.clone()}
                name={field.key()}
                type={kind}
                value={value}
                aria-invalid={error.is_some().to_string()}
                aria-describedby={error_id.clone()}
                disabled={p.state.is_submitting}
                oninput={oninput}
                onblur={onblur}
            />
        }
    };

    html! {
        <div class={classes!("contact-form__field", error.is_some().then_some("has-error"))}>
            <label for={id}>{ field.label() }</label>
            { control }
            <p id={error_id} class="contact-form__error">{ error.unwrap_or_default() }</p>
        </div>
    }
}
