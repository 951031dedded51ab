use pokefolio_core::contact::SEND_FAILED_MESSAGE;
use pokefolio_core::{
    BagItem, ContactField, ContactFormState, DialogItem, PickerItem, PickerStats, SubmitStatus,
};
use pokefolio_web::audio::AudioHandle;
use pokefolio_web::components::audio_controls::{self, AudioControls};
use pokefolio_web::components::ui::ItemList;
use pokefolio_web::components::ui::contact_form::{
    ContactFormView, ContactFormViewProps, SUCCESS_MESSAGE,
};
use pokefolio_web::components::ui::detail_panel::{DetailPanel, DetailPanelProps};
use pokefolio_web::components::ui::dialog_box::{DialogBox, DialogBoxProps};
use pokefolio_web::components::ui::item_bag::{ItemBag, ItemBagProps};
use pokefolio_web::components::ui::picker::{Picker, PickerProps};
use futures::executor::block_on;
use yew::{AttrValue, Callback, LocalServerRenderer};

fn picker_item(id: &str, name: &str) -> PickerItem {
    PickerItem {
        id: id.to_string(),
        name: name.to_string(),
        sprite: format!("assets/sprites/{id}.png"),
        level: "Lv. 30".to_string(),
        kind: "BACKEND".to_string(),
        description: format!("{name} description"),
        stats: PickerStats {
            years: "2020 - 2024".to_string(),
            skills: vec!["Rust".to_string(), "SQL".to_string()],
        },
    }
}

fn bag_item(id: &str, name: &str, github: Option<&str>) -> BagItem {
    BagItem {
        id: id.to_string(),
        name: name.to_string(),
        description: format!("{name} does things"),
        technologies: vec!["Yew".to_string()],
        github_url: github.map(str::to_string),
        live_url: None,
    }
}

#[test]
fn picker_shows_lead_and_pads_party_to_five_slots() {
    let props = PickerProps {
        title: AttrValue::from("EXPERIENCE"),
        items: ItemList::from(vec![
            picker_item("lead", "LEAD CO"),
            picker_item("second", "SECOND CO"),
            picker_item("third", "THIRD CO"),
        ]),
    };
    let html = block_on(LocalServerRenderer::<Picker>::with_props(props).render());

    assert!(html.contains("EXPERIENCE"));
    assert!(html.contains("LEAD CO"));
    assert!(html.contains("THIRD CO"));
    assert!(html.contains("/assets/sprites/lead.png"));
    assert_eq!(html.matches("picker__slot--empty").count(), 3, "{html}");
    assert!(
        html.contains("picker__lead selected"),
        "lead should start selected: {html}"
    );
    assert!(!html.contains("detail-panel"), "details stay closed until chosen");
}

#[test]
fn empty_picker_renders_placeholder_and_empty_slots() {
    let props = PickerProps {
        title: AttrValue::from("EXPERIENCE"),
        items: ItemList::from(Vec::new()),
    };
    let html = block_on(LocalServerRenderer::<Picker>::with_props(props).render());
    assert!(html.contains("picker__empty"));
    assert_eq!(html.matches("picker__slot--empty").count(), 5);
}

#[test]
fn picker_ignores_items_beyond_the_party() {
    let items = (0..8)
        .map(|i| picker_item(&format!("co{i}"), &format!("COMPANY {i}")))
        .collect::<Vec<_>>();
    let props = PickerProps {
        title: AttrValue::from("EXPERIENCE"),
        items: ItemList::from(items),
    };
    let html = block_on(LocalServerRenderer::<Picker>::with_props(props).render());
    assert!(html.contains("COMPANY 5"));
    assert!(!html.contains("COMPANY 6"));
    assert!(!html.contains("picker__slot--empty"));
}

#[test]
fn detail_panel_lists_stats_and_close_control() {
    let props = DetailPanelProps {
        item: picker_item("lead", "LEAD CO"),
        on_close: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<DetailPanel>::with_props(props).render());
    assert!(html.contains("LEAD CO"));
    assert!(html.contains("BACKEND"));
    assert!(html.contains("2020 - 2024"));
    assert!(html.contains("detail-panel__skills"));
    assert!(html.contains("SQL"));
    assert!(html.contains("Close details"));
}

#[test]
fn item_bag_details_the_first_item() {
    let props = ItemBagProps {
        title: AttrValue::from("PROJECTS"),
        items: ItemList::from(vec![
            bag_item("dex", "DEX", Some("https://github.com/example/dex")),
            bag_item("map", "MAP", None),
        ]),
    };
    let html = block_on(LocalServerRenderer::<ItemBag>::with_props(props).render());
    assert!(html.contains("DEX does things"));
    assert!(!html.contains("MAP does things"));
    assert!(html.contains("https://github.com/example/dex"));
    assert!(html.contains("aria-selected=\"true\""));
    assert!(html.contains("MAP"));
}

#[test]
fn empty_item_bag_says_so() {
    let props = ItemBagProps {
        title: AttrValue::from("PROJECTS"),
        items: ItemList::from(Vec::new()),
    };
    let html = block_on(LocalServerRenderer::<ItemBag>::with_props(props).render());
    assert!(html.contains("The bag is empty."));
    assert!(!html.contains("item-bag__details"));
}

#[test]
fn dialog_box_links_rows_and_optionally_embeds_the_form() {
    let rows = ItemList::from(vec![
        DialogItem {
            label: "EMAIL".to_string(),
            value: "jay@example.com".to_string(),
            link: Some("mailto:jay@example.com".to_string()),
        },
        DialogItem {
            label: "GITHUB".to_string(),
            value: "github.com/example".to_string(),
            link: Some("https://github.com/example".to_string()),
        },
        DialogItem {
            label: "CITY".to_string(),
            value: "Pallet Town".to_string(),
            link: None,
        },
    ]);
    let props = DialogBoxProps {
        title: AttrValue::from("CONTACT"),
        items: rows.clone(),
        contact_form: false,
        site: None,
    };
    let html = block_on(LocalServerRenderer::<DialogBox>::with_props(props).render());
    assert!(html.contains("href=\"mailto:jay@example.com\""));
    assert!(html.contains("target=\"_blank\""));
    assert!(html.contains("Pallet Town"));
    assert!(!html.contains("contact-form"));

    let props = DialogBoxProps {
        title: AttrValue::from("CONTACT"),
        items: rows,
        contact_form: true,
        site: None,
    };
    let html = block_on(LocalServerRenderer::<DialogBox>::with_props(props).render());
    assert!(html.contains("contact-form"));
    assert!(html.contains("contact-message"));
}

fn form_view(state: ContactFormState) -> String {
    let props = ContactFormViewProps {
        state,
        on_change: Callback::noop(),
        on_blur: Callback::noop(),
        on_submit: Callback::noop(),
    };
    block_on(LocalServerRenderer::<ContactFormView>::with_props(props).render())
}

#[test]
fn contact_form_shows_errors_for_touched_fields_only() {
    let mut state = ContactFormState::default();
    state.update(ContactField::Name, "A".to_string());
    state.touch(ContactField::Name);
    let html = form_view(state);
    assert!(html.contains("Name must be at least 2 characters"), "{html}");
    assert!(!html.contains("Email is required"));
    assert!(!html.contains("Message is required"));
}

#[test]
fn contact_form_hides_errors_while_typing() {
    let mut state = ContactFormState::default();
    state.update(ContactField::Name, "A".to_string());
    let html = form_view(state);
    assert!(!html.contains("Name must be at least 2 characters"), "{html}");
    assert!(!html.contains("has-error"));
}

#[test]
fn contact_form_after_failed_submit_shows_every_error() {
    let mut state = ContactFormState::default();
    state.update(ContactField::Email, "not-an-email".to_string());
    assert!(state.begin_submit().is_err());
    let html = form_view(state);
    assert!(html.contains("Name is required"));
    assert!(html.contains("Please enter a valid email address"));
    assert!(html.contains("Message is required"));
}

#[test]
fn contact_form_disables_submit_while_sending() {
    let state = ContactFormState {
        is_submitting: true,
        ..ContactFormState::default()
    };
    let html = form_view(state);
    assert!(html.contains("SENDING..."));
    assert!(html.contains("disabled"));
}

#[test]
fn contact_form_reports_outcome() {
    let success = ContactFormState {
        status: SubmitStatus::Success,
        ..ContactFormState::default()
    };
    assert!(form_view(success).contains(SUCCESS_MESSAGE));

    let failure = ContactFormState {
        status: SubmitStatus::Error,
        error_message: Some(SEND_FAILED_MESSAGE.to_string()),
        ..ContactFormState::default()
    };
    assert!(form_view(failure).contains("Failed to send message."));
}

#[test]
fn audio_controls_reflect_default_state() {
    let props = audio_controls::Props {
        audio: AudioHandle::silent(),
    };
    let html = block_on(LocalServerRenderer::<AudioControls>::with_props(props).render());
    assert!(html.contains("step=\"0.05\""));
    assert!(html.contains("value=\"0.5\""));
    assert!(html.contains("Mute music"));
    assert!(html.contains("Paused"));
}

#[test]
fn audio_controls_show_muted_state() {
    let audio = AudioHandle::silent();
    audio.toggle_mute();
    let html = block_on(
        LocalServerRenderer::<AudioControls>::with_props(audio_controls::Props { audio }).render(),
    );
    assert!(html.contains("Unmute music"));
    assert!(html.contains("aria-pressed=\"true\""));
}
