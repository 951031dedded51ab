use futures::executor::block_on;
use log::Level;
use pokefolio_core::{
    ComponentKind, ConfigError, ConfigLoader, ConfigSource, EmailConfig, SITE_CONFIG_FILE,
    TemplateParams, ViewResolver,
};
use pokefolio_web::data::{EmbeddedConfigSource, FETCH_TIMEOUT_MS, WebConfigSource};
use pokefolio_web::logging::format_record;
use pokefolio_web::mail::{EMAILJS_SEND_URL, EmailJsRelay, request_body};
use pokefolio_web::paths::{asset_path, data_path, is_external, media_src};
use pokefolio_web::router::Route;
use yew_router::Routable;

#[test]
fn asset_and_data_paths_are_root_anchored() {
    assert_eq!(asset_path("assets/sounds/battle.mp3"), "/assets/sounds/battle.mp3");
    assert_eq!(asset_path("/bag"), "/bag");
    assert_eq!(data_path("projects.json"), "/assets/data/projects.json");
    assert_eq!(data_path("/contact.json"), "/assets/data/contact.json");
}

#[test]
fn media_sources_keep_absolute_urls() {
    assert_eq!(
        media_src("https://cdn.example.com/a.png"),
        "https://cdn.example.com/a.png"
    );
    assert_eq!(media_src("assets/sprites/a.png"), "/assets/sprites/a.png");
    assert!(is_external("mailto:jay@example.com"));
    assert!(is_external("data:image/png;base64,AAAA"));
    assert!(!is_external("/bag"));
}

#[test]
fn menu_routes_use_option_ids() {
    assert_eq!(Route::for_option("bag").to_path(), "/bag");
    assert_eq!(Route::recognize("/"), Some(Route::Battle));
    assert_eq!(
        Route::recognize("/pokemon"),
        Some(Route::for_option("pokemon"))
    );
}

#[test]
fn every_shipped_option_resolves_to_its_declared_variant() {
    let site = block_on(ConfigLoader::new(EmbeddedConfigSource).load_site_config())
        .expect("shipped site config");
    let resolver = ViewResolver::new(EmbeddedConfigSource);
    for option in &site.battle_options {
        let resolved = block_on(resolver.resolve_view(&option.id))
            .unwrap_or_else(|err| panic!("{} failed: {err}", option.id));
        assert_eq!(resolved.component, option.component, "{}", option.id);
        assert_eq!(resolved.view.items.kind(), option.component, "{}", option.id);
        assert!(!resolved.view.items.is_empty(), "{} has no items", option.id);
        assert_eq!(option.route, format!("/{}", option.id));
    }
}

#[test]
fn shipped_contact_view_enables_the_form() {
    let resolver = ViewResolver::new(EmbeddedConfigSource);
    let contact = block_on(resolver.resolve_view("run")).expect("contact view");
    assert_eq!(contact.component, ComponentKind::Dialog);
    assert!(contact.view.contact_form);
}

#[test]
fn embedded_source_reports_unknown_files_as_fetch_errors() {
    assert!(EmbeddedConfigSource::document(SITE_CONFIG_FILE).is_some());
    let err = block_on(EmbeddedConfigSource.fetch_text("missing.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Fetch { ref file, .. } if file == "missing.json"));
}

#[test]
fn web_source_defaults_to_ten_second_timeout() {
    assert_eq!(FETCH_TIMEOUT_MS, 10_000);
    assert_eq!(WebConfigSource::default(), WebConfigSource::with_timeout(FETCH_TIMEOUT_MS));
}

#[test]
fn log_lines_carry_level_and_target() {
    let line = format_record(
        Level::Warn,
        "pokefolio_web::data",
        &format_args!("slow fetch of {}", "projects.json"),
    );
    assert_eq!(line, "[WARN] pokefolio_web::data: slow fetch of projects.json");
}

#[test]
fn mail_request_body_matches_relay_contract() {
    let credentials = EmailConfig {
        service_id: "service_x".to_string(),
        template_id: "template_y".to_string(),
        public_key: "pk_z".to_string(),
    };
    let params = TemplateParams {
        from_name: "Ash".to_string(),
        from_email: "ash@pallet.town".to_string(),
        message: "Hello there!".to_string(),
        to_name: "JAY".to_string(),
    };
    let body: serde_json::Value =
        serde_json::from_str(&request_body(&credentials, &params).expect("body")).expect("json");
    assert_eq!(
        body,
        serde_json::json!({
            "service_id": "service_x",
            "template_id": "template_y",
            "user_id": "pk_z",
            "template_params": {
                "from_name": "Ash",
                "from_email": "ash@pallet.town",
                "message": "Hello there!",
                "to_name": "JAY",
            },
        })
    );
    assert_eq!(EmailJsRelay::default().endpoint(), EMAILJS_SEND_URL);
}
