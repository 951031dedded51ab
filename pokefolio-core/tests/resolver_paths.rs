use futures::executor::block_on;
use pokefolio_core::{
    ComponentKind, ConfigError, MemoryConfigSource, ResolveError, SITE_CONFIG_FILE, ViewItems,
    ViewResolver,
};

const SITE: &str = r#"{
    "pageTitle": "Trainer Jay | Portfolio",
    "trainerName": "JAY",
    "emailConfig": {"serviceId": "service_x", "templateId": "template_y", "publicKey": "pk"},
    "battleOptions": [
        {"id": "pokemon", "label": "POKéMON", "route": "/pokemon", "component": "picker", "configFile": "experience.json"},
        {"id": "bag", "label": "BAG", "route": "/bag", "component": "bag", "configFile": "projects.json"},
        {"id": "run", "label": "RUN", "route": "/run", "component": "dialog", "configFile": "contact.json"}
    ]
}"#;

const EXPERIENCE: &str = r#"{
    "viewType": "pokemon-picker",
    "title": "EXPERIENCE",
    "items": [
        {"id": "acme", "name": "ACME", "sprite": "assets/sprites/acme.png", "level": "Lv. 30",
         "type": "BACKEND", "description": "APIs", "stats": {"years": "2020-2024", "skills": ["Rust"]}}
    ]
}"#;

const PROJECTS: &str = r#"{
    "viewType": "item-bag",
    "title": "PROJECTS",
    "items": [{"id": "dex", "name": "Dex", "description": "Tracker", "technologies": ["Yew"]}]
}"#;

const CONTACT: &str = r#"{
    "viewType": "dialog-box",
    "title": "CONTACT",
    "contactForm": true,
    "items": [{"label": "EMAIL", "value": "jay@example.com", "link": "mailto:jay@example.com"}]
}"#;

fn source() -> MemoryConfigSource {
    MemoryConfigSource::new()
        .with_file(SITE_CONFIG_FILE, SITE)
        .with_file("experience.json", EXPERIENCE)
        .with_file("projects.json", PROJECTS)
        .with_file("contact.json", CONTACT)
}

#[test]
fn every_declared_destination_resolves_to_its_kind_and_document() {
    let source = source();
    let resolver = ViewResolver::new(source.clone());
    for (id, kind, file, title) in [
        ("pokemon", ComponentKind::Picker, "experience.json", "EXPERIENCE"),
        ("bag", ComponentKind::Bag, "projects.json", "PROJECTS"),
        ("run", ComponentKind::Dialog, "contact.json", "CONTACT"),
    ] {
        let resolved = block_on(resolver.resolve_view(id)).unwrap();
        assert_eq!(resolved.component, kind, "{id}");
        assert_eq!(resolved.view.items.kind(), kind, "{id}");
        assert_eq!(resolved.option.config_file, file);
        assert_eq!(resolved.view.title, title);
    }
    assert_eq!(
        source.requests(),
        vec![
            SITE_CONFIG_FILE,
            "experience.json",
            SITE_CONFIG_FILE,
            "projects.json",
            SITE_CONFIG_FILE,
            "contact.json",
        ]
    );
}

#[test]
fn unknown_destination_fails_without_fetching_a_view() {
    let source = source();
    let resolver = ViewResolver::new(source.clone());
    let err = block_on(resolver.resolve_view("fight")).unwrap_err();
    assert!(matches!(err, ResolveError::NotFound(ref id) if id == "fight"));
    assert_eq!(source.requests(), vec![SITE_CONFIG_FILE]);

    let err = block_on(resolver.resolve_view("BAG")).unwrap_err();
    assert!(matches!(err, ResolveError::NotFound(_)));
}

#[test]
fn repeated_resolution_is_not_memoized() {
    let source = source();
    let resolver = ViewResolver::new(source.clone());
    let first = block_on(resolver.resolve_view("bag")).unwrap();
    let second = block_on(resolver.resolve_view("bag")).unwrap();
    assert_eq!(first, second);
    assert_eq!(source.requests().len(), 4);
}

#[test]
fn contact_view_keeps_form_flag_and_links() {
    let resolver = ViewResolver::new(source());
    let resolved = block_on(resolver.resolve_view("run")).unwrap();
    assert!(resolved.view.contact_form);
    let ViewItems::Dialog(rows) = resolved.view.items else {
        panic!("expected dialog rows");
    };
    assert_eq!(rows[0].link.as_deref(), Some("mailto:jay@example.com"));
}

#[test]
fn missing_view_document_surfaces_fetch_error() {
    let source = MemoryConfigSource::new().with_file(SITE_CONFIG_FILE, SITE);
    let resolver = ViewResolver::new(source);
    let err = block_on(resolver.resolve_view("pokemon")).unwrap_err();
    assert!(matches!(
        err,
        ResolveError::Config(ConfigError::Fetch { ref file, .. }) if file == "experience.json"
    ));
}

#[test]
fn view_document_of_the_wrong_shape_is_a_schema_error() {
    let source = MemoryConfigSource::new()
        .with_file(SITE_CONFIG_FILE, SITE)
        .with_file("projects.json", CONTACT);
    let resolver = ViewResolver::new(source);
    let err = block_on(resolver.resolve_view("bag")).unwrap_err();
    assert!(matches!(
        err,
        ResolveError::Config(ConfigError::Schema { ref file, .. }) if file == "projects.json"
    ));
}

#[test]
fn duplicate_ids_fail_at_load_time() {
    let duplicated = SITE.replace("\"id\": \"run\"", "\"id\": \"bag\"");
    let source = MemoryConfigSource::new()
        .with_file(SITE_CONFIG_FILE, duplicated)
        .with_file("projects.json", PROJECTS);
    let resolver = ViewResolver::new(source);
    let err = block_on(resolver.resolve_view("bag")).unwrap_err();
    assert!(matches!(
        err,
        ResolveError::Config(ConfigError::DuplicateBattleOption { ref id }) if id == "bag"
    ));
}
