#![allow(clippy::unwrap_used)]
// End-to-end browsing flows against a mocked device service.

use pretty_assertions::assert_eq;
use serde_json::json;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use devref_core::{
    BrowserState, CoreError, DeviceService, FetchKind, Locale, LocalizationCatalog,
    PropertyValue, ServiceConfig,
};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, DeviceService, BrowserState) {
    let server = MockServer::start().await;
    let config = ServiceConfig::new(Url::parse(&server.uri()).unwrap());
    let service = DeviceService::new(&config).unwrap();
    let state = BrowserState::new(LocalizationCatalog::builtin(), Locale::En);
    (server, service, state)
}

async fn mount_categories(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/devices"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "Name": "sensors", "Description": "Датчики" },
            { "Name": "Valves", "Description": "Клапаны" }
        ])))
        .mount(server)
        .await;
}

async fn mount_sensors(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/sensors"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"[
                {"Id":1,"Code":"TS-01","Name":"TempSensor01","Description":"raw","voltage":12,"accuracy":12.5},
                {"id":2,"code":"XX-02","name":"Unlisted","description":"server text"}
            ]"#,
        ))
        .mount(server)
        .await;
}

// ── Flows ───────────────────────────────────────────────────────────

#[tokio::test]
async fn test_startup_localizes_categories() {
    let (server, service, mut state) = setup().await;
    mount_categories(&server).await;

    service.load_categories(&mut state).await.unwrap();

    let names: Vec<&str> = state.categories().iter().map(|c| c.display_name.as_str()).collect();
    assert_eq!(names, ["Sensors", "Valves"]);

    state.toggle_locale();
    let names: Vec<&str> = state.categories().iter().map(|c| c.display_name.as_str()).collect();
    assert_eq!(names, ["Датчики", "Клапаны"]);
}

#[tokio::test]
async fn test_load_projects_selected_device() {
    let (server, service, mut state) = setup().await;
    mount_categories(&server).await;
    mount_sensors(&server).await;

    service.load_categories(&mut state).await.unwrap();
    state.select_category(0);
    service.load_devices(&mut state).await.unwrap();

    assert_eq!(state.devices().len(), 2);
    assert_eq!(state.devices()[1].description.as_deref(), Some("Unlisted"));

    state.select_device_id(1).unwrap();
    let rows = state.selected_properties();
    let names: Vec<&str> = rows.iter().map(|r| r.property_name.as_str()).collect();
    assert_eq!(names, ["Code", "Name", "Description", "voltage", "accuracy"]);
    assert_eq!(rows[2].value, PropertyValue::Text("TempSensor01".into()));
    assert_eq!(rows[3].value, PropertyValue::Integer(12));
    assert_eq!(rows[4].value, PropertyValue::Float(12.5));

    state.toggle_locale();
    let rows = state.selected_properties();
    assert_eq!(rows[2].value, PropertyValue::Text("Датчик температуры".into()));
}

#[tokio::test]
async fn test_load_without_selection_prompts() {
    let (server, service, mut state) = setup().await;
    mount_categories(&server).await;
    service.load_categories(&mut state).await.unwrap();

    let err = service.load_devices(&mut state).await.unwrap_err();

    assert!(matches!(err, CoreError::NoCategorySelected));
    assert_eq!(
        state.describe_error(&err, FetchKind::Devices),
        "Please select a device type."
    );
    assert!(state.devices().is_empty());
    assert!(server.received_requests().await.unwrap().len() == 1);
}

#[tokio::test]
async fn test_failed_load_keeps_previous_devices() {
    let (server, service, mut state) = setup().await;
    mount_categories(&server).await;
    mount_sensors(&server).await;
    Mock::given(method("GET"))
        .and(path("/valves"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    service.load_categories(&mut state).await.unwrap();
    state.select_category(0);
    service.load_devices(&mut state).await.unwrap();

    state.select_category(1);
    let err = service.load_devices(&mut state).await.unwrap_err();
    let message = state.describe_error(&err, FetchKind::Devices);

    assert!(message.starts_with("Error loading data: "), "got: {message}");
    assert!(message.contains("500"), "got: {message}");
    assert_eq!(state.loaded_category(), Some("sensors"));
    assert_eq!(state.devices().len(), 2);
}

#[tokio::test]
async fn test_category_failure_is_localized() {
    let (server, service, mut state) = setup().await;
    Mock::given(method("GET"))
        .and(path("/devices"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&server)
        .await;

    state.set_locale(Locale::Ru);
    let err = service.load_categories(&mut state).await.unwrap_err();
    assert!(matches!(err, CoreError::InvalidResponse { .. }), "got: {err:?}");
    let message = state.describe_error(&err, FetchKind::Categories);

    assert!(
        message.starts_with("Ошибка загрузки типов устройств: "),
        "got: {message}"
    );
    assert!(state.categories().is_empty());
}
