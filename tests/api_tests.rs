use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, Response, StatusCode};
use axum::Router;
use tower::ServiceExt;

use fiat_vehicles::config::AppConfig;
use fiat_vehicles::repositories::{InMemoryVehicleStore, VehicleStore};
use fiat_vehicles::{create_router, AppState};

const UNO_FORM: &str =
    "modelo=Uno&ano=2020&cor=red&preco=15000.50&data_fabricacao=2020-01-15&disponivel=on";

// Función helper para crear la app de test
fn create_test_app() -> (Router, Arc<InMemoryVehicleStore>) {
    let store = Arc::new(InMemoryVehicleStore::new());
    let app = create_router(AppState::new(AppConfig::default(), store.clone()));
    (app, store)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_form(uri: &str, body: &'static str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn flash_cookie(response: &Response<Body>) -> String {
    let set_cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
    set_cookie.split(';').next().unwrap().to_string()
}

#[tokio::test]
async fn test_health_check_ok() {
    let (app, _) = create_test_app();
    let response = app.oneshot(get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "OK");
}

#[tokio::test]
async fn test_health_check_database_down() {
    let store = Arc::new(InMemoryVehicleStore::unreachable());
    let app = create_router(AppState::new(AppConfig::default(), store));
    let response = app.oneshot(get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_text(response).await, "Database connection failed");
}

#[tokio::test]
async fn test_index_empty() {
    let (app, _) = create_test_app();
    let response = app.oneshot(get("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Nenhum veículo cadastrado"));
}

#[tokio::test]
async fn test_index_database_down_still_renders() {
    let store = Arc::new(InMemoryVehicleStore::unreachable());
    let app = create_router(AppState::new(AppConfig::default(), store));
    let response = app.oneshot(get("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("Não foi possível conectar ao banco de dados"));
    assert!(body.contains("Nenhum veículo cadastrado"));
}

#[tokio::test]
async fn test_create_redirects_with_flash_and_lists_vehicle() {
    let (app, store) = create_test_app();

    let response = app.clone().oneshot(post_form("/vehicle/new", UNO_FORM)).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/");
    let cookie = flash_cookie(&response);

    let vehicles = store.list_all().await.unwrap();
    assert_eq!(vehicles.len(), 1);
    assert_eq!(vehicles[0].modelo, "Uno");
    assert!(vehicles[0].disponivel);

    let index = Request::builder()
        .uri("/")
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(index).await.unwrap();
    assert!(response.headers()[header::SET_COOKIE].to_str().unwrap().contains("Max-Age=0"));

    let body = body_text(response).await;
    assert!(body.contains("Veículo adicionado com sucesso!"));
    assert!(body.contains("15000.50"));
    assert!(body.contains("2020-01-15"));
}

#[tokio::test]
async fn test_create_invalid_year_rerenders_form() {
    let (app, store) = create_test_app();
    let form = "modelo=Uno&ano=abc&cor=red&preco=15000.50&data_fabricacao=2020-01-15";

    let response = app.oneshot(post_form("/vehicle/new", form)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains("Dados inválidos"));
    assert!(body.contains(r#"value="abc""#));
    assert!(store.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_without_checkbox_is_not_available() {
    let (app, store) = create_test_app();
    let form = "modelo=Uno&ano=2020&cor=red&preco=100&data_fabricacao=2020-01-15";

    let response = app.oneshot(post_form("/vehicle/new", form)).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(!store.list_all().await.unwrap()[0].disponivel);
}

#[tokio::test]
async fn test_edit_prefills_and_updates() {
    let (app, store) = create_test_app();
    app.clone().oneshot(post_form("/vehicle/new", UNO_FORM)).await.unwrap();
    let id = store.list_all().await.unwrap()[0].id;

    let response = app.clone().oneshot(get(&format!("/vehicle/edit/{}", id))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains(r#"value="Uno""#));
    assert!(body.contains(r#"value="2020-01-15""#));

    let update = "modelo=Palio&ano=2015&cor=prata&preco=22000&data_fabricacao=2014-11-03";
    let response = app
        .oneshot(post_form(&format!("/vehicle/edit/{}", id), update))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let stored = store.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(stored.modelo, "Palio");
    assert_eq!(stored.ano, 2015);
    assert!(!stored.disponivel);
}

#[tokio::test]
async fn test_edit_missing_vehicle_redirects() {
    let (app, _) = create_test_app();
    let response = app.oneshot(get("/vehicle/edit/999")).await.unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(flash_cookie(&response).starts_with("flash=error|"));
}

#[tokio::test]
async fn test_delete_is_idempotent() {
    let (app, store) = create_test_app();
    app.clone().oneshot(post_form("/vehicle/new", UNO_FORM)).await.unwrap();
    let id = store.list_all().await.unwrap()[0].id;

    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(get(&format!("/vehicle/delete/{}", id)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert!(flash_cookie(&response).starts_with("flash=success|"));
    }

    assert!(store.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_info_page() {
    let (app, _) = create_test_app();
    let response = app.oneshot(get("/info")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("<strong>Status do Banco:</strong> OK"));
    assert!(body.contains("rhel610-postgres:5432"));
    assert!(body.contains("fiat_legacy"));
    assert!(body.contains("N/A"));
}

fn create_app_with(store: InMemoryVehicleStore) -> Router {
    create_router(AppState::new(AppConfig::default(), Arc::new(store)))
}

#[tokio::test]
async fn test_posts_with_database_down_redirect_with_error_flash() {
    let app = create_app_with(InMemoryVehicleStore::unreachable());

    for uri in ["/vehicle/new", "/vehicle/edit/1"] {
        let response = app.clone().oneshot(post_form(uri, UNO_FORM)).await.unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER, "{}", uri);
        assert_eq!(response.headers()[header::LOCATION], "/");
        assert!(flash_cookie(&response).starts_with("flash=error|"), "{}", uri);
    }
}

#[tokio::test]
async fn test_write_failure_rerenders_form_with_submitted_values() {
    let app = create_app_with(InMemoryVehicleStore::failing_writes());

    for (uri, action) in [
        ("/vehicle/new", r#"action="/vehicle/new""#),
        ("/vehicle/edit/7", r#"action="/vehicle/edit/7""#),
    ] {
        let response = app.clone().oneshot(post_form(uri, UNO_FORM)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "{}", uri);
        assert!(response.headers().get(header::SET_COOKIE).is_none());

        let body = body_text(response).await;
        assert!(body.contains("Erro ao salvar veículo"), "{}", uri);
        assert!(body.contains(action));
        assert!(body.contains(r#"value="Uno""#));
        assert!(body.contains(r#"value="15000.50""#));
        assert!(body.contains(" checked"));
    }
}

#[tokio::test]
async fn test_pending_flash_kept_when_list_fails() {
    let (healthy, _) = create_test_app();
    let created = healthy.oneshot(post_form("/vehicle/new", UNO_FORM)).await.unwrap();
    let cookie = flash_cookie(&created);

    let down = create_app_with(InMemoryVehicleStore::unreachable());
    let index = Request::builder()
        .uri("/")
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .unwrap();
    let response = down.oneshot(index).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(header::SET_COOKIE).is_none());
    assert!(body_text(response).await.contains("Não foi possível conectar ao banco de dados"));
}

#[tokio::test]
async fn test_invalid_ids_redirect_as_not_found() {
    let (app, _) = create_test_app();

    for uri in ["/vehicle/edit/abc", "/vehicle/delete/abc", "/vehicle/edit/99999999999"] {
        let response = app.clone().oneshot(get(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER, "{}", uri);
        assert!(flash_cookie(&response).starts_with("flash=error|"), "{}", uri);
    }

    let response = app.oneshot(post_form("/vehicle/edit/abc", UNO_FORM)).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(flash_cookie(&response).starts_with("flash=error|"));
}
