//! API Router with Swagger UI

use std::sync::Arc;

use axum::{middleware, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::AppConfig;
use crate::domain::UserRepository;
use crate::interfaces::http::modules::health::{self, HealthState};
use crate::interfaces::http::modules::request_id::request_id_middleware;
use crate::interfaces::http::modules::users::{self, UserHandlerState, USERS_PATH};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        users::list_users,
        users::get_user,
        users::create_user,
        users::update_user,
        users::delete_user,
    ),
    components(
        schemas(
            health::HealthResponse,
            users::UserDto,
            users::UserRequest,
        )
    ),
    tags(
        (name = "Health", description = "Service liveness"),
        (name = "NomeUsuarios", description = "Gerenciamento de usuários"),
    ),
    info(
        title = "NomeUsuario API",
        version = "1.0.0",
        description = "API para gerenciamento de usuários."
    )
)]
pub struct ApiDoc;

/// Build the REST router.
///
/// The repository is injected here; handlers only ever see the trait.
pub fn create_api_router(repository: Arc<dyn UserRepository>, config: &AppConfig) -> Router {
    let user_routes = Router::new()
        .route(USERS_PATH, get(users::list_users).post(users::create_user))
        .route(
            &format!("{}/{{id}}", USERS_PATH),
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .with_state(UserHandlerState::new(repository));

    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .with_state(HealthState::new());

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut router = Router::new().merge(user_routes).merge(health_routes);

    if config.api.swagger_enabled {
        router = router
            .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    }

    router
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, Request, Response, StatusCode};
    use serde_json::{json, Value};
    use tower::Service;

    use super::*;
    use crate::interfaces::http::common::USER_NOT_FOUND;
    use crate::interfaces::http::modules::request_id::REQUEST_ID_HEADER;
    use crate::interfaces::http::modules::users::{USER_DELETED, USER_UPDATED};
    use crate::InMemoryUserRepository;

    fn app() -> Router {
        create_api_router(Arc::new(InMemoryUserRepository::new()), &AppConfig::default())
    }

    async fn send(app: &mut Router, req: Request<Body>) -> Response<Body> {
        app.call(req).await.unwrap()
    }

    async fn body_text(resp: Response<Body>) -> String {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    async fn body_json(resp: Response<Body>) -> Value {
        serde_json::from_str(&body_text(resp).await).unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn delete(uri: &str) -> Request<Body> {
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    fn with_json(method: &str, uri: &str, body: &Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(body).unwrap()))
            .unwrap()
    }

    fn murillo() -> Value {
        json!({
            "name": "Murillo Ramos",
            "email": "murillo@example.com",
            "birthDate": "2005-07-14",
            "phoneNumber": "11999999999"
        })
    }

    async fn create(app: &mut Router, body: &Value) -> i64 {
        let resp = send(app, with_json("POST", "/api/nomeusuarios", body)).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        body_json(resp).await["id"].as_i64().unwrap()
    }

    #[tokio::test]
    async fn list_on_empty_storage_is_200_with_empty_array() {
        let mut app = app();

        let resp = send(&mut app, get("/api/nomeusuarios")).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_json(resp).await, json!([]));
    }

    #[tokio::test]
    async fn create_returns_201_with_location_and_body() {
        let mut app = app();

        let resp = send(&mut app, with_json("POST", "/api/nomeusuarios", &murillo())).await;

        assert_eq!(resp.status(), StatusCode::CREATED);
        let location = resp.headers()[header::LOCATION].to_str().unwrap().to_string();
        let body = body_json(resp).await;
        let id = body["id"].as_i64().unwrap();
        assert_eq!(location, format!("/api/nomeusuarios/{}", id));
        assert_eq!(body["name"], "Murillo Ramos");
        assert_eq!(body["birthDate"], "2005-07-14");
    }

    #[tokio::test]
    async fn create_ignores_client_supplied_id() {
        let mut app = app();
        let mut body = murillo();
        body["id"] = json!(999);

        let id = create(&mut app, &body).await;

        assert_ne!(id, 999);
        let resp = send(&mut app, get("/api/nomeusuarios/999")).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn created_user_is_readable_by_id() {
        let mut app = app();
        let id = create(&mut app, &murillo()).await;

        let resp = send(&mut app, get(&format!("/api/nomeusuarios/{}", id))).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_json(resp).await;
        assert_eq!(
            body,
            json!({
                "id": id,
                "name": "Murillo Ramos",
                "email": "murillo@example.com",
                "phoneNumber": "11999999999",
                "birthDate": "2005-07-14"
            })
        );
    }

    #[tokio::test]
    async fn update_replaces_fields_and_route_id_wins() {
        let mut app = app();
        let id = create(&mut app, &murillo()).await;
        let other = create(&mut app, &murillo()).await;

        let update = json!({
            "id": other,
            "name": "Usuário Atualizado",
            "email": "atualizado@example.com",
            "birthDate": "1990-01-01T00:00:00",
            "phoneNumber": "11888888888"
        });
        let resp = send(
            &mut app,
            with_json("PUT", &format!("/api/nomeusuarios/{}", id), &update),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_text(resp).await, USER_UPDATED);

        let updated = body_json(send(&mut app, get(&format!("/api/nomeusuarios/{}", id))).await).await;
        assert_eq!(updated["name"], "Usuário Atualizado");
        assert_eq!(updated["birthDate"], "1990-01-01");

        let untouched = body_json(send(&mut app, get(&format!("/api/nomeusuarios/{}", other))).await).await;
        assert_eq!(untouched["name"], "Murillo Ramos");
    }

    #[tokio::test]
    async fn delete_makes_user_unreachable() {
        let mut app = app();
        let id = create(&mut app, &murillo()).await;
        let uri = format!("/api/nomeusuarios/{}", id);

        let resp = send(&mut app, delete(&uri)).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_text(resp).await, USER_DELETED);

        let resp = send(&mut app, get(&uri)).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_text(resp).await, USER_NOT_FOUND);
    }

    #[tokio::test]
    async fn missing_id_is_404_for_get_put_and_delete() {
        let mut app = app();
        let uri = "/api/nomeusuarios/12345";

        for req in [
            get(uri),
            with_json("PUT", uri, &murillo()),
            delete(uri),
        ] {
            let resp = send(&mut app, req).await;
            assert_eq!(resp.status(), StatusCode::NOT_FOUND);
            assert_eq!(body_text(resp).await, USER_NOT_FOUND);
        }
    }

    #[tokio::test]
    async fn missing_required_field_is_rejected() {
        let mut app = app();
        let body = json!({ "email": "x@example.com", "birthDate": "2000-01-01" });

        let resp = send(&mut app, with_json("POST", "/api/nomeusuarios", &body)).await;

        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let list = body_json(send(&mut app, get("/api/nomeusuarios")).await).await;
        assert_eq!(list, json!([]));
    }

    #[tokio::test]
    async fn non_numeric_id_is_bad_request() {
        let mut app = app();
        let resp = send(&mut app, get("/api/nomeusuarios/abc")).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn full_lifecycle_scenario() {
        let mut app = app();

        let resp = send(&mut app, with_json("POST", "/api/nomeusuarios", &murillo())).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created = body_text(resp).await;
        assert!(created.contains("Murillo Ramos"));
        let id = serde_json::from_str::<Value>(&created).unwrap()["id"]
            .as_i64()
            .unwrap();
        let uri = format!("/api/nomeusuarios/{}", id);

        let resp = send(&mut app, get(&uri)).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(body_text(resp).await.contains("Murillo Ramos"));

        let mut update = murillo();
        update["name"] = json!("Usuário Atualizado");
        let resp = send(&mut app, with_json("PUT", &uri, &update)).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let resp = send(&mut app, get(&uri)).await;
        assert!(body_text(resp).await.contains("Usuário Atualizado"));

        let resp = send(&mut app, delete(&uri)).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let resp = send(&mut app, get(&uri)).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn request_id_is_echoed_or_generated() {
        let mut app = app();

        let req = Request::builder()
            .uri("/health")
            .header(REQUEST_ID_HEADER, "abc-123")
            .body(Body::empty())
            .unwrap();
        let resp = send(&mut app, req).await;
        assert_eq!(resp.headers()[REQUEST_ID_HEADER], "abc-123");

        let resp = send(&mut app, get("/health")).await;
        assert!(resp.headers().contains_key(REQUEST_ID_HEADER));
        assert_eq!(body_json(resp).await["status"], "ok");
    }

    #[tokio::test]
    async fn swagger_can_be_disabled() {
        let mut enabled = app();
        let resp = send(&mut enabled, get("/api-docs/openapi.json")).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let doc = body_json(resp).await;
        assert!(doc["paths"]["/api/nomeusuarios/{id}"].is_object());

        let mut config = AppConfig::default();
        config.api.swagger_enabled = false;
        let mut disabled =
            create_api_router(Arc::new(InMemoryUserRepository::new()), &config);
        let resp = send(&mut disabled, get("/api-docs/openapi.json")).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
