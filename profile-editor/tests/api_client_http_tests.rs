//! HTTP adapter tests against an in-process server
//!
//! Each test binds an axum router to an ephemeral port and drives the real
//! `reqwest` client through `UserProfileApiAdapter`.

use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::routing::{get, put};
use axum::{Json, Router};
use profile_config::ClientConfig;
use profile_editor::infra::ApiClient;
use profile_editor::infra::ApiError;
use profile_editor::infra::services::{UserProfileApiAdapter, UserProfileService};
use profile_model::UpdateUserRequest;
use serde_json::{Value, json};

async fn serve(router: Router) -> UserProfileApiAdapter {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    let client = ApiClient::from_config(&ClientConfig::new(format!("http://{addr}")))
        .unwrap();
    UserProfileApiAdapter::new(Arc::new(client))
}

fn request() -> UpdateUserRequest {
    UpdateUserRequest {
        email: "ravi@example.com".into(),
        first_name: "Ravi".into(),
        last_name: "Sharma".into(),
        mobile: None,
        address: "221B Baker Street".into(),
        profile: None,
    }
}

#[tokio::test]
async fn fetch_unwraps_user_envelope() {
    let router = Router::new().route(
        "/api/user/{username}",
        get(|Path(username): Path<String>| async move {
            Json(json!({ "user": { "username": username, "email": "a@b.com" } }))
        }),
    );
    let service = serve(router).await;

    let user = service.fetch_user("sharma").await.unwrap();

    assert_eq!(user.username, "sharma");
    assert_eq!(user.email.as_deref(), Some("a@b.com"));
    assert_eq!(user.first_name, None);
    assert_eq!(user.mobile, None);
}

#[tokio::test]
async fn fetch_follows_redirects() {
    let router = Router::new()
        .route(
            "/api/user/{username}",
            get(|Path(username): Path<String>| async move {
                Redirect::temporary(&format!("/api/v2/user/{username}"))
            }),
        )
        .route(
            "/api/v2/user/{username}",
            get(|Path(username): Path<String>| async move {
                Json(json!({ "user": { "username": username, "email": "a@b.com" } }))
            }),
        );
    let service = serve(router).await;

    let user = service.fetch_user("sharma").await.unwrap();

    assert_eq!(user.username, "sharma");
}

#[tokio::test]
async fn fetch_error_carries_server_message() {
    let router = Router::new().route(
        "/api/user/{username}",
        get(|| async {
            (StatusCode::NOT_FOUND, Json(json!({ "message": "Not found" })))
        }),
    );
    let service = serve(router).await;

    let err = service.fetch_user("ghost").await.unwrap_err();

    assert_eq!(err, ApiError::server(404, "Not found"));
    assert_eq!(err.user_message(), "Not found");
}

#[tokio::test]
async fn error_without_message_still_maps_to_server_error() {
    let router = Router::new().route(
        "/api/user/{username}",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "oops") }),
    );
    let service = serve(router).await;

    let err = service.fetch_user("sharma").await.unwrap_err();

    assert_eq!(
        err,
        ApiError::Server {
            status: 500,
            message: None
        }
    );
}

#[tokio::test]
async fn success_with_wrong_shape_is_malformed() {
    let router = Router::new().route(
        "/api/user/{username}",
        get(|| async { Json(json!({ "username": "sharma" })) }),
    );
    let service = serve(router).await;

    let err = service.fetch_user("sharma").await.unwrap_err();

    assert!(matches!(
        err,
        ApiError::MalformedResponse { status: 200, .. }
    ));
}

#[tokio::test]
async fn update_sends_legacy_wire_body() {
    let seen: Arc<Mutex<Option<(String, Value)>>> = Arc::default();
    let router = Router::new()
        .route(
            "/api/user/updateUser/{username}",
            put(
                |State(seen): State<Arc<Mutex<Option<(String, Value)>>>>,
                 Path(username): Path<String>,
                 Json(body): Json<Value>| async move {
                    *seen.lock().unwrap() = Some((username, body));
                    Json(json!({ "message": "Record Updated...!" }))
                },
            ),
        )
        .with_state(seen.clone());
    let service = serve(router).await;

    let response = service.update_user("sharma", &request()).await.unwrap();

    assert_eq!(response.message.as_deref(), Some("Record Updated...!"));
    let (username, body) = seen.lock().unwrap().clone().unwrap();
    assert_eq!(username, "sharma");
    assert_eq!(
        body,
        json!({
            "email": "ravi@example.com",
            "firstName": "Ravi",
            "lastName": "Sharma",
            "address": "221B Baker Street"
        })
    );
}

#[tokio::test]
async fn update_failure_surfaces_message() {
    let router = Router::new().route(
        "/api/user/updateUser/{username}",
        put(|| async {
            (
                StatusCode::BAD_REQUEST,
                Json(json!({ "message": "Email already in use" })),
            )
        }),
    );
    let service = serve(router).await;

    let err = service.update_user("sharma", &request()).await.unwrap_err();

    assert_eq!(err.user_message(), "Email already in use");
    assert_eq!(err.status(), Some(400));
}

#[tokio::test]
async fn usernames_are_percent_encoded_in_the_path() {
    let router = Router::new().route(
        "/api/user/{username}",
        get(|Path(username): Path<String>| async move {
            Json(json!({ "user": { "username": username, "email": "x@y.io" } }))
        }),
    );
    let service = serve(router).await;

    let user = service.fetch_user("ravi sharma/2").await.unwrap();

    assert_eq!(user.username, "ravi sharma/2");
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    // bind then drop to get a port nobody listens on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ApiClient::new(format!("http://{addr}")).unwrap();
    let service = UserProfileApiAdapter::new(Arc::new(client));

    let err = service.fetch_user("sharma").await.unwrap_err();

    assert!(matches!(err, ApiError::Transport(_)));
    assert!(err.user_message().starts_with("Could not reach server"));
}
