//! End-to-end home-page flow against an in-process mock API: fetch the
//! project list, broadcast the hero frame, submit the contact form.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};

use client::ApiClient;
use common::TokenStore;
use site::{hero_channel, HomePage, SubmitStatus};

async fn serve(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn client_for(addr: SocketAddr) -> ApiClient {
    let cfg = configs::ApiConfig {
        base_url: format!("http://{addr}/api/v1"),
        timeout_secs: 5,
    };
    ApiClient::new(&cfg, Arc::new(TokenStore::in_memory())).unwrap()
}

fn mock_api() -> Router {
    Router::new()
        .route(
            "/api/v1/projects",
            get(|| async {
                Json(serde_json::json!({
                    "content": [
                        {
                            "id": 1,
                            "code": "JVC-001",
                            "name": "Lakeview Residency",
                            "city": "Chennai",
                            "projectStatus": "UNDER_CONSTRUCTION",
                            "heroImageUrl": "https://cdn.example.com/jvc-001/hero.jpg",
                            "updatedAt": "2025-02-11T08:00:00Z"
                        },
                        {
                            "id": 2,
                            "code": "JVC-002",
                            "name": "Marina Heights",
                            "city": "Madurai",
                            "projectStatus": "COMPLETED",
                            "updatedAt": "2025-01-20T12:30:00Z"
                        }
                    ],
                    "pageable": {"pageNumber": 0, "pageSize": 20, "sort": {"sorted": false}},
                    "totalElements": 2,
                    "totalPages": 1,
                    "first": true,
                    "last": true
                }))
            }),
        )
        .route(
            "/api/v1/enquiries",
            post(|Json(body): Json<serde_json::Value>| async move {
                (
                    StatusCode::CREATED,
                    Json(serde_json::json!({
                        "id": 7,
                        "projectCode": body["projectCode"],
                        "name": body["name"],
                        "email": body["email"],
                        "phone": body["phone"],
                        "message": body["message"],
                        "status": "NEW",
                        "createdAt": "2025-03-01T10:15:30Z"
                    })),
                )
            }),
        )
}

#[tokio::test]
async fn load_broadcasts_the_first_hero_frame() {
    let addr = serve(mock_api()).await;
    let client = client_for(addr);

    let (hero_tx, hero_rx) = hero_channel();
    let mut page = HomePage::new(hero_tx);
    page.load(&client).await;

    assert!(!page.loading);
    assert!(page.load_error.is_none());
    assert_eq!(page.projects().len(), 2);

    let frame = hero_rx.borrow().clone();
    assert_eq!(frame.index, 0);
    assert_eq!(frame.image_url.as_deref(), Some("https://cdn.example.com/jvc-001/hero.jpg"));
}

#[tokio::test]
async fn submitting_the_form_resets_it_to_empty() {
    let addr = serve(mock_api()).await;
    let client = client_for(addr);

    let (hero_tx, _hero_rx) = hero_channel();
    let mut page = HomePage::new(hero_tx);

    page.form.name = "A".into();
    page.form.email = "a@b.com".into();
    page.form.phone = "123".into();
    page.form.message = "hi".into();

    let created = page.submit_enquiry(&client).await.unwrap();
    assert_eq!(created.id, 7);
    assert_eq!(created.name, "A");
    assert_eq!(created.status, "NEW");

    assert_eq!(page.form.status, SubmitStatus::Success);
    assert!(!page.form.submitting);
    assert!(page.form.name.is_empty());
    assert!(page.form.email.is_empty());
    assert!(page.form.phone.is_empty());
    assert!(page.form.message.is_empty());
    assert!(page.form.project_code.is_empty());
}

#[tokio::test]
async fn failed_load_keeps_the_page_interactive() {
    let app = Router::new().route(
        "/api/v1/projects",
        get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let addr = serve(app).await;
    let client = client_for(addr);

    let (hero_tx, hero_rx) = hero_channel();
    let mut page = HomePage::new(hero_tx);
    page.load(&client).await;

    assert!(!page.loading);
    let err = page.load_error.as_ref().unwrap();
    assert_eq!(err.status, 500);
    assert!(page.projects().is_empty());
    assert_eq!(hero_rx.borrow().image_url, None);
}

#[tokio::test]
async fn failed_submit_keeps_the_form_contents() {
    let app = Router::new().route(
        "/api/v1/enquiries",
        post(|| async {
            (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({
                    "error": "Bad Request",
                    "message": "email is invalid"
                })),
            )
        }),
    );
    let addr = serve(app).await;
    let client = client_for(addr);

    let (hero_tx, _hero_rx) = hero_channel();
    let mut page = HomePage::new(hero_tx);
    page.form.name = "A".into();
    page.form.email = "not-an-email".into();

    let err = page.submit_enquiry(&client).await.unwrap_err();
    assert_eq!(err.message, "email is invalid");
    assert_eq!(page.form.status, SubmitStatus::Error);
    assert_eq!(page.form.name, "A");
    assert_eq!(page.form.email, "not-an-email");
}
