mod common;

use axum::extract::Multipart;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use common::{seeded_context, spawn_mock_api, test_context, HitCounter};
use recruitment_client::models::resume::ResumeFile;
use recruitment_client::models::user::Role;
use recruitment_client::storage::{Storage, ACCESS_TOKEN_KEY, USER_KEY};

fn auth_router() -> Router {
    Router::new()
        .route(
            "/api/auth/login",
            post(|Json(body): Json<Value>| async move {
                if body["email"] == "e@mail.ru" && body["password"] == "123" {
                    Json(json!({
                        "access_token": "t1",
                        "token_type": "bearer",
                        "user_id": 1,
                        "role": "hr"
                    }))
                    .into_response()
                } else {
                    (
                        axum::http::StatusCode::UNAUTHORIZED,
                        Json(json!({"detail": "Invalid credentials"})),
                    )
                        .into_response()
                }
            }),
        )
        .route(
            "/api/auth/register",
            post(|mut multipart: Multipart| async move {
                let mut email = String::new();
                let mut role = String::new();
                let mut cv_name = None;
                while let Some(field) = multipart.next_field().await.unwrap() {
                    let name = field.name().unwrap_or_default().to_string();
                    match name.as_str() {
                        "email" => email = field.text().await.unwrap(),
                        "role" => role = field.text().await.unwrap(),
                        "cv" => cv_name = field.file_name().map(|s| s.to_string()),
                        _ => {
                            let _ = field.bytes().await;
                        }
                    }
                }
                assert_eq!(role, "applicant");
                assert_eq!(cv_name.as_deref(), Some("cv.pdf"));
                Json(json!({
                    "access_token": "t2",
                    "token_type": "bearer",
                    "user_id": 7,
                    "role": role,
                    "email": email
                }))
            }),
        )
}

#[tokio::test]
async fn login_persists_token_and_derived_user() {
    let addr = spawn_mock_api(auth_router()).await;
    let ctx = test_context(addr);

    let result = ctx.app.store.login("e@mail.ru", "123").await;
    assert!(result.success, "login failed: {:?}", result.error);

    let user = result.data.unwrap();
    assert_eq!(user.id, 1);
    assert_eq!(user.email, "e@mail.ru");
    assert_eq!(user.role, Role::Hr);
    assert_eq!(user.name, "e");

    assert_eq!(ctx.storage.get(ACCESS_TOKEN_KEY), Some("t1".to_string()));
    let persisted: Value = serde_json::from_str(&ctx.storage.get(USER_KEY).unwrap()).unwrap();
    assert_eq!(persisted["name"], "e");
    assert_eq!(ctx.app.store.current_user().unwrap().id, 1);
}

#[tokio::test]
async fn login_failure_surfaces_server_detail() {
    let addr = spawn_mock_api(auth_router()).await;
    let ctx = test_context(addr);

    let result = ctx.app.store.login("e@mail.ru", "wrong").await;
    assert!(!result.success);
    assert_eq!(result.error.as_deref(), Some("Invalid credentials"));
    assert!(ctx.app.store.current_user().is_none());
    assert_eq!(ctx.storage.get(ACCESS_TOKEN_KEY), None);
}

#[tokio::test]
async fn login_rejects_malformed_email_without_network() {
    let counter = HitCounter::new();
    let hits = counter.clone();
    let router = Router::new().fallback(move || {
        hits.hit();
        async { axum::http::StatusCode::INTERNAL_SERVER_ERROR }
    });
    let addr = spawn_mock_api(router).await;
    let ctx = test_context(addr);

    let result = ctx.app.store.login("not-an-email", "123").await;
    assert!(!result.success);
    assert_eq!(counter.count(), 0);
}

#[tokio::test]
async fn register_applicant_sends_multipart_and_opens_session() {
    let addr = spawn_mock_api(auth_router()).await;
    let ctx = test_context(addr);

    let resume = ResumeFile::new("cv.pdf", "application/pdf", &b"%PDF-1.4 resume"[..]);
    let result = ctx
        .app
        .store
        .register("a@mail.ru", "123", Some(resume), Role::Applicant)
        .await;
    assert!(result.success, "register failed: {:?}", result.error);

    let user = result.data.unwrap();
    assert_eq!(user.id, 7);
    assert_eq!(user.role, Role::Applicant);
    assert_eq!(user.name, "a");
    assert_eq!(ctx.storage.get(ACCESS_TOKEN_KEY), Some("t2".to_string()));
}

#[tokio::test]
async fn register_applicant_without_resume_never_hits_network() {
    let counter = HitCounter::new();
    let hits = counter.clone();
    let router = Router::new().fallback(move || {
        hits.hit();
        async { axum::http::StatusCode::INTERNAL_SERVER_ERROR }
    });
    let addr = spawn_mock_api(router).await;
    let ctx = test_context(addr);

    let result = ctx
        .app
        .store
        .register("a@mail.ru", "123", None, Role::Applicant)
        .await;
    assert!(!result.success);
    assert_eq!(result.error.as_deref(), Some("Please attach a resume"));

    let oversized = ResumeFile::new("cv.pdf", "application/pdf", vec![0u8; 5 * 1024 * 1024 + 1]);
    let result = ctx
        .app
        .store
        .register("a@mail.ru", "123", Some(oversized), Role::Applicant)
        .await;
    assert!(!result.success);

    let wrong_type = ResumeFile::new("cv.exe", "application/octet-stream", &b"MZ"[..]);
    let result = ctx
        .app
        .store
        .register("a@mail.ru", "123", Some(wrong_type), Role::Applicant)
        .await;
    assert!(!result.success);

    assert_eq!(counter.count(), 0);
}

#[tokio::test]
async fn logout_clears_durable_session() {
    let addr = spawn_mock_api(auth_router()).await;
    let ctx = test_context(addr);

    let result = ctx.app.store.login("e@mail.ru", "123").await;
    assert!(result.success);

    ctx.app.store.logout();
    assert_eq!(ctx.storage.get(ACCESS_TOKEN_KEY), None);
    assert_eq!(ctx.storage.get(USER_KEY), None);
    assert!(ctx.app.store.current_user().is_none());
}

#[tokio::test]
async fn expired_token_401_clears_token_and_navigates_once() {
    let router = Router::new().route(
        "/api/hr/vacancies",
        get(|| async {
            (
                axum::http::StatusCode::UNAUTHORIZED,
                Json(json!({"detail": "Not authenticated"})),
            )
        }),
    );
    let addr = spawn_mock_api(router).await;
    let ctx = seeded_context(addr, Role::Hr, "stale-token");

    let result = ctx.app.store.fetch_vacancies().await;
    assert!(!result.success);
    assert_eq!(ctx.storage.get(ACCESS_TOKEN_KEY), None);
    assert_eq!(ctx.navigator.history(), vec!["/login".to_string()]);
}
