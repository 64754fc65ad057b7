//! Integration tests for the HTTP API.
//!
//! These tests drive the full router (public forms, admin gate, review
//! endpoints) over the in-memory adapters:
//! 1. Public submissions validate and persist
//! 2. Admin routes refuse requests without a valid session
//! 3. The review workflow updates stats and exports CSV

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, HeaderMap, Method, Request, StatusCode};
use axum::Router;
use secrecy::SecretString;
use serde_json::{json, Value};
use tower::ServiceExt;

use cloudsdew::adapters::auth::JwtAdminAuthenticator;
use cloudsdew::adapters::http::{app_router, AppState};
use cloudsdew::adapters::memory::{
    InMemoryContactMessageRepository, InMemoryNewsletterRepository,
    InMemoryRegistrationRepository,
};
use cloudsdew::config::ServerConfig;
use cloudsdew::domain::registration::TransitionPolicy;

// =============================================================================
// Test Infrastructure
// =============================================================================

const ADMIN_PASSWORD: &str = "let-me-review";
const TOKEN_SECRET: &str = "0123456789abcdef0123456789abcdef";

struct TestApp {
    router: Router,
    registrations: Arc<InMemoryRegistrationRepository>,
    contact_messages: Arc<InMemoryContactMessageRepository>,
    newsletter: Arc<InMemoryNewsletterRepository>,
}

impl TestApp {
    fn new(policy: TransitionPolicy) -> Self {
        let registrations = Arc::new(InMemoryRegistrationRepository::new());
        let contact_messages = Arc::new(InMemoryContactMessageRepository::new());
        let newsletter = Arc::new(InMemoryNewsletterRepository::new());
        let state = AppState {
            registrations: registrations.clone(),
            contact_messages: contact_messages.clone(),
            newsletter: newsletter.clone(),
            authenticator: Arc::new(JwtAdminAuthenticator::new(
                &SecretString::new(ADMIN_PASSWORD.to_string()),
                &SecretString::new(TOKEN_SECRET.to_string()),
                3600,
            )),
            transition_policy: policy,
        };
        Self {
            router: app_router(state, &ServerConfig::default()),
            registrations,
            contact_messages,
            newsletter,
        }
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Vec<u8>, HeaderMap) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec(), headers)
    }

    async fn json(&self, request: Request<Body>) -> (StatusCode, Value) {
        let (status, body, _) = self.send(request).await;
        let value = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body).unwrap()
        };
        (status, value)
    }

    async fn login(&self) -> String {
        let (status, body) = self
            .json(post_json(
                "/api/admin/login",
                json!({ "password": ADMIN_PASSWORD }),
            ))
            .await;
        assert_eq!(status, StatusCode::OK);
        body["token"].as_str().unwrap().to_string()
    }

    async fn register(&self, email: &str, program: &str) -> (StatusCode, Value) {
        self.json(post_json("/api/register", registration_body(email, program)))
            .await
    }
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn admin_request(method: Method, uri: &str, token: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"));
    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

fn registration_body(email: &str, program: &str) -> Value {
    json!({
        "firstName": "Ada",
        "lastName": "Lovelace",
        "email": email,
        "phone": "+44 20 7946 0000",
        "currentRole": "Analyst",
        "experienceLevel": "intermediate",
        "programType": program,
        "schedulePreference": "evenings",
        "goalsExpectations": "Learn to ship",
        "termsAccepted": true,
        "status": "approved"
    })
}

// =============================================================================
// Public forms
// =============================================================================

#[tokio::test]
async fn registration_is_stored_as_pending() {
    let app = TestApp::new(TransitionPolicy::Open);

    let (status, body) = app.register("a@x.com", "mentorship").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(
        body["message"],
        json!("Registration successful! We will contact you soon.")
    );
    assert_eq!(body["data"]["status"], json!("pending"));
    assert_eq!(body["data"]["created_at"], body["data"]["updated_at"]);
    assert_eq!(body["data"]["current_role_title"], json!("Analyst"));
    assert_eq!(app.registrations.len().await, 1);
}

#[tokio::test]
async fn duplicate_email_is_rejected_without_a_new_record() {
    let app = TestApp::new(TransitionPolicy::Open);
    app.register("a@x.com", "mentorship").await;

    let (status, body) = app.register("a@x.com", "bootcamp").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("Email already registered"));
    assert_eq!(body["code"], json!("DUPLICATE_EMAIL"));
    assert_eq!(app.registrations.len().await, 1);
}

#[tokio::test]
async fn invalid_registration_reports_each_field() {
    let app = TestApp::new(TransitionPolicy::Open);
    let mut payload = registration_body("ada.example.com", "mentorship");
    payload["firstName"] = json!("");
    payload["termsAccepted"] = json!(false);

    let (status, body) = app.json(post_json("/api/register", payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], json!("VALIDATION_FAILED"));
    let fields: Vec<&str> = body["details"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["field"].as_str().unwrap())
        .collect();
    assert!(fields.contains(&"first_name"));
    assert!(fields.contains(&"email"));
    assert!(fields.contains(&"terms_accepted"));
    assert!(app.registrations.is_empty().await);
}

#[tokio::test]
async fn terms_given_as_string_are_not_accepted() {
    let app = TestApp::new(TransitionPolicy::Open);
    let mut payload = registration_body("a@x.com", "bootcamp");
    payload["termsAccepted"] = json!("true");

    let (status, _) = app.json(post_json("/api/register", payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(app.registrations.is_empty().await);
}

#[tokio::test]
async fn non_text_status_is_ignored() {
    let app = TestApp::new(TransitionPolicy::Open);
    let mut payload = registration_body("a@x.com", "bootcamp");
    payload["status"] = json!(5);

    let (status, body) = app.json(post_json("/api/register", payload)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], json!("pending"));
    assert_eq!(app.registrations.len().await, 1);
}

#[tokio::test]
async fn numeric_first_name_is_a_field_error() {
    let app = TestApp::new(TransitionPolicy::Open);
    let mut payload = registration_body("a@x.com", "bootcamp");
    payload["firstName"] = json!(123);

    let (status, body) = app.json(post_json("/api/register", payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], json!("VALIDATION_FAILED"));
    assert_eq!(body["details"][0]["field"], json!("first_name"));
    assert_eq!(body["details"].as_array().unwrap().len(), 1);
    assert!(app.registrations.is_empty().await);
}

#[tokio::test]
async fn malformed_json_is_a_bad_request() {
    let app = TestApp::new(TransitionPolicy::Open);
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/register")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let (status, body) = app.json(request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], json!("BAD_REQUEST"));
}

#[tokio::test]
async fn contact_message_is_stored_unread() {
    let app = TestApp::new(TransitionPolicy::Open);

    let (status, body) = app
        .json(post_json(
            "/api/contact",
            json!({
                "name": "Grace",
                "email": "grace@example.com",
                "subject": "Cohorts",
                "message": "When does the next bootcamp start?"
            }),
        ))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["message"],
        json!("Message sent successfully! We will get back to you soon.")
    );
    assert_eq!(body["data"]["is_read"], json!(false));
    assert_eq!(app.contact_messages.messages().await.len(), 1);
}

#[tokio::test]
async fn contact_message_requires_message_text() {
    let app = TestApp::new(TransitionPolicy::Open);

    let (status, body) = app
        .json(post_json(
            "/api/contact",
            json!({ "name": "Grace", "email": "grace@example.com" }),
        ))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"][0]["field"], json!("message"));
}

#[tokio::test]
async fn newsletter_email_must_be_text() {
    let app = TestApp::new(TransitionPolicy::Open);

    let (status, body) = app
        .json(post_json("/api/newsletter", json!({ "email": true })))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], json!("VALIDATION_FAILED"));
    assert_eq!(body["details"][0]["field"], json!("email"));
}

#[tokio::test]
async fn newsletter_resubscribe_keeps_one_active_row() {
    let app = TestApp::new(TransitionPolicy::Open);

    for _ in 0..2 {
        let (status, body) = app
            .json(post_json(
                "/api/newsletter",
                json!({ "email": "reader@example.com" }),
            ))
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], json!("Successfully subscribed to newsletter!"));
        assert_eq!(body["data"]["is_active"], json!(true));
    }

    assert_eq!(app.newsletter.len().await, 1);
}

// =============================================================================
// Admin gate
// =============================================================================

#[tokio::test]
async fn admin_routes_require_a_token() {
    let app = TestApp::new(TransitionPolicy::Open);

    for uri in [
        "/api/admin/stats",
        "/api/admin/registrations",
        "/api/admin/registrations/export",
    ] {
        let request = Request::get(uri).body(Body::empty()).unwrap();
        let (status, _) = app.json(request).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{uri}");
    }
}

#[tokio::test]
async fn forged_token_is_rejected() {
    let app = TestApp::new(TransitionPolicy::Open);

    let (status, body) = app
        .json(admin_request(
            Method::GET,
            "/api/admin/stats",
            "not.a.token",
            None,
        ))
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], json!("UNAUTHORIZED"));
}

#[tokio::test]
async fn wrong_password_does_not_log_in() {
    let app = TestApp::new(TransitionPolicy::Open);

    let (status, body) = app
        .json(post_json("/api/admin/login", json!({ "password": "guess" })))
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body.get("token").is_none());
}

// =============================================================================
// Review workflow
// =============================================================================

#[tokio::test]
async fn approving_decrements_pending_count() {
    let app = TestApp::new(TransitionPolicy::Open);
    let (_, created) = app.register("a@x.com", "mentorship").await;
    app.register("b@x.com", "bootcamp").await;
    let id = created["data"]["id"].as_str().unwrap().to_string();
    let token = app.login().await;

    let (_, before) = app
        .json(admin_request(Method::GET, "/api/admin/stats", &token, None))
        .await;
    assert_eq!(before["totalRegistrations"], json!(2));
    assert_eq!(before["pendingRegistrations"], json!(2));
    assert_eq!(before["mentorshipRegistrations"], json!(1));
    assert_eq!(before["bootcampRegistrations"], json!(1));

    let (status, updated) = app
        .json(admin_request(
            Method::PUT,
            "/api/admin/registrations",
            &token,
            Some(json!({ "id": id, "status": "approved" })),
        ))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], json!("approved"));

    let (_, after) = app
        .json(admin_request(Method::GET, "/api/admin/stats", &token, None))
        .await;
    assert_eq!(after["pendingRegistrations"], json!(1));
    assert_eq!(after["totalRegistrations"], json!(2));
}

#[tokio::test]
async fn list_is_newest_first() {
    let app = TestApp::new(TransitionPolicy::Open);
    app.register("first@x.com", "mentorship").await;
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    app.register("second@x.com", "mentorship").await;
    let token = app.login().await;

    let (status, body) = app
        .json(admin_request(
            Method::GET,
            "/api/admin/registrations",
            &token,
            None,
        ))
        .await;

    assert_eq!(status, StatusCode::OK);
    let emails: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["email"].as_str().unwrap())
        .collect();
    assert_eq!(emails, vec!["second@x.com", "first@x.com"]);
}

#[tokio::test]
async fn updating_unknown_registration_is_not_found() {
    let app = TestApp::new(TransitionPolicy::Open);
    let token = app.login().await;

    let (status, body) = app
        .json(admin_request(
            Method::PUT,
            "/api/admin/registrations",
            &token,
            Some(json!({
                "id": "7f1c7c3e-3b0e-4c63-9b53-0c4f6e0a2d11",
                "status": "approved"
            })),
        ))
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], json!("REGISTRATION_NOT_FOUND"));
}

#[tokio::test]
async fn updating_with_unknown_status_is_a_validation_error() {
    let app = TestApp::new(TransitionPolicy::Open);
    let (_, created) = app.register("a@x.com", "mentorship").await;
    let token = app.login().await;

    let (status, body) = app
        .json(admin_request(
            Method::PUT,
            "/api/admin/registrations",
            &token,
            Some(json!({ "id": created["data"]["id"], "status": "archived" })),
        ))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"][0]["field"], json!("status"));
}

#[tokio::test]
async fn guarded_policy_keeps_completed_terminal() {
    let app = TestApp::new(TransitionPolicy::Guarded);
    let (_, created) = app.register("a@x.com", "bootcamp").await;
    let id = created["data"]["id"].clone();
    let token = app.login().await;

    let (status, _) = app
        .json(admin_request(
            Method::PUT,
            "/api/admin/registrations",
            &token,
            Some(json!({ "id": id, "status": "completed" })),
        ))
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app
        .json(admin_request(
            Method::PUT,
            "/api/admin/registrations",
            &token,
            Some(json!({ "id": id, "status": "pending" })),
        ))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], json!("INVALID_STATE_TRANSITION"));
}

#[tokio::test]
async fn export_returns_filtered_csv_attachment() {
    let app = TestApp::new(TransitionPolicy::Open);
    app.register("m1@x.com", "mentorship").await;
    app.register("m2@x.com", "mentorship").await;
    app.register("b1@x.com", "bootcamp").await;
    let token = app.login().await;

    let (status, body, headers) = app
        .send(admin_request(
            Method::GET,
            "/api/admin/registrations/export?program=mentorship&status=all",
            &token,
            None,
        ))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        headers.get(header::CONTENT_TYPE).unwrap(),
        "text/csv; charset=utf-8"
    );
    assert_eq!(
        headers.get(header::CONTENT_DISPOSITION).unwrap(),
        "attachment; filename=\"registrations.csv\""
    );

    let csv = String::from_utf8(body).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("id,first_name,last_name,email"));
    assert!(lines[1..].iter().all(|l| l.contains("\"mentorship\"")));
}

#[tokio::test]
async fn export_rejects_unknown_program() {
    let app = TestApp::new(TransitionPolicy::Open);
    let token = app.login().await;

    let (status, _) = app
        .json(admin_request(
            Method::GET,
            "/api/admin/registrations/export?program=degree",
            &token,
            None,
        ))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}
