// HTTP tests: drive the full router (auth, policy, storage) with oneshot requests
// against an in-memory metrics database.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use serde_json::{Value, json};
use storage::{
    Database,
    models::{Participant, Role},
    roster::Roster,
};
use tower::ServiceExt; // for oneshot
use web::{AppState, create_router, middleware::auth::SessionStore};

const PASSWORD: &str = "@Senha12345";
const ADMIN_ID: i64 = 9;

struct TestApp {
    router: Router,
}

impl TestApp {
    async fn new() -> Self {
        let hash = bcrypt::hash(PASSWORD, 4).unwrap();
        let roster = Roster::from_participants(vec![
            Participant::new(1, "Ana", "ana@example.com", hash.clone(), Role::Director),
            Participant::new(2, "Bruno", "bruno@example.com", hash.clone(), Role::Director),
            Participant::new(3, "Carla", "carla@example.com", hash.clone(), Role::Director),
            Participant::new(ADMIN_ID, "Gabriela", "gabriela@example.com", hash.clone(), Role::Administrator),
            Participant::new(5, "Eva", "eva@example.com", hash, Role::Other),
        ])
        .unwrap();

        let db = Database::in_memory().await.unwrap();
        db.run_migrations().await.unwrap();

        let state = AppState::new(
            db,
            roster,
            SessionStore::with_ttl_hours(24).unwrap(),
            Default::default(),
        );

        Self {
            router: create_router(state),
        }
    }

    async fn request(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        (status, body)
    }

    async fn login(&self, email: &str) -> String {
        let (status, body) = self
            .request(
                "POST",
                "/api/auth/login",
                None,
                Some(json!({ "email": email, "password": PASSWORD })),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "login failed for {}: {}", email, body);
        body["token"].as_str().unwrap().to_string()
    }

    async fn put_own_metrics(&self, token: &str, metrics: Value) -> (StatusCode, Value) {
        self.request("PUT", "/api/metrics", Some(token), Some(metrics))
            .await
    }
}

fn counters(a: i64, v: i64, c: i64) -> Value {
    json!({
        "agendamentos": a,
        "visitasRealizadas": v,
        "contratosAssinados": c
    })
}

#[tokio::test]
async fn test_health_check() {
    let app = TestApp::new().await;

    let (status, body) = app.request("GET", "/health", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_login_returns_token_and_user() {
    let app = TestApp::new().await;

    let (status, body) = app
        .request(
            "POST",
            "/api/auth/login",
            None,
            Some(json!({ "email": " Ana@Example.com ", "password": PASSWORD })),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["token"].is_string());
    assert!(body["expiresAt"].is_string());
    assert_eq!(body["user"]["id"], 1);
    assert_eq!(body["user"]["role"], "director");
    assert!(body["user"].get("passwordHash").is_none());
}

#[tokio::test]
async fn test_login_failures() {
    let app = TestApp::new().await;

    let (status, _) = app
        .request(
            "POST",
            "/api/auth/login",
            None,
            Some(json!({ "email": "ana@example.com", "password": "wrong" })),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = app
        .request(
            "POST",
            "/api/auth/login",
            None,
            Some(json!({ "email": "eva@example.com", "password": PASSWORD })),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = app
        .request(
            "POST",
            "/api/auth/login",
            None,
            Some(json!({ "email": "", "password": "" })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation failed");
}

#[tokio::test]
async fn test_metrics_require_a_session() {
    let app = TestApp::new().await;

    let (status, _) = app.request("GET", "/api/metrics", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = app
        .request("GET", "/api/metrics", Some("not-a-token"), None)
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_own_metrics_round_trip() {
    let app = TestApp::new().await;
    let token = app.login("ana@example.com").await;

    let (status, body) = app.request("GET", "/api/metrics", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["agendamentos"], 0);
    assert!(body["lastUpdate"].is_null());

    let (status, body) = app.put_own_metrics(&token, counters(5, 2, 1)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["participantId"], 1);
    assert!(body["lastUpdate"].is_string());

    let (_, body) = app.request("GET", "/api/metrics", Some(&token), None).await;
    assert_eq!(body["agendamentos"], 5);
    assert_eq!(body["visitasRealizadas"], 2);
    assert_eq!(body["contratosAssinados"], 1);
}

#[tokio::test]
async fn test_lenient_metrics_payload() {
    let app = TestApp::new().await;
    let token = app.login("ana@example.com").await;

    let (status, body) = app
        .put_own_metrics(
            &token,
            json!({ "agendamentos": "7", "visitasRealizadas": "", "contratosAssinados": null }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["agendamentos"], 7);
    assert_eq!(body["visitasRealizadas"], 0);
    assert_eq!(body["contratosAssinados"], 0);
}

#[tokio::test]
async fn test_negative_metrics_are_rejected() {
    let app = TestApp::new().await;
    let token = app.login("ana@example.com").await;
    app.put_own_metrics(&token, counters(3, 3, 3)).await;

    let (status, body) = app.put_own_metrics(&token, counters(-1, 0, 0)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation failed");

    let (_, body) = app.request("GET", "/api/metrics", Some(&token), None).await;
    assert_eq!(body["agendamentos"], 3);
}

#[tokio::test]
async fn test_public_ranking() {
    let app = TestApp::new().await;

    let ana = app.login("ana@example.com").await;
    let bruno = app.login("bruno@example.com").await;
    let admin = app.login("gabriela@example.com").await;
    app.put_own_metrics(&ana, counters(2, 1, 0)).await;
    app.put_own_metrics(&bruno, counters(0, 3, 1)).await;
    // The administrator may keep a record of its own; it is never ranked.
    app.put_own_metrics(&admin, counters(100, 100, 100)).await;

    let (status, body) = app.request("GET", "/api/ranking", None, None).await;
    assert_eq!(status, StatusCode::OK);

    let entries = body.as_array().unwrap();
    let summary: Vec<(i64, i64, i64)> = entries
        .iter()
        .map(|e| {
            (
                e["participant"]["id"].as_i64().unwrap(),
                e["position"].as_i64().unwrap(),
                e["score"]["total"].as_i64().unwrap(),
            )
        })
        .collect();
    assert_eq!(summary, vec![(2, 1, 110), (1, 2, 30), (3, 3, 0)]);

    assert_eq!(entries[0]["score"]["pointsVisits"], 60);
    assert_eq!(entries[0]["score"]["pointsContracts"], 50);
    assert_eq!(entries[0]["visitasRealizadas"], 3);
    assert!(entries[0]["participant"].get("email").is_none());
}

#[tokio::test]
async fn test_admin_routes_reject_directors() {
    let app = TestApp::new().await;
    let token = app.login("ana@example.com").await;

    let (status, _) = app
        .request("GET", "/api/admin/directors", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = app
        .request(
            "PUT",
            "/api/admin/directors/2/metrics",
            Some(&token),
            Some(counters(1, 1, 1)),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = app.request("GET", "/api/admin/directors", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_admin_lists_and_edits_directors() {
    let app = TestApp::new().await;
    let admin = app.login("gabriela@example.com").await;

    let (status, body) = app
        .request(
            "PUT",
            "/api/admin/directors/3/metrics",
            Some(&admin),
            Some(counters(0, 0, 2)),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].is_string());
    assert_eq!(body["metrics"]["contratosAssinados"], 2);

    let (status, body) = app
        .request("GET", "/api/admin/directors", Some(&admin), None)
        .await;
    assert_eq!(status, StatusCode::OK);

    let directors = body.as_array().unwrap();
    let ids: Vec<i64> = directors
        .iter()
        .map(|d| d["participant"]["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(directors[2]["participant"]["email"], "carla@example.com");
    assert_eq!(directors[2]["metrics"]["contratosAssinados"], 2);
    assert_eq!(directors[0]["metrics"]["agendamentos"], 0);

    let carla = app.login("carla@example.com").await;
    let (_, body) = app.request("GET", "/api/metrics", Some(&carla), None).await;
    assert_eq!(body["contratosAssinados"], 2);
}

#[tokio::test]
async fn test_admin_edit_errors() {
    let app = TestApp::new().await;
    let admin = app.login("gabriela@example.com").await;

    let (status, _) = app
        .request(
            "PUT",
            "/api/admin/directors/1/metrics",
            Some(&admin),
            Some(counters(0, -2, 0)),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    for id in [42, ADMIN_ID, 5] {
        let (status, _) = app
            .request(
                "PUT",
                &format!("/api/admin/directors/{}/metrics", id),
                Some(&admin),
                Some(counters(1, 0, 0)),
            )
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND, "id {}", id);
    }
}

#[tokio::test]
async fn test_logout_revokes_session() {
    let app = TestApp::new().await;
    let token = app.login("bruno@example.com").await;

    let (status, _) = app
        .request("POST", "/api/auth/logout", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = app.request("GET", "/api/metrics", Some(&token), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let app = TestApp::new().await;

    let (status, body) = app
        .request("GET", "/api-docs/openapi.json", None, None)
        .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/ranking"].is_object());
    assert!(body["paths"]["/api/admin/directors/{id}/metrics"].is_object());
}
