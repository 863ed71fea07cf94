use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use api_client::ApiClient;
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};

/// Email the stub registration endpoint refuses as a duplicate.
pub const TAKEN_EMAIL: &str = "taken@pubcash.test";
/// Password the stub login accepts.
pub const GOOD_PASSWORD: &str = "correct-horse";
/// Code the stub OTP endpoint accepts.
pub const GOOD_OTP: &str = "123456";
/// Token handed out after a successful OTP check.
pub const ISSUED_TOKEN: &str = "jwt-issued-by-stub";

/// Recorded state of the in-process backend.
#[derive(Default)]
pub struct StubBackend {
    pub maintenance: AtomicBool,
    /// When set, maintenance updates answer with a message only.
    pub legacy_update: AtomicBool,
    calls: Mutex<HashMap<&'static str, usize>>,
    last_authorization: Mutex<Option<String>>,
}

impl StubBackend {
    fn record(&self, name: &'static str, headers: &HeaderMap) {
        if let Ok(mut calls) = self.calls.lock() {
            *calls.entry(name).or_default() += 1;
        }
        let auth = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        if let Ok(mut last) = self.last_authorization.lock() {
            *last = auth;
        }
    }

    /// How many times the named endpoint was hit.
    pub fn calls(&self, name: &str) -> usize {
        self.calls
            .lock()
            .map(|c| c.get(name).copied().unwrap_or(0))
            .unwrap_or(0)
    }

    pub fn last_authorization(&self) -> Option<String> {
        self.last_authorization.lock().ok().and_then(|a| a.clone())
    }
}

type Stub = Arc<StubBackend>;

async fn get_maintenance(State(stub): State<Stub>, headers: HeaderMap) -> Json<Value> {
    stub.record("get_maintenance", &headers);
    Json(json!({ "maintenanceMode": stub.maintenance.load(Ordering::SeqCst) }))
}

async fn put_maintenance(
    State(stub): State<Stub>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    stub.record("put_maintenance", &headers);
    let Some(enabled) = body["maintenanceMode"].as_bool() else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "message": "maintenanceMode must be a boolean" })),
        );
    };
    stub.maintenance.store(enabled, Ordering::SeqCst);

    if stub.legacy_update.load(Ordering::SeqCst) {
        (StatusCode::OK, Json(json!({ "message": "Paramètre mis à jour" })))
    } else {
        (
            StatusCode::OK,
            Json(json!({ "maintenanceMode": enabled, "message": "Paramètre mis à jour" })),
        )
    }
}

async fn register(
    State(stub): State<Stub>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    stub.record("register", &headers);
    if body["email"] == TAKEN_EMAIL {
        return (
            StatusCode::CONFLICT,
            Json(json!({ "message": "Cet email est déjà utilisé" })),
        );
    }
    (
        StatusCode::CREATED,
        Json(json!({ "message": "Compte administrateur créé" })),
    )
}

async fn login(
    State(stub): State<Stub>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    stub.record("login", &headers);
    if body["password"] == GOOD_PASSWORD {
        (
            StatusCode::OK,
            Json(json!({ "otpRequired": true, "message": "Code envoyé par email" })),
        )
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Identifiants invalides" })),
        )
    }
}

async fn verify_otp(
    State(stub): State<Stub>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    stub.record("verify_otp", &headers);
    if body["otp"] == GOOD_OTP && body["email"].is_string() {
        (StatusCode::OK, Json(json!({ "token": ISSUED_TOKEN })))
    } else {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({ "message": "Code OTP invalide ou expiré" })),
        )
    }
}

async fn admin_profile(State(stub): State<Stub>, headers: HeaderMap) -> (StatusCode, Json<Value>) {
    stub.record("admin_profile", &headers);
    let expected = format!("Bearer {ISSUED_TOKEN}");
    match headers.get("authorization").and_then(|v| v.to_str().ok()) {
        Some(value) if value == expected => (
            StatusCode::OK,
            Json(json!({ "prenom": "Awa", "description": "Responsable plateforme" })),
        ),
        _ => (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Token manquant" })),
        ),
    }
}

fn router(stub: Stub) -> Router {
    Router::new()
        .route(
            "/api/settings/maintenance",
            get(get_maintenance).put(put_maintenance),
        )
        .route("/api/auth/admin/register", post(register))
        .route("/api/auth/admin/login", post(login))
        .route("/api/auth/verify-otp", post(verify_otp))
        .route("/api/admin/profile", get(admin_profile))
        .with_state(stub)
}

/// Start the stub backend on an ephemeral port and return a client aimed at it.
pub async fn stub_backend() -> (ApiClient, Stub) {
    let stub = Stub::default();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub backend");
    let addr = listener.local_addr().expect("stub backend address");

    let app = router(stub.clone());
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub backend crashed");
    });

    (ApiClient::new(format!("http://{addr}/api")), stub)
}
