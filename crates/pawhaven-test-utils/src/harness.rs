// SPDX-FileCopyrightText: 2026 Pawhaven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test harness: full gateway stack over a temp SQLite database.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use pawhaven_auth::TokenSigner;
use pawhaven_core::{PawhavenError, Role};
use pawhaven_gateway::AppState;
use pawhaven_gateway::server::build_router;
use pawhaven_storage::models::Pet;
use pawhaven_storage::queries::{pets, users};
use pawhaven_storage::Database;
use tower::util::ServiceExt;

/// Secret used by every harness; tests never verify against production keys.
const TEST_SECRET: &str = "pawhaven-test-secret";

/// A fully wired gateway over an isolated temp database.
pub struct TestHarness {
    /// Direct storage access for seeding and assertions.
    pub db: Arc<Database>,
    /// The signer backing the gateway, for minting tokens directly.
    pub signer: Arc<TokenSigner>,
    router: Router,
    _tmp: tempfile::TempDir,
}

impl TestHarness {
    /// Build a fresh stack: temp database, signer, router.
    pub async fn new() -> Result<Self, PawhavenError> {
        let tmp = tempfile::TempDir::new()
            .map_err(|e| PawhavenError::Internal(format!("tempdir failed: {e}")))?;
        let db_path = tmp.path().join("e2e.db");
        let db = Arc::new(
            Database::open(db_path.to_str().ok_or_else(|| {
                PawhavenError::Internal("temp path is not valid UTF-8".to_string())
            })?)
            .await?,
        );
        let signer = Arc::new(TokenSigner::new(TEST_SECRET, chrono::Duration::days(7)));
        let state = AppState {
            db: Arc::clone(&db),
            signer: Arc::clone(&signer),
        };
        Ok(Self {
            db,
            signer,
            router: build_router(state, 16),
            _tmp: tmp,
        })
    }

    /// Issue an HTTP request against the router; returns status and parsed
    /// JSON body (`Value::Null` for empty bodies).
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        token: Option<&str>,
        body: Option<serde_json::Value>,
    ) -> (StatusCode, serde_json::Value) {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .expect("request builds"),
            None => builder.body(Body::empty()).expect("request builds"),
        };

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads");
        let json = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
        };
        (status, json)
    }

    /// Register a customer through the API; returns (token, user_id).
    pub async fn register_user(&self, email: &str, full_name: &str) -> (String, String) {
        let (status, body) = self
            .request(
                "POST",
                "/api/auth/register",
                None,
                Some(serde_json::json!({
                    "email": email,
                    "password": "correct horse",
                    "full_name": full_name,
                })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "registration failed: {body}");
        let token = body["token"].as_str().expect("token present").to_string();
        let user_id = body["user"]["id"].as_str().expect("id present").to_string();
        (token, user_id)
    }

    /// Seed an admin account directly in storage; returns (token, user_id).
    pub async fn seed_admin(&self, email: &str, full_name: &str) -> (String, String) {
        let user = users::create_user(
            &self.db,
            users::NewUser {
                email: email.to_string(),
                password_hash: "seeded-admin-hash".to_string(),
                full_name: full_name.to_string(),
                phone: None,
                address: None,
            },
        )
        .await
        .expect("admin seeds");
        users::set_role(&self.db, &user.id, "admin")
            .await
            .expect("role updates");
        let token = self
            .signer
            .issue(&user.id, &user.email, &user.full_name, Role::Admin)
            .expect("token issues");
        (token, user.id)
    }

    /// Seed an available pet directly in storage.
    pub async fn seed_pet(&self, name: &str) -> Pet {
        pets::create_pet(
            &self.db,
            pets::NewPet {
                name: name.to_string(),
                species: "dog".to_string(),
                breed: Some("mixed".to_string()),
                age: 3,
                gender: "female".to_string(),
                price: 120.0,
                description: "A very good dog.".to_string(),
                image_url: None,
                location: None,
                medical_history: None,
                personality_traits: None,
                category: "dogs".to_string(),
            },
        )
        .await
        .expect("pet seeds")
    }
}
