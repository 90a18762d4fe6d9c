//! Shared test helpers for integration tests.
//!
//! These tests need a PostgreSQL database reachable through `DATABASE_URL`.
//! Every test creates its own fixture rows, so tests can share one database
//! and run in parallel.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use campus_api::{AppState, build_router};
use campus_auth::jwt::JwtEncoder;
use campus_core::config::AppConfig;
use campus_core::types::id::{LessonId, ResourceId, ResourceTypeId, UserId};
use campus_database::DatabasePool;
use campus_database::migration::run_migrations;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Database pool for fixtures and direct assertions
    pub db: DatabasePool,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Connect, migrate, and build the router.
    pub async fn new() -> Self {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        let config = AppConfig::from_toml(&format!(
            r#"
            [database]
            url = "{url}"
            max_connections = 30
            min_connections = 0

            [auth]
            jwt_secret = "integration-test-secret"
            "#
        ))
        .expect("Failed to build test config");

        let db = DatabasePool::connect(&config.database)
            .await
            .expect("Failed to connect to test database");

        run_migrations(db.pool())
            .await
            .expect("Failed to run migrations");

        let router = build_router(AppState::new(config.clone(), db.clone()));

        Self {
            router,
            db,
            config,
        }
    }

    pub fn pool(&self) -> &PgPool {
        self.db.pool()
    }

    /// Insert a user with the given profile name.
    pub async fn create_user(&self, profile: &str) -> UserId {
        let id: i32 = sqlx::query_scalar(
            r#"INSERT INTO users (email, name, birth_date, gender, profile_id)
               SELECT $1, 'Test User', DATE '1980-01-01', 'n/a', p.id
               FROM profiles p WHERE p.name = $2
               RETURNING id"#,
        )
        .bind(format!("{}@campus.test", Uuid::new_v4()))
        .bind(profile)
        .fetch_one(self.pool())
        .await
        .expect("Failed to create test user");

        UserId::new(id)
    }

    /// Create a user and return a bearer token for them.
    pub async fn token_for(&self, profile: &str) -> String {
        let user_id = self.create_user(profile).await;
        JwtEncoder::new(&self.config.auth)
            .generate_access_token(user_id)
            .expect("Failed to sign token")
            .token
    }

    pub async fn create_resource_type(&self) -> ResourceTypeId {
        let id: i32 =
            sqlx::query_scalar("INSERT INTO resource_types (name) VALUES ($1) RETURNING id")
                .bind(format!("Type {}", Uuid::new_v4()))
                .fetch_one(self.pool())
                .await
                .expect("Failed to create resource type");
        ResourceTypeId::new(id)
    }

    /// Insert a resource with the given status.
    pub async fn create_resource(&self, status: &str) -> ResourceId {
        let type_id = self.create_resource_type().await;
        let id: i32 = sqlx::query_scalar(
            r#"INSERT INTO resources (description, status, resource_type_id)
               VALUES ('Projector', $1::resource_status, $2)
               RETURNING id"#,
        )
        .bind(status)
        .bind(type_id)
        .fetch_one(self.pool())
        .await
        .expect("Failed to create resource");
        ResourceId::new(id)
    }

    /// Insert a lesson along with the building, room, discipline and class
    /// it hangs off.
    pub async fn create_lesson(&self) -> LessonId {
        let professor = self.create_user("professor").await;
        let building_number = (Uuid::new_v4().as_u128() % 1_000_000_000) as i32;

        let id: i32 = sqlx::query_scalar(
            r#"WITH b AS (
                   INSERT INTO buildings (name, building_number, street, number, neighborhood, city, state, postal_code)
                   VALUES ('Main', $1, 'Street', '1', 'Center', 'City', 'SP', '00000-000')
                   RETURNING id
               ), r AS (
                   INSERT INTO rooms (room_number, capacity, floor, building_id)
                   SELECT 101, 40, '1', id FROM b
                   RETURNING id
               ), d AS (
                   INSERT INTO disciplines (name, credits, program, bibliography)
                   VALUES ('Algorithms', 4, 'Program', 'Bibliography')
                   RETURNING id
               ), c AS (
                   INSERT INTO classes (semester, schedule, vacancies, discipline_id, professor_id)
                   SELECT '2025.1', 'MON 08:00', 40, id, $2 FROM d
                   RETURNING id, discipline_id
               )
               INSERT INTO lessons (date, class_id, room_id, discipline_id)
               SELECT CURRENT_DATE, c.id, r.id, c.discipline_id FROM c, r
               RETURNING id"#,
        )
        .bind(building_number)
        .bind(professor)
        .fetch_one(self.pool())
        .await
        .expect("Failed to create lesson");

        LessonId::new(id)
    }

    pub async fn resource_status(&self, id: ResourceId) -> String {
        sqlx::query_scalar("SELECT status::text FROM resources WHERE id = $1")
            .bind(id)
            .fetch_one(self.pool())
            .await
            .expect("Failed to read resource status")
    }

    pub async fn reservations_for(&self, id: ResourceId) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM reservations WHERE resource_id = $1")
            .bind(id)
            .fetch_one(self.pool())
            .await
            .expect("Failed to count reservations")
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}
