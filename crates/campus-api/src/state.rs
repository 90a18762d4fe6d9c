//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use campus_auth::identity::{DbIdentityResolver, IdentityResolver};
use campus_auth::jwt::JwtDecoder;
use campus_auth::rbac::RbacEnforcer;
use campus_core::config::AppConfig;
use campus_database::DatabasePool;
use campus_database::repositories::{
    LessonRepository, PgReservationStore, ResourceRepository, ResourceTypeRepository,
    UserRepository,
};
use campus_service::{
    LessonService, ReservationService, ResourceService, ResourceTypeService,
};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    pub db: DatabasePool,

    // ── Auth ─────────────────────────────────────────────────
    pub jwt_decoder: Arc<JwtDecoder>,
    pub identity: Arc<dyn IdentityResolver>,
    pub rbac: Arc<RbacEnforcer>,

    // ── Services ─────────────────────────────────────────────
    pub reservation_service: Arc<ReservationService<PgReservationStore>>,
    pub resource_service: Arc<ResourceService>,
    pub resource_type_service: Arc<ResourceTypeService>,
    pub lesson_service: Arc<LessonService>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("db", &self.db)
            .finish_non_exhaustive()
    }
}

impl AppState {
    /// Wire repositories, auth, and services over one pool.
    pub fn new(config: AppConfig, db: DatabasePool) -> Self {
        let pool = db.pool().clone();

        let resource_repo = Arc::new(ResourceRepository::new(pool.clone()));
        let type_repo = Arc::new(ResourceTypeRepository::new(pool.clone()));
        let lesson_repo = Arc::new(LessonRepository::new(pool.clone()));
        let store = Arc::new(PgReservationStore::new(pool.clone()));

        Self {
            jwt_decoder: Arc::new(JwtDecoder::new(&config.auth)),
            identity: Arc::new(DbIdentityResolver::new(UserRepository::new(pool))),
            rbac: Arc::new(RbacEnforcer::new()),
            reservation_service: Arc::new(ReservationService::new(store)),
            resource_service: Arc::new(ResourceService::new(
                Arc::clone(&resource_repo),
                Arc::clone(&type_repo),
            )),
            resource_type_service: Arc::new(ResourceTypeService::new(type_repo)),
            lesson_service: Arc::new(LessonService::new(lesson_repo)),
            config: Arc::new(config),
            db,
        }
    }

    /// Replace the identity resolver.
    pub fn with_identity_resolver(mut self, resolver: Arc<dyn IdentityResolver>) -> Self {
        self.identity = resolver;
        self
    }
}
