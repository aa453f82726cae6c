//! Service context - dependency container for services
//!
//! Holds all repositories and other dependencies needed by services.

use std::sync::Arc;

use symposium_common::auth::JwtService;
use symposium_core::traits::{
    ConferenceRepository, PreferenceRepository, SubmissionRepository, TalkRepository,
    UserRepository,
};
use symposium_core::{Snowflake, SnowflakeGenerator};
use symposium_db::PgPool;

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Database repositories
/// - JWT service for token verification
/// - Snowflake generator for ID generation
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: PgPool,

    // Repositories
    user_repo: Arc<dyn UserRepository>,
    conference_repo: Arc<dyn ConferenceRepository>,
    preference_repo: Arc<dyn PreferenceRepository>,
    talk_repo: Arc<dyn TalkRepository>,
    submission_repo: Arc<dyn SubmissionRepository>,

    // Services
    jwt_service: Arc<JwtService>,
    snowflake_generator: Arc<SnowflakeGenerator>,
}

impl ServiceContext {
    // === Database Pool ===

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // === Repositories ===

    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    pub fn conference_repo(&self) -> &dyn ConferenceRepository {
        self.conference_repo.as_ref()
    }

    pub fn preference_repo(&self) -> &dyn PreferenceRepository {
        self.preference_repo.as_ref()
    }

    pub fn talk_repo(&self) -> &dyn TalkRepository {
        self.talk_repo.as_ref()
    }

    pub fn submission_repo(&self) -> &dyn SubmissionRepository {
        self.submission_repo.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Get the snowflake ID generator
    pub fn snowflake_generator(&self) -> &SnowflakeGenerator {
        self.snowflake_generator.as_ref()
    }

    /// Generate a new Snowflake ID
    pub fn generate_id(&self) -> Snowflake {
        self.snowflake_generator.generate()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .field("jwt_service", &self.jwt_service)
            .field("worker_id", &self.snowflake_generator.worker_id())
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    conference_repo: Option<Arc<dyn ConferenceRepository>>,
    preference_repo: Option<Arc<dyn PreferenceRepository>>,
    talk_repo: Option<Arc<dyn TalkRepository>>,
    submission_repo: Option<Arc<dyn SubmissionRepository>>,
    jwt_service: Option<Arc<JwtService>>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
}

fn required<T>(value: Option<T>, name: &str) -> ServiceResult<T> {
    value.ok_or_else(|| ServiceError::validation(format!("{name} is required")))
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn conference_repo(mut self, repo: Arc<dyn ConferenceRepository>) -> Self {
        self.conference_repo = Some(repo);
        self
    }

    pub fn preference_repo(mut self, repo: Arc<dyn PreferenceRepository>) -> Self {
        self.preference_repo = Some(repo);
        self
    }

    pub fn talk_repo(mut self, repo: Arc<dyn TalkRepository>) -> Self {
        self.talk_repo = Some(repo);
        self
    }

    pub fn submission_repo(mut self, repo: Arc<dyn SubmissionRepository>) -> Self {
        self.submission_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext {
            pool: required(self.pool, "pool")?,
            user_repo: required(self.user_repo, "user_repo")?,
            conference_repo: required(self.conference_repo, "conference_repo")?,
            preference_repo: required(self.preference_repo, "preference_repo")?,
            talk_repo: required(self.talk_repo, "talk_repo")?,
            submission_repo: required(self.submission_repo, "submission_repo")?,
            jwt_service: required(self.jwt_service, "jwt_service")?,
            snowflake_generator: required(self.snowflake_generator, "snowflake_generator")?,
        })
    }
}
