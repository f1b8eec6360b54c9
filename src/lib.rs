//! Guardian Account API
//!
//! Account backend for guardians: signup, login and password recovery,
//! backed by PostgreSQL or in-memory storage.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod factories;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use tracing::{info, warn};

use api::state::AppState;
use config::StorageBackend;
use domain::{EmailService, ErrorLogRepository, GuardianRepository};
use factories::Dependencies;
use infrastructure::{
    crypto::{Argon2Hasher, JwtConfig, JwtService},
    error_log::{InMemoryErrorLogRepository, PostgresErrorLogRepository},
    guardian::{InMemoryGuardianRepository, PostgresGuardianRepository},
    mail::{LogEmailService, SmtpEmailService},
};

const DEFAULT_JWT_SECRET: &str = "change-me-in-production";

/// Create the application state with custom configuration
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let (guardian_repository, error_log): (
        Arc<dyn GuardianRepository>,
        Arc<dyn ErrorLogRepository>,
    ) = match config.storage.backend {
        StorageBackend::Postgres => {
            let database_url = config
                .storage
                .resolve_database_url()
                .context("storage.database_url or DATABASE_URL is required for postgres storage")?;

            info!("Connecting to PostgreSQL...");
            let pool = PgPoolOptions::new()
                .max_connections(config.storage.max_connections)
                .connect(&database_url)
                .await
                .context("Failed to connect to PostgreSQL")?;
            info!("PostgreSQL connection established");

            (
                Arc::new(PostgresGuardianRepository::new(pool.clone())),
                Arc::new(PostgresErrorLogRepository::new(pool)),
            )
        }
        StorageBackend::Memory => {
            warn!("Using in-memory storage, data is lost on restart");
            (
                Arc::new(InMemoryGuardianRepository::new()),
                Arc::new(InMemoryErrorLogRepository::new()),
            )
        }
    };

    let email_service: Arc<dyn EmailService> = if config.mail.enabled {
        info!(host = %config.mail.smtp_host, "SMTP mail enabled");
        Arc::new(SmtpEmailService::new(&config.mail)?)
    } else {
        Arc::new(LogEmailService::new())
    };

    if config.auth.jwt_secret == DEFAULT_JWT_SECRET {
        warn!("Using the default JWT secret, set auth.jwt_secret in production");
    }

    let jwt = JwtService::new(JwtConfig::new(
        config.auth.jwt_secret.clone(),
        config.auth.access_token_ttl()?,
    ));

    Ok(build_app_state(Dependencies {
        guardian_repository,
        error_log,
        hasher: Arc::new(Argon2Hasher::new()),
        jwt: Arc::new(jwt),
        email_service,
        verification_token_ttl: config.auth.verification_token_ttl()?,
    }))
}

/// Wire the controllers over already constructed infrastructure
pub fn build_app_state(deps: Dependencies) -> AppState {
    AppState {
        signup: Arc::new(factories::make_signup_controller(&deps)),
        forget_password: Arc::new(factories::make_forget_password_controller(&deps)),
        login: Arc::new(factories::make_login_controller(&deps)),
        reset_password: Arc::new(factories::make_reset_password_controller(&deps)),
        guardian_repository: deps.guardian_repository,
        jwt_service: deps.jwt,
    }
}
