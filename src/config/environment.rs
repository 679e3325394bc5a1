// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, database URL selection, and runtime configuration parsing
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Environment-based configuration management

use std::env;
use std::fmt;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use fridge_core::constants::defaults;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Type-safe database location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatabaseUrl {
    /// SQLite database with file path
    SQLite { path: PathBuf },
    /// PostgreSQL connection
    PostgreSQL { connection_string: String },
    /// In-memory SQLite (for testing)
    Memory,
}

impl DatabaseUrl {
    /// Parse a connection string
    ///
    /// Anything that is neither a `sqlite:` nor a `postgres(ql)://` URL is
    /// taken as a SQLite file path.
    #[must_use]
    pub fn parse_url(s: &str) -> Self {
        let s = s.trim();
        if let Some(path) = s.strip_prefix("sqlite:") {
            if path == ":memory:" {
                Self::Memory
            } else {
                Self::SQLite {
                    path: PathBuf::from(path.trim_start_matches("//")),
                }
            }
        } else if s.starts_with("postgresql://") || s.starts_with("postgres://") {
            Self::PostgreSQL {
                connection_string: s.to_owned(),
            }
        } else {
            Self::SQLite {
                path: PathBuf::from(s),
            }
        }
    }

    /// Build a PostgreSQL URL from its parts
    ///
    /// # Errors
    ///
    /// Returns an error if the host or credentials cannot form a valid URL
    pub fn postgres_from_parts(parts: &PostgresParts) -> Result<Self> {
        let mut url = url::Url::parse(&format!("postgresql://{}:{}", parts.host, parts.port))
            .with_context(|| format!("Invalid DB_HOST value: {}", parts.host))?;
        url.set_username(&parts.user)
            .map_err(|()| anyhow!("Invalid DB_USER value"))?;
        if !parts.password.is_empty() {
            url.set_password(Some(&parts.password))
                .map_err(|()| anyhow!("Invalid DB_PASSWORD value"))?;
        }
        url.set_path(&parts.database);
        Ok(Self::PostgreSQL {
            connection_string: url.to_string(),
        })
    }

    /// Convert to connection string
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::PostgreSQL { connection_string } => connection_string.clone(),
            Self::Memory => "sqlite::memory:".to_owned(),
        }
    }

    /// Connection string with any password masked, for logs
    #[must_use]
    pub fn redacted(&self) -> String {
        match self {
            Self::PostgreSQL { connection_string } => url::Url::parse(connection_string)
                .map(|mut parsed| {
                    if parsed.password().is_some() {
                        // set_password only fails for URLs that cannot carry credentials
                        let _ = parsed.set_password(Some("****"));
                    }
                    parsed.to_string()
                })
                .unwrap_or_else(|_| "postgresql://<unparseable>".to_owned()),
            other => other.to_connection_string(),
        }
    }

    /// Check if this is an in-memory database
    #[must_use]
    pub const fn is_memory(&self) -> bool {
        matches!(self, Self::Memory)
    }

    /// Check if this is a SQLite database
    #[must_use]
    pub const fn is_sqlite(&self) -> bool {
        matches!(self, Self::SQLite { .. } | Self::Memory)
    }

    /// Check if this is a PostgreSQL database
    #[must_use]
    pub const fn is_postgresql(&self) -> bool {
        matches!(self, Self::PostgreSQL { .. })
    }
}

impl Default for DatabaseUrl {
    fn default() -> Self {
        Self::parse_url(defaults::DATABASE_URL)
    }
}

impl fmt::Display for DatabaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.redacted())
    }
}

/// Individual PostgreSQL settings (`DB_USER`, `DB_HOST`, ...)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostgresParts {
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub database: String,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database URL (SQLite path or PostgreSQL connection string)
    pub url: DatabaseUrl,
    /// Upper bound of pooled connections
    pub max_connections: u32,
    /// Create the schema on startup
    pub auto_migrate: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: DatabaseUrl::default(),
            max_connections: defaults::DATABASE_MAX_CONNECTIONS,
            auto_migrate: true,
        }
    }
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated origin list, or `*`
    pub allowed_origins: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: defaults::CORS_ALLOWED_ORIGINS.to_owned(),
        }
    }
}

/// Recipe service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// HTTP API port
    pub http_port: u16,
    /// Deployment environment
    pub environment: Environment,
    /// Database configuration
    pub database: DatabaseConfig,
    /// CORS configuration
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: defaults::HOST.to_owned(),
            http_port: defaults::HTTP_PORT,
            environment: Environment::default(),
            database: DatabaseConfig::default(),
            cors: CorsConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric or boolean variable cannot be parsed
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        if let Err(e) = dotenvy::dotenv() {
            warn!("No .env file found or failed to load: {}", e);
        }

        let config = Self {
            host: env_var_or("HOST", defaults::HOST),
            http_port: env_var_or("HTTP_PORT", &defaults::HTTP_PORT.to_string())
                .parse()
                .context("Invalid HTTP_PORT value")?,
            environment: Environment::from_str_or_default(&env_var_or(
                "ENVIRONMENT",
                "development",
            )),
            database: DatabaseConfig {
                url: database_url_from_env()?,
                max_connections: env_var_or(
                    "DATABASE_MAX_CONNECTIONS",
                    &defaults::DATABASE_MAX_CONNECTIONS.to_string(),
                )
                .parse()
                .context("Invalid DATABASE_MAX_CONNECTIONS value")?,
                auto_migrate: env_var_or("AUTO_MIGRATE", "true")
                    .parse()
                    .context("Invalid AUTO_MIGRATE value")?,
            },
            cors: CorsConfig {
                allowed_origins: env_var_or(
                    "CORS_ALLOWED_ORIGINS",
                    defaults::CORS_ALLOWED_ORIGINS,
                ),
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Reject settings the server cannot run with
    ///
    /// # Errors
    ///
    /// Returns an error if the pool size is zero
    pub fn validate(&self) -> Result<()> {
        if self.database.max_connections == 0 {
            anyhow::bail!("DATABASE_MAX_CONNECTIONS must be at least 1");
        }
        Ok(())
    }

    /// Socket address the server binds to
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    /// Human-readable configuration summary for startup logs
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "My Fridge Food Configuration:\n\
             - Bind Address: {}\n\
             - Environment: {}\n\
             - Database: {} ({})\n\
             - Pool Size: {}\n\
             - Auto Migrate: {}\n\
             - CORS Origins: {}",
            self.bind_address(),
            self.environment,
            if self.database.url.is_sqlite() {
                "SQLite"
            } else {
                "PostgreSQL"
            },
            self.database.url,
            self.database.max_connections,
            self.database.auto_migrate,
            self.cors.allowed_origins,
        )
    }
}

/// Resolve the database URL
///
/// `DATABASE_URL` wins; otherwise a PostgreSQL URL is assembled when
/// `DB_HOST` is set; otherwise the default SQLite file is used.
fn database_url_from_env() -> Result<DatabaseUrl> {
    if let Ok(url) = env::var("DATABASE_URL") {
        if !url.trim().is_empty() {
            return Ok(DatabaseUrl::parse_url(&url));
        }
    }

    match env::var("DB_HOST") {
        Ok(host) if !host.trim().is_empty() => {
            let parts = PostgresParts {
                user: env_var_or("DB_USER", defaults::DB_USER),
                password: env_var_or("DB_PASSWORD", ""),
                host: host.trim().to_owned(),
                port: env_var_or("DB_PORT", &defaults::DB_PORT.to_string())
                    .parse()
                    .context("Invalid DB_PORT value")?,
                database: env_var_or("DB_NAME", defaults::DB_NAME),
            };
            DatabaseUrl::postgres_from_parts(&parts)
        }
        _ => Ok(DatabaseUrl::default()),
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
