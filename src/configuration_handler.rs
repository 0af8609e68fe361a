use crate::configuration::Configuration;
use clap::Parser;
use std::env;
use std::path::PathBuf;

/// Runtime options. Every flag falls back to an environment variable
/// (loaded from `.env` when present) and then to a built-in default.
#[derive(Debug, Clone, Parser)]
#[command(about = "Booking service for the salon")]
pub struct ConfigurationHandler {
    /// Port the HTTP server listens on (env: PORT).
    #[arg(long)]
    port: Option<String>,
    /// Password expected in the x-admin-password header (env: ADMIN_PASSWORD).
    #[arg(long)]
    admin_password: Option<String>,
    /// Booking page served at the root route (env: FRONTEND_PATH).
    #[arg(long)]
    frontend_path: Option<PathBuf>,
    /// PostgreSQL connection URL (env: DATABASE_URL). Without it the
    /// service runs on the impersistent in-memory store.
    #[arg(long)]
    database_url: Option<String>,
}

impl ConfigurationHandler {
    pub fn parse_arguments() -> Self {
        Self::parse()
    }
}

impl Configuration for ConfigurationHandler {
    fn password(&self) -> String {
        self.admin_password
            .clone()
            .or_else(|| env::var("ADMIN_PASSWORD").ok())
            .unwrap_or_else(|| "123".into())
    }

    fn frontend_path(&self) -> PathBuf {
        self.frontend_path
            .clone()
            .or_else(|| env::var("FRONTEND_PATH").ok().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from("./frontend/index.html"))
    }

    fn port(&self) -> String {
        self.port
            .clone()
            .or_else(|| env::var("PORT").ok())
            .unwrap_or_else(|| "3000".into())
    }

    fn database_url(&self) -> Option<String> {
        self.database_url
            .clone()
            .or_else(|| env::var("DATABASE_URL").ok())
    }
}
