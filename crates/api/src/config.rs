use std::path::PathBuf;

use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development except
/// the JWT secret. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Root directory of visual cake assets (`shapes/`, `toppings/`).
    pub asset_root: PathBuf,
    /// Blob storage upload endpoint; uploads are rejected when unset.
    pub upload_url: Option<String>,
    /// Unsigned upload preset forwarded to the storage endpoint.
    pub upload_preset: Option<String>,
    /// Reverse-geocoding endpoint base; enrichment is skipped when unset.
    pub geocode_url: Option<String>,
    /// JWT validation configuration (shared secret).
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `ASSET_ROOT`           | `./public/cake`            |
    /// | `UPLOAD_URL`           | (unset)                    |
    /// | `UPLOAD_PRESET`        | (unset)                    |
    /// | `GEOCODE_URL`          | (unset)                    |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let asset_root =
            PathBuf::from(std::env::var("ASSET_ROOT").unwrap_or_else(|_| "./public/cake".into()));

        let upload_url = std::env::var("UPLOAD_URL").ok().filter(|s| !s.is_empty());
        let upload_preset = std::env::var("UPLOAD_PRESET").ok().filter(|s| !s.is_empty());
        let geocode_url = std::env::var("GEOCODE_URL").ok().filter(|s| !s.is_empty());

        let jwt = JwtConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            asset_root,
            upload_url,
            upload_preset,
            geocode_url,
            jwt,
        }
    }
}
