/// Application-level constants
pub const APP_NAME: &str = "Wardgate";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default tracing filter when RUST_LOG is unset
pub fn default_log_filter() -> &'static str {
    "info,wardgate_lib=debug"
}

/// Address the HTTP API binds to (`WARDGATE_LISTEN`, host:port)
pub fn listen_addr() -> String {
    std::env::var("WARDGATE_LISTEN").unwrap_or_else(|_| "127.0.0.1:8420".to_string())
}

/// Connection settings for the PostgreSQL endpoint.
///
/// Plain data; `db::session::ConnectionFactory` turns this into driver
/// configuration. No global engine object exists anywhere: whoever owns a
/// `DbConfig` decides who gets to open connections from it.
#[derive(Clone)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub dbname: String,
}

impl DbConfig {
    /// Read settings from `WARDGATE_DB_*` environment variables.
    ///
    /// Defaults match the deployment this system was built for: a local
    /// PostgreSQL with a `Healthcare` database. The password has no
    /// default worth guessing; unset means empty.
    pub fn from_env() -> Self {
        Self {
            host: env_or("WARDGATE_DB_HOST", "localhost"),
            port: std::env::var("WARDGATE_DB_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5432),
            user: env_or("WARDGATE_DB_USER", "postgres"),
            password: env_or("WARDGATE_DB_PASSWORD", ""),
            dbname: env_or("WARDGATE_DB_NAME", "Healthcare"),
        }
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_name_is_wardgate() {
        assert_eq!(APP_NAME, "Wardgate");
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.3.0");
    }

    #[test]
    fn env_or_falls_back() {
        assert_eq!(env_or("WARDGATE_TEST_UNSET_VAR", "fallback"), "fallback");
    }

    #[test]
    fn db_defaults_match_deployment() {
        // None of the WARDGATE_DB_* vars are set in the test environment.
        let cfg = DbConfig::from_env();
        assert_eq!(cfg.port, 5432);
        assert_eq!(cfg.dbname, "Healthcare");
    }
}
