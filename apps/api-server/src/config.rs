//! Centralized configuration for api-server.
//!
//! All environment variables are loaded and validated at startup to fail fast
//! on misconfiguration rather than at request time.

use axum::http::HeaderValue;
use std::env;
use std::fmt;

/// Log output format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    fn from_str(s: &str) -> Self {
        if s.eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Pretty
        }
    }
}

/// Configuration error.
#[derive(Debug)]
pub struct ConfigError {
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Configuration error for {}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port (default: 3000)
    pub port: u16,
    /// CORS allow origin
    pub cors_allow_origin: HeaderValue,
    /// Log format
    pub log_format: LogFormat,
    /// Serve the GraphiQL IDE on `GET /graphql`
    pub graphiql: bool,
}

fn parse_flag(s: &str) -> bool {
    matches!(s.to_lowercase().as_str(), "1" | "true" | "yes")
}

impl Config {
    /// Load and validate configuration from environment variables.
    ///
    /// Fails fast on invalid configuration.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match env::var("PORT") {
            Ok(s) => s.parse().map_err(|_| ConfigError {
                field: "PORT",
                message: format!("'{}' is not a valid port", s),
            })?,
            Err(_) => 3000,
        };

        let cors_origin_str = env::var("CORS_ALLOW_ORIGIN").unwrap_or_else(|_| "*".into());
        let cors_allow_origin = if cors_origin_str == "*" {
            HeaderValue::from_static("*")
        } else {
            HeaderValue::from_str(&cors_origin_str).map_err(|e| ConfigError {
                field: "CORS_ALLOW_ORIGIN",
                message: format!("Invalid header value '{}': {}", cors_origin_str, e),
            })?
        };

        let log_format =
            LogFormat::from_str(&env::var("LOG_FORMAT").unwrap_or_else(|_| "pretty".into()));

        let graphiql = env::var("GRAPHIQL")
            .map(|s| parse_flag(&s))
            .unwrap_or(true);

        Ok(Self {
            port,
            cors_allow_origin,
            log_format,
            graphiql,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_format_parsing() {
        assert_eq!(LogFormat::from_str("pretty"), LogFormat::Pretty);
        assert_eq!(LogFormat::from_str("json"), LogFormat::Json);
        assert_eq!(LogFormat::from_str("JSON"), LogFormat::Json);
        assert_eq!(LogFormat::from_str("anything"), LogFormat::Pretty);
    }

    #[test]
    fn flag_parsing() {
        assert!(parse_flag("1"));
        assert!(parse_flag("TRUE"));
        assert!(parse_flag("yes"));
        assert!(!parse_flag("0"));
        assert!(!parse_flag("off"));
    }
}
