//! Structured logging for the portal services. `RUST_LOG` wins when set so
//! operators can raise verbosity per collection (`campus_portal=debug`)
//! without touching the deployed `APP_LOG_LEVEL`.

use crate::config::TelemetryConfig;
use std::fmt;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
pub enum TelemetryError {
    Filter { directive: String, source: ParseError },
    Subscriber(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for TelemetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TelemetryError::Filter { directive, .. } => {
                write!(
                    f,
                    "APP_LOG_LEVEL '{}' is not a valid tracing filter directive",
                    directive
                )
            }
            TelemetryError::Subscriber(err) => {
                write!(f, "failed to install the log subscriber: {err}")
            }
        }
    }
}

impl std::error::Error for TelemetryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TelemetryError::Filter { source, .. } => Some(source),
            TelemetryError::Subscriber(err) => Some(&**err),
        }
    }
}

pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    tracing_subscriber::fmt()
        .with_env_filter(portal_filter(config)?)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::Subscriber)
}

/// Filter for the portal's log output: the `RUST_LOG` environment takes
/// precedence, otherwise the configured level applies across the service.
fn portal_filter(config: &TelemetryConfig) -> Result<EnvFilter, TelemetryError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => {
            EnvFilter::try_new(&config.log_level).map_err(|source| TelemetryError::Filter {
                directive: config.log_level.clone(),
                source,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(level: &str) -> TelemetryConfig {
        TelemetryConfig {
            log_level: level.to_string(),
        }
    }

    #[test]
    fn configured_level_builds_a_filter() {
        std::env::remove_var("RUST_LOG");
        let filter = portal_filter(&config("campus_portal=debug,info")).expect("filter builds");
        assert!(filter.to_string().contains("campus_portal"));
    }

    #[test]
    fn malformed_level_is_reported_with_the_directive() {
        std::env::remove_var("RUST_LOG");
        let err = portal_filter(&config("portal=debug=extra")).expect_err("directive rejected");
        match err {
            TelemetryError::Filter { directive, .. } => assert_eq!(directive, "portal=debug=extra"),
            other => panic!("expected filter error, got {other:?}"),
        }
    }
}
