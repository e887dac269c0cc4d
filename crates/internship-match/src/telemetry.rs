use crate::config::TelemetryConfig;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("log filter '{value}' is not a valid EnvFilter directive")]
    EnvFilter {
        value: String,
        #[source]
        source: ParseError,
    },
    #[error("tracing subscriber could not be installed: {0}")]
    Subscriber(String),
}

/// Installs the global subscriber. `RUST_LOG` takes precedence over the configured level.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => build_filter(&config.log_level)?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| TelemetryError::Subscriber(err.to_string()))
}

fn build_filter(level: &str) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(level).map_err(|source| TelemetryError::EnvFilter {
        value: level.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_directive_filters() {
        assert!(build_filter("internship_match=debug,warn").is_ok());
    }

    #[test]
    fn reports_the_offending_filter() {
        let error = build_filter("internship_match=loud").expect_err("invalid level");
        assert!(error.to_string().contains("internship_match=loud"));
    }
}
