use std::env;
use std::fmt;
use std::path::PathBuf;

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

pub const DEFAULT_DATA_FILE: &str = "utp_internship_data.csv";
pub const DEFAULT_RECORD_COUNT: usize = 2000;
pub const DEFAULT_TOP_K: usize = 10;

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub dataset: DatasetConfig,
    pub ranking: RankingConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let path = env::var("MATCH_DATA_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_FILE));

        let records = match env::var("MATCH_DATASET_RECORDS") {
            Ok(raw) => raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|count| *count > 0)
                .ok_or(ConfigError::InvalidRecordCount)?,
            Err(_) => DEFAULT_RECORD_COUNT,
        };

        let seed = match env::var("MATCH_DATASET_SEED") {
            Ok(raw) => Some(
                raw.trim()
                    .parse::<u64>()
                    .map_err(|source| ConfigError::InvalidSeed { source })?,
            ),
            Err(_) => None,
        };

        let top_k = match env::var("MATCH_TOP_K") {
            Ok(raw) => raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|k| *k > 0)
                .ok_or(ConfigError::InvalidTopK)?,
            Err(_) => DEFAULT_TOP_K,
        };

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            dataset: DatasetConfig {
                path,
                records,
                seed,
            },
            ranking: RankingConfig { top_k },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Location and shape of the flat internship snapshot.
#[derive(Debug, Clone)]
pub struct DatasetConfig {
    pub path: PathBuf,
    pub records: usize,
    pub seed: Option<u64>,
}

/// Controls how many ranked internships are surfaced.
#[derive(Debug, Clone, Copy)]
pub struct RankingConfig {
    pub top_k: usize,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidRecordCount,
    InvalidSeed { source: std::num::ParseIntError },
    InvalidTopK,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidRecordCount => {
                write!(f, "MATCH_DATASET_RECORDS must be a positive integer")
            }
            ConfigError::InvalidSeed { .. } => write!(f, "MATCH_DATASET_SEED must be a valid u64"),
            ConfigError::InvalidTopK => write!(f, "MATCH_TOP_K must be a positive integer"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidSeed { source } => Some(source),
            ConfigError::InvalidRecordCount | ConfigError::InvalidTopK => None,
        }
    }
}
