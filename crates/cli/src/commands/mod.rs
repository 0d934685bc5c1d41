pub mod best_sellers;
pub mod doctor;
pub mod featured;
pub mod list;
pub mod seed;
pub mod show;

use std::time::Duration;

use serde::Serialize;
use serde_json::{json, Value};

use shopfront_catalog::{CacheOptions, CatalogError, CatalogReader, JsonFileStore};
use shopfront_core::config::{AppConfig, LoadOptions};

/// Exit-code contract shared by the catalog subcommands.
pub(crate) const EXIT_CONFIG: u8 = 2;
pub(crate) const EXIT_RUNTIME: u8 = 3;
pub(crate) const EXIT_STORAGE: u8 = 3;
pub(crate) const EXIT_EMPTY_RESULT: u8 = 4;

#[derive(Debug, Clone)]
pub struct CommandResult {
    pub exit_code: u8,
    pub output: String,
}

#[derive(Debug, Serialize)]
struct CommandOutcome {
    command: String,
    status: String,
    error_class: Option<String>,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
}

impl CommandResult {
    pub fn success(command: &str, message: impl Into<String>) -> Self {
        let payload = CommandOutcome {
            command: command.to_string(),
            status: "ok".to_string(),
            error_class: None,
            message: message.into(),
            details: None,
        };
        Self { exit_code: 0, output: serialize_payload(payload) }
    }

    pub fn success_with_details(
        command: &str,
        message: impl Into<String>,
        details: Value,
    ) -> Self {
        let payload = CommandOutcome {
            command: command.to_string(),
            status: "ok".to_string(),
            error_class: None,
            message: message.into(),
            details: Some(details),
        };
        Self { exit_code: 0, output: serialize_payload(payload) }
    }

    pub fn failure(
        command: &str,
        error_class: &str,
        message: impl Into<String>,
        exit_code: u8,
    ) -> Self {
        let payload = CommandOutcome {
            command: command.to_string(),
            status: "error".to_string(),
            error_class: Some(error_class.to_string()),
            message: message.into(),
            details: None,
        };
        Self { exit_code, output: serialize_payload(payload) }
    }

    pub fn failure_with_details(
        command: &str,
        error_class: &str,
        message: impl Into<String>,
        details: Value,
        exit_code: u8,
    ) -> Self {
        let payload = CommandOutcome {
            command: command.to_string(),
            status: "error".to_string(),
            error_class: Some(error_class.to_string()),
            message: message.into(),
            details: Some(details),
        };
        Self { exit_code, output: serialize_payload(payload) }
    }
}

fn serialize_payload(payload: CommandOutcome) -> String {
    serde_json::to_string(&payload).unwrap_or_else(|error| {
        format!(
            "{{\"command\":\"unknown\",\"status\":\"error\",\"error_class\":\"serialization\",\"message\":\"{}\"}}",
            error.to_string().replace('\\', "\\\\").replace('"', "\\\"")
        )
    })
}

/// Loads the effective configuration and builds the reader every catalog
/// subcommand goes through.
pub(crate) fn catalog_reader(command: &str) -> Result<CatalogReader<JsonFileStore>, CommandResult> {
    let config = AppConfig::load(LoadOptions::default()).map_err(|error| {
        CommandResult::failure(
            command,
            "config_validation",
            format!("configuration issue: {error}"),
            EXIT_CONFIG,
        )
    })?;

    Ok(CatalogReader::new(
        JsonFileStore::new(config.catalog.db_path.clone()),
        CacheOptions {
            ttl: Duration::from_secs(config.catalog.cache_ttl_secs),
            tags: config.catalog.cache_tags.clone(),
        },
    ))
}

pub(crate) fn build_runtime(command: &str) -> Result<tokio::runtime::Runtime, CommandResult> {
    tokio::runtime::Builder::new_current_thread().enable_all().build().map_err(|error| {
        CommandResult::failure(
            command,
            "runtime_init",
            format!("failed to initialize async runtime: {error}"),
            EXIT_RUNTIME,
        )
    })
}

/// The presentation boundary for catalog failures: user-safe message up
/// front, full diagnostic in the details payload.
pub(crate) fn catalog_failure(command: &str, error: &CatalogError) -> CommandResult {
    let exit_code = match error {
        CatalogError::StorageUnavailable(_) => EXIT_STORAGE,
        _ => EXIT_EMPTY_RESULT,
    };

    CommandResult::failure_with_details(
        command,
        error.error_class(),
        error.user_message(),
        json!({ "detail": error.to_string() }),
        exit_code,
    )
}
