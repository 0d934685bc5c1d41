pub mod config;
pub mod domain;
pub mod errors;

pub use config::{
    AppConfig, CatalogConfig, ConfigError, ConfigOverrides, LoadOptions, LogFormat, LoggingConfig,
};
pub use domain::product::{Product, ProductId};
pub use errors::DomainError;
