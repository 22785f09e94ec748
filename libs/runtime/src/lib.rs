pub mod config;
pub mod logging;

pub use config::{
    ApiHeaderRule, AppConfig, CliArgs, DatabaseConfig, HeadersConfig, LoggingConfig, Section,
    ServerConfig,
};
