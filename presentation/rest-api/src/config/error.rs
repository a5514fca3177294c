use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("config.invalid_value: {key}={value}")]
    InvalidValue { key: &'static str, value: String },
    #[error("config.missing_value: {0}")]
    MissingValue(&'static str),
}
