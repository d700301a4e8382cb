use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("missing or unparseable field `{field}` ({context})")]
    MissingField { field: String, context: String },

    #[error("invalid parameter `{name}` = {value}: {constraint}")]
    InvalidParameter {
        name: &'static str,
        value: String,
        constraint: &'static str,
    },

    #[error("duplicate location identifier `{id}`: {reason}")]
    DuplicateIdentifier { id: String, reason: &'static str },

    #[error("travel time from `{from}` to `{to}` is not a finite number")]
    NonFiniteTravelTime { from: String, to: String },

    #[error("file could not be read or written: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed customer table: {0}")]
    Csv(#[from] csv::Error),

    #[error("malformed run configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("failed to serialize model: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ModelError {
    pub fn missing_field(field: impl Into<String>, context: impl Into<String>) -> Self {
        ModelError::MissingField {
            field: field.into(),
            context: context.into(),
        }
    }

    pub fn invalid_parameter(
        name: &'static str,
        value: impl ToString,
        constraint: &'static str,
    ) -> Self {
        ModelError::InvalidParameter {
            name,
            value: value.to_string(),
            constraint,
        }
    }
}

pub type Result<T> = std::result::Result<T, ModelError>;
