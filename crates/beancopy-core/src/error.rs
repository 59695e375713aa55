//! Error types for the Beancopy core library
//!
//! Every failure is local to a single mapping call. Batch mapping wraps the
//! failing element's error in [`Error::Element`] so callers can tell which
//! input was rejected.

use crate::types::FieldType;
use thiserror::Error;

/// Main error type for Beancopy operations
#[derive(Error, Debug)]
pub enum Error {
    /// The target type could not be instantiated
    #[error("Failed to construct {type_name}: {source}")]
    Construction {
        type_name: String,
        #[source]
        source: anyhow::Error,
    },

    /// An explicit mapping joins two fields whose types cannot be bridged
    #[error("incompatible field types for {field}: expected {expected} got {found} (from source field {source_field})")]
    IncompatibleFieldTypes {
        field: String,
        source_field: String,
        expected: FieldType,
        found: FieldType,
    },

    /// A value of the wrong kind reached a field setter
    #[error("Value mismatch for {type_name}.{field}: expected {expected}, found {found}")]
    ValueMismatch {
        type_name: String,
        field: String,
        expected: FieldType,
        found: String,
    },

    /// The bean has no field with this name
    #[error("Unknown field {type_name}.{field}")]
    UnknownField {
        type_name: String,
        field: String,
    },

    /// An integer epoch cannot be represented as an instant
    #[error("Epoch value {millis}ms for field {field} is out of range for an instant")]
    EpochOutOfRange {
        field: String,
        millis: i64,
    },

    /// A batch element failed to map
    #[error("Failed to map element {index}: {source}")]
    Element {
        index: usize,
        #[source]
        source: Box<Error>,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// JSON parsing and serialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// IO errors
    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Wrap a constructor failure for `type_name`
    pub fn construction<E>(type_name: impl Into<String>, err: E) -> Self
    where
        E: Into<anyhow::Error>,
    {
        Error::Construction {
            type_name: type_name.into(),
            source: err.into(),
        }
    }

    /// Build a value mismatch from the rejected value
    pub fn value_mismatch(
        type_name: impl Into<String>,
        field: impl Into<String>,
        expected: FieldType,
        found: &crate::types::FieldValue,
    ) -> Self {
        Error::ValueMismatch {
            type_name: type_name.into(),
            field: field.into(),
            expected,
            found: found.kind_name().to_string(),
        }
    }

    /// Build an unknown-field error
    pub fn unknown_field(type_name: impl Into<String>, field: impl Into<String>) -> Self {
        Error::UnknownField {
            type_name: type_name.into(),
            field: field.into(),
        }
    }

    /// Index of the failing batch element, if this error came from a batch
    pub fn element_index(&self) -> Option<usize> {
        match self {
            Error::Element { index, .. } => Some(*index),
            _ => None,
        }
    }
}

// Conversion implementations
impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Configuration {
            message: err.to_string(),
            source: Some(err.into()),
        }
    }
}
