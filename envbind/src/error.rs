//! Error types for binding environment variables into records

use std::fmt;

/// Which side of a declared range a value fell out of.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    /// The value was below `min`.
    Min(f64),
    /// The value was above `max`.
    Max(f64),
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::Min(min) => write!(f, "below the minimum {}", min),
            Bound::Max(max) => write!(f, "above the maximum {}", max),
        }
    }
}

/// Errors that can occur when binding a record from environment variables.
///
/// Binding stops at the first failing field, so exactly one of these is
/// reported per call. Fields bound before the failure keep their new values.
#[derive(Debug, thiserror::Error)]
pub enum BindError {
    /// The `#[env("...")]` annotation on a field could not be parsed.
    ///
    /// Covers unknown keys, missing or unexpected parameters, an empty
    /// `name`, bounds on non-numeric fields and bounds that are not numbers.
    #[error("Malformed option '{option}' on field '{field}': {reason}")]
    MalformedOption {
        /// Identifier of the struct field carrying the annotation
        field: String,
        /// Option key the problem was found at
        option: String,
        /// What is wrong with it
        reason: String,
    },

    /// A `required` field had no value in the environment.
    ///
    /// Absent variables and variables set to the empty string are treated
    /// the same way.
    #[error("Environment variable '{name}' is required but not set")]
    MissingRequired {
        /// Name of the missing environment variable
        name: String,
    },

    /// The resolved value could not be parsed as the field's numeric type.
    #[error("Environment variable '{name}' must be a number ({type_name}), got '{value}'")]
    InvalidNumber {
        /// Name of the environment variable
        name: String,
        /// Raw value that failed to parse
        value: String,
        /// Numeric type parsing was attempted for
        type_name: &'static str,
    },

    /// The resolved value could not be parsed as a boolean.
    #[error("Environment variable '{name}' must be a boolean, got '{value}'")]
    InvalidBoolean {
        /// Name of the environment variable
        name: String,
        /// Raw value that failed to parse
        value: String,
    },

    /// A parsed number violated a `min`/`max` bound.
    #[error("Environment variable '{name}' value {value} is {bound}")]
    OutOfRange {
        /// Name of the environment variable
        name: String,
        /// Parsed value, widened to `f64`
        value: f64,
        /// The bound that was violated
        bound: Bound,
    },
}

impl BindError {
    /// Create a malformed option error (used by the option parser)
    #[doc(hidden)]
    pub fn malformed(
        field: impl Into<String>,
        option: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::MalformedOption {
            field: field.into(),
            option: option.into(),
            reason: reason.into(),
        }
    }

    /// Create a missing environment variable error
    #[doc(hidden)]
    pub fn missing(name: impl Into<String>) -> Self {
        Self::MissingRequired { name: name.into() }
    }

    /// Create a number parse error carrying the target type name
    #[doc(hidden)]
    pub fn invalid_number<T>(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidNumber {
            name: name.into(),
            value: value.into(),
            type_name: std::any::type_name::<T>(),
        }
    }
}
