//! Error types for affinity-core.
//!
//! Resolution itself is total: every policy returns a value for every input,
//! and an empty element set is a defined short-circuit rather than an error.
//! Errors only arise where untyped input (settings strings, dropdown indices,
//! element names) is turned into the closed enums of this crate.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Validation**: Invalid input that should be rejected without retry
/// - **Fatal**: Configuration corruption; the caller must not continue with a guessed value
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: misspelled element name on the command line
    Validation,

    /// Fatal error - settings are corrupted, cannot continue.
    ///
    /// Examples: policy tag outside the known set
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if the error must abort the caller.
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal)
    }
}

/// Errors produced when converting external input into affinity types.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AffinityError {
    /// Policy name is not one of the five known tags.
    #[error("unknown elemental affinity policy `{0}`")]
    UnknownPolicy(String),

    /// Policy dropdown index is outside `0..=4`.
    #[error("unknown elemental affinity policy index {0}")]
    UnknownPolicyIndex(u8),

    /// Element name is not one of the known elements.
    #[error("unknown element `{0}`")]
    UnknownElement(String),
}

impl AffinityError {
    /// Returns the severity of this error.
    pub const fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnknownPolicy(_) | Self::UnknownPolicyIndex(_) => ErrorSeverity::Fatal,
            Self::UnknownElement(_) => ErrorSeverity::Validation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_errors_are_fatal() {
        assert!(AffinityError::UnknownPolicy("mean".into()).severity().is_fatal());
        assert!(AffinityError::UnknownPolicyIndex(9).severity().is_fatal());
        assert_eq!(
            AffinityError::UnknownElement("poison".into()).severity(),
            ErrorSeverity::Validation
        );
    }

    #[test]
    fn messages_name_the_offending_value() {
        let err = AffinityError::UnknownPolicy("mean".into());
        assert_eq!(err.to_string(), "unknown elemental affinity policy `mean`");
        assert_eq!(ErrorSeverity::Fatal.as_str(), "fatal");
    }
}
