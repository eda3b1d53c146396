use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Registration failed: {source}")]
    Registration {
        #[source]
        source: Box<DomainError>,
    },

    #[error("Lookup failed: {source}")]
    Lookup {
        #[source]
        source: Box<DomainError>,
    },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// Wrap a persistence failure raised during registration
    pub fn registration(source: DomainError) -> Self {
        Self::Registration {
            source: Box::new(source),
        }
    }

    /// Wrap a persistence failure raised during lookup
    pub fn lookup(source: DomainError) -> Self {
        Self::Lookup {
            source: Box::new(source),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_validation_error() {
        let error = DomainError::validation("Invalid input");
        assert_eq!(error.to_string(), "Validation error: Invalid input");
    }

    #[test]
    fn test_storage_error() {
        let error = DomainError::storage("connection refused");
        assert_eq!(error.to_string(), "Storage error: connection refused");
    }

    #[test]
    fn test_registration_wraps_cause() {
        let error = DomainError::registration(DomainError::storage("disk full"));
        assert_eq!(
            error.to_string(),
            "Registration failed: Storage error: disk full"
        );
        assert!(error.source().is_some());
    }

    #[test]
    fn test_lookup_wraps_cause() {
        let error = DomainError::lookup(DomainError::storage("timeout"));
        assert_eq!(error.to_string(), "Lookup failed: Storage error: timeout");
        assert!(error.source().is_some());
    }
}
