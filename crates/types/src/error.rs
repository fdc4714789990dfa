//! Error taxonomy for service execution.
//!
//! Domain failures never appear here; they are appended to an [`Outcome`](crate::Outcome)'s
//! error list. The variants below describe defects that stop a run outright.

use thiserror::Error;

use crate::outcome::DEFAULT_ERROR_SEPARATOR;

/// Defect raised while running a service or a workflow step.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The service type never provided a body for its single operation.
    #[error("operation not implemented: `call` must be implemented by {service}")]
    NotImplemented {
        /// Fully qualified name of the offending service type.
        service: &'static str,
    },
    /// A caller-supplied function (for example a step parameter rule) failed.
    #[error(transparent)]
    Caller(#[from] anyhow::Error),
}

impl ServiceError {
    /// Builds the "operation not implemented" defect for the service type `S`.
    pub fn not_implemented<S: ?Sized>() -> Self {
        ServiceError::NotImplemented {
            service: std::any::type_name::<S>(),
        }
    }

    /// Returns true when this error signals a missing operation body.
    pub fn is_not_implemented(&self) -> bool {
        matches!(self, ServiceError::NotImplemented { .. })
    }
}

/// Accumulated domain failures of an outcome converted into a `Result`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", .messages.join(DEFAULT_ERROR_SEPARATOR))]
pub struct OutcomeError {
    /// Error messages in the order they were recorded.
    pub messages: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Unfinished;

    #[test]
    fn not_implemented_names_the_operation_and_type() {
        let error = ServiceError::not_implemented::<Unfinished>();
        let message = error.to_string();
        assert!(message.starts_with("operation not implemented"), "message: {message}");
        assert!(message.contains("Unfinished"), "message: {message}");
        assert!(error.is_not_implemented());
    }

    #[test]
    fn caller_errors_keep_their_message() {
        let error = ServiceError::from(anyhow::anyhow!("lookup table missing"));
        assert_eq!(error.to_string(), "lookup table missing");
        assert!(!error.is_not_implemented());
    }

    #[test]
    fn outcome_error_joins_messages() {
        let error = OutcomeError {
            messages: vec!["first".into(), "second".into()],
        };
        assert_eq!(error.to_string(), "first, second");
    }
}
