//! Shared value types for Serviz services and workflows.
//!
//! Every service invocation produces an [`Outcome`]: an optional result value plus an
//! ordered list of human-readable error messages. Success and failure are derived from
//! the error list and are never stored separately.
//!
//! Problems that are not domain failures (a service that never implemented its
//! operation, a caller-supplied parameter function that failed) are reported through
//! [`ServiceError`] instead and are expected to abort the surrounding run.
//!
//! ```rust
//! use serviz_types::Outcome;
//!
//! let mut outcome: Outcome<String> = Outcome::new();
//! assert!(outcome.succeeded());
//!
//! outcome.push_error("Name cannot be empty");
//! assert!(outcome.failed());
//! assert_eq!(outcome.to_string(), "Name cannot be empty");
//! ```

pub mod error;
pub mod outcome;

pub use error::{OutcomeError, ServiceError};
pub use outcome::{DEFAULT_ERROR_SEPARATOR, Outcome};
