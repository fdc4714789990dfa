//! The `{ result, errors }` pair produced by every service invocation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::OutcomeError;

/// Separator used when rendering error messages without an explicit separator.
pub const DEFAULT_ERROR_SEPARATOR: &str = ", ";

/// Result value and accumulated error messages of a single invocation.
///
/// `succeeded` and `failed` are computed from `errors` on every call, so they can never
/// disagree. Error order is insertion order: the first recorded failure is reported first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome<T> {
    result: Option<T>,
    #[serde(default)]
    errors: Vec<String>,
}

impl<T> Default for Outcome<T> {
    fn default() -> Self {
        Self {
            result: None,
            errors: Vec::new(),
        }
    }
}

impl<T> Outcome<T> {
    /// Creates an outcome with no result and no errors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a successful outcome carrying `value`.
    pub fn success(value: T) -> Self {
        Self {
            result: Some(value),
            errors: Vec::new(),
        }
    }

    /// Creates a failed outcome without a result.
    pub fn failure<I, S>(errors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            result: None,
            errors: errors.into_iter().map(Into::into).collect(),
        }
    }

    pub fn result(&self) -> Option<&T> {
        self.result.as_ref()
    }

    /// Replaces the result. Passing `None` clears it.
    pub fn set_result(&mut self, value: impl Into<Option<T>>) {
        self.result = value.into();
    }

    pub fn take_result(&mut self) -> Option<T> {
        self.result.take()
    }

    pub fn clear_result(&mut self) {
        self.result = None;
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Appends a single error message.
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    /// Appends messages after the ones already recorded, keeping their order.
    pub fn extend_errors<I, S>(&mut self, messages: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.errors.extend(messages.into_iter().map(Into::into));
    }

    /// Replaces the whole error list. An empty iterator leaves the outcome successful.
    pub fn set_errors<I, S>(&mut self, messages: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.errors = messages.into_iter().map(Into::into).collect();
    }

    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }

    /// True when no error has been recorded.
    pub fn succeeded(&self) -> bool {
        self.errors.is_empty()
    }

    /// True when at least one error has been recorded.
    pub fn failed(&self) -> bool {
        !self.succeeded()
    }

    /// Alias for [`Outcome::succeeded`].
    pub fn is_ok(&self) -> bool {
        self.succeeded()
    }

    /// Alias for [`Outcome::failed`].
    pub fn is_err(&self) -> bool {
        self.failed()
    }

    /// Joins the error messages with `separator` for display.
    pub fn error_messages(&self, separator: &str) -> String {
        self.errors.join(separator)
    }

    /// Converts the result value while keeping the recorded errors.
    pub fn map_result<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        Outcome {
            result: self.result.map(f),
            errors: self.errors,
        }
    }

    pub fn into_parts(self) -> (Option<T>, Vec<String>) {
        (self.result, self.errors)
    }

    /// Converts into a `Result`, yielding the errors when any were recorded.
    ///
    /// A failed outcome discards its result, even if one was set before the failure.
    pub fn into_result(self) -> Result<Option<T>, OutcomeError> {
        if self.succeeded() {
            Ok(self.result)
        } else {
            Err(OutcomeError { messages: self.errors })
        }
    }
}

impl<T> fmt::Display for Outcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.error_messages(DEFAULT_ERROR_SEPARATOR))
    }
}
