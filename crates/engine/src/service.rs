//! The service unit capability.
//!
//! A service encapsulates exactly one synchronous operation. It is constructed from its
//! arguments, its operation runs once, and the caller inspects the resulting
//! [`Outcome`]. Domain failures are appended to the outcome's error list; the `Err`
//! side of [`Service::call`] is reserved for defects such as a missing operation body.

use serviz_types::{Outcome, ServiceError};

/// A single-operation command object that reports success or failure through its outcome.
///
/// Implementors own an `Outcome<Self::Output>` and expose it through [`Service::outcome`]
/// and [`Service::outcome_mut`]. Several positional construction arguments are
/// expressed as a tuple `Args`.
///
/// ```rust
/// use serviz_engine::{Outcome, Service, ServiceError};
///
/// struct GreetUser {
///     name: Option<String>,
///     outcome: Outcome<String>,
/// }
///
/// impl Service for GreetUser {
///     type Args = Option<String>;
///     type Output = String;
///
///     fn new(name: Self::Args) -> Self {
///         Self { name, outcome: Outcome::new() }
///     }
///
///     fn outcome(&self) -> &Outcome<String> {
///         &self.outcome
///     }
///
///     fn outcome_mut(&mut self) -> &mut Outcome<String> {
///         &mut self.outcome
///     }
///
///     fn call(&mut self) -> Result<(), ServiceError> {
///         match &self.name {
///             Some(name) => self.outcome.set_result(format!("Hello, {name}!")),
///             None => self.outcome.push_error("Name is required"),
///         }
///         Ok(())
///     }
/// }
///
/// let greeting = GreetUser::run(Some("Alice".into()))?;
/// assert_eq!(greeting.result().map(String::as_str), Some("Hello, Alice!"));
///
/// let missing = GreetUser::run(None)?;
/// assert_eq!(missing.error_messages(", "), "Name is required");
/// # Ok::<(), ServiceError>(())
/// ```
pub trait Service: Sized {
    /// Construction arguments captured by [`Service::new`].
    type Args;
    /// Type of the result value recorded in the outcome.
    type Output;

    fn new(args: Self::Args) -> Self;

    fn outcome(&self) -> &Outcome<Self::Output>;

    fn outcome_mut(&mut self) -> &mut Outcome<Self::Output>;

    /// Performs the unit of work, recording the result and any domain errors.
    ///
    /// The provided body signals [`ServiceError::NotImplemented`]; every concrete service
    /// is expected to override it.
    fn call(&mut self) -> Result<(), ServiceError> {
        Err(ServiceError::not_implemented::<Self>())
    }

    /// Constructs the service, runs its operation once and returns the instance.
    fn run(args: Self::Args) -> Result<Self, ServiceError> {
        let mut service = Self::new(args);
        service.call()?;
        Ok(service)
    }

    /// Same as [`Service::run`], then hands the finished instance to `on_complete`.
    ///
    /// The handler is not invoked when the operation returns a defect.
    fn run_with<F>(args: Self::Args, on_complete: F) -> Result<Self, ServiceError>
    where
        F: FnOnce(&Self),
    {
        let service = Self::run(args)?;
        on_complete(&service);
        Ok(service)
    }

    fn result(&self) -> Option<&Self::Output> {
        self.outcome().result()
    }

    fn errors(&self) -> &[String] {
        self.outcome().errors()
    }

    fn succeeded(&self) -> bool {
        self.outcome().succeeded()
    }

    fn failed(&self) -> bool {
        self.outcome().failed()
    }

    fn error_messages(&self, separator: &str) -> String {
        self.outcome().error_messages(separator)
    }

    /// Consumes the service and returns its outcome.
    fn into_outcome(mut self) -> Outcome<Self::Output> {
        std::mem::take(self.outcome_mut())
    }
}
