//! # Serviz Engine
//!
//! Minimal service objects and linear workflows built from them.
//!
//! A [`Service`] encapsulates one synchronous unit of work and reports its outcome through
//! an accumulated error list rather than by returning `Err`. A [`Workflow`] declares an
//! ordered list of services; running it executes each declared step in order, skips steps
//! whose guard rejects the previous executed step's outcome, and folds every step's
//! result and errors into its own outcome without stopping at the first failure.
//!
//! ## Usage
//!
//! ```rust
//! use once_cell::sync::Lazy;
//! use serviz_engine::{Outcome, Params, Service, ServiceError, Workflow, WorkflowDefinition, WorkflowRun};
//!
//! struct ValidateName {
//!     name: String,
//!     outcome: Outcome<String>,
//! }
//!
//! impl Service for ValidateName {
//!     type Args = String;
//!     type Output = String;
//!
//!     fn new(name: String) -> Self {
//!         Self { name, outcome: Outcome::new() }
//!     }
//!
//!     fn outcome(&self) -> &Outcome<String> {
//!         &self.outcome
//!     }
//!
//!     fn outcome_mut(&mut self) -> &mut Outcome<String> {
//!         &mut self.outcome
//!     }
//!
//!     fn call(&mut self) -> Result<(), ServiceError> {
//!         let trimmed = self.name.trim();
//!         if trimmed.is_empty() {
//!             self.outcome.push_error("Name cannot be empty");
//!         } else {
//!             self.outcome.set_result(trimmed.to_string());
//!         }
//!         Ok(())
//!     }
//! }
//!
//! struct FormatGreeting {
//!     name: String,
//!     outcome: Outcome<String>,
//! }
//!
//! impl Service for FormatGreeting {
//!     type Args = String;
//!     type Output = String;
//!
//!     fn new(name: String) -> Self {
//!         Self { name, outcome: Outcome::new() }
//!     }
//!
//!     fn outcome(&self) -> &Outcome<String> {
//!         &self.outcome
//!     }
//!
//!     fn outcome_mut(&mut self) -> &mut Outcome<String> {
//!         &mut self.outcome
//!     }
//!
//!     fn call(&mut self) -> Result<(), ServiceError> {
//!         self.outcome.set_result(format!("🎉 Welcome, {}! 🎉", self.name));
//!         Ok(())
//!     }
//! }
//!
//! struct Greeting;
//!
//! static GREETING: Lazy<WorkflowDefinition<Greeting>> = Lazy::new(|| {
//!     WorkflowDefinition::<Greeting>::builder("greeting")
//!         .step_inherit::<ValidateName>()
//!         .step_if::<FormatGreeting>(
//!             Params::<Greeting, _>::derive(|run| run.previous().and_then(Outcome::result).cloned().unwrap_or_default()),
//!             |previous| previous.is_some_and(Outcome::succeeded),
//!         )
//!         .build()
//! });
//!
//! impl Workflow for Greeting {
//!     type Args = String;
//!     type Output = String;
//!
//!     fn definition() -> &'static WorkflowDefinition<Self> {
//!         &GREETING
//!     }
//! }
//!
//! let welcomed = WorkflowRun::<Greeting>::run("Bob".into())?;
//! assert!(welcomed.succeeded());
//! assert_eq!(welcomed.result().map(String::as_str), Some("🎉 Welcome, Bob! 🎉"));
//!
//! let rejected = WorkflowRun::<Greeting>::run(String::new())?;
//! assert!(rejected.failed());
//! assert_eq!(rejected.errors(), ["Name cannot be empty".to_string()]);
//! # Ok::<(), ServiceError>(())
//! ```
//!
//! ## Architecture
//!
//! - **`service`**: the [`Service`] capability and its factory entry points
//! - **`workflow`**: step declarations, parameter rules, guards and the run loop
//!
//! Outcomes and the error taxonomy live in `serviz-types` and are re-exported here.

pub mod service;
pub mod workflow;

pub use service::Service;
pub use serviz_types::{DEFAULT_ERROR_SEPARATOR, Outcome, OutcomeError, ServiceError};
pub use workflow::{
    Params, ParamsKind, RunState, StepDeclaration, StepRecord, StepStatus, Workflow, WorkflowDefinition, WorkflowDefinitionBuilder,
    WorkflowRun,
};
