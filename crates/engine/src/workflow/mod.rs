//! Workflow orchestration.
//!
//! A workflow is a service whose operation runs a declared, ordered list of other
//! services. Declarations live in a [`WorkflowDefinition`] that is built once per workflow
//! type and shared read-only by every invocation; each invocation gets its own
//! [`WorkflowRun`] holding the captured arguments, the previous executed step's outcome,
//! and the accumulated result and errors.
//!
//! - `definition` holds step declarations, parameter rules and guards
//! - `run` walks the declarations and folds step outcomes into the workflow's own

pub mod definition;
pub mod run;

pub use definition::{Params, ParamsKind, StepDeclaration, WorkflowDefinition, WorkflowDefinitionBuilder};
pub use run::{RunState, StepRecord, StepStatus, WorkflowRun};

/// Binds a marker type to its static step declarations.
///
/// Implementations usually keep the definition in a `once_cell::sync::Lazy` static so
/// it is built on first use and never mutated afterwards.
pub trait Workflow: Sized + 'static {
    /// Invocation arguments captured by every run of this workflow.
    type Args: Clone + Send + Sync + 'static;
    /// Result type the workflow exposes; every step's output converts into it.
    type Output: Clone + Send + Sync + 'static;

    fn definition() -> &'static WorkflowDefinition<Self>;
}
