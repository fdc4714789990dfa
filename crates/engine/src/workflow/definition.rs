//! Static step declarations for a workflow type.
//!
//! Each declaration binds a service type to a parameter rule and an optional guard. The
//! service type is erased at registration time into an invoker closure, so a single
//! definition can hold services with different argument and output types.

use std::{any::type_name, fmt};

use serde::Serialize;
use serviz_types::{Outcome, ServiceError};

use crate::{
    Service,
    workflow::{Workflow, run::WorkflowRun},
};

type ParamsFn<W, A> = Box<dyn Fn(&WorkflowRun<W>) -> anyhow::Result<A> + Send + Sync>;
type Guard<W> = Box<dyn Fn(Option<&Outcome<<W as Workflow>::Output>>) -> bool + Send + Sync>;
type Invoker<W> = Box<dyn Fn(&WorkflowRun<W>) -> Result<Outcome<<W as Workflow>::Output>, ServiceError> + Send + Sync>;

/// How a step derives the arguments handed to its service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamsKind {
    /// Reuses the workflow's captured invocation arguments.
    Inherit,
    /// Passes the same value on every invocation.
    Fixed,
    /// Computes the arguments from the running workflow instance.
    Derived,
}

/// Parameter rule producing the arguments `A` for a step's service.
///
/// Every rule yields exactly one `A`. A service taking several positional arguments
/// declares a tuple `Args`; a service taking one list or map declares that type directly.
pub struct Params<W: Workflow, A> {
    kind: ParamsKind,
    resolve: ParamsFn<W, A>,
}

impl<W: Workflow, A: 'static> Params<W, A> {
    /// Passes the workflow's own invocation arguments, converted with `Into`.
    pub fn inherit() -> Self
    where
        W::Args: Into<A>,
    {
        Self {
            kind: ParamsKind::Inherit,
            resolve: Box::new(|run| Ok(run.args().clone().into())),
        }
    }

    /// Passes a clone of `args` on every invocation.
    pub fn fixed(args: A) -> Self
    where
        A: Clone + Send + Sync,
    {
        Self {
            kind: ParamsKind::Fixed,
            resolve: Box::new(move |_| Ok(args.clone())),
        }
    }

    /// Computes the arguments from the running workflow instance.
    pub fn derive<F>(derive: F) -> Self
    where
        F: Fn(&WorkflowRun<W>) -> A + Send + Sync + 'static,
    {
        Self {
            kind: ParamsKind::Derived,
            resolve: Box::new(move |run| Ok(derive(run))),
        }
    }

    /// Like [`Params::derive`], for rules that can fail. A failure aborts the run with
    /// [`ServiceError::Caller`].
    pub fn try_derive<F>(derive: F) -> Self
    where
        F: Fn(&WorkflowRun<W>) -> anyhow::Result<A> + Send + Sync + 'static,
    {
        Self {
            kind: ParamsKind::Derived,
            resolve: Box::new(derive),
        }
    }

    pub fn kind(&self) -> ParamsKind {
        self.kind
    }
}

/// A registered step: service binding, parameter rule and optional guard.
pub struct StepDeclaration<W: Workflow> {
    unit: &'static str,
    params: ParamsKind,
    guard: Option<Guard<W>>,
    invoke: Invoker<W>,
}

impl<W: Workflow> StepDeclaration<W> {
    fn new<U>(params: Params<W, U::Args>, guard: Option<Guard<W>>) -> Self
    where
        U: Service + 'static,
        U::Args: 'static,
        U::Output: Into<W::Output>,
    {
        let Params { kind, resolve } = params;
        let invoke: Invoker<W> = Box::new(move |run| {
            let args = resolve(run).map_err(ServiceError::Caller)?;
            let unit = U::run(args)?;
            Ok(unit.into_outcome().map_result(Into::into))
        });

        Self {
            unit: type_name::<U>(),
            params: kind,
            guard,
            invoke,
        }
    }

    /// Type name of the bound service.
    pub fn unit_name(&self) -> &'static str {
        self.unit
    }

    pub fn params_kind(&self) -> ParamsKind {
        self.params
    }

    pub fn is_guarded(&self) -> bool {
        self.guard.is_some()
    }

    /// Evaluates the guard against the last executed step's outcome. Unguarded steps
    /// always run.
    pub(crate) fn permits(&self, previous: Option<&Outcome<W::Output>>) -> bool {
        self.guard.as_ref().is_none_or(|guard| guard(previous))
    }

    pub(crate) fn invoke(&self, run: &WorkflowRun<W>) -> Result<Outcome<W::Output>, ServiceError> {
        (self.invoke)(run)
    }
}

impl<W: Workflow> fmt::Debug for StepDeclaration<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepDeclaration")
            .field("unit", &self.unit)
            .field("params", &self.params)
            .field("guarded", &self.is_guarded())
            .finish()
    }
}

/// Ordered, immutable list of step declarations for the workflow type `W`.
///
/// ```rust
/// use once_cell::sync::Lazy;
/// use serviz_engine::{Outcome, Params, Service, ServiceError, Workflow, WorkflowDefinition, WorkflowRun};
///
/// struct Trim {
///     raw: String,
///     outcome: Outcome<String>,
/// }
///
/// impl Service for Trim {
///     type Args = String;
///     type Output = String;
///
///     fn new(raw: String) -> Self {
///         Self { raw, outcome: Outcome::new() }
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
///         self.outcome.set_result(self.raw.trim().to_string());
///         Ok(())
///     }
/// }
///
/// struct Normalize;
///
/// static NORMALIZE: Lazy<WorkflowDefinition<Normalize>> = Lazy::new(|| {
///     WorkflowDefinition::<Normalize>::builder("normalize")
///         .step::<Trim>(Params::inherit())
///         .step_if::<Trim>(
///             Params::<Normalize, _>::derive(|run| run.previous().and_then(Outcome::result).cloned().unwrap_or_default()),
///             |previous| previous.is_some_and(Outcome::succeeded),
///         )
///         .build()
/// });
///
/// impl Workflow for Normalize {
///     type Args = String;
///     type Output = String;
///
///     fn definition() -> &'static WorkflowDefinition<Self> {
///         &NORMALIZE
///     }
/// }
///
/// assert_eq!(Normalize::definition().len(), 2);
/// let run = WorkflowRun::<Normalize>::run("  padded  ".into())?;
/// assert_eq!(run.result().map(String::as_str), Some("padded"));
/// # Ok::<(), ServiceError>(())
/// ```
pub struct WorkflowDefinition<W: Workflow> {
    name: String,
    steps: Vec<StepDeclaration<W>>,
}

impl<W: Workflow> WorkflowDefinition<W> {
    pub fn builder(name: impl Into<String>) -> WorkflowDefinitionBuilder<W> {
        WorkflowDefinitionBuilder {
            name: name.into(),
            steps: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared steps in execution order.
    pub fn steps(&self) -> &[StepDeclaration<W>] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl<W: Workflow> fmt::Debug for WorkflowDefinition<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WorkflowDefinition")
            .field("name", &self.name)
            .field("steps", &self.steps)
            .finish()
    }
}

/// Append-only builder for a [`WorkflowDefinition`].
pub struct WorkflowDefinitionBuilder<W: Workflow> {
    name: String,
    steps: Vec<StepDeclaration<W>>,
}

impl<W: Workflow> WorkflowDefinitionBuilder<W> {
    /// Declares an unguarded step running the service `U`.
    pub fn step<U>(mut self, params: Params<W, U::Args>) -> Self
    where
        U: Service + 'static,
        U::Args: 'static,
        U::Output: Into<W::Output>,
    {
        self.steps.push(StepDeclaration::new::<U>(params, None));
        self
    }

    /// Declares an unguarded step handed the workflow's own invocation arguments.
    pub fn step_inherit<U>(self) -> Self
    where
        U: Service + 'static,
        U::Args: 'static,
        U::Output: Into<W::Output>,
        W::Args: Into<U::Args>,
    {
        self.step::<U>(Params::inherit())
    }

    /// Declares a step that only runs when `guard` accepts the last executed step's
    /// outcome (`None` before any step has run).
    pub fn step_if<U>(
        mut self,
        params: Params<W, U::Args>,
        guard: impl Fn(Option<&Outcome<W::Output>>) -> bool + Send + Sync + 'static,
    ) -> Self
    where
        U: Service + 'static,
        U::Args: 'static,
        U::Output: Into<W::Output>,
    {
        self.steps.push(StepDeclaration::new::<U>(params, Some(Box::new(guard))));
        self
    }

    pub fn build(self) -> WorkflowDefinition<W> {
        WorkflowDefinition {
            name: self.name,
            steps: self.steps,
        }
    }
}
