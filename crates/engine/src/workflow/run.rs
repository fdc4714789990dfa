//! Per-invocation workflow state and the step execution loop.

use std::fmt;

use serde::Serialize;
use serviz_types::{Outcome, ServiceError};
use tracing::{debug, info, warn};

use crate::{
    Service,
    workflow::{Workflow, definition::WorkflowDefinition},
};

/// Execution state of a [`WorkflowRun`]. A run passes through its steps once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum RunState {
    NotStarted,
    /// Evaluating or executing the declared step at index `step`.
    Running { step: usize },
    /// Every declared step was evaluated. Failure is a property of the outcome, not of
    /// the state.
    Completed,
}

/// Status of a declared step that the run reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    /// The guard rejected the previous outcome; the service was never constructed.
    Skipped,
    /// The service ran and recorded no errors.
    Succeeded,
    /// The service ran and recorded at least one error.
    Failed,
}

/// Diagnostic record of one declared step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepRecord {
    /// Index of the step in declaration order.
    pub index: usize,
    /// Type name of the bound service.
    pub unit: &'static str,
    pub status: StepStatus,
}

/// One invocation of the workflow `W`.
///
/// Created by [`Service::new`] with the invocation arguments; [`Service::call`] walks the
/// declared steps in order. The run is itself a service, so it can be declared as a step
/// of another workflow.
pub struct WorkflowRun<W: Workflow> {
    args: W::Args,
    outcome: Outcome<W::Output>,
    previous: Option<Outcome<W::Output>>,
    state: RunState,
    history: Vec<StepRecord>,
}

impl<W: Workflow> WorkflowRun<W> {
    /// Invocation arguments captured at construction.
    pub fn args(&self) -> &W::Args {
        &self.args
    }

    /// Outcome of the last step that actually executed. Skipped steps never replace it.
    pub fn previous(&self) -> Option<&Outcome<W::Output>> {
        self.previous.as_ref()
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// Records for every declared step reached so far, in declaration order.
    pub fn history(&self) -> &[StepRecord] {
        &self.history
    }

    pub fn definition(&self) -> &'static WorkflowDefinition<W> {
        W::definition()
    }

    fn execute(&mut self) -> Result<(), ServiceError> {
        let definition = W::definition();

        for (index, step) in definition.steps().iter().enumerate() {
            self.state = RunState::Running { step: index };

            if !step.permits(self.previous.as_ref()) {
                debug!(
                    workflow = %definition.name(),
                    step = index,
                    unit = step.unit_name(),
                    "step skipped by guard"
                );
                self.history.push(StepRecord {
                    index,
                    unit: step.unit_name(),
                    status: StepStatus::Skipped,
                });
                continue;
            }

            debug!(workflow = %definition.name(), step = index, unit = step.unit_name(), "running step");
            let outcome = step.invoke(self)?;

            if outcome.failed() {
                self.outcome.extend_errors(outcome.errors().iter().cloned());
            }
            self.outcome.set_result(outcome.result().cloned());

            let status = if outcome.failed() {
                StepStatus::Failed
            } else {
                StepStatus::Succeeded
            };
            debug!(
                workflow = %definition.name(),
                step = index,
                unit = step.unit_name(),
                errors = outcome.errors().len(),
                "step finished"
            );
            self.history.push(StepRecord {
                index,
                unit: step.unit_name(),
                status,
            });
            self.previous = Some(outcome);
        }

        self.state = RunState::Completed;
        let skipped = self
            .history
            .iter()
            .filter(|record| record.status == StepStatus::Skipped)
            .count();
        info!(
            workflow = %definition.name(),
            executed = self.history.len() - skipped,
            skipped,
            errors = self.outcome.errors().len(),
            "workflow completed"
        );
        Ok(())
    }
}

impl<W: Workflow> Service for WorkflowRun<W> {
    type Args = W::Args;
    type Output = W::Output;

    fn new(args: W::Args) -> Self {
        Self {
            args,
            outcome: Outcome::new(),
            previous: None,
            state: RunState::NotStarted,
            history: Vec::new(),
        }
    }

    fn outcome(&self) -> &Outcome<W::Output> {
        &self.outcome
    }

    fn outcome_mut(&mut self) -> &mut Outcome<W::Output> {
        &mut self.outcome
    }

    /// Walks the declared steps once. Calling again after the run completed, or after it
    /// aborted on a defect, leaves the outcome and history untouched.
    fn call(&mut self) -> Result<(), ServiceError> {
        match self.state {
            RunState::NotStarted => self.execute(),
            RunState::Completed => {
                warn!(workflow = %W::definition().name(), "workflow run already completed; ignoring call");
                Ok(())
            }
            RunState::Running { step } => {
                warn!(workflow = %W::definition().name(), step, "workflow run aborted earlier; ignoring call");
                Ok(())
            }
        }
    }
}

impl<W: Workflow> fmt::Debug for WorkflowRun<W>
where
    W::Args: fmt::Debug,
    W::Output: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WorkflowRun")
            .field("workflow", &W::definition().name())
            .field("args", &self.args)
            .field("outcome", &self.outcome)
            .field("state", &self.state)
            .field("history", &self.history)
            .finish()
    }
}
