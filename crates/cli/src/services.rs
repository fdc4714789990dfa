//! Greeting services bundled with the command-line runner.

use once_cell::sync::Lazy;
use serviz_engine::{Outcome, Params, Service, ServiceError, Workflow, WorkflowDefinition};

/// Greets a user by name; a missing or empty name is a domain failure.
pub struct GreetUser {
    name: Option<String>,
    outcome: Outcome<String>,
}

impl Service for GreetUser {
    type Args = Option<String>;
    type Output = String;

    fn new(name: Option<String>) -> Self {
        Self {
            name,
            outcome: Outcome::new(),
        }
    }

    fn outcome(&self) -> &Outcome<String> {
        &self.outcome
    }

    fn outcome_mut(&mut self) -> &mut Outcome<String> {
        &mut self.outcome
    }

    fn call(&mut self) -> Result<(), ServiceError> {
        match self.name.as_deref().filter(|name| !name.is_empty()) {
            Some(name) => self.outcome.set_result(format!("Hello, {name}!")),
            None => self.outcome.push_error("Name is required"),
        }
        Ok(())
    }
}

/// Trims the name and rejects blank input.
pub struct ValidateName {
    name: String,
    outcome: Outcome<String>,
}

impl Service for ValidateName {
    type Args = String;
    type Output = String;

    fn new(name: String) -> Self {
        Self {
            name,
            outcome: Outcome::new(),
        }
    }

    fn outcome(&self) -> &Outcome<String> {
        &self.outcome
    }

    fn outcome_mut(&mut self) -> &mut Outcome<String> {
        &mut self.outcome
    }

    fn call(&mut self) -> Result<(), ServiceError> {
        let trimmed = self.name.trim();
        if trimmed.is_empty() {
            self.outcome.push_error("Name cannot be empty");
        } else {
            self.outcome.set_result(trimmed.to_string());
        }
        Ok(())
    }
}

pub struct FormatGreeting {
    name: String,
    outcome: Outcome<String>,
}

impl Service for FormatGreeting {
    type Args = String;
    type Output = String;

    fn new(name: String) -> Self {
        Self {
            name,
            outcome: Outcome::new(),
        }
    }

    fn outcome(&self) -> &Outcome<String> {
        &self.outcome
    }

    fn outcome_mut(&mut self) -> &mut Outcome<String> {
        &mut self.outcome
    }

    fn call(&mut self) -> Result<(), ServiceError> {
        self.outcome.set_result(format!("🎉 Welcome, {}! 🎉", self.name));
        Ok(())
    }
}

/// Validates a name, then formats a welcome message for it.
pub struct Greeting;

static GREETING: Lazy<WorkflowDefinition<Greeting>> = Lazy::new(|| {
    WorkflowDefinition::<Greeting>::builder("greeting")
        .step_inherit::<ValidateName>()
        .step_if::<FormatGreeting>(
            Params::<Greeting, _>::derive(|run| run.previous().and_then(Outcome::result).cloned().unwrap_or_default()),
            |previous| previous.is_some_and(Outcome::succeeded),
        )
        .build()
});

impl Workflow for Greeting {
    type Args = String;
    type Output = String;

    fn definition() -> &'static WorkflowDefinition<Self> {
        &GREETING
    }
}

#[cfg(test)]
mod tests {
    use serviz_engine::{ParamsKind, WorkflowRun};

    use super::*;

    #[test]
    fn greet_user_says_hello() {
        let greeting = GreetUser::run(Some("Alice".into())).expect("run greet user");
        assert_eq!(greeting.result().map(String::as_str), Some("Hello, Alice!"));
    }

    #[test]
    fn greet_user_requires_a_name() {
        let missing = GreetUser::run(None).expect("run greet user");
        assert_eq!(missing.error_messages(", "), "Name is required");

        let empty = GreetUser::run(Some(String::new())).expect("run greet user");
        assert!(empty.failed());
    }

    #[test]
    fn greeting_workflow_welcomes_bob() {
        let welcomed = WorkflowRun::<Greeting>::run("Bob".into()).expect("run greeting");
        assert!(welcomed.succeeded());
        assert_eq!(welcomed.result().map(String::as_str), Some("🎉 Welcome, Bob! 🎉"));
    }

    #[test]
    fn greeting_workflow_rejects_empty_names() {
        let rejected = WorkflowRun::<Greeting>::run(String::new()).expect("run greeting");
        assert!(rejected.failed());
        assert_eq!(rejected.errors(), ["Name cannot be empty".to_string()]);
    }

    #[test]
    fn greeting_workflow_declares_a_guarded_format_step() {
        let steps = Greeting::definition().steps();
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].params_kind(), ParamsKind::Inherit);
        assert!(!steps[0].is_guarded());
        assert_eq!(steps[1].params_kind(), ParamsKind::Derived);
        assert!(steps[1].is_guarded());
    }
}
