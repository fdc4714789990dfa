//! Services shared by the integration tests.
#![allow(dead_code)]

use serviz_engine::{Outcome, Service, ServiceError};

/// Registers a user when one is given.
pub struct RegisterUser {
    user: Option<String>,
    outcome: Outcome<String>,
}

impl Service for RegisterUser {
    type Args = Option<String>;
    type Output = String;

    fn new(user: Option<String>) -> Self {
        Self {
            user,
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
        match self.user.clone() {
            Some(user) => self.outcome.set_result(user),
            None => self.outcome.push_error("No user!"),
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct KeywordOptions {
    pub keyword: Option<String>,
}

/// Takes one positional argument and one keyword-style options struct.
pub struct PositionalAndKeyword {
    positional: String,
    keyword: Option<String>,
    outcome: Outcome<(String, Option<String>)>,
}

impl Service for PositionalAndKeyword {
    type Args = (String, KeywordOptions);
    type Output = (String, Option<String>);

    fn new((positional, options): Self::Args) -> Self {
        Self {
            positional,
            keyword: options.keyword,
            outcome: Outcome::new(),
        }
    }

    fn outcome(&self) -> &Outcome<Self::Output> {
        &self.outcome
    }

    fn outcome_mut(&mut self) -> &mut Outcome<Self::Output> {
        &mut self.outcome
    }

    fn call(&mut self) -> Result<(), ServiceError> {
        self.outcome.set_result((self.positional.clone(), self.keyword.clone()));
        Ok(())
    }
}

/// Named options built from a positional name and keyword options.
#[derive(Debug, Clone)]
pub struct Invitation {
    pub guest: String,
    pub plus_one: Option<String>,
}

impl From<(String, KeywordOptions)> for Invitation {
    fn from((guest, options): (String, KeywordOptions)) -> Self {
        Self {
            guest,
            plus_one: options.keyword,
        }
    }
}

pub struct Invite {
    invitation: Invitation,
    outcome: Outcome<String>,
}

impl Service for Invite {
    type Args = Invitation;
    type Output = String;

    fn new(invitation: Invitation) -> Self {
        Self {
            invitation,
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
        let Invitation { guest, plus_one } = &self.invitation;
        let line = match plus_one {
            Some(other) => format!("{guest} + {other}"),
            None => guest.clone(),
        };
        self.outcome.set_result(line);
        Ok(())
    }
}

/// Never overrides its operation.
pub struct NoCall {
    outcome: Outcome<()>,
}

impl Service for NoCall {
    type Args = ();
    type Output = ();

    fn new(_: ()) -> Self {
        Self { outcome: Outcome::new() }
    }

    fn outcome(&self) -> &Outcome<()> {
        &self.outcome
    }

    fn outcome_mut(&mut self) -> &mut Outcome<()> {
        &mut self.outcome
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepArgs {
    pub some_flag: Option<String>,
}

impl StepArgs {
    pub fn flag(value: impl Into<String>) -> Self {
        Self {
            some_flag: Some(value.into()),
        }
    }

    pub fn none() -> Self {
        Self::default()
    }
}

/// Succeeds with `<prefix>_<flag>` when a non-empty flag is present.
fn run_flagged_step(prefix: &str, args: &StepArgs, outcome: &mut Outcome<String>) {
    match args.some_flag.as_deref().filter(|flag| !flag.is_empty()) {
        Some(flag) => outcome.set_result(format!("{}_{}", prefix.to_lowercase(), flag)),
        None => outcome.push_error(format!("{prefix} failed")),
    }
}

pub struct Step1 {
    args: StepArgs,
    outcome: Outcome<String>,
}

impl Service for Step1 {
    type Args = StepArgs;
    type Output = String;

    fn new(args: StepArgs) -> Self {
        Self {
            args,
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
        run_flagged_step("Step1", &self.args, &mut self.outcome);
        Ok(())
    }
}

pub struct Step2 {
    args: StepArgs,
    outcome: Outcome<String>,
}

impl Service for Step2 {
    type Args = StepArgs;
    type Output = String;

    fn new(args: StepArgs) -> Self {
        Self {
            args,
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
        run_flagged_step("Step2", &self.args, &mut self.outcome);
        Ok(())
    }
}

/// Trims a name, rejecting blank input.
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
