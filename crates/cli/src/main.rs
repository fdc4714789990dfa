use std::{fmt::Display, process::ExitCode};

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use serviz_engine::{DEFAULT_ERROR_SEPARATOR, Outcome, ParamsKind, Service, Workflow, WorkflowRun};
use tracing::{debug, warn};

mod services;

use services::{GreetUser, Greeting};

/// Environment variable overriding the separator used to print error messages.
const SEPARATOR_ENV: &str = "SERVIZ_ERROR_SEPARATOR";

#[derive(Debug, Parser)]
#[command(name = "serviz", version, about = "Run the bundled Serviz services and workflows")]
struct Cli {
    /// Print the outcome as JSON instead of plain text.
    #[arg(long, global = true)]
    json: bool,

    /// Separator used when joining error messages.
    #[arg(long, global = true, env = SEPARATOR_ENV, default_value = DEFAULT_ERROR_SEPARATOR)]
    separator: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Greet a user with a single service
    Greet { name: Option<String> },
    /// Validate a name and format a welcome message
    Welcome { name: String },
    /// List the steps declared by the welcome workflow
    Steps,
}

#[derive(Debug, Serialize)]
struct StepSummary {
    index: usize,
    unit: &'static str,
    params: ParamsKind,
    guarded: bool,
}

fn main() -> Result<ExitCode> {
    init_tracing();
    let cli = Cli::parse();
    run(&cli)
}

fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(cli: &Cli) -> Result<ExitCode> {
    match &cli.command {
        Command::Greet { name } => {
            let operation = GreetUser::run_with(name.clone(), |operation| {
                if operation.failed() {
                    warn!(errors = %operation.error_messages(&cli.separator), "greeting failed");
                }
            })?;
            report(operation.outcome(), cli)
        }
        Command::Welcome { name } => {
            let operation = WorkflowRun::<Greeting>::run(name.clone())?;
            debug!(history = ?operation.history(), "welcome workflow finished");
            report(operation.outcome(), cli)
        }
        Command::Steps => {
            let summaries = step_summaries();
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&summaries)?);
            } else {
                for summary in &summaries {
                    let guard = if summary.guarded { " (guarded)" } else { "" };
                    println!("{}. {} [{:?}]{}", summary.index, summary.unit, summary.params, guard);
                }
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn step_summaries() -> Vec<StepSummary> {
    Greeting::definition()
        .steps()
        .iter()
        .enumerate()
        .map(|(index, step)| StepSummary {
            index,
            unit: step.unit_name(),
            params: step.params_kind(),
            guarded: step.is_guarded(),
        })
        .collect()
}

fn report<T: Serialize + Display>(outcome: &Outcome<T>, cli: &Cli) -> Result<ExitCode> {
    if cli.json {
        println!("{}", serde_json::to_string_pretty(outcome)?);
    } else if let Some(value) = outcome.result().filter(|_| outcome.succeeded()) {
        println!("{value}");
    } else if outcome.failed() {
        eprintln!("Error: {}", outcome.error_messages(&cli.separator));
    }

    Ok(exit_code(outcome))
}

fn exit_code<T>(outcome: &Outcome<T>) -> ExitCode {
    if outcome.succeeded() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
