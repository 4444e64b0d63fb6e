use std::{process::ExitCode, sync::Arc};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use client_core::{
    load_settings, settings::normalize_endpoint, SignupController, WaitlistClient, WorkflowState,
};
use shared::domain::{
    FormFields, CERTIFIED_DIVER_FIELD, CERTIFIED_INSTRUCTOR_FIELD, EMAIL_FIELD, MOBILE_FIELD,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

mod repl;

use repl::{parse_command, render_panels, ReplCommand, HELP};

#[derive(Parser, Debug)]
#[command(name = "waitlist", about = "Sign up for the waitlist")]
struct Cli {
    /// Signup endpoint; overrides waitlist.toml and the environment.
    #[arg(long, global = true)]
    endpoint: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Submit one signup and print the resulting message.
    Submit(SubmitArgs),
    /// Drive the form line by line from stdin.
    Interactive,
}

#[derive(Args, Debug)]
struct SubmitArgs {
    #[arg(long)]
    email: String,
    #[arg(long)]
    certified_diver: bool,
    #[arg(long)]
    certified_instructor: bool,
    #[arg(long)]
    mobile: Option<String>,
}

impl SubmitArgs {
    fn into_form(self) -> FormFields {
        let mut form = FormFields::new().with(EMAIL_FIELD, self.email);
        if self.certified_diver {
            form.set(CERTIFIED_DIVER_FIELD, "true");
        }
        if self.certified_instructor {
            form.set(CERTIFIED_INSTRUCTOR_FIELD, "true");
        }
        if let Some(mobile) = self.mobile {
            form.set(MOBILE_FIELD, mobile);
        }
        form
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let mut settings = load_settings().context("failed to load waitlist settings")?;
    if let Some(endpoint) = &cli.endpoint {
        settings.endpoint = normalize_endpoint(endpoint)?;
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(endpoint = %settings.endpoint, "waitlist settings loaded");

    let client =
        WaitlistClient::from_settings(&settings).context("failed to build signup http client")?;
    let mut controller = SignupController::new(Arc::new(client));

    match cli.command {
        Command::Submit(args) => {
            *controller.form_mut() = args.into_form();
            let state = controller.submit_and_settle().await;
            print_panels(&controller);
            Ok(match state {
                WorkflowState::Submitted => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            })
        }
        Command::Interactive => {
            run_interactive(&mut controller).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn run_interactive(controller: &mut SignupController<WaitlistClient>) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    println!("{HELP}");

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("failed to read stdin")? else {
                    break;
                };
                if line.trim().is_empty() {
                    continue;
                }
                match parse_command(&line) {
                    Ok(ReplCommand::Event(event)) => {
                        controller.handle_event(event);
                        print_panels(controller);
                    }
                    Ok(ReplCommand::Show) => print_panels(controller),
                    Ok(ReplCommand::Help) => println!("{HELP}"),
                    Ok(ReplCommand::Quit) => break,
                    Err(message) => eprintln!("{message}"),
                }
            }
            Some(outcome) = controller.next_outcome() => {
                let state = controller.apply_outcome(outcome);
                println!("submission finished: {state:?}");
                print_panels(controller);
            }
        }
    }

    if controller.in_flight() > 0 {
        println!("waiting for {} submission(s) in flight", controller.in_flight());
        controller.settle_all().await;
        print_panels(controller);
    }
    Ok(())
}

fn print_panels(controller: &SignupController<WaitlistClient>) {
    for line in render_panels(controller.ui()) {
        println!("{line}");
    }
}
