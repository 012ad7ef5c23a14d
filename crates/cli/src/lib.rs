//! Front-desk command line for the HealthPoint clinic.
//!
//! [`run`] takes parsed arguments and configuration, talks to the
//! appointments API and prints the result. Errors are reported as the
//! user-facing message of the failed call.

use std::process::ExitCode;
use std::sync::Arc;

use dialoguer::Confirm;
use eyre::Result;
use healthpoint_client::{ClientConfig, HttpApi};
use tracing::{error, info};

pub mod commands;
pub mod handlers;

use commands::{Cli, Command};
use handlers::HandlerContext;

/// Run one invocation of the client.
///
/// # Returns
///
/// * `Ok(ExitCode::SUCCESS)` when the command completed
/// * `Ok(ExitCode::FAILURE)` when the API or validation rejected it, after
///   printing the reason
/// * `Err` if the HTTP client could not be built or the prompt failed
pub async fn run(mut config: ClientConfig, cli: Cli) -> Result<ExitCode> {
    if let Some(api_url) = cli.api_url {
        config.api_url = api_url.trim_end_matches('/').to_string();
    }
    info!("Using appointments API at {}", config.api_url);

    if let Command::Cancel { id, yes: false } = cli.command {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Are you sure you want to cancel appointment #{id}?"
            ))
            .default(false)
            .interact()?;
        if !confirmed {
            println!("Cancellation aborted.");
            return Ok(ExitCode::SUCCESS);
        }
    }

    let api = HttpApi::new(&config)?;
    let ctx = HandlerContext::new(Arc::new(api), config);

    match handlers::handle(&ctx, cli.command).await {
        Ok(output) => {
            println!("{output}");
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            error!("Command failed: {:?}", e);
            eprintln!("Error: {}", e.user_message());
            Ok(ExitCode::FAILURE)
        }
    }
}
