//! easyopts demo - declares four option sections and processes the real
//! command line through them.
//!
//! Exit codes:
//! - 0: Success (including --help and its variants)
//! - 1: General error
//! - 2: Invalid arguments
//! - 3: Validation failure
//! - 4: Missing required option
//! - 5: Option registration error

use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use easyopts_core::{ErrorCategory, Flow, OptsError};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod declarations;

use declarations::{build_store, DemoOptions};

/// CI-friendly exit codes
pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const GENERAL_ERROR: u8 = 1;
    pub const INVALID_ARGS: u8 = 2;
    pub const VALIDATION_FAILURE: u8 = 3;
    pub const MISSING_REQUIRED: u8 = 4;
    pub const REGISTRATION_ERROR: u8 = 5;
}

fn main() -> ExitCode {
    // Logs go to stderr so help output on stdout stays clean
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("easyopts_cli=info,warn")),
        )
        .try_init();

    match run() {
        Ok(code) => code,
        Err(e) => {
            let exit_code = categorize_error(&e);
            eprintln!("Error: {:#}", e);
            ExitCode::from(exit_code)
        }
    }
}

fn run() -> Result<ExitCode> {
    let mut store = build_store(std::env::args()).context("declaring demo options")?;
    let mut options = DemoOptions::default();
    let flow = store.run(&mut options, &mut io::stdout())?;

    let remaining = match flow {
        Flow::Exit(code) => {
            store.free(None);
            return Ok(ExitCode::from(u8::try_from(code).unwrap_or(ExitCodes::GENERAL_ERROR)));
        }
        Flow::Continue(remaining) => remaining,
    };

    info!("Parsed {} remaining argument(s)", remaining.len());
    println!("{:#?}", options);
    for (idx, arg) in remaining.iter().enumerate() {
        println!("remaining[{idx}] = {arg}");
    }

    store.free(Some(remaining));
    Ok(ExitCode::from(ExitCodes::SUCCESS))
}

/// Categorize error to determine exit code
fn categorize_error(e: &anyhow::Error) -> u8 {
    let Some(opts_error) = e.downcast_ref::<OptsError>() else {
        return ExitCodes::GENERAL_ERROR;
    };
    match opts_error.category() {
        ErrorCategory::Registration => ExitCodes::REGISTRATION_ERROR,
        ErrorCategory::Usage => ExitCodes::INVALID_ARGS,
        ErrorCategory::Validation => ExitCodes::VALIDATION_FAILURE,
        ErrorCategory::MissingRequired => ExitCodes::MISSING_REQUIRED,
        ErrorCategory::Internal => ExitCodes::GENERAL_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categorize_error() {
        let err = anyhow::Error::new(OptsError::MissingRequired {
            option: "argA0".to_string(),
        });
        assert_eq!(categorize_error(&err), ExitCodes::MISSING_REQUIRED);

        let err = anyhow::Error::new(OptsError::InvalidShortOption('-'))
            .context("declaring demo options");
        assert_eq!(categorize_error(&err), ExitCodes::REGISTRATION_ERROR);

        let err = anyhow::anyhow!("something else");
        assert_eq!(categorize_error(&err), ExitCodes::GENERAL_ERROR);
    }
}
