//! mod_portal_release - publish a mod release to the Factorio mod portal.
//!
//! Intended to run once per git tag event in CI. Exits nonzero on any
//! failure so the host marks the run as failed.

use std::process;
use std::sync::Arc;

use mod_portal_release::cli;
use mod_portal_release::cli::{OutputManager, SecretRedactor};

#[tokio::main]
async fn main() {
    env_logger::init();

    match cli::run().await {
        Ok(exit_code) => {
            process::exit(exit_code);
        }
        Err(e) => {
            // Never quiet for fatal errors
            let output = OutputManager::new(Arc::new(SecretRedactor::new()), false);
            output.error(&format!("{e}"));

            let suggestions = e.recovery_suggestions();
            if !suggestions.is_empty() {
                output.println("\nRecovery suggestions:");
                for suggestion in suggestions {
                    output.indent(&suggestion);
                }
            }

            process::exit(1);
        }
    }
}
