//! Security Test Toolkit - CLI entry point
//!
//! Dispatches `security-test <command>` to the library's check, analysis,
//! auto-configuration, and reporting entry points.

use sectester::cli::{exit_codes, CliApp};

#[tokio::main]
async fn main() {
    if let Err(e) = dotenvy::dotenv() {
        // Only warn if it's not a "file not found" error
        if !e.not_found() {
            eprintln!("Warning: Failed to load .env file: {}", e);
        }
    }

    let exit_code = match CliApp::new().await {
        Ok(app) => match app.run().await {
            Ok(code) => code,
            Err(e) => {
                eprintln!("Error: {:#}", e);
                exit_codes::FAILURE
            }
        },
        Err(e) => {
            eprintln!("Error: {:#}", e);
            exit_codes::FAILURE
        }
    };

    std::process::exit(exit_code);
}
