//! CLI administration tool for linkcut.
//!
//! Issues and checks the bearer credentials the management API expects,
//! so the HTTP API can be exercised without the external identity
//! provider in front of it.
//!
//! # Usage
//!
//! ```bash
//! # Issue a credential for a user
//! cargo run --bin admin -- token issue --user-id user_2abc
//!
//! # Check a credential and print the owner id it carries
//! cargo run --bin admin -- token check "user_2abc.3f5a..."
//! ```
//!
//! # Environment Variables
//!
//! - `TOKEN_SIGNING_SECRET` (required): HMAC key; must match the server's

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;

use linkcut::application::services::AuthService;

/// CLI tool for managing linkcut.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage bearer credentials
    Token {
        #[command(subcommand)]
        action: TokenAction,
    },
}

/// Credential management subcommands.
#[derive(Subcommand)]
enum TokenAction {
    /// Issue a credential for an owner id
    Issue {
        /// Owner identity the credential will carry
        #[arg(short, long)]
        user_id: String,
    },

    /// Check a credential and print the owner id it carries
    Check {
        /// The credential to verify
        token: String,
    },
}

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let secret =
        std::env::var("TOKEN_SIGNING_SECRET").context("TOKEN_SIGNING_SECRET must be set")?;
    let auth_service = AuthService::new(secret);

    match cli.command {
        Commands::Token { action } => match action {
            TokenAction::Issue { user_id } => {
                let token = auth_service.issue_token(&user_id);
                println!("{}", "Credential issued:".green().bold());
                println!("{token}");
                println!();
                println!("Use it as: {}", format!("Authorization: Bearer {token}").cyan());
            }
            TokenAction::Check { token } => match auth_service.verify_token(&token) {
                Ok(owner_id) => {
                    println!("{} owner id: {}", "Valid.".green().bold(), owner_id.cyan());
                }
                Err(_) => {
                    println!("{}", "Invalid credential.".red().bold());
                    std::process::exit(1);
                }
            },
        },
    }

    Ok(())
}
