// SPDX-FileCopyrightText: 2026 Pawhaven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pawhaven - pet adoption registration client.
//!
//! This is the command-line shell over the application core: it loads
//! configuration, wires the Supabase client into the session store and
//! registration flow, and maps subcommands onto them.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod account;
mod dashboard;
mod register;
mod status;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use pawhaven_core::Species;
use pawhaven_supabase::SupabaseClient;
use tracing_subscriber::EnvFilter;

/// Pawhaven - register pets for adoption.
#[derive(Parser, Debug)]
#[command(name = "pawhaven", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Sign in with email and password.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account and sign in.
    Signup {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Sign out and discard the persisted session.
    Logout,
    /// Submit a pet profile for administrator approval.
    RegisterPet {
        /// Pet name (required, non-empty).
        #[arg(long)]
        name: String,
        /// Species: dog, cat, bird, or other.
        #[arg(long)]
        species: Species,
        #[arg(long)]
        breed: Option<String>,
        /// Age in years (0-30).
        #[arg(long)]
        age: Option<u8>,
        #[arg(long)]
        care_notes: Option<String>,
        #[arg(long)]
        medical_notes: Option<String>,
        /// Path to a photo (image, at most the configured size).
        #[arg(long)]
        photo: Option<PathBuf>,
    },
    /// List your submitted pets and their approval state.
    Dashboard,
    /// Show backend health and session state.
    Status,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Load and validate configuration at startup.
    let config = match pawhaven_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            pawhaven_config::render_errors(&errors);
            return ExitCode::FAILURE;
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.app.log_level.clone())),
        )
        .with_writer(std::io::stderr)
        .init();

    let client = match SupabaseClient::new(&config) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            eprintln!("pawhaven: {e}");
            return ExitCode::FAILURE;
        }
    };

    let result = match cli.command {
        Commands::Login { email, password } => {
            account::login(Arc::clone(&client), &email, &password).await
        }
        Commands::Signup { email, password } => {
            account::signup(Arc::clone(&client), &email, &password).await
        }
        Commands::Logout => account::logout(Arc::clone(&client)).await,
        Commands::RegisterPet {
            name,
            species,
            breed,
            age,
            care_notes,
            medical_notes,
            photo,
        } => {
            let draft = pawhaven_core::PetDraft {
                name,
                species: Some(species),
                breed,
                age,
                care_notes,
                medical_notes,
            };
            register::register_pet(Arc::clone(&client), &config, draft, photo.as_deref()).await
        }
        Commands::Dashboard => dashboard::dashboard(Arc::clone(&client)).await,
        Commands::Status => status::status(Arc::clone(&client), &config).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("pawhaven: {e}");
            ExitCode::FAILURE
        }
    }
}
