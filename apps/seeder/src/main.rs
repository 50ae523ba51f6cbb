//! seeder: fills an existing research hub database with sample users,
//! profiles, projects, notes, citations, timeline events and follows.
//!
//! Connection settings come from `DATABASE_URL` or the `PG*` variables
//! (a `.env` file is loaded when present). The schema must already exist.

mod config;
mod error;
mod generator;
mod models;
mod seed;
mod store;
mod vocab;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use sqlx::{ConnectOptions, Connection};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::DbConfig;
use crate::generator::DataGenerator;
use crate::seed::SeedPlan;

#[derive(Parser)]
#[command(name = "seeder", version, about, long_about = None)]
struct Cli {
    /// Number of users to generate
    #[arg(long, env = "SEED_USERS", default_value_t = 50)]
    users: usize,

    /// Random follow pairs to attempt (self-follows are skipped)
    #[arg(long, env = "SEED_FOLLOWS", default_value_t = 100)]
    follows: usize,

    /// How many of the new projects get timeline events
    #[arg(long, env = "SEED_TIMELINE_PROJECTS", default_value_t = 20)]
    timeline_projects: usize,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "seeder=info,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    match run_seeder(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Error inserting sample data: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run_seeder(cli: Cli) -> Result<()> {
    let config = DbConfig::from_env()?;
    info!("Connecting to PostgreSQL at {}...", config.describe());

    let mut conn = config
        .connect_options()?
        .connect()
        .await
        .context("Failed to connect to the database")?;
    info!("Connected");

    let plan = SeedPlan {
        users: cli.users,
        follow_attempts: cli.follows,
        timeline_projects: cli.timeline_projects,
    };
    let mut generator = DataGenerator::new(StdRng::from_entropy());
    let result = seed::run(&mut conn, &mut generator, plan).await;

    if let Err(e) = conn.close().await {
        error!("Failed to close connection cleanly: {e}");
    }
    result?.log();
    Ok(())
}
