//! CLI command definitions and dispatch.

pub mod migrate;
pub mod resource;
pub mod token;

use clap::{Parser, Subcommand};

use campus_core::config::AppConfig;
use campus_core::error::AppError;
use campus_database::DatabasePool;

use crate::output::OutputFormat;

/// Campus resource reservation operator tools
#[derive(Debug, Parser)]
#[command(name = "campus-cli", version, about, long_about = None)]
pub struct Cli {
    /// Configuration environment (selects `config/{env}.toml`)
    #[arg(short, long, env = "CAMPUS_ENV", default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// Access token management
    Token(token::TokenArgs),
    /// Resource inspection
    Resource(resource::ResourceArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        let config = AppConfig::load(&self.env)?;
        let db = DatabasePool::connect(&config.database).await?;

        let result = match &self.command {
            Commands::Migrate(args) => migrate::execute(args, &db).await,
            Commands::Token(args) => token::execute(args, &config, &db, self.format).await,
            Commands::Resource(args) => resource::execute(args, &db, self.format).await,
        };

        db.close().await;
        result
    }
}
