//! Access token issuing for operators and scripted clients.

use clap::{Args, Subcommand};
use serde::Serialize;

use campus_auth::identity::{DbIdentityResolver, IdentityResolver};
use campus_auth::jwt::JwtEncoder;
use campus_core::config::AppConfig;
use campus_core::error::AppError;
use campus_core::types::id::UserId;
use campus_database::DatabasePool;
use campus_database::repositories::UserRepository;

use crate::output::{self, OutputFormat};

/// Arguments for the token command
#[derive(Debug, Args)]
pub struct TokenArgs {
    /// Token subcommand
    #[command(subcommand)]
    pub command: TokenCommand,
}

/// Token subcommands
#[derive(Debug, Subcommand)]
pub enum TokenCommand {
    /// Sign an access token for an existing user
    Issue {
        /// User id to embed as the token subject
        #[arg(long)]
        user_id: i32,
    },
}

#[derive(Debug, Serialize)]
struct IssuedToken {
    user_id: UserId,
    role: String,
    token: String,
    expires_at: String,
}

/// Execute token commands
pub async fn execute(
    args: &TokenArgs,
    config: &AppConfig,
    db: &DatabasePool,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        TokenCommand::Issue { user_id } => {
            let user_id = UserId::new(*user_id);
            let resolver = DbIdentityResolver::new(UserRepository::new(db.pool().clone()));
            let identity = resolver.resolve(user_id).await?;

            let token = JwtEncoder::new(&config.auth).generate_access_token(user_id)?;
            let issued = IssuedToken {
                user_id,
                role: identity.role.to_string(),
                token: token.token,
                expires_at: token.expires_at.to_rfc3339(),
            };

            match format {
                OutputFormat::Json => output::print_item(&issued, format),
                OutputFormat::Table => {
                    output::print_kv("User", &issued.user_id.to_string());
                    output::print_kv("Role", &issued.role);
                    output::print_kv("Expires", &issued.expires_at);
                    println!();
                    println!("{}", issued.token);
                }
            }
        }
    }

    Ok(())
}
