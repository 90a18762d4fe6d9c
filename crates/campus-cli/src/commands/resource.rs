//! Read-only resource inspection.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use campus_core::error::AppError;
use campus_database::DatabasePool;
use campus_database::repositories::ResourceRepository;
use campus_entity::resource::ResourceDetail;

use crate::output::{self, OutputFormat};

/// Arguments for the resource command
#[derive(Debug, Args)]
pub struct ResourceArgs {
    /// Resource subcommand
    #[command(subcommand)]
    pub command: ResourceCommand,
}

/// Resource subcommands
#[derive(Debug, Subcommand)]
pub enum ResourceCommand {
    /// List every resource with its status
    List,
}

#[derive(Debug, Serialize, Tabled)]
struct ResourceRow {
    #[tabled(rename = "ID")]
    id: i32,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Type")]
    resource_type: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl From<ResourceDetail> for ResourceRow {
    fn from(r: ResourceDetail) -> Self {
        Self {
            id: r.id.get(),
            description: r.description,
            resource_type: r.resource_type.name,
            status: r.status.to_string(),
        }
    }
}

/// Execute resource commands
pub async fn execute(
    args: &ResourceArgs,
    db: &DatabasePool,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        ResourceCommand::List => {
            let repo = ResourceRepository::new(db.pool().clone());
            let rows: Vec<ResourceRow> = repo
                .find_all()
                .await?
                .into_iter()
                .map(ResourceRow::from)
                .collect();
            output::print_list(&rows, format);
        }
    }

    Ok(())
}
