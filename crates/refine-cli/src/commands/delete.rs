//! Delete command - remove a project from the server.

use colored::Colorize;
use refine::DeleteOutcome;

use super::Context;

pub fn run(ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let client = ctx.open()?;
    let outcome = client.delete_project()?;

    if ctx.json {
        let status = serde_json::json!({
            "project_id": client.project_id(),
            "deleted": outcome.is_deleted(),
            "code": outcome.code(),
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    match &outcome {
        DeleteOutcome::Confirmed { .. } if outcome.is_deleted() => {
            println!(
                "{} {}",
                "Deleted project".green().bold(),
                client.project_id().white().bold()
            );
        }
        DeleteOutcome::Confirmed { code } => {
            return Err(format!("Server refused to delete project (code: {})", code).into());
        }
        DeleteOutcome::Unknown => {
            println!(
                "{} could not confirm deletion of {}",
                "Warning:".yellow().bold(),
                client.project_id()
            );
        }
    }

    Ok(())
}
