//! Create command - upload a file as a new project.

use std::path::PathBuf;

use colored::Colorize;
use refine::RefineClient;

use super::Context;

pub fn run(ctx: &Context, name: String, file: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let client = RefineClient::create(ctx.config.clone(), name, &file)?;

    if ctx.json {
        let created = serde_json::json!({
            "project_id": client.project_id(),
            "project_name": client.project_name(),
            "server": client.server(),
        });
        println!("{}", serde_json::to_string_pretty(&created)?);
    } else {
        println!(
            "{} {} from {}",
            "Created project".green().bold(),
            client.project_id().white().bold(),
            file.display()
        );
        if ctx.verbose {
            println!("  name:   {}", client.project_name());
            println!("  server: {}", client.server());
        }
    }

    Ok(())
}
