//! Projects command - list every project on the server.

use colored::Colorize;
use refine::{HttpTransport, RefineClient};

use super::Context;

pub fn run(ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let transport = HttpTransport::new(&ctx.config)?;
    let metadata = RefineClient::get_all_project_metadata_with(&transport, &ctx.config.server)?;

    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&metadata)?);
        return Ok(());
    }

    let projects = metadata
        .get("projects")
        .and_then(|p| p.as_object())
        .ok_or("Server reply has no project list")?;

    if projects.is_empty() {
        println!("No projects on {}", ctx.config.server);
        return Ok(());
    }

    println!(
        "{} {}",
        "Projects on".cyan().bold(),
        ctx.config.server.white()
    );
    for (id, project) in projects {
        let name = project.get("name").and_then(|n| n.as_str()).unwrap_or("?");
        let modified = project
            .get("modified")
            .and_then(|m| m.as_str())
            .unwrap_or("");
        println!("  {}  {}  {}", id.yellow(), name.white().bold(), modified.dimmed());
    }

    Ok(())
}
