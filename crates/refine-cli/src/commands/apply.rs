//! Apply command - apply an operation history to a project.

use colored::Colorize;

use super::Context;

pub fn run(ctx: &Context, operations: String) -> Result<(), Box<dyn std::error::Error>> {
    let client = ctx.open()?;
    let response = client.apply_operations(&operations)?;

    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    match response.get("code").and_then(|c| c.as_str()) {
        Some("ok") => println!(
            "{} to project {}",
            "Applied operations".green().bold(),
            client.project_id().white().bold()
        ),
        Some("pending") => println!(
            "{} on project {}",
            "Operations queued".yellow().bold(),
            client.project_id().white().bold()
        ),
        _ => println!("{}", serde_json::to_string_pretty(&response)?),
    }

    Ok(())
}
