//! Info command - show project metadata.

use colored::Colorize;

use super::Context;

pub fn run(ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let client = ctx.open()?;
    let metadata = client.get_project_metadata()?;

    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&metadata)?);
        return Ok(());
    }

    println!(
        "{} {}",
        "Project".cyan().bold(),
        client.project_id().white().bold()
    );
    if let Some(fields) = metadata.as_object() {
        for (key, value) in fields {
            let shown = match value.as_str() {
                Some(text) => text.to_string(),
                None => value.to_string(),
            };
            println!("  {:<16} {}", key, shown);
        }
    }

    Ok(())
}
