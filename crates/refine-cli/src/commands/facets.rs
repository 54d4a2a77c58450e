//! Facets command - compute list facets for columns.

use colored::Colorize;
use refine::{FacetColumn, FacetOptions, FacetOutcome};

use super::Context;

/// Choices shown per facet unless --verbose is set.
const SHOWN_CHOICES: usize = 20;

pub fn run(ctx: &Context, columns: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let columns: Vec<FacetColumn> = columns.iter().map(|c| parse_column(c)).collect();
    let client = ctx.open()?;
    let facets = client.compute_facet(&columns)?;

    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&facets)?);
        return Ok(());
    }

    for facet in &facets {
        println!(
            "{} {} {}",
            "Facet".cyan().bold(),
            facet.column_name.white().bold(),
            format!("({})", facet.expression).dimmed()
        );
        match &facet.outcome {
            FacetOutcome::Choices(choices) => {
                let limit = if ctx.verbose { choices.len() } else { SHOWN_CHOICES };
                for choice in choices.iter().take(limit) {
                    let marker = if choice.selected { "*" } else { " " };
                    println!("  {} {:>8}  {}", marker, choice.count, choice.label);
                }
                if choices.len() > limit {
                    println!("  {}", format!("... {} more", choices.len() - limit).dimmed());
                }
            }
            FacetOutcome::Error(message) => {
                println!("  {} {}", "error:".red(), message);
            }
        }
        println!();
    }

    Ok(())
}

/// Parse `NAME` or `NAME=OPTION[;OPTION...]` into a facet column.
///
/// A single option is passed as text, several as a list.
pub fn parse_column(raw: &str) -> FacetColumn {
    let Some((name, options)) = raw.split_once('=') else {
        return FacetColumn::new(raw);
    };

    let mut parts: Vec<String> = options.split(';').map(str::to_string).collect();
    let options = if parts.len() == 1 {
        FacetOptions::Text(parts.remove(0))
    } else {
        FacetOptions::List(parts)
    };
    FacetColumn::with_options(name, options)
}
