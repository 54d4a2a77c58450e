//! Example: upload a file, facet a column, export and clean up.
//!
//! Needs a running OpenRefine server (`OPENREFINE_URL`, default
//! http://127.0.0.1:3333).
//!
//! Usage:
//!   cargo run --example facets -- <file_path> <column> [operations.json]

use std::env;
use std::path::Path;

use refine::{ExportOptions, FacetColumn, FacetOutcome, RefineClient, RefineConfig};

fn main() -> refine::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        eprintln!("Usage: cargo run --example facets -- <file_path> <column> [operations.json]");
        std::process::exit(1);
    }

    let file_path = Path::new(&args[1]);
    let column = &args[2];

    if !file_path.exists() {
        eprintln!("Error: File not found: {}", file_path.display());
        std::process::exit(1);
    }

    let name = file_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "example".to_string());

    let client = RefineClient::create(RefineConfig::from_env()?, name, file_path)?;
    println!(
        "Created project {} ({})",
        client.project_id(),
        client.project_name()
    );

    if let Some(operations) = args.get(3) {
        let result = client.apply_operations(operations)?;
        println!("Applied operations: {}", result);
    }

    let columns = [FacetColumn::with_options(column.as_str(), "sort_count")];
    for facet in client.compute_facet(&columns)? {
        println!();
        println!("Facet on '{}' ({})", facet.column_name, facet.expression);
        match &facet.outcome {
            FacetOutcome::Choices(choices) => {
                for choice in choices.iter().take(10) {
                    println!("  {:>6}  {}", choice.count, choice.label);
                }
                if choices.len() > 10 {
                    println!("  ... and {} more", choices.len() - 10);
                }
            }
            FacetOutcome::Error(message) => println!("  error: {}", message),
        }
    }

    println!();
    println!("Open in OpenRefine: {}", client.link_to_facets(&columns)?);

    let csv = client.export_rows(&ExportOptions::new().with_format("csv"))?;
    println!("Exported {} bytes of CSV", csv.len());

    let outcome = client.delete_project()?;
    println!("Deleted: {}", outcome.is_deleted());

    Ok(())
}
