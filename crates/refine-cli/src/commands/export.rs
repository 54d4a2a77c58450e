//! Export command - write a project's rows to a file or stdout.

use std::io::Write;
use std::path::PathBuf;

use colored::Colorize;
use refine::ExportOptions;

use crate::cli::ExportFormat;

use super::Context;

pub fn run(
    ctx: &Context,
    format: ExportFormat,
    output: Option<PathBuf>,
    options: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let client = ctx.open()?;

    let mut export = ExportOptions::new().with_format(format.to_string());
    if let Some(options) = options {
        export = export.with_options(options);
    }
    let body = client.export_rows(&export)?;

    match output {
        Some(path) => {
            std::fs::write(&path, &body)?;
            eprintln!(
                "{} {} bytes to {}",
                "Exported".green().bold(),
                body.len(),
                path.display()
            );
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&body)?;
            stdout.flush()?;
        }
    }

    Ok(())
}
