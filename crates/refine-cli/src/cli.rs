//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Refine: drive an OpenRefine server from the command line
#[derive(Parser)]
#[command(name = "refine")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// OpenRefine server URL
    #[arg(long, global = true, env = "OPENREFINE_URL", default_value = refine::DEFAULT_SERVER)]
    pub server: String,

    /// Request timeout in seconds (0 waits forever)
    #[arg(long, global = true, env = "OPENREFINE_TIMEOUT_SECS", default_value = "60")]
    pub timeout: u64,

    /// Project id to operate on
    #[arg(short, long, global = true, env = "OPENREFINE_PROJECT")]
    pub project: Option<String>,

    /// Return API errors as data instead of failing
    #[arg(long, global = true)]
    pub no_throw: bool,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every project on the server
    Projects,

    /// Upload a file as a new project
    Create {
        /// Name of the new project
        #[arg(value_name = "NAME")]
        name: String,

        /// Data file to upload
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Show metadata of a project
    Info,

    /// Run any server command (e.g. get_column_info)
    Call {
        /// Command name, with underscores or dashes
        #[arg(value_name = "COMMAND")]
        command: String,

        /// Extra parameters
        #[arg(value_name = "KEY=VALUE")]
        params: Vec<String>,
    },

    /// Apply an operation history (file path or JSON text)
    Apply {
        #[arg(value_name = "OPERATIONS")]
        operations: String,
    },

    /// Export the project's rows
    Export {
        /// Export format
        #[arg(short, long, default_value = "tsv")]
        format: ExportFormat,

        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Exporter options, passed through verbatim
        #[arg(long)]
        options: Option<String>,
    },

    /// Compute list facets for columns
    Facets {
        /// Columns as NAME or NAME=OPTION[;OPTION...]
        #[arg(value_name = "COLUMN", required = true)]
        columns: Vec<String>,
    },

    /// Print a UI link with facets applied
    Link {
        /// Columns as NAME or NAME=OPTION[;OPTION...]
        #[arg(value_name = "COLUMN", required = true)]
        columns: Vec<String>,
    },

    /// Delete a project
    Delete,
}

/// Export formats the server ships exporters for.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Tsv,
    Csv,
    Html,
    Xls,
    Xlsx,
    Ods,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tsv" => Ok(ExportFormat::Tsv),
            "csv" => Ok(ExportFormat::Csv),
            "html" => Ok(ExportFormat::Html),
            "xls" => Ok(ExportFormat::Xls),
            "xlsx" => Ok(ExportFormat::Xlsx),
            "ods" => Ok(ExportFormat::Ods),
            _ => Err(format!(
                "Unknown format: {}. Use tsv, csv, html, xls, xlsx or ods.",
                s
            )),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Tsv => write!(f, "tsv"),
            ExportFormat::Csv => write!(f, "csv"),
            ExportFormat::Html => write!(f, "html"),
            ExportFormat::Xls => write!(f, "xls"),
            ExportFormat::Xlsx => write!(f, "xlsx"),
            ExportFormat::Ods => write!(f, "ods"),
        }
    }
}
