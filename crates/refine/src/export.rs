//! Row export options.

use serde::Serialize;
use serde_json::Value;

use crate::error::Result;

/// Engine mode used for exports.
pub const ROW_BASED: &str = "row-based";

/// Options for [`RefineClient::export_rows`](crate::RefineClient::export_rows).
#[derive(Debug, Clone, PartialEq)]
pub struct ExportOptions {
    /// Export format, also used as the file extension (`tsv`, `csv`, ...).
    pub format: String,
    /// Facets restricting the exported rows (empty = all rows).
    pub facets: Vec<Value>,
    /// Exporter-specific options, passed through verbatim.
    pub options: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: "tsv".to_string(),
            facets: Vec::new(),
            options: String::new(),
        }
    }
}

#[derive(Serialize)]
struct Engine<'a> {
    facets: &'a [Value],
    mode: &'static str,
}

impl ExportOptions {
    /// Export all rows as TSV.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the export format.
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    /// Restrict the export with engine facets.
    pub fn with_facets(mut self, facets: Vec<Value>) -> Self {
        self.facets = facets;
        self
    }

    /// Set exporter options.
    pub fn with_options(mut self, options: impl Into<String>) -> Self {
        self.options = options.into();
        self
    }

    /// The `engine` form field.
    pub fn engine(&self) -> Result<String> {
        Ok(serde_json::to_string(&Engine {
            facets: &self.facets,
            mode: ROW_BASED,
        })?)
    }
}
