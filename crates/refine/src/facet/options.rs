//! Column facet options and the settings derived from them.

use serde::{Deserialize, Serialize};

/// Expression used when the caller does not supply one.
pub const DEFAULT_EXPRESSION: &str = "value";

/// Ordering of facet choices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FacetSort {
    /// Alphabetical by choice label.
    #[default]
    Name,
    /// By number of matching rows.
    Count,
}

/// Options attached to a faceted column.
///
/// A single string is searched by substring: `"sort_count invert"` turns on
/// both flags. A list is searched element by element, and only its first
/// element may carry an expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FacetOptions {
    Text(String),
    List(Vec<String>),
}

impl FacetOptions {
    fn expression_candidate(&self) -> Option<&str> {
        match self {
            FacetOptions::Text(text) => Some(text),
            FacetOptions::List(items) => items.first().map(String::as_str),
        }
    }

    fn mentions(&self, flag: &str) -> bool {
        match self {
            FacetOptions::Text(text) => text.contains(flag),
            FacetOptions::List(items) => items.iter().any(|item| item == flag),
        }
    }
}

impl From<&str> for FacetOptions {
    fn from(text: &str) -> Self {
        FacetOptions::Text(text.to_string())
    }
}

impl From<String> for FacetOptions {
    fn from(text: String) -> Self {
        FacetOptions::Text(text)
    }
}

impl From<Vec<String>> for FacetOptions {
    fn from(items: Vec<String>) -> Self {
        FacetOptions::List(items)
    }
}

impl From<Vec<&str>> for FacetOptions {
    fn from(items: Vec<&str>) -> Self {
        FacetOptions::List(items.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for FacetOptions {
    fn from(items: [&str; N]) -> Self {
        FacetOptions::List(items.into_iter().map(str::to_string).collect())
    }
}

/// A column to facet on, with or without options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FacetColumn {
    /// Facet on raw values, sorted by name.
    Name(String),
    /// Facet with an expression and/or sort and invert flags.
    WithOptions {
        column: String,
        options: FacetOptions,
    },
}

impl FacetColumn {
    /// Facet a column with default settings.
    pub fn new(column: impl Into<String>) -> Self {
        FacetColumn::Name(column.into())
    }

    /// Facet a column with options.
    pub fn with_options(column: impl Into<String>, options: impl Into<FacetOptions>) -> Self {
        FacetColumn::WithOptions {
            column: column.into(),
            options: options.into(),
        }
    }

    /// Name of the faceted column.
    pub fn column_name(&self) -> &str {
        match self {
            FacetColumn::Name(column) => column,
            FacetColumn::WithOptions { column, .. } => column,
        }
    }

    /// Resolve expression, sort and invert for this column.
    pub fn settings(&self) -> FacetSettings {
        match self {
            FacetColumn::Name(_) => FacetSettings::default(),
            FacetColumn::WithOptions { options, .. } => FacetSettings::from_options(options),
        }
    }
}

impl From<&str> for FacetColumn {
    fn from(column: &str) -> Self {
        FacetColumn::new(column)
    }
}

impl From<String> for FacetColumn {
    fn from(column: String) -> Self {
        FacetColumn::Name(column)
    }
}

/// Resolved facet settings for one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetSettings {
    /// Expression sent to the server, already escaped.
    pub expression: String,
    pub sort: FacetSort,
    pub invert: bool,
}

impl Default for FacetSettings {
    fn default() -> Self {
        Self {
            expression: DEFAULT_EXPRESSION.to_string(),
            sort: FacetSort::Name,
            invert: false,
        }
    }
}

impl FacetSettings {
    /// Derive settings from column options.
    ///
    /// The options carry an expression only if they mention `value`;
    /// otherwise the facet runs on the raw cell value.
    pub fn from_options(options: &FacetOptions) -> Self {
        let expression = options
            .expression_candidate()
            .filter(|candidate| candidate.contains(DEFAULT_EXPRESSION))
            .unwrap_or(DEFAULT_EXPRESSION);

        let sort = if options.mentions("sort_count") {
            FacetSort::Count
        } else {
            FacetSort::Name
        };

        Self {
            expression: escape_expression(expression),
            sort,
            invert: options.mentions("invert"),
        }
    }
}

/// Double every `//` so it survives the server's expression parser.
pub fn escape_expression(expression: &str) -> String {
    expression.replace("//", "////")
}
