//! Column facets: request construction and reply normalization.
//!
//! A facet is a server-side histogram of a column's values. Columns are
//! described with [`FacetColumn`]; options decide the expression, the sort
//! order and whether the selection is inverted.
//!
//! # Example
//!
//! ```
//! use refine::facet::{facet_parameters, FacetColumn, FacetSort};
//!
//! let columns = [
//!     FacetColumn::new("city"),
//!     FacetColumn::with_options("year", ["value.toNumber()", "sort_count"]),
//! ];
//! let params = facet_parameters(&columns);
//! assert_eq!(params[1].c.expression, "value.toNumber()");
//! assert_eq!(params[1].o.sort, FacetSort::Count);
//! ```

mod options;
mod params;
mod result;

pub use options::{
    escape_expression, FacetColumn, FacetOptions, FacetSettings, FacetSort, DEFAULT_EXPRESSION,
};
pub use params::{
    compute_engine, facet_parameters, facet_requests, link_to_facets, FacetConfig,
    FacetParameter, FacetRequest, FacetUiOptions,
};
pub use result::{normalize_facets, Facet, FacetChoice, FacetOutcome};
