//! Refine: a client for the OpenRefine command API.
//!
//! A [`RefineClient`] is a session bound to one OpenRefine project. It can
//! create the project from an uploaded file or bind to an existing one,
//! then apply operation histories, compute facets, export rows and delete
//! the project. Any other server command is reachable through
//! [`RefineClient::call`].
//!
//! # Core Principles
//!
//! - **Blocking**: every operation is exactly one HTTP request
//! - **Thin**: responses come back as the server sent them, except facets,
//!   which are normalized into [`Facet`] values
//! - **Pluggable transport**: anything implementing [`Transport`] can carry
//!   the requests
//!
//! # Example
//!
//! ```no_run
//! use refine::{ExportOptions, FacetColumn, RefineClient, RefineConfig};
//!
//! let client = RefineClient::create(RefineConfig::default(), "cities", "cities.csv").unwrap();
//!
//! let facets = client
//!     .compute_facet(&[FacetColumn::with_options("country", "sort_count")])
//!     .unwrap();
//! println!("{} countries", facets[0].choices().map_or(0, |c| c.len()));
//!
//! let csv = client
//!     .export_rows(&ExportOptions::new().with_format("csv"))
//!     .unwrap();
//! println!("{} bytes exported", csv.len());
//!
//! client.delete_project().unwrap();
//! ```

pub mod command;
pub mod config;
pub mod error;
pub mod export;
pub mod facet;
pub mod response;
pub mod transport;

mod client;

pub use crate::client::{
    escape_project_name, project_id_from_location, ProjectSource, RefineClient,
};
pub use command::params;
pub use config::{RefineConfig, DEFAULT_SERVER};
pub use error::{RefineError, Result};
pub use export::ExportOptions;
pub use facet::{Facet, FacetChoice, FacetColumn, FacetOptions, FacetOutcome, FacetSort};
pub use response::DeleteOutcome;
pub use transport::{HttpResponse, HttpTransport, MultipartBody, Params, Transport};
