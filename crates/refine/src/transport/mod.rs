//! HTTP transport used to reach the OpenRefine server.
//!
//! The client talks to the server only through the [`Transport`] trait, so
//! callers can swap in their own implementation (a preconfigured client, a
//! proxy, a recording stub in tests).
//!
//! # Implementations
//!
//! - [`HttpTransport`] - blocking `reqwest` client, the default
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use refine::{HttpTransport, ProjectSource, RefineClient, RefineConfig};
//!
//! let config = RefineConfig::new().with_timeout(Some(Duration::from_secs(5)));
//! let transport = HttpTransport::new(&config).unwrap();
//! let client = RefineClient::connect_with(
//!     transport,
//!     config,
//!     ProjectSource::existing("1234567890123"),
//! )
//! .unwrap();
//! ```

mod blocking;
mod multipart;
mod request;

pub use blocking::HttpTransport;
pub use multipart::{create_boundary, MultipartBody};
pub use request::{HttpResponse, Params, Transport};
