//! OpenF1 API client
//!
//! Request construction, the HTTP transport seam and the typed client that
//! ties them to the resource records in [`crate::models`].

pub mod client;
pub mod error;
pub mod query;
pub mod transport;

pub use client::{OpenF1Client, DEFAULT_BASE_URL};
pub use error::{ClientError, FilterError};
pub use query::{build_url, QueryFilters};
pub use transport::{HttpResponse, HttpTransport, Transport};
