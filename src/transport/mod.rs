//! HTTP transport to the CMS backend.

mod http;

pub use http::{HttpTransport, RequestOptions, TransportError};
