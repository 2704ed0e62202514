/// Venue-agnostic transport layer.
///
/// The kernel carries no venue-specific logic: signing and query composition
/// live with the exchanges, which hand the finished query string and headers
/// to a [`RestClient`]. Keeping the seam here lets tests drive the whole
/// client stack with injected stub transports.
pub mod rest;

pub use rest::{ReqwestRest, RestClient, RestClientConfig};
