pub mod client;
pub mod transport;

#[cfg(test)]
pub(crate) mod testing;

pub use client::{HttpClient, api_path};
pub use transport::{ApiRequest, Method, RawResponse, Transport, default_transport};
