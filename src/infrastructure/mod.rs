// Outbound plumbing: token persistence and the HTTP pipeline
pub mod http;
pub mod token_store;

pub use http::{HttpClient, api_path, default_transport};
pub use token_store::{BrowserTokenStore, MemoryTokenStore, TokenStore, TOKEN_KEY};
