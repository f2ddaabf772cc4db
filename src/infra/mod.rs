pub mod http_client;

pub use http_client::{html_from_response, MediaWikiClient};
