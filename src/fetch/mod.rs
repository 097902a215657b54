//! JSON fetching over HTTP.
//!
//! [`HttpFetcher::fetch_json`] performs one GET, reads the whole body and
//! parses it. Each failure maps to its own [`ShopError`](crate::ShopError)
//! variant: `Transport`, `HttpStatus` or `MalformedJson`.

pub mod http;

pub use http::{parse_json, render_json, HttpFetcher};
