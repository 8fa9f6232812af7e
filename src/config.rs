//! Backend origin configuration.
//!
//! The only externally configurable behavior in this layer: which REST
//! backend the client talks to. Baked in at compile time so the WASM
//! bundle needs no runtime config fetch.

/// Base URL of the Sahay REST backend.
///
/// Set `SAHAY_API_URL` at build time to point at a deployed backend;
/// defaults to a local development server.
pub fn api_base_url() -> &'static str {
    option_env!("SAHAY_API_URL").unwrap_or("http://localhost:8000")
}
