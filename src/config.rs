//! API Configuration
//!
//! Single process-wide base URL for the items API. CSR builds have no
//! runtime environment, so the value is resolved at compile time
//! (Trunk passes `API_BASE_URL` through to rustc).

const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// Base URL for all repository operations
pub fn api_base() -> &'static str {
    option_env!("API_BASE_URL").unwrap_or(DEFAULT_API_BASE)
}
