//! Items API Client
//!
//! REST wrappers for the four item operations. No retries, no timeouts;
//! callers decide how to surface failures.

use std::fmt;

use gloo_net::http::{Request, Response};

use crate::config;
use crate::models::{Item, ItemInput};

/// Repository call failure
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Transport or decoding failure, request may never have reached the server
    Network(String),
    /// Server answered with a non-2xx status
    Status(u16),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "network error: {}", msg),
            ApiError::Status(status) => write!(f, "server responded with status {}", status),
        }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

fn join_items_url(base: &str) -> String {
    format!("{}/api/items", base.trim_end_matches('/'))
}

fn items_url() -> String {
    join_items_url(config::api_base())
}

fn item_url(id: &str) -> String {
    format!("{}/{}", items_url(), id)
}

fn check_status(resp: Response) -> Result<Response, ApiError> {
    if resp.ok() {
        Ok(resp)
    } else {
        Err(ApiError::Status(resp.status()))
    }
}

/// GET all items (the full collection, no server-side pagination)
pub async fn list_items() -> Result<Vec<Item>, ApiError> {
    let resp = Request::get(&items_url()).send().await?;
    Ok(check_status(resp)?.json::<Vec<Item>>().await?)
}

/// POST a new item; the server assigns the id and returns the canonical record
pub async fn create_item(input: &ItemInput) -> Result<Item, ApiError> {
    let resp = Request::post(&items_url()).json(input)?.send().await?;
    Ok(check_status(resp)?.json::<Item>().await?)
}

/// PUT an existing item; returns the canonical record
pub async fn update_item(id: &str, input: &ItemInput) -> Result<Item, ApiError> {
    let resp = Request::put(&item_url(id)).json(input)?.send().await?;
    Ok(check_status(resp)?.json::<Item>().await?)
}

/// DELETE an item by id
pub async fn delete_item(id: &str) -> Result<(), ApiError> {
    let resp = Request::delete(&item_url(id)).send().await?;
    check_status(resp)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_items_url() {
        assert_eq!(
            join_items_url("http://localhost:5000"),
            "http://localhost:5000/api/items"
        );
    }

    #[test]
    fn test_join_items_url_trims_trailing_slash() {
        assert_eq!(
            join_items_url("https://example.com/"),
            "https://example.com/api/items"
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            ApiError::Status(404).to_string(),
            "server responded with status 404"
        );
        assert_eq!(
            ApiError::Network("offline".to_string()).to_string(),
            "network error: offline"
        );
    }
}
