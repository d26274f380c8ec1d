//! Static map image provider.
//!
//! This module provides the HTTP seam and the static-map endpoint client
//! used by the follower to fetch a rendered map image centered on the
//! current fix.
//!
//! # Testability
//!
//! All network access goes through the [`HttpClient`] trait, so tests
//! inject a mock client instead of hitting the real endpoint.

mod http;
mod static_map;

pub use http::{HttpClient, ReqwestClient};
pub use static_map::{StaticMapProvider, DEFAULT_BASE_URL, MAP_IMAGE_SIZE, MAP_ZOOM};

use thiserror::Error;

/// Errors that can occur while fetching a map image.
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    /// The HTTP request failed or returned a non-success status.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The endpoint answered successfully but with no image bytes.
    #[error("map endpoint returned an empty body")]
    EmptyBody,
}

#[cfg(test)]
pub use http::tests::MockHttpClient;
