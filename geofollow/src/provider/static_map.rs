//! Static map endpoint client.
//!
//! Builds the `center`/`zoom`/`size`/`key` query for a static-map image
//! provider (Google Maps Static API by default) and fetches the rendered
//! image bytes through an injected [`HttpClient`].
//!
//! Requires a valid API key from the deployer; there is no anonymous tier.

use tracing::debug;

use crate::coord::Coordinate;
use crate::provider::{HttpClient, ProviderError};

/// Default static map endpoint (Google Maps Static API).
pub const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/staticmap?";

/// Zoom level requested for every map image.
pub const MAP_ZOOM: u8 = 18;

/// Edge length in pixels of the requested image (640 is the API's free-tier cap).
pub const MAP_IMAGE_SIZE: u32 = 640;

/// Client for a static-map image endpoint.
///
/// # Example
///
/// ```no_run
/// use geofollow::provider::{ReqwestClient, StaticMapProvider};
/// use geofollow::coord::Coordinate;
///
/// let client = ReqwestClient::new().unwrap();
/// let provider = StaticMapProvider::new(client, "YOUR_API_KEY".to_string());
/// let bytes = provider.fetch(Coordinate::new(35.6586, 139.7454)).unwrap();
/// ```
pub struct StaticMapProvider<C: HttpClient> {
    http_client: C,
    base_url: String,
    api_key: String,
    zoom: u8,
    image_size: u32,
}

impl<C: HttpClient> StaticMapProvider<C> {
    /// Creates a provider against the default endpoint.
    pub fn new(http_client: C, api_key: String) -> Self {
        Self {
            http_client,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key,
            zoom: MAP_ZOOM,
            image_size: MAP_IMAGE_SIZE,
        }
    }

    /// Overrides the endpoint base URL (must end with `?`).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Overrides the requested zoom level.
    pub fn with_zoom(mut self, zoom: u8) -> Self {
        self.zoom = zoom;
        self
    }

    #[cfg(test)]
    pub(crate) fn http_client(&self) -> &C {
        &self.http_client
    }

    /// Builds the request URL for a map centered on `center`.
    fn build_url(&self, center: Coordinate) -> String {
        format!(
            "{}center={},{}&zoom={}&size={}x{}&key={}",
            self.base_url,
            center.latitude,
            center.longitude,
            self.zoom,
            self.image_size,
            self.image_size,
            self.api_key
        )
    }

    /// Fetches the map image centered on `center`.
    ///
    /// Blocks until the response arrives or the client times out. Returns
    /// the raw image bytes; decoding is the display layer's concern.
    pub fn fetch(&self, center: Coordinate) -> Result<Vec<u8>, ProviderError> {
        let url = self.build_url(center);
        debug!(lat = center.latitude, lon = center.longitude, "fetching map image");

        let bytes = self.http_client.get(&url)?;
        if bytes.is_empty() {
            return Err(ProviderError::EmptyBody);
        }
        Ok(bytes)
    }
}
