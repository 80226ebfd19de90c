//! Plate lookup against the remote plate information service.
//!
//! One GET per call to `{base_url}/plate/{plate}` using the curl crate
//! (libcurl). No retries, no caching, no timeout unless configured. The plate
//! is put into the path unvalidated (percent-encoded where a URL needs it);
//! the service decides what it means.

mod error;
mod record;
mod response;

pub use error::LookupError;
pub use record::VehicleRecord;

use crate::config::{PartfinderConfig, DEFAULT_LOOKUP_BASE_URL};
use std::time::Duration;

/// Client for the plate information service.
#[derive(Debug, Clone)]
pub struct PlateClient {
    base_url: String,
    timeout: Option<Duration>,
}

impl Default for PlateClient {
    fn default() -> Self {
        Self::new(DEFAULT_LOOKUP_BASE_URL)
    }
}

impl PlateClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: None,
        }
    }

    pub fn from_config(cfg: &PartfinderConfig) -> Self {
        Self::new(cfg.lookup_base_url.clone())
            .with_timeout(cfg.timeout_secs.map(Duration::from_secs))
    }

    /// Overall transfer timeout; `None` leaves libcurl's default.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Request URL for `plate`.
    ///
    /// The plate is not validated. Characters illegal in a URL path (spaces,
    /// non-ASCII) are percent-encoded so the request still reaches the service.
    /// If the result does not parse at all, the raw string is handed to curl.
    pub fn plate_url(&self, plate: &str) -> String {
        let raw = format!("{}/plate/{}", self.base_url.trim_end_matches('/'), plate);
        match url::Url::parse(&raw) {
            Ok(u) => u.into(),
            Err(_) => raw,
        }
    }

    /// Looks up `plate` on a blocking-pool thread.
    pub async fn search(&self, plate: &str) -> Result<VehicleRecord, LookupError> {
        let client = self.clone();
        let plate = plate.to_string();
        tokio::task::spawn_blocking(move || client.search_blocking(&plate)).await?
    }

    /// Performs the GET and maps the status.
    ///
    /// Runs in the current thread; call from `spawn_blocking` (or use
    /// [`PlateClient::search`]) from async code.
    pub fn search_blocking(&self, plate: &str) -> Result<VehicleRecord, LookupError> {
        let url = self.plate_url(plate);
        tracing::debug!(%url, "plate lookup");

        let mut body = Vec::new();
        let mut easy = curl::easy::Easy::new();
        easy.url(&url)?;
        easy.get(true)?;
        easy.follow_location(true)?;
        easy.accept_encoding("")?;
        if let Some(t) = self.timeout {
            easy.timeout(t)?;
        }

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let status = easy.response_code()?;
        tracing::debug!(plate, status, bytes = body.len(), "plate lookup response");
        response::classify_response(status, &body)
    }
}

/// Looks up `plate` against the default service origin.
///
/// Same as `PlateClient::default().search(plate)`.
///
/// ```no_run
/// # async fn demo() -> Result<(), partfinder_core::lookup::LookupError> {
/// let record = partfinder_core::lookup::search_by_plate("ABCD12").await?;
/// println!("{} {} {}", record.brand, record.model, record.year);
/// # Ok(())
/// # }
/// ```
pub async fn search_by_plate(plate: &str) -> Result<VehicleRecord, LookupError> {
    PlateClient::default().search(plate).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plate_url_interpolates_plate() {
        let c = PlateClient::new("http://plates.example");
        assert_eq!(c.plate_url("ABC123"), "http://plates.example/plate/ABC123");
        assert_eq!(c.plate_url(""), "http://plates.example/plate/");
    }

    #[test]
    fn plate_url_percent_encodes_like_a_browser() {
        let c = PlateClient::new("http://plates.example");
        assert_eq!(c.plate_url("ab 12"), "http://plates.example/plate/ab%2012");
        assert_eq!(c.plate_url("ÑAB12"), "http://plates.example/plate/%C3%91AB12");
    }

    #[test]
    fn unparseable_base_is_left_for_curl() {
        let c = PlateClient::new("not a url");
        assert_eq!(c.plate_url("X1"), "not a url/plate/X1");
    }

    #[test]
    fn default_client_targets_service_plate_path() {
        assert_eq!(
            PlateClient::default().plate_url("ABCD12"),
            format!("{}/plate/ABCD12", DEFAULT_LOOKUP_BASE_URL)
        );
    }

    #[test]
    fn plate_url_does_not_double_slash() {
        let c = PlateClient::new("http://plates.example/");
        assert_eq!(c.plate_url("XY99"), "http://plates.example/plate/XY99");
    }

    #[test]
    fn default_client_uses_service_origin() {
        let c = PlateClient::default();
        assert_eq!(c.base_url(), DEFAULT_LOOKUP_BASE_URL);
        assert!(c.timeout.is_none());
    }

    #[test]
    fn from_config_carries_timeout() {
        let cfg = PartfinderConfig {
            lookup_base_url: "https://plates.internal.example".to_string(),
            timeout_secs: Some(7),
        };
        let c = PlateClient::from_config(&cfg);
        assert_eq!(c.base_url(), "https://plates.internal.example");
        assert_eq!(c.timeout, Some(Duration::from_secs(7)));
    }
}
