// client.rs
use crate::api::models::{decode_envelope, Envelope, FilterOptions, WireListing};
use crate::api::{ApiError, Backend, BookingRequest};
use crate::domain::{Listing, ListingPage, SearchCriteria};
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use std::time::{Duration, Instant};
use tracing::{debug, warn};
use url::Url;

const USER_AGENT: &str = concat!("stayfinder/", env!("CARGO_PKG_VERSION"));

/// Blocking HTTP client for the listings/bookings API.
pub struct HttpBackend {
    client: Client,
    base_url: Url,
}

impl HttpBackend {
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    /// Appends path segments to the base address, percent-encoding each one.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::Transport(format!("{} cannot be a base URL", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<Envelope<T>, ApiError> {
        let start = Instant::now();

        let resp = request
            .header(ACCEPT, "application/json")
            .send()
            .map_err(|e| {
                warn!(error = %e, "backend request failed");
                ApiError::Transport(e.to_string())
            })?;

        let status = resp.status();
        let url = resp.url().clone();
        let text = resp
            .text()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        debug!(%url, %status, elapsed = ?start.elapsed(), "backend responded");

        decode_envelope(status.as_u16(), &text).map_err(|e| {
            warn!(%url, %status, error = %e, "backend call unsuccessful");
            e
        })
    }
}

impl Backend for HttpBackend {
    fn fetch_listings(
        &self,
        criteria: &SearchCriteria,
        page: u32,
    ) -> Result<ListingPage, ApiError> {
        let url = self.endpoint(&["listings"])?;
        let request = self.client.get(url).query(&criteria.query_pairs(page));

        let env: Envelope<Vec<WireListing>> = self.send(request)?;
        Ok(env.into_listing_page())
    }

    fn fetch_listing(&self, listing_id: &str) -> Result<Option<Listing>, ApiError> {
        let url = self.endpoint(&["listings", listing_id])?;

        let env: Envelope<WireListing> = self.send(self.client.get(url))?;
        Ok(env.data.map(Listing::from))
    }

    fn fetch_filter_options(&self) -> Result<FilterOptions, ApiError> {
        let url = self.endpoint(&["filter-options"])?;

        let env: Envelope<FilterOptions> = self.send(self.client.get(url))?;
        Ok(env.data.unwrap_or_default())
    }

    fn create_booking(&self, booking: &BookingRequest) -> Result<(), ApiError> {
        let url = self.endpoint(&["bookings"])?;

        let _: Envelope<serde_json::Value> = self.send(self.client.post(url).json(booking))?;
        Ok(())
    }
}
