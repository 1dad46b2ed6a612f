mod api_error;
mod client;
pub mod models;

pub use api_error::ApiError;
pub use client::HttpBackend;
pub use models::{BookingRequest, FilterOptions};

use crate::domain::{Listing, ListingPage, SearchCriteria};

/// The remote listings/bookings API.
///
/// Handlers only ever see this trait, so tests can swap the HTTP client for
/// canned responses.
pub trait Backend: Send + Sync {
    /// `GET /listings` for one page of results.
    fn fetch_listings(&self, criteria: &SearchCriteria, page: u32)
        -> Result<ListingPage, ApiError>;

    /// `GET /listings/{id}`. A successful response without a document is `Ok(None)`.
    fn fetch_listing(&self, listing_id: &str) -> Result<Option<Listing>, ApiError>;

    fn fetch_filter_options(&self) -> Result<FilterOptions, ApiError>;

    fn create_booking(&self, booking: &BookingRequest) -> Result<(), ApiError>;
}
