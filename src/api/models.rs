use crate::api::ApiError;
use crate::domain::{BookingForm, Listing, ListingPage, Pagination, Price};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

// Listing document
//  ├── _id
//  ├── name / summary / property_type / bedrooms
//  ├── price            ({ "$numberDecimal": "80.00" } | "80" | 80)
//  ├── address
//  │    └── market
//  └── review_scores
//       └── review_scores_rating

#[derive(Debug, Deserialize)]
pub struct WireListing {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: Option<String>,
    pub summary: Option<String>,
    pub property_type: Option<String>,
    pub bedrooms: Option<u32>,
    pub price: Option<WirePrice>,
    pub address: Option<WireAddress>,
    pub review_scores: Option<WireReviewScores>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum WirePrice {
    Decimal {
        #[serde(rename = "$numberDecimal")]
        number_decimal: String,
    },
    Text(String),
    Number(serde_json::Number),
}

#[derive(Debug, Deserialize)]
pub struct WireAddress {
    pub market: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct WireReviewScores {
    pub review_scores_rating: Option<f64>,
}

impl From<WirePrice> for Price {
    fn from(wire: WirePrice) -> Self {
        match wire {
            WirePrice::Decimal { number_decimal } => Price::Decimal(number_decimal),
            WirePrice::Text(s) => Price::Plain(s),
            WirePrice::Number(n) => Price::Plain(number_text(&n)),
        }
    }
}

/// JSON numbers print the way JavaScript would: `99.0` as "99".
fn number_text(n: &serde_json::Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.is_finite() && f.fract() == 0.0 => format!("{f:.0}"),
        _ => n.to_string(),
    }
}

impl From<WireListing> for Listing {
    fn from(wire: WireListing) -> Self {
        Listing {
            id: wire.id,
            name: wire.name.unwrap_or_default(),
            summary: wire.summary.unwrap_or_default(),
            property_type: wire.property_type.unwrap_or_default(),
            bedrooms: wire.bedrooms.unwrap_or_default(),
            price: wire.price.map(|p| Price::from(p).display()),
            market: wire.address.and_then(|a| a.market).unwrap_or_default(),
            rating: wire.review_scores.and_then(|r| r.review_scores_rating),
        }
    }
}

/// Choices for the search form's selects.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterOptions {
    pub locations: Vec<String>,
    pub property_types: Vec<String>,
    pub bedroom_counts: Vec<u32>,
}

/// `POST /bookings` payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    #[serde(rename = "listingID")]
    pub listing_id: String,
    pub start_date: String,
    pub end_date: String,
    pub name: String,
    pub email: String,
    pub daytime_phone: String,
    pub mobile_phone: String,
    pub postal_address: String,
    pub home_address: String,
}

impl BookingRequest {
    pub fn new(listing_id: &str, form: &BookingForm) -> Self {
        Self {
            listing_id: listing_id.to_string(),
            start_date: form.check_in.clone(),
            end_date: form.check_out.clone(),
            name: form.name.clone(),
            email: form.email.clone(),
            daytime_phone: form.daytime_phone.clone(),
            mobile_phone: form.mobile_phone.clone(),
            postal_address: form.postal_address.clone(),
            home_address: form.home_address.clone(),
        }
    }
}

/// Body shared by every endpoint.
///
/// Listings endpoints report failures under `error`, filter options under
/// `message`; both are read so callers never care which one was used.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
    pub message: Option<String>,
    pub total_count: Option<u64>,
    pub total_pages: Option<u32>,
    pub current_page: Option<u32>,
}

impl<T> Envelope<T> {
    fn failure_message(&self) -> String {
        self.error
            .as_deref()
            .or(self.message.as_deref())
            .unwrap_or_default()
            .to_string()
    }
}

impl Envelope<Vec<WireListing>> {
    pub fn into_listing_page(self) -> ListingPage {
        let listings: Vec<Listing> = self
            .data
            .unwrap_or_default()
            .into_iter()
            .map(Listing::from)
            .collect();

        let pagination = Pagination::new(
            self.total_count.unwrap_or(listings.len() as u64),
            self.total_pages.unwrap_or(1),
            self.current_page.unwrap_or(1),
        );

        ListingPage {
            listings,
            pagination,
        }
    }
}

/// Turns an HTTP status and body into an envelope that reported success.
///
/// A body the API could not have meant as an envelope is a transport failure
/// on non-2xx statuses and a decode failure otherwise.
pub fn decode_envelope<T: DeserializeOwned>(
    status: u16,
    body: &str,
) -> Result<Envelope<T>, ApiError> {
    let ok_status = (200..300).contains(&status);

    match serde_json::from_str::<Envelope<T>>(body) {
        Ok(env) if env.success && ok_status => Ok(env),
        Ok(env) => Err(ApiError::Application(env.failure_message())),
        Err(e) if ok_status => Err(ApiError::Decode(e.to_string())),
        Err(_) => Err(ApiError::Transport(format!("HTTP {status}"))),
    }
}
