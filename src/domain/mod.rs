pub mod booking;
pub mod listing;
pub mod price;
pub mod search;

pub use booking::BookingForm;
pub use listing::Listing;
pub use price::Price;
pub use search::{ListingPage, Pagination, SearchCriteria};
