//! Per-screen state machines.
//!
//! A view never talks to the backend itself. Lifecycle hooks (`activate`,
//! `submit`, ...) move it into a waiting state and hand back the [`Command`]s
//! to run; whoever runs them feeds the resulting [`Event`]s to `apply`. That
//! keeps every transition a plain function of (state, event).

pub mod detail;
pub mod search;

pub use detail::{DetailState, DetailView, Submission};
pub use search::{ResultsState, SearchView};

use crate::api::{ApiError, Backend, BookingRequest, FilterOptions};
use crate::domain::{Listing, ListingPage, SearchCriteria};
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    FetchFilterOptions,
    FetchListings { criteria: SearchCriteria, page: u32 },
    FetchListing { listing_id: String },
    CreateBooking(BookingRequest),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    FilterOptionsLoaded(Result<FilterOptions, ApiError>),
    ListingsLoaded(Result<ListingPage, ApiError>),
    ListingLoaded(Result<Option<Listing>, ApiError>),
    BookingSubmitted(Result<(), ApiError>),
}

impl Command {
    /// Runs the command against the backend and reports how it resolved.
    pub fn run(self, backend: &dyn Backend) -> Event {
        debug!(command = ?self, "running view command");

        match self {
            Command::FetchFilterOptions => Event::FilterOptionsLoaded(backend.fetch_filter_options()),
            Command::FetchListings { criteria, page } => {
                Event::ListingsLoaded(backend.fetch_listings(&criteria, page))
            }
            Command::FetchListing { listing_id } => {
                Event::ListingLoaded(backend.fetch_listing(&listing_id))
            }
            Command::CreateBooking(booking) => {
                Event::BookingSubmitted(backend.create_booking(&booking))
            }
        }
    }
}

pub trait View {
    fn apply(&mut self, event: Event);
}

/// Runs each command in order, feeding its event back before the next one.
/// The last response to resolve is what the view ends up showing.
pub fn drive<V, I>(view: &mut V, backend: &dyn Backend, commands: I)
where
    V: View,
    I: IntoIterator<Item = Command>,
{
    for command in commands {
        let event = command.run(backend);
        view.apply(event);
    }
}
