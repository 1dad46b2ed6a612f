use crate::api::BookingRequest;
use crate::domain::{BookingForm, Listing};
use crate::views::{Command, Event, View};
use tracing::{debug, info, warn};

pub const LISTING_FALLBACK: &str = "Failed to fetch property details. Please try again later.";
pub const BOOKING_FALLBACK: &str = "Failed to create booking. Please try again later.";
pub const INCOMPLETE_FORM: &str = "Please fill in all required fields.";

/// What the listing region shows.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    /// No listing identifier yet; nothing to load.
    Idle,
    Loading,
    Failed(String),
    NotFound,
    Loaded(Listing),
}

/// Where the booking form is in its submit cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Ready,
    Submitting,
    Failed(String),
    Confirmed,
}

/// The detail screen: one listing plus the booking form.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    listing_id: Option<String>,
    state: DetailState,
    form: BookingForm,
    submission: Submission,
}

impl Default for DetailView {
    fn default() -> Self {
        Self::new()
    }
}

impl DetailView {
    pub fn new() -> Self {
        Self {
            listing_id: None,
            state: DetailState::Idle,
            form: BookingForm::default(),
            submission: Submission::Ready,
        }
    }

    /// Rebuilds the view for a booking form already on screen for
    /// `listing_id`, e.g. when that form is posted back.
    pub fn resume(listing_id: &str) -> Self {
        Self {
            listing_id: Some(listing_id.to_string()),
            ..Self::new()
        }
    }

    /// Screen shown with whatever identifier navigation carried.
    ///
    /// A blank identifier leaves the view idle. The same identifier again is
    /// a no-op; a different one starts a fresh load with an empty form.
    pub fn activate(&mut self, listing_id: Option<&str>) -> Option<Command> {
        let Some(id) = listing_id.map(str::trim).filter(|id| !id.is_empty()) else {
            debug!("no listing id, nothing to load");
            return None;
        };

        if self.listing_id.as_deref() == Some(id) && self.state != DetailState::Idle {
            return None;
        }

        self.listing_id = Some(id.to_string());
        self.state = DetailState::Loading;
        self.form = BookingForm::default();
        self.submission = Submission::Ready;

        Some(Command::FetchListing {
            listing_id: id.to_string(),
        })
    }

    /// Fetches the listing again without touching the form or the last
    /// submission outcome. Used to redraw the whole screen after a failed post.
    pub fn reload(&mut self) -> Option<Command> {
        let listing_id = self.listing_id.clone()?;
        self.state = DetailState::Loading;
        Some(Command::FetchListing { listing_id })
    }

    pub fn edit(&mut self, form: BookingForm) {
        self.form = form;
    }

    /// Booking form submitted. Returns the request to send, or `None` when
    /// nothing should go out (already in flight, confirmed, or incomplete).
    pub fn submit(&mut self) -> Option<Command> {
        let listing_id = self.listing_id.clone()?;

        if matches!(self.submission, Submission::Submitting | Submission::Confirmed) {
            debug!(submission = ?self.submission, "ignoring duplicate booking submit");
            return None;
        }

        if !self.form.is_complete() {
            debug!(missing = ?self.form.missing_fields(), "booking form incomplete");
            self.submission = Submission::Failed(INCOMPLETE_FORM.to_string());
            return None;
        }

        self.submission = Submission::Submitting;
        Some(Command::CreateBooking(BookingRequest::new(
            &listing_id,
            &self.form,
        )))
    }

    pub fn listing_id(&self) -> Option<&str> {
        self.listing_id.as_deref()
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    pub fn form(&self) -> &BookingForm {
        &self.form
    }

    pub fn submission(&self) -> &Submission {
        &self.submission
    }

    pub fn is_confirmed(&self) -> bool {
        self.submission == Submission::Confirmed
    }
}

impl View for DetailView {
    fn apply(&mut self, event: Event) {
        match event {
            Event::ListingLoaded(Ok(Some(listing))) => self.state = DetailState::Loaded(listing),
            Event::ListingLoaded(Ok(None)) => self.state = DetailState::NotFound,
            Event::ListingLoaded(Err(e)) => {
                warn!(listing_id = ?self.listing_id, error = %e, "failed to fetch listing");
                self.state = DetailState::Failed(e.user_message(LISTING_FALLBACK));
            }
            Event::BookingSubmitted(Ok(())) => {
                info!(listing_id = ?self.listing_id, "booking created");
                self.submission = Submission::Confirmed;
            }
            Event::BookingSubmitted(Err(e)) => {
                warn!(listing_id = ?self.listing_id, error = %e, "booking failed");
                self.submission = Submission::Failed(e.user_message(BOOKING_FALLBACK));
            }
            other => debug!(event = ?other, "detail view ignoring event"),
        }
    }
}
