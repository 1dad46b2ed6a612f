use crate::api::FilterOptions;
use crate::domain::{Listing, Pagination, SearchCriteria};
use crate::views::{Command, Event, View};
use tracing::{debug, warn};

pub const LISTINGS_FALLBACK: &str = "Failed to fetch properties. Please try again later.";

/// What the results area shows. Exactly one at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultsState {
    Idle,
    Loading,
    Failed(String),
    Empty,
    Populated(Vec<Listing>),
}

/// The search screen: filter form, results and paging.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchView {
    criteria: SearchCriteria,
    filter_options: FilterOptions,
    pagination: Pagination,
    results: ResultsState,
}

impl Default for SearchView {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchView {
    pub fn new() -> Self {
        Self {
            criteria: SearchCriteria::default(),
            filter_options: FilterOptions::default(),
            pagination: Pagination::default(),
            results: ResultsState::Idle,
        }
    }

    /// Screen shown: load the select choices and the requested page
    /// (page 1 with empty criteria on a first visit).
    pub fn activate(&mut self, criteria: SearchCriteria, page: u32) -> Vec<Command> {
        vec![Command::FetchFilterOptions, self.load_page(criteria, page)]
    }

    /// A new search always starts again from page 1.
    pub fn submit(&mut self, criteria: SearchCriteria) -> Command {
        self.load_page(criteria, 1)
    }

    /// Starts a fetch for `page` of `criteria`. Pager controls land here
    /// with the page they point at; controls past either end are disabled.
    pub fn load_page(&mut self, criteria: SearchCriteria, page: u32) -> Command {
        self.criteria = criteria;
        self.results = ResultsState::Loading;
        Command::FetchListings {
            criteria: self.criteria.clone(),
            page: page.max(1),
        }
    }

    pub fn criteria(&self) -> &SearchCriteria {
        &self.criteria
    }

    pub fn filter_options(&self) -> &FilterOptions {
        &self.filter_options
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn results(&self) -> &ResultsState {
        &self.results
    }
}

impl View for SearchView {
    fn apply(&mut self, event: Event) {
        match event {
            Event::FilterOptionsLoaded(Ok(options)) => self.filter_options = options,
            // The selects just keep their blank choice.
            Event::FilterOptionsLoaded(Err(e)) => {
                warn!(error = %e, "failed to fetch filter options");
            }
            Event::ListingsLoaded(Ok(page)) => {
                self.pagination = page.pagination;
                self.results = if page.listings.is_empty() {
                    ResultsState::Empty
                } else {
                    ResultsState::Populated(page.listings)
                };
            }
            Event::ListingsLoaded(Err(e)) => {
                warn!(error = %e, "failed to fetch listings");
                self.results = ResultsState::Failed(e.user_message(LISTINGS_FALLBACK));
            }
            other => debug!(event = ?other, "search view ignoring event"),
        }
    }
}
