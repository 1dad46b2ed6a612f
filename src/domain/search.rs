use crate::domain::Listing;
use std::collections::HashMap;

/// Filters typed into the search form. Blank inputs are stored as absent so
/// they are never forwarded to the API.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    pub location: String,
    pub property_type: Option<String>,
    /// Integer carried as a string, the way the select submits it.
    pub bedrooms: Option<String>,
}

impl SearchCriteria {
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        let non_blank = |key: &str| {
            params
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };

        Self {
            location: non_blank("location").unwrap_or_default(),
            property_type: non_blank("property_type"),
            bedrooms: non_blank("bedrooms").filter(|b| b.parse::<u32>().is_ok()),
        }
    }

    /// True once the user has submitted a location; the initial query is a
    /// "featured" listing with no criteria at all.
    pub fn is_search(&self) -> bool {
        !self.location.is_empty()
    }

    /// Query parameters for `GET /listings`, in the order the API documents them.
    pub fn query_pairs(&self, page: u32) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(4);
        if self.is_search() {
            pairs.push(("location", self.location.clone()));
        }
        if let Some(t) = &self.property_type {
            pairs.push(("property_type", t.clone()));
        }
        if let Some(b) = &self.bedrooms {
            pairs.push(("bedrooms", b.clone()));
        }
        pairs.push(("page", page.to_string()));
        pairs
    }

    pub fn query_string(&self, page: u32) -> String {
        let mut ser = url::form_urlencoded::Serializer::new(String::new());
        for (k, v) in self.query_pairs(page) {
            ser.append_pair(k, &v);
        }
        ser.finish()
    }
}

/// Reads a 1-indexed page number; anything missing or malformed means page 1.
pub fn parse_page(raw: Option<&String>) -> u32 {
    raw.and_then(|p| p.trim().parse::<u32>().ok())
        .filter(|p| *p >= 1)
        .unwrap_or(1)
}

/// Paging info from the last successful listing query.
///
/// Invariant: `1 <= current_page <= total_pages`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub total_count: u64,
    pub total_pages: u32,
    pub current_page: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            total_count: 0,
            total_pages: 1,
            current_page: 1,
        }
    }
}

impl Pagination {
    pub fn new(total_count: u64, total_pages: u32, current_page: u32) -> Self {
        let total_pages = total_pages.max(1);
        Self {
            total_count,
            total_pages,
            current_page: current_page.clamp(1, total_pages),
        }
    }

    pub fn is_paginated(&self) -> bool {
        self.total_pages > 1
    }

    /// `None` on the first page, which is what disables "Previous".
    pub fn previous_page(&self) -> Option<u32> {
        (self.current_page > 1).then(|| self.current_page - 1)
    }

    /// `None` on the last page, which is what disables "Next".
    pub fn next_page(&self) -> Option<u32> {
        (self.current_page < self.total_pages).then(|| self.current_page + 1)
    }
}

/// One page of search results.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingPage {
    pub listings: Vec<Listing>,
    pub pagination: Pagination,
}
