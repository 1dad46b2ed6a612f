use crate::domain::{Pagination, SearchCriteria};
use maud::{html, Markup};

/// Previous / "Page X of Y" / Next. Only rendered for more than one page.
///
/// Each control is a small GET form back to the search page carrying the
/// current criteria, so paging works with or without htmx.
pub fn pagination_controls(criteria: &SearchCriteria, pagination: &Pagination) -> Markup {
    html! {
        @if pagination.is_paginated() {
            nav class="pagination" aria-label="Pagination" {
                (page_button(criteria, "Previous", pagination.previous_page()))
                span class="page-status" {
                    "Page " (pagination.current_page) " of " (pagination.total_pages)
                }
                (page_button(criteria, "Next", pagination.next_page()))
            }
        }
    }
}

fn page_button(criteria: &SearchCriteria, label: &str, target: Option<u32>) -> Markup {
    html! {
        form method="get" action="/" class="page-control" {
            (criteria_inputs(criteria))
            @if let Some(page) = target {
                input type="hidden" name="page" value=(page);
            }
            button type="submit" class="btn" disabled[target.is_none()] { (label) }
        }
    }
}

pub fn criteria_inputs(criteria: &SearchCriteria) -> Markup {
    html! {
        @if criteria.is_search() {
            input type="hidden" name="location" value=(criteria.location);
        }
        @if let Some(t) = &criteria.property_type {
            input type="hidden" name="property_type" value=(t);
        }
        @if let Some(b) = &criteria.bedrooms {
            input type="hidden" name="bedrooms" value=(b);
        }
    }
}
