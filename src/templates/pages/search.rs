use crate::api::FilterOptions;
use crate::domain::SearchCriteria;
use crate::templates::components::{error_banner, listing_card, pagination_controls, spinner};
use crate::templates::desktop_layout;
use crate::views::{ResultsState, SearchView};
use maud::{html, Markup};

/// Full search page. `results_url` is set while the results are still to be
/// fetched; the results region then loads itself from it.
pub fn search_page(view: &SearchView, results_url: Option<&str>) -> Markup {
    desktop_layout(
        "Find your next stay",
        html! {
            section class="card" {
                h2 { "Find your next stay" }
                (search_form(view.criteria(), view.filter_options()))
            }

            section class="card" {
                (results_section(view, results_url))
            }
        },
    )
}

fn search_form(criteria: &SearchCriteria, options: &FilterOptions) -> Markup {
    html! {
        form method="get" action="/" class="search-form" {
            div class="grid-3" {
                div {
                    label for="location" { "Location *" }
                    input
                        type="text"
                        id="location"
                        name="location"
                        value=(criteria.location)
                        placeholder="Enter location"
                        list="location-options"
                        required;
                    datalist id="location-options" {
                        @for location in &options.locations {
                            option value=(location) {}
                        }
                    }
                }
                div {
                    label for="property_type" { "Property Type" }
                    select id="property_type" name="property_type" {
                        option value="" { "All Types" }
                        @for t in &options.property_types {
                            option value=(t) selected[criteria.property_type.as_deref() == Some(t.as_str())] { (t) }
                        }
                    }
                }
                div {
                    label for="bedrooms" { "Bedrooms" }
                    select id="bedrooms" name="bedrooms" {
                        option value="" { "Any" }
                        @for n in &options.bedroom_counts {
                            option value=(n) selected[selected_bedrooms(criteria) == Some(*n)] {
                                (n) " " (bedroom_noun(*n))
                            }
                        }
                    }
                }
            }
            div class="actions" {
                button type="submit" class="btn primary" { "Search" }
            }
        }
    }
}

fn selected_bedrooms(criteria: &SearchCriteria) -> Option<u32> {
    criteria.bedrooms.as_deref().and_then(|b| b.parse().ok())
}

fn bedroom_noun(n: u32) -> &'static str {
    if n == 1 {
        "Bedroom"
    } else {
        "Bedrooms"
    }
}

fn property_noun(n: u64) -> &'static str {
    if n == 1 {
        "property"
    } else {
        "properties"
    }
}

fn state_name(state: &ResultsState) -> &'static str {
    match state {
        ResultsState::Idle => "idle",
        ResultsState::Loading => "loading",
        ResultsState::Failed(_) => "error",
        ResultsState::Empty => "empty",
        ResultsState::Populated(_) => "populated",
    }
}

/// The results region. Also served on its own as the htmx fragment.
pub fn results_section(view: &SearchView, lazy_url: Option<&str>) -> Markup {
    let results = view.results();
    let pagination = view.pagination();

    html! {
        div
            id="results"
            class="results"
            data-state=(state_name(results))
            hx-get=[lazy_url]
            hx-trigger=[lazy_url.map(|_| "load")]
            hx-swap=[lazy_url.map(|_| "outerHTML")]
        {
            div class="results-header" {
                h2 {
                    @if view.criteria().is_search() { "Search Results" } @else { "Featured Properties" }
                }
                @if let ResultsState::Populated(_) = results {
                    span class="muted result-count" {
                        "Found " (pagination.total_count) " " (property_noun(pagination.total_count))
                    }
                }
            }

            @match results {
                ResultsState::Idle => {}
                ResultsState::Loading => (spinner("Loading properties...")),
                ResultsState::Failed(message) => (error_banner(message)),
                ResultsState::Empty => {
                    div class="center empty" {
                        p class="muted" { "No properties found matching your criteria." }
                    }
                }
                ResultsState::Populated(listings) => {
                    div class="listing-grid" {
                        @for listing in listings {
                            (listing_card(listing))
                        }
                    }
                    (pagination_controls(view.criteria(), pagination))
                }
            }
        }
    }
}
