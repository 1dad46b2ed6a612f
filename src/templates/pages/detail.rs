use crate::templates::components::{back_to_search, error_banner, listing_facts, spinner};
use crate::templates::desktop_layout;
use crate::views::{DetailState, DetailView, Submission};
use chrono::NaiveDate;
use maud::{html, Markup};

pub fn detail_page(view: &DetailView, details_url: Option<&str>, today: NaiveDate) -> Markup {
    let title = match view.state() {
        DetailState::Loaded(listing) => listing.name.as_str(),
        _ => "Property details",
    };

    desktop_layout(
        title,
        html! {
            (back_to_search())
            (details_section(view, details_url, today))
        },
    )
}

fn state_name(state: &DetailState) -> &'static str {
    match state {
        DetailState::Idle => "idle",
        DetailState::Loading => "loading",
        DetailState::Failed(_) => "error",
        DetailState::NotFound => "not-found",
        DetailState::Loaded(_) => "loaded",
    }
}

/// Listing region of the detail page; served alone as the htmx fragment.
pub fn details_section(view: &DetailView, lazy_url: Option<&str>, today: NaiveDate) -> Markup {
    html! {
        div
            id="details"
            data-state=(state_name(view.state()))
            hx-get=[lazy_url]
            hx-trigger=[lazy_url.map(|_| "load")]
            hx-swap=[lazy_url.map(|_| "outerHTML")]
        {
            @match view.state() {
                DetailState::Idle => {
                    div class="card center" {
                        p class="muted" { "No property selected." }
                        p { "Pick a listing from the search results to book it." }
                    }
                }
                DetailState::Loading => (spinner("Loading property details...")),
                DetailState::Failed(message) => (error_banner(message)),
                DetailState::NotFound => {
                    div class="center" {
                        p class="muted" { "Property not found" }
                    }
                }
                DetailState::Loaded(listing) => {
                    article class="card" {
                        h1 { (listing.name) }
                        p class="muted" { (listing.summary) }
                        (listing_facts(listing, "Property Type"))
                    }
                    section class="card" {
                        h2 { "Book Your Stay" }
                        (booking_form(view, today))
                    }
                }
            }
        }
    }
}

// Plain form posts have no hx-disabled-elt; stop a second click going out.
const DISABLE_ON_SUBMIT: &str = "this.querySelector('#book-now').disabled = true";

/// The booking form. Posting it with htmx swaps this same element, so a
/// failed attempt comes back with the error and every typed value.
pub fn booking_form(view: &DetailView, today: NaiveDate) -> Markup {
    let form = view.form();
    let today = today.to_string();
    let check_out_min = if form.check_in.is_empty() {
        today.as_str()
    } else {
        form.check_in.as_str()
    };

    html! {
        form
            id="booking-form"
            class="booking-form"
            method="post"
            action="/bookings"
            hx-post="/bookings"
            hx-target="this"
            hx-swap="outerHTML"
            hx-disabled-elt="#book-now"
            onsubmit=(DISABLE_ON_SUBMIT)
        {
            @if let Submission::Failed(message) = view.submission() {
                (error_banner(message))
            }

            input type="hidden" name="listing_id" value=(view.listing_id().unwrap_or_default());

            div class="grid-2" {
                (date_field("checkIn", "Check-in Date *", &form.check_in, &today))
                (date_field("checkOut", "Check-out Date *", &form.check_out, check_out_min))
            }

            (input_field("name", "Full Name *", "text", &form.name))
            (input_field("email", "Email Address *", "email", &form.email))

            div class="grid-2" {
                (input_field("daytimePhone", "Daytime Phone Number *", "tel", &form.daytime_phone))
                (input_field("mobilePhone", "Mobile Phone Number *", "tel", &form.mobile_phone))
            }

            (textarea_field("postalAddress", "Postal Address *", &form.postal_address))
            (textarea_field("homeAddress", "Home Address *", &form.home_address))

            div class="actions" {
                button id="book-now" type="submit" class="btn primary" {
                    span class="when-idle" { "Book Now" }
                    span class="when-busy" { "Processing..." }
                }
            }
        }
    }
}

/// Booking form on a page of its own, for form posts made without htmx.
pub fn booking_form_page(view: &DetailView, today: NaiveDate) -> Markup {
    desktop_layout(
        "Book your stay",
        html! {
            (back_to_search())
            section class="card" {
                h2 { "Book Your Stay" }
                (booking_form(view, today))
            }
        },
    )
}

fn date_field(name: &str, label: &str, value: &str, min: &str) -> Markup {
    html! {
        div {
            label for=(name) { (label) }
            input type="date" id=(name) name=(name) value=(value) min=(min) required;
        }
    }
}

fn input_field(name: &str, label: &str, input_type: &str, value: &str) -> Markup {
    html! {
        div {
            label for=(name) { (label) }
            input type=(input_type) id=(name) name=(name) value=(value) required;
        }
    }
}

fn textarea_field(name: &str, label: &str, value: &str) -> Markup {
    html! {
        div {
            label for=(name) { (label) }
            textarea id=(name) name=(name) rows="3" required { (value) }
        }
    }
}
