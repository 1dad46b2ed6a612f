use crate::domain::Listing;
use maud::{html, Markup};

/// Search result card linking to the listing's booking page.
pub fn listing_card(listing: &Listing) -> Markup {
    html! {
        article class="card listing-card" data-listing-id=(listing.id) {
            h3 {
                a href=(listing.detail_href()) { (listing.name) }
            }
            p class="muted summary" { (listing.card_summary()) }
            (listing_facts(listing, "Type"))
        }
    }
}

/// Location / type / bedrooms / price / rating rows, shared by the card and
/// the detail page.
pub fn listing_facts(listing: &Listing, type_label: &str) -> Markup {
    html! {
        dl class="facts" {
            div { dt { "Location:" } dd { (listing.market) } }
            div { dt { (type_label) ":" } dd { (listing.property_type) } }
            div { dt { "Bedrooms:" } dd { (listing.bedrooms) } }
            @if let Some(price) = &listing.price {
                div { dt { "Price:" } dd class="price" { "$" (price) " per night" } }
            }
            @if let Some(rating) = listing.rating_label() {
                div {
                    dt { "Rating:" }
                    dd { span class="badge rating" { "★ " (rating) } }
                }
            }
        }
    }
}
