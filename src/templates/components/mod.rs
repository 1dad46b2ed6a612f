use maud::{html, Markup};

pub mod error;
pub mod listing;
pub mod pagination;

pub use error::html_error_response;
pub use listing::{listing_card, listing_facts};
pub use pagination::pagination_controls;

pub fn spinner(message: &str) -> Markup {
    html! {
        div class="loading" role="status" {
            div class="spinner" aria-hidden="true" {}
            p class="muted" { (message) }
        }
    }
}

pub fn error_banner(message: &str) -> Markup {
    html! {
        div class="alert alert-error" role="alert" { (message) }
    }
}

pub fn back_to_search() -> Markup {
    html! {
        a href="/" class="back-link" { "← Return to search" }
    }
}
