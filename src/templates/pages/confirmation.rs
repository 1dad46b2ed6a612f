use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn confirmation_page() -> Markup {
    desktop_layout(
        "Booking confirmed",
        html! {
            section class="card narrow center" {
                div class="check" aria-hidden="true" { "✓" }
                h1 { "Booking Confirmed!" }
                p class="muted" { "Thank you for your booking!" }
                a href="/" class="btn primary" { "Return to Search" }
            }
        },
    )
}
