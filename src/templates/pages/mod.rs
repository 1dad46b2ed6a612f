pub mod confirmation;
pub mod detail;
pub mod search;

pub use confirmation::confirmation_page;
pub use detail::{booking_form, booking_form_page, detail_page, details_section};
pub use search::{results_section, search_page};
