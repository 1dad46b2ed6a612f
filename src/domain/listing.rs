/// Characters of summary text shown on a search result card.
pub const CARD_SUMMARY_CHARS: usize = 200;

/// A rentable property, flattened from the API document and ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub id: String,
    pub name: String,
    pub summary: String,
    pub property_type: String,
    pub bedrooms: u32,
    /// Already normalised for display; `None` when the document has no price.
    pub price: Option<String>,
    /// `address.market` in the API document.
    pub market: String,
    pub rating: Option<f64>,
}

impl Listing {
    pub fn detail_href(&self) -> String {
        let query: String = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("listing_id", &self.id)
            .finish();
        format!("/bookings?{query}")
    }

    pub fn card_summary(&self) -> String {
        truncate_summary(&self.summary, CARD_SUMMARY_CHARS)
    }

    /// Whole ratings print without a fraction ("95"), others as-is ("4.5").
    pub fn rating_label(&self) -> Option<String> {
        self.rating.map(|r| {
            if r.fract() == 0.0 {
                format!("{r:.0}")
            } else {
                r.to_string()
            }
        })
    }
}

/// Cuts `text` to at most `max_chars` characters on a char boundary,
/// appending an ellipsis when anything was dropped.
pub fn truncate_summary(text: &str, max_chars: usize) -> String {
    let text = text.trim();
    match text.char_indices().nth(max_chars) {
        None => text.to_string(),
        Some((cut, _)) => format!("{}…", text[..cut].trim_end()),
    }
}
