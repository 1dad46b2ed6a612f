// src/domain/price.rs

/// A nightly price as the API transports it.
///
/// The upstream API does not normalise this field: some documents carry a
/// structured decimal (`{ "$numberDecimal": "120.5" }`), others a plain string
/// or number. Only the API layer builds this; everything past it works with
/// the display string from [`Price::display`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Price {
    Plain(String),
    Decimal(String),
}

impl Price {
    /// Decimals are rendered with exactly two fraction digits, plain values verbatim.
    /// A decimal that does not parse is shown as received.
    pub fn display(&self) -> String {
        match self {
            Price::Plain(raw) => raw.clone(),
            Price::Decimal(raw) => match raw.trim().parse::<f64>() {
                Ok(value) if value.is_finite() => format!("{value:.2}"),
                _ => raw.clone(),
            },
        }
    }
}
