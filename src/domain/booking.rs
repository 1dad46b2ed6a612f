use std::collections::HashMap;

/// Contact and date fields collected on the booking screen.
///
/// Values are kept exactly as typed so a failed submission can re-render them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingForm {
    pub check_in: String,
    pub check_out: String,
    pub name: String,
    pub email: String,
    pub daytime_phone: String,
    pub mobile_phone: String,
    pub postal_address: String,
    pub home_address: String,
}

impl BookingForm {
    /// Reads the form using the input names the booking page renders.
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        let field = |key: &str| params.get(key).cloned().unwrap_or_default();

        Self {
            check_in: field("checkIn"),
            check_out: field("checkOut"),
            name: field("name"),
            email: field("email"),
            daytime_phone: field("daytimePhone"),
            mobile_phone: field("mobilePhone"),
            postal_address: field("postalAddress"),
            home_address: field("homeAddress"),
        }
    }

    /// Input names of required fields that are still blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("checkIn", &self.check_in),
            ("checkOut", &self.check_out),
            ("name", &self.name),
            ("email", &self.email),
            ("daytimePhone", &self.daytime_phone),
            ("mobilePhone", &self.mobile_phone),
            ("postalAddress", &self.postal_address),
            ("homeAddress", &self.home_address),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}
