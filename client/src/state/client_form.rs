//! Draft model for the new-client modal form.

#[cfg(test)]
#[path = "client_form_test.rs"]
mod client_form_test;

use crate::data::types::ClientKind;
use crate::util::validate::{email_like, phone_like, required};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientDraft {
    pub name: String,
    pub kind: String,
    pub contact_name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub city: String,
}

impl ClientDraft {
    /// Every unmet rule, in field order. Empty means the draft can be submitted.
    pub fn validate(&self) -> Vec<String> {
        let kind = (ClientKind::parse(&self.kind).is_none()).then(|| "Client type is required.".to_owned());
        [
            required(&self.name, "Business name"),
            kind,
            required(&self.contact_name, "Contact name"),
            required(&self.phone, "Phone"),
            phone_like(&self.phone, "Phone"),
            email_like(&self.email, "Email"),
            required(&self.address, "Address"),
            required(&self.city, "City"),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}
