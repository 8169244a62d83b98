use super::*;

fn valid() -> ClientDraft {
    ClientDraft {
        name: "Épicerie Amal".to_owned(),
        kind: "retailer".to_owned(),
        contact_name: "Amal Ferhat".to_owned(),
        phone: "+213 555 010 203".to_owned(),
        email: "amal@epicerie.example".to_owned(),
        address: "3 Rue Larbi Ben M'hidi".to_owned(),
        city: "Algiers".to_owned(),
    }
}

#[test]
fn valid_draft_has_no_errors() {
    assert!(valid().validate().is_empty());
}

#[test]
fn empty_draft_reports_required_fields_in_order() {
    let errors = ClientDraft::default().validate();
    assert_eq!(
        errors,
        vec![
            "Business name is required.",
            "Client type is required.",
            "Contact name is required.",
            "Phone is required.",
            "Address is required.",
            "City is required.",
        ]
    );
}

#[test]
fn email_is_optional_but_checked_when_present() {
    let mut draft = valid();
    draft.email.clear();
    assert!(draft.validate().is_empty());

    draft.email = "not-an-email".to_owned();
    assert_eq!(draft.validate(), vec!["Email must be a valid email address."]);
}

#[test]
fn unknown_kind_rejected() {
    let mut draft = valid();
    draft.kind = "spaceport".to_owned();
    assert_eq!(draft.validate(), vec!["Client type is required."]);
}
