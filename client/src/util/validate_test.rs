use super::*;

#[test]
fn required_rejects_blank() {
    assert_eq!(required("  ", "Name"), Some("Name is required.".to_owned()));
    assert_eq!(required("Nour", "Name"), None);
}

#[test]
fn email_like_accepts_common_shapes() {
    assert_eq!(email_like("orders@elbaraka.example", "Email"), None);
    assert_eq!(email_like(" a.b@c.dz ", "Email"), None);
    assert_eq!(email_like("", "Email"), None);
}

#[test]
fn email_like_rejects_malformed() {
    for bad in ["plain", "@x.com", "a@", "a@nodot", "a@.com", "a@x.", "a b@x.com"] {
        assert!(email_like(bad, "Email").is_some(), "{bad} should be rejected");
    }
}

#[test]
fn phone_like_rules() {
    assert_eq!(phone_like("+213 555 120 334", "Phone"), None);
    assert_eq!(phone_like("(021) 55-12-03", "Phone"), None);
    assert!(phone_like("12345", "Phone").is_some());
    assert!(phone_like("call me", "Phone").is_some());
    assert_eq!(phone_like("", "Phone"), None);
}

#[test]
fn positive_quantity_parses_and_rejects() {
    assert_eq!(positive_quantity(" 12 ", "Quantity"), Ok(12));
    assert!(positive_quantity("0", "Quantity").is_err());
    assert!(positive_quantity("-3", "Quantity").is_err());
    assert!(positive_quantity("2.5", "Quantity").is_err());
    assert_eq!(
        positive_quantity("", "Quantity"),
        Err("Quantity must be a whole number greater than zero.".to_owned())
    );
}
