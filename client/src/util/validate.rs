//! Field-level validation rules shared by forms.
//!
//! Each rule returns `Some(message)` on failure so callers can collect
//! messages with `into_iter().flatten()`.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

pub fn required(value: &str, label: &str) -> Option<String> {
    value.trim().is_empty().then(|| format!("{label} is required."))
}

/// Loose `local@domain.tld` shape check; blank is left to `required`.
pub fn email_like(value: &str, label: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    let valid = value.split_once('@').is_some_and(|(local, domain)| {
        !local.is_empty()
            && !domain.starts_with('.')
            && !domain.ends_with('.')
            && domain.contains('.')
            && !value.contains(char::is_whitespace)
    });
    (!valid).then(|| format!("{label} must be a valid email address."))
}

/// Phone numbers need at least 8 digits; spaces, `+` and `-` are allowed.
pub fn phone_like(value: &str, label: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    let allowed = value.chars().all(|c| c.is_ascii_digit() || matches!(c, '+' | ' ' | '-' | '(' | ')'));
    let digits = value.chars().filter(char::is_ascii_digit).count();
    (!allowed || digits < 8).then(|| format!("{label} must be a valid phone number."))
}

/// Parse a positive whole quantity from form input.
pub fn positive_quantity(value: &str, label: &str) -> Result<u32, String> {
    match value.trim().parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(format!("{label} must be a whole number greater than zero.")),
    }
}
