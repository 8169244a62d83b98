//! Display formatting for money, quantities, and timestamps.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Currency label appended to amounts.
pub const CURRENCY: &str = "DA";

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}

/// `152000` → `"1 520.00 DA"`.
pub fn money(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{sign}{}.{:02} {CURRENCY}", group_thousands(abs / 100), abs % 100)
}

/// `1450, "bottle"` → `"1 450 bottles"`.
pub fn quantity(n: u32, unit: &str) -> String {
    let plural = if n == 1 || unit.is_empty() { "" } else { "s" };
    format!("{} {unit}{plural}", group_thousands(u64::from(n))).trim_end().to_owned()
}

/// Coarse "time ago" label for notification timestamps.
pub fn relative_time(now_ms: u64, then_ms: u64) -> String {
    let secs = now_ms.saturating_sub(then_ms) / 1_000;
    match secs {
        0..=44 => "just now".to_owned(),
        45..=3_599 => format!("{} min ago", (secs / 60).max(1)),
        3_600..=86_399 => format!("{} h ago", secs / 3_600),
        _ => format!("{} d ago", secs / 86_400),
    }
}
