use super::*;

#[test]
fn money_groups_thousands_and_keeps_cents() {
    assert_eq!(money(0), "0.00 DA");
    assert_eq!(money(5), "0.05 DA");
    assert_eq!(money(152_000), "1 520.00 DA");
    assert_eq!(money(123_456_789), "1 234 567.89 DA");
    assert_eq!(money(-26_100), "-261.00 DA");
}

#[test]
fn quantity_pluralizes_units() {
    assert_eq!(quantity(1, "bottle"), "1 bottle");
    assert_eq!(quantity(1_450, "bottle"), "1 450 bottles");
    assert_eq!(quantity(0, "cup"), "0 cups");
    assert_eq!(quantity(7, ""), "7");
}

#[test]
fn relative_time_buckets() {
    let now = 10_000_000_000;
    assert_eq!(relative_time(now, now), "just now");
    assert_eq!(relative_time(now, now - 44_000), "just now");
    assert_eq!(relative_time(now, now - 45_000), "1 min ago");
    assert_eq!(relative_time(now, now - 5 * 60_000), "5 min ago");
    assert_eq!(relative_time(now, now - 2 * 3_600_000), "2 h ago");
    assert_eq!(relative_time(now, now - 3 * 86_400_000), "3 d ago");
}

#[test]
fn relative_time_future_is_just_now() {
    assert_eq!(relative_time(1_000, 9_000), "just now");
}
