use super::*;
use crate::data::types::{AccountStatus, DeliveryStatus, InvoiceStatus, OrderStatus, StockStatus};

#[test]
fn known_status_maps_to_label_tone_icon() {
    let d = status_display("overdue");
    assert_eq!(d.label, "Overdue");
    assert_eq!(d.tone, Tone::Danger);
    assert_eq!(d.icon, "!");
}

#[test]
fn lookup_ignores_case_and_separators() {
    let expected = status_display("in_transit");
    assert_eq!(status_display("In Transit"), expected);
    assert_eq!(status_display("in-transit"), expected);
    assert_eq!(status_display("  IN_TRANSIT "), expected);
}

#[test]
fn unknown_status_falls_back_to_default() {
    assert_eq!(status_display("teleported"), StatusDisplay::UNKNOWN);
    assert_eq!(status_display(""), StatusDisplay::UNKNOWN);
    assert_eq!(StatusDisplay::UNKNOWN.label, "Unknown");
    assert_eq!(StatusDisplay::UNKNOWN.icon, "•");
}

#[test]
fn every_typed_status_has_a_table_entry() {
    let keys = AccountStatus::ALL
        .iter()
        .map(|s| s.as_str())
        .chain(OrderStatus::ALL.iter().map(|s| s.as_str()))
        .chain(DeliveryStatus::ALL.iter().map(|s| s.as_str()))
        .chain(InvoiceStatus::ALL.iter().map(|s| s.as_str()))
        .chain(StockStatus::ALL.iter().map(|s| s.as_str()));
    for key in keys {
        assert_ne!(status_display(key), StatusDisplay::UNKNOWN, "missing display for {key}");
    }
}

#[test]
fn typed_display_matches_raw_lookup() {
    assert_eq!(DeliveryStatus::Delayed.display(), status_display("delayed"));
    assert_eq!(StockStatus::LowStock.display().label, "Low Stock");
}

#[test]
fn tone_classes_share_badge_base() {
    for tone in [Tone::Success, Tone::Warning, Tone::Danger, Tone::Info, Tone::Neutral, Tone::Muted] {
        assert!(tone.class().starts_with("badge badge--"));
    }
}
