use super::*;
use crate::data::fixtures;
use crate::state::wizard::Wizard;

fn complete_draft() -> OrderDraft {
    let mut draft = OrderDraft::new(&fixtures::products(), "2026-10-17");
    draft.client_id = "C001".to_owned();
    draft.lines = vec![
        LineDraft { product_id: "P001".to_owned(), quantity: "24".to_owned() },
        LineDraft { product_id: "P005".to_owned(), quantity: "6".to_owned() },
    ];
    draft.delivery_date = "2026-10-20".to_owned();
    draft.time_slot = TIME_SLOTS[0].to_owned();
    draft.address = "12 Rue Didouche Mourad".to_owned();
    draft.distributor_id = "D001".to_owned();
    draft
}

#[test]
fn step_titles_describe_four_steps() {
    assert_eq!(Wizard::step_count::<OrderDraft>(), 4);
    assert_eq!(OrderDraft::STEP_TITLES[STEP_REVIEW], "Review");
}

#[test]
fn empty_draft_blocks_first_step() {
    let draft = OrderDraft::new(&fixtures::products(), "2026-10-17");
    let mut wizard = Wizard::default();

    assert!(!wizard.next(&draft));
    assert_eq!(wizard.current, STEP_CLIENT);
    assert_eq!(wizard.errors, vec!["Client is required.".to_owned()]);
}

#[test]
fn products_step_requires_a_line() {
    let mut draft = complete_draft();
    draft.lines = vec![LineDraft::default()];
    assert_eq!(draft.validate_step(STEP_PRODUCTS), vec!["Add at least one product.".to_owned()]);
}

#[test]
fn products_step_reports_each_bad_line() {
    let mut draft = complete_draft();
    draft.lines = vec![
        LineDraft { product_id: "P001".to_owned(), quantity: "0".to_owned() },
        LineDraft { product_id: "P999".to_owned(), quantity: "3".to_owned() },
        LineDraft { product_id: String::new(), quantity: "3".to_owned() },
        LineDraft::default(),
    ];
    let errors = draft.validate_step(STEP_PRODUCTS);
    assert_eq!(errors.len(), 3);
    assert!(errors[0].starts_with("Line 1: quantity"));
    assert_eq!(errors[1], "Line 2: unknown product P999.");
    assert_eq!(errors[2], "Line 3: choose a product.");
}

#[test]
fn delivery_step_lists_every_missing_field() {
    let mut draft = complete_draft();
    draft.delivery_date.clear();
    draft.distributor_id = "  ".to_owned();
    assert_eq!(
        draft.validate_step(STEP_DELIVERY),
        vec!["Delivery date is required.".to_owned(), "Distributor is required.".to_owned()]
    );
}

#[test]
fn delivery_date_must_parse_and_not_be_in_the_past() {
    let mut draft = complete_draft();
    draft.delivery_date = "20/10/2026".to_owned();
    assert_eq!(
        draft.validate_step(STEP_DELIVERY),
        vec!["Delivery date must be a valid date (YYYY-MM-DD).".to_owned()]
    );

    draft.delivery_date = "2026-10-16".to_owned();
    assert_eq!(
        draft.validate_step(STEP_DELIVERY),
        vec!["Delivery date cannot be before 2026-10-17.".to_owned()]
    );

    draft.delivery_date = "2026-10-17".to_owned();
    assert!(draft.validate_step(STEP_DELIVERY).is_empty());
}

#[test]
fn complete_draft_walks_to_review_and_submits() {
    let draft = complete_draft();
    let mut wizard = Wizard::default();
    assert!(wizard.next(&draft));
    assert!(wizard.next(&draft));
    assert!(wizard.next(&draft));
    assert_eq!(wizard.current, STEP_REVIEW);
    assert!(wizard.is_last::<OrderDraft>());
    assert_eq!(wizard.submit(&draft), Ok(()));
}

#[test]
fn remove_line_keeps_one_row() {
    let mut draft = OrderDraft::new(&[], "2026-10-17");
    draft.remove_line(0);
    assert_eq!(draft.lines.len(), 1);
    draft.add_line();
    draft.add_line();
    draft.remove_line(1);
    assert_eq!(draft.lines.len(), 2);
    draft.remove_line(99);
    assert_eq!(draft.lines.len(), 2);
}

#[test]
fn to_order_prices_lines_from_catalog() {
    let products = fixtures::products();
    let order = complete_draft().to_order("ORD-2000", "2026-10-17", &products);
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.distributor_id.as_deref(), Some("D001"));
    assert_eq!(order.lines.len(), 2);
    assert_eq!(order.total_cents(), 24 * 120 + 6 * 390);
}
