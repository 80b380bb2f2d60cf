//! Cart editing flows: add, quantity edits, removal, clearing, rendering.

#![allow(clippy::unwrap_used)]

use royal_plate_core::Cart;
use royal_plate_integration_tests::{HostEvent, TestContext};
use royal_plate_widget::KeyValueStorage;

#[test]
fn add_persists_refreshes_badge_and_toasts() {
    let ctx = TestContext::new();

    ctx.view.add("Pasta", "12.5");

    let cart = ctx.view.store().load();
    assert_eq!(cart.len(), 1);
    assert_eq!(cart.lines()[0].name, "Pasta");
    assert_eq!(cart.lines()[0].qty, 1);

    assert_eq!(ctx.host.last_count(), Some(1));
    assert_eq!(ctx.host.notices(), vec!["Pasta added to cart".to_string()]);
}

#[test]
fn persisted_cart_roundtrips_after_every_operation() {
    let ctx = TestContext::new();

    ctx.view.add("Pasta", "12.5");
    ctx.view.add("Soda", "2");
    ctx.view.set_qty(0, "2").unwrap();
    ctx.view.add("Soup", "6");
    ctx.view.remove(2).unwrap();

    // Reload through a second store over the same storage; order, names,
    // prices, and quantities must survive.
    let raw = ctx.storage.get_item("royalplate_cart").unwrap();
    let reloaded: Cart = serde_json::from_str(&raw).unwrap();
    assert_eq!(reloaded, ctx.view.store().load());

    let lines = ctx.view.store().load();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines.lines()[0].name, "Pasta");
    assert_eq!(lines.lines()[0].qty, 2);
    assert_eq!(lines.lines()[1].name, "Soda");
}

#[test]
fn set_qty_normalizes_bad_input_to_one() {
    let ctx = TestContext::new();
    ctx.view.add("Pasta", "12.5");

    for bad in ["0", "-3", "abc", ""] {
        ctx.view.set_qty(0, "4").unwrap();
        ctx.view.set_qty(0, bad).unwrap();
        assert_eq!(ctx.view.store().load().lines()[0].qty, 1, "input {bad:?}");
    }
}

#[test]
fn rendered_total_tracks_edits() {
    let ctx = TestContext::new();
    ctx.view.add("Pasta", "12.5");
    ctx.view.add("Soda", "2");

    ctx.view.render().unwrap();
    assert!(ctx.host.last_render().unwrap().contains("Total: $14.50"));

    ctx.view.set_qty(0, "2").unwrap();
    assert!(ctx.host.last_render().unwrap().contains("Total: $27.00"));

    ctx.view.remove(1).unwrap();
    assert!(ctx.host.last_render().unwrap().contains("Total: $25.00"));
}

#[test]
fn removing_middle_line_reindexes_the_rest() {
    let ctx = TestContext::new();
    ctx.view.add("A", "1");
    ctx.view.add("B", "2");
    ctx.view.add("C", "3");

    ctx.view.remove(1).unwrap();

    let cart = ctx.view.store().load();
    assert_eq!(cart.len(), 2);
    assert_eq!(cart.lines()[0].name, "A");
    assert_eq!(cart.lines()[1].name, "C");
}

#[test]
fn adding_same_dish_twice_keeps_two_lines() {
    let ctx = TestContext::new();
    ctx.view.add("Soda", "2");
    ctx.view.add("Soda", "2");

    assert_eq!(ctx.view.store().load().len(), 2);
    assert_eq!(ctx.host.last_count(), Some(2));
}

#[test]
fn badge_counts_lines_not_quantities() {
    let ctx = TestContext::new();
    ctx.view.add("Pasta", "12.5");
    ctx.view.set_qty(0, "5").unwrap();

    assert_eq!(ctx.host.last_count(), Some(1));
    assert_eq!(ctx.view.store().load().total_quantity(), 5);
}

#[test]
fn empty_cart_renders_placeholder() {
    let ctx = TestContext::new();
    ctx.view.render().unwrap();

    let html = ctx.host.last_render().unwrap();
    assert!(html.contains("Your cart is empty"));
    assert!(!html.contains("Total:"));
}

#[test]
fn clear_confirmed_empties_storage_and_badge() {
    let ctx = TestContext::new();
    ctx.view.add("Pasta", "12.5");

    ctx.view.clear().unwrap();

    assert!(ctx
        .host
        .events()
        .contains(&HostEvent::Confirmed("Clear cart?".to_string())));
    assert_eq!(ctx.storage.get_item("royalplate_cart"), None);
    assert_eq!(ctx.host.last_count(), Some(0));
    assert!(ctx.host.last_render().unwrap().contains("Your cart is empty"));
}

#[test]
fn clear_declined_changes_nothing() {
    let ctx = TestContext::new();
    ctx.view.add("Pasta", "12.5");
    ctx.host.answer_confirmations_with(false);

    ctx.view.clear().unwrap();

    assert_eq!(ctx.view.store().load().len(), 1);
    assert_eq!(ctx.host.last_count(), Some(1));
}

#[test]
fn malformed_persisted_state_resets_to_empty_without_notice() {
    let ctx = TestContext::new();
    ctx.storage.set_item("royalplate_cart", "{{corrupt").unwrap();

    assert!(ctx.view.store().load().is_empty());
    assert!(ctx.host.notices().is_empty());
}

#[test]
fn badge_fragment_renders_line_count() {
    let ctx = TestContext::new();
    ctx.view.add("Pasta", "12.5");
    ctx.view.add("Soda", "2");

    let html = ctx.view.render_count().unwrap();
    assert!(html.contains(">2<"));
}
