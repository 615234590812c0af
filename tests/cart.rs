//! Integration tests for cart bookkeeping, the two-for-one discount and receipts.

use testresult::TestResult;

use checkout::prelude::*;

fn cornflakes() -> Item {
    Item::new("1", "Cornflakes", Price::from_minor(250))
}

fn milk() -> Item {
    Item::new("2", "Milk", Price::from_minor(175))
}

#[test]
fn should_add_items_to_the_cart() {
    let mut cart = Cart::new();

    cart.add_item(&cornflakes(), 3);

    assert_eq!(cart.items().get(&cornflakes()), Some(&3));
}

#[test]
fn repeated_adds_sum_quantities() {
    for (first, second) in [(1, 1), (2, 5), (10, 90)] {
        let mut cart = Cart::new();

        cart.add_item(&cornflakes(), first);
        cart.add_item(&cornflakes(), second);

        assert_eq!(cart.quantity(&cornflakes()), Some(first + second));
    }
}

#[test]
fn distinct_instances_with_the_same_id_share_an_entry() {
    let mut cart = Cart::new();

    cart.add_item(&Item::new("1", "Cornflakes", Price::from_minor(250)), 1);
    cart.add_item(&Item::new("1", "Cornflakes", Price::from_minor(250)), 2);

    assert_eq!(cart.len(), 1);
    assert_eq!(cart.quantity(&cornflakes()), Some(3));
}

#[test]
fn should_remove_items_from_the_cart() -> TestResult {
    let mut cart = Cart::new();

    cart.add_item(&cornflakes(), 3);
    cart.remove_item(&cornflakes(), 2)?;

    assert_eq!(cart.items().get(&cornflakes()), Some(&1));

    Ok(())
}

#[test]
fn should_remove_item_completely_when_quantity_reaches_zero() -> TestResult {
    let mut cart = Cart::new();

    cart.add_item(&cornflakes(), 1);
    cart.remove_item(&cornflakes(), 1)?;

    assert!(!cart.items().contains_key(&cornflakes()));

    Ok(())
}

#[test]
fn should_handle_removing_item_from_empty_cart_gracefully() -> TestResult {
    let mut cart = Cart::new();

    cart.remove_item(&cornflakes(), 1)?;

    assert!(!cart.items().contains_key(&cornflakes()));
    assert!(cart.is_empty());

    Ok(())
}

#[test]
fn should_fail_when_removing_more_items_than_present() {
    let mut cart = Cart::new();
    cart.add_item(&cornflakes(), 1);

    let before = cart.clone();
    let result = cart.remove_item(&cornflakes(), 2);

    match result {
        Err(err @ CartError::InvalidArgument { .. }) => {
            assert_eq!(
                err.to_string(),
                "Cannot remove more items than are present in the cart"
            );
        }
        other => panic!("expected InvalidArgument error, got {other:?}"),
    }

    assert_eq!(cart, before);
}

#[test]
fn should_apply_two_for_one_discount_correctly() {
    let mut cart = Cart::new();

    cart.add_item(&cornflakes(), 5);
    cart.apply_two_for_one_discount();

    assert_eq!(cart.items().get(&cornflakes()), Some(&3));
}

#[test]
fn should_not_apply_two_for_one_discount_if_quantity_is_less_than_two() {
    let mut cart = Cart::new();

    cart.add_item(&cornflakes(), 1);
    cart.apply_two_for_one_discount();

    assert_eq!(cart.items().get(&cornflakes()), Some(&1));
}

#[test]
fn should_apply_two_for_one_discount_correctly_when_quantity_is_exactly_two() {
    let mut cart = Cart::new();

    cart.add_item(&cornflakes(), 2);
    cart.apply_two_for_one_discount();

    assert_eq!(cart.items().get(&cornflakes()), Some(&1));
}

#[test]
fn two_for_one_discount_on_empty_cart_is_vacuous() {
    let mut cart = Cart::new();

    cart.apply_two_for_one_discount();

    assert!(cart.is_empty());
}

#[test]
fn should_generate_correct_receipt() {
    let mut cart = Cart::new();

    cart.add_item(&cornflakes(), 3);
    cart.add_item(&milk(), 1);

    assert_eq!(
        cart.generate_receipt(),
        "Receipt:\nCornflakes           x3    $7.50\nMilk                 x1    $1.75\nTotal: $9.25"
    );
}

#[test]
fn should_generate_correct_receipt_for_empty_cart() {
    let cart = Cart::new();

    assert_eq!(cart.generate_receipt(), "Receipt:\nTotal: $0.00");
}

#[test]
fn receipt_reflects_two_for_one_discount() {
    let mut cart = Cart::new();

    cart.add_item(&cornflakes(), 4);
    cart.add_item(&milk(), 3);
    cart.apply_two_for_one_discount();

    assert_eq!(
        cart.generate_receipt(),
        "Receipt:\nCornflakes           x2    $5.00\nMilk                 x2    $3.50\nTotal: $8.50"
    );
}

#[test]
fn get_items_does_not_mutate_the_cart() {
    let mut cart = Cart::new();

    cart.add_item(&cornflakes(), 3);
    cart.add_item(&milk(), 1);

    let first = cart.items().clone();
    let second = cart.items().clone();

    assert_eq!(first, second);
    assert_eq!(cart.quantity(&cornflakes()), Some(3));
    assert_eq!(cart.quantity(&milk()), Some(1));
}

#[test]
fn works_through_the_trait_object() -> TestResult {
    let mut cart = Cart::new();

    {
        let shopping_cart: &mut dyn ShoppingCart = &mut cart;

        shopping_cart.add_one(&milk());
        shopping_cart.add_one(&milk());
        shopping_cart.remove_one(&milk())?;
    }

    assert_eq!(cart.quantity(&milk()), Some(1));

    Ok(())
}

#[test]
fn receipt_rounds_sub_cent_prices_after_summing() -> TestResult {
    let mut cart = Cart::new();

    cart.add_item(&Item::new("3", "Gum", "0.125".parse()?), 3);
    cart.add_item(&Item::new("4", "Mints", "0.125".parse()?), 1);

    assert_eq!(
        cart.generate_receipt(),
        "Receipt:\nGum                  x3    $0.38\nMints                x1    $0.13\nTotal: $0.50"
    );

    Ok(())
}
