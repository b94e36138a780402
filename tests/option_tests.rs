//! Tests for `OptionExt` and the null-safe getter and setter chains.

#![cfg(feature = "option")]

use std::cell::{Cell, RefCell};

use lambdadepot::option::{OptionExt, SafeGetter, SafeGetterMut, SafeProperty};
use lambdadepot::result::Result;
use rstest::rstest;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Street {
    name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Address {
    street: Option<Street>,
    zip: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Customer {
    address: Option<Address>,
}

fn customer(street_name: Option<&str>, zip: Option<u32>) -> Customer {
    Customer {
        address: Some(Address {
            street: Some(Street {
                name: street_name.map(str::to_string),
            }),
            zip,
        }),
    }
}

fn address() -> SafeGetter<Customer, Address> {
    SafeGetter::of(|customer: &Customer| customer.address.as_ref())
}

fn street_name() -> SafeGetter<Customer, String> {
    address()
        .then(|address: &Address| address.street.as_ref())
        .then(|street: &Street| street.name.as_ref())
}

// =============================================================================
// OptionExt
// =============================================================================

#[rstest]
#[case(Some(2), 2, 0)]
#[case(None, 0, 1)]
fn handlers_run_the_matching_branch(
    #[case] option: Option<i32>,
    #[case] expected_total: i32,
    #[case] expected_misses: i32,
) {
    let total = Cell::new(0);
    let misses = Cell::new(0);

    option.if_present(|value| total.set(total.get() + value));
    option.if_empty(|| misses.set(misses.get() + 1));
    option.if_present_or_else(|value| total.set(total.get() + value), || misses.set(misses.get() + 1));

    assert_eq!(total.get(), expected_total * 2);
    assert_eq!(misses.get(), expected_misses * 2);
}

#[rstest]
fn peek_handlers_return_the_option() {
    let seen = RefCell::new(Vec::new());
    let kept = Some("kept")
        .peek_if_present(|value| seen.borrow_mut().push(value.to_string()))
        .peek_if_empty(|| seen.borrow_mut().push("unreachable".to_string()))
        .peek_if_present_or_else(|value| seen.borrow_mut().push(value.len().to_string()), || unreachable!());

    assert_eq!(kept, Some("kept"));
    assert_eq!(seen.into_inner(), vec!["kept".to_string(), "4".to_string()]);
}

#[rstest]
fn none_peeks_run_the_absent_branch() {
    let misses = Cell::new(0);
    let kept = None::<u8>
        .peek_if_present(|_| unreachable!())
        .peek_if_empty(|| misses.set(misses.get() + 1))
        .peek_if_present_or_else(|_| unreachable!(), || misses.set(misses.get() + 1));

    assert_eq!(kept, None);
    assert_eq!(misses.get(), 2);
}

#[rstest]
#[case(Some(5), Result::success(5))]
#[case(None, Result::empty())]
fn into_result_maps_presence(#[case] option: Option<i32>, #[case] expected: Result<i32>) {
    assert_eq!(option.into_result(), expected);
}

#[rstest]
fn transform_sees_the_whole_option() {
    assert!(Some(3).transform(|option| option.is_some()));
    assert_eq!(None::<i32>.transform(|option| option.unwrap_or(-1)), -1);
}

// =============================================================================
// SafeGetter
// =============================================================================

#[rstest]
#[case(customer(Some("Main St"), Some(1000)), Some("Main St"))]
#[case(customer(None, Some(1000)), None)]
#[case(Customer { address: None }, None)]
#[case(Customer { address: Some(Address { street: None, zip: None }) }, None)]
fn getter_stops_at_first_absent_link(#[case] input: Customer, #[case] expected: Option<&str>) {
    assert_eq!(street_name().get(&input).map(String::as_str), expected);
}

#[rstest]
fn getter_accepts_absent_input() {
    assert_eq!(street_name().get(None), None);
    let present = customer(Some("Elm"), None);
    assert_eq!(street_name().get(Some(&present)).map(String::as_str), Some("Elm"));
}

#[rstest]
fn getters_compose_with_then_getter() {
    let zip = SafeGetter::of(|address: &Address| address.zip.as_ref());
    let customer_zip = address().then_getter(&zip);

    assert_eq!(customer_zip.get(&customer(None, Some(75001))), Some(&75001));
    assert_eq!(customer_zip.get(&customer(None, None)), None);
}

#[rstest]
fn when_filters_the_last_link() {
    let long_name = street_name().when(|name: &String| name.len() > 3);
    assert!(long_name.get(&customer(Some("Broadway"), None)).is_some());
    assert!(long_name.get(&customer(Some("Elm"), None)).is_none());
}

#[rstest]
fn getter_output_feeds_the_tri_state_result() {
    let input = customer(Some("Main St"), None);
    let upper = street_name()
        .get(&input)
        .into_result()
        .map(|name| name.to_uppercase())
        .if_empty_return("UNKNOWN".to_string());
    assert_eq!(upper, Result::success("MAIN ST".to_string()));
}

// =============================================================================
// SafeProperty
// =============================================================================

#[rstest]
#[case(customer(Some("Main St"), None), Some('M'))]
#[case(customer(Some(""), None), None)]
#[case(Customer { address: None }, None)]
fn getter_maps_into_a_computed_value(#[case] input: Customer, #[case] expected: Option<char>) {
    let initial = street_name().map(|name: &String| name.chars().next());
    assert_eq!(initial.get(&input), expected);
}

#[rstest]
fn property_chains_owned_steps() {
    let zip_prefix = SafeProperty::of(|customer: &Customer| customer.address.as_ref().and_then(|address| address.zip))
        .then(|zip: u32| (zip >= 1000).then(|| zip / 1000))
        .when(|prefix: &u32| *prefix != 9);

    assert_eq!(zip_prefix.get(&customer(None, Some(75001))), Some(75));
    assert_eq!(zip_prefix.get(&customer(None, Some(999))), None);
    assert_eq!(zip_prefix.get(&customer(None, Some(9000))), None);
    assert_eq!(zip_prefix.get(None), None);
}

// =============================================================================
// SafeSetter
// =============================================================================

fn street_name_setter() -> lambdadepot::option::SafeSetter<Customer, Street, &'static str> {
    SafeGetterMut::of(|customer: &mut Customer| customer.address.as_mut())
        .then(|address: &mut Address| address.street.as_mut())
        .set_with(|street: &mut Street, name: &'static str| street.name = Some(name.to_string()))
}

#[rstest]
fn setter_writes_when_path_exists() {
    let mut input = customer(None, None);
    assert!(street_name_setter().set(&mut input, "Rue Neuve"));
    assert_eq!(street_name().get(&input).map(String::as_str), Some("Rue Neuve"));
}

#[rstest]
#[case(Customer { address: None })]
#[case(Customer { address: Some(Address { street: None, zip: Some(1) }) })]
fn setter_leaves_input_untouched_when_path_is_missing(#[case] input: Customer) {
    let mut target = input.clone();
    assert!(!street_name_setter().set(&mut target, "Nowhere"));
    assert_eq!(target, input);
}

#[rstest]
fn setter_accepts_absent_input() {
    assert!(!street_name_setter().set(None, "Nowhere"));
}

#[rstest]
fn get_mut_edits_in_place() {
    let zip = SafeGetterMut::of(|customer: &mut Customer| customer.address.as_mut())
        .then(|address: &mut Address| address.zip.as_mut());
    let mut input = customer(None, Some(10));

    if let Some(code) = zip.get_mut(&mut input) {
        *code += 1;
    }
    assert_eq!(input.address.and_then(|address| address.zip), Some(11));
}
