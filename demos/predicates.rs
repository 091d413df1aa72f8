//! Predicate Combinators Example
//!
//! Builds filters from small reusable predicates and applies them to
//! slices of numbers, strings and products.
//!
//! Run with: cargo run --example predicates

use strainer::catalog::{by_category, by_max_price, by_min_rating, in_stock, sample_products};
use strainer::prelude::*;

fn main() {
    println!("=== Predicate Combinators Example ===\n");

    number_predicates();
    string_predicates();
    bulk_operations();
    product_filters();
    validation_integration();
}

/// Demonstrates number predicates and logical combinators
fn number_predicates() {
    println!("--- Number Predicates ---\n");

    let nums: Vec<i32> = (1..=10).collect();

    let even_and_big = is_even().and(gt(5));
    println!("even AND > 5: {:?}", filter(&nums, &even_and_big)); // [6, 8, 10]

    let small_or_odd = lt(3).or(is_odd());
    println!("< 3 OR odd:   {:?}", filter(&nums, &small_or_odd)); // [1, 2, 3, 5, 7, 9]

    let not_between = not(between(3, 8));
    println!("NOT 3..=8:    {:?}", filter(&nums, &not_between)); // [1, 2, 9, 10]

    let many = any_of([eq(1), eq(4), eq(9)]);
    println!("one of 1,4,9: {:?}", filter(&nums, &many));
    println!();
}

/// Demonstrates string predicates
fn string_predicates() {
    println!("--- String Predicates ---\n");

    let words = vec!["apple", "banana", "cherry", "date", "elderberry"];

    println!("starts with 'b': {:?}", filter(&words, &|w: &&str| w.starts_with('b')));
    println!("longer than 5:   {:?}", filter(&words, &|w: &&str| longer_than(5).check(*w)));

    let p = contains_ignore_case("ERR");
    println!("contains 'ERR' ignoring case: {:?}", filter(&words, &|w: &&str| p.check(*w)));

    // String predicates serve both `str` and `String`, so pin the input type
    let url = PredicateExt::<str>::and(starts_with("https://"), ends_with(".com"));
    println!("secure .com url: {}", url.check("https://example.com"));
    println!();
}

/// Demonstrates find, count and the quantifiers
fn bulk_operations() {
    println!("--- Bulk Operations ---\n");

    let nums: Vec<i32> = (1..=10).collect();

    println!("first > 7: {:?}", find(&nums, &gt(7))); // Some(8)
    println!("first > 10: {:?}", find(&nums, &gt(10))); // None
    println!("count even: {}", count(&nums, &is_even()));
    println!("any > 9: {}", any(&nums, &gt(9)));
    println!("all positive: {}", all(&nums, &positive()));
    println!("none negative: {}", none(&nums, &lt(0)));

    // Slice methods read left to right
    println!("count_where odd: {}", nums.count_where(&is_odd()));
    println!();
}

/// Demonstrates domain criteria over the sample catalogue
fn product_filters() {
    println!("--- Product Filters ---\n");

    let products = sample_products();

    let electronics = by_category("Electronics").and(in_stock());
    for product in filter_ref(&products, &electronics) {
        println!("in-stock electronics: {}", product);
    }

    let affordable_quality = in_stock().and(by_max_price(300.0)).and(by_min_rating(4.5));
    for product in filter_ref(&products, &affordable_quality) {
        println!("affordable quality: {}", product);
    }

    // Boxed predicates can be stored and chosen at runtime
    let filters: Vec<(&str, BoxPredicate<_>)> = vec![
        ("furniture", by_category("Furniture").boxed()),
        ("out of stock", not(in_stock()).boxed()),
    ];
    for (label, predicate) in &filters {
        println!("{}: {} match", label, count(&products, predicate));
    }
    println!();
}

/// Demonstrates predicates guarding values
fn validation_integration() {
    println!("--- Validation Integration ---\n");

    for port in [8080u32, 0, 70000] {
        match ensure(port, between(1, 65535), "port out of range") {
            Ok(port) => println!("port {}: ok", port),
            Err(e) => println!("port {}: {}", port, e),
        }
    }
}
