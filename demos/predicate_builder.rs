//! Predicate Builder Example
//!
//! Assembles product and process queries with the fluent builder, then
//! expresses the process queries again as composable specifications.
//!
//! Run with: cargo run --example predicate_builder

use strainer::catalog::{sample_products, Product};
use strainer::prelude::*;
use strainer::process::{by_max_cpu, high_priority, owned_by, running, Process, ProcessManager};

fn main() {
    println!("=== Predicate Builder Example ===\n");

    product_queries();
    process_queries();
    specifications();
}

fn print_products(label: &str, hits: Vec<&Product>) {
    println!("{}:", label);
    for p in hits {
        println!("  {}", p);
    }
}

fn print_processes(label: &str, hits: Vec<&Process>) {
    println!("{}:", label);
    for p in hits {
        println!("  {}", p);
    }
}

/// Demonstrates AND and OR builders over the catalogue
fn product_queries() {
    println!("--- Product Queries ---\n");

    let products = sample_products();

    let available_electronics = PredicateBuilder::<Product>::new()
        .with_category("Electronics")
        .with_in_stock()
        .with_min_rating(4.4)
        .build();
    print_products(
        "Well-rated electronics in stock",
        filter_ref(&products, &available_electronics),
    );

    // Mode can be switched at any point before build
    let furniture_or_cheap = PredicateBuilder::<Product>::new()
        .with_category("Furniture")
        .with_max_price(50.0)
        .use_or();
    println!("\nCombining with {}", furniture_or_cheap.combinator());
    print_products(
        "Furniture or under $50",
        filter_ref(&products, &furniture_or_cheap.build()),
    );

    let nothing = PredicateBuilder::<Product>::new().use_or().build();
    println!("\nEmpty OR builder matches {} products", count(&products, &nothing));
    println!();
}

/// Demonstrates the builder against the process table
fn process_queries() {
    println!("--- Process Queries ---\n");

    let manager = ProcessManager::sample();

    let busy = PredicateBuilder::<Process>::new()
        .with_status("running")
        .with_min_priority(5)
        .with_max_cpu(30.0)
        .build();
    print_processes("Running, priority >= 5, CPU <= 30%", manager.find(&busy));

    let either = PredicateBuilder::<Process>::new()
        .use_or()
        .with_title("Go")
        .with_title("Python")
        .build();
    print_processes("Go or Python", manager.find(&either));
    println!();
}

/// Demonstrates specification trees
fn specifications() {
    println!("--- Specifications ---\n");

    let manager = ProcessManager::sample();

    let mine = running().and(high_priority()).and(owned_by("user1"));
    println!("{:?}", mine);
    print_processes("Running high-priority user1 processes", manager.find(&mine));

    let idle = running().not();
    print_processes("Not running", manager.find(&idle));

    let light = high_priority()
        .or(owned_by("user3"))
        .and(Specification::new(by_max_cpu(30.0)));
    print_processes("High priority or user3, CPU <= 30%", manager.find(&light));
}
