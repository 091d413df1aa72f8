//! Product catalogue queries.
//!
//! Criteria are plain functions returning predicates over [`Product`], so
//! they compose with every combinator in [`crate::predicate`]:
//!
//! ```rust
//! use strainer::catalog::*;
//! use strainer::predicate::*;
//!
//! let products = sample_products();
//! let premium = and(
//!     and(by_category("Electronics"), in_stock()),
//!     and(by_min_rating(4.5), by_min_price(100.0)),
//! );
//! let hits = filter_ref(&products, &premium);
//! assert_eq!(hits.len(), 2);
//! assert_eq!(hits[0].name, "Laptop");
//! assert_eq!(hits[1].name, "Monitor");
//! ```

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::builder::PredicateBuilder;
use crate::predicate::Predicate;

/// A sellable item.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Product {
    /// Catalogue identifier.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Category label, compared exactly.
    pub category: String,
    /// Unit price in dollars.
    pub price: f64,
    /// Whether the item can ship today.
    pub in_stock: bool,
    /// Average review score.
    pub rating: f64,
    /// Free-form labels.
    pub tags: Vec<String>,
    /// Supplier name.
    pub supplier: String,
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ID: {}, Name: {}, Price: ${:.2}, InStock: {}, Rating: {:.1}}}",
            self.id, self.name, self.price, self.in_stock, self.rating
        )
    }
}

/// Products whose category equals `category`.
pub fn by_category(category: &str) -> impl Predicate<Product> + Clone {
    let category = category.to_string();
    move |p: &Product| p.category == category
}

/// Products priced within `min..=max`.
pub fn by_price_range(min: f64, max: f64) -> impl Predicate<Product> + Clone {
    move |p: &Product| p.price >= min && p.price <= max
}

/// Products that are in stock.
pub fn in_stock() -> impl Predicate<Product> + Clone {
    |p: &Product| p.in_stock
}

/// Products rated at least `min_rating`.
pub fn by_min_rating(min_rating: f64) -> impl Predicate<Product> + Clone {
    move |p: &Product| p.rating >= min_rating
}

/// Products whose name contains `needle`, ignoring case.
pub fn by_name_contains(needle: &str) -> impl Predicate<Product> + Clone {
    let needle = needle.to_lowercase();
    move |p: &Product| p.name.to_lowercase().contains(&needle)
}

/// Products from `supplier`.
pub fn by_supplier(supplier: &str) -> impl Predicate<Product> + Clone {
    let supplier = supplier.to_string();
    move |p: &Product| p.supplier == supplier
}

/// Products carrying `tag`.
pub fn has_tag(tag: &str) -> impl Predicate<Product> + Clone {
    let tag = tag.to_string();
    move |p: &Product| p.tags.iter().any(|t| *t == tag)
}

/// Products priced at or below `max_price`.
pub fn by_max_price(max_price: f64) -> impl Predicate<Product> + Clone {
    move |p: &Product| p.price <= max_price
}

/// Products priced at or above `min_price`.
pub fn by_min_price(min_price: f64) -> impl Predicate<Product> + Clone {
    move |p: &Product| p.price >= min_price
}

impl PredicateBuilder<Product> {
    /// Add a [`by_category`] criterion.
    pub fn with_category(self, category: &str) -> Self {
        self.with(by_category(category))
    }

    /// Add a [`by_max_price`] criterion.
    pub fn with_max_price(self, max_price: f64) -> Self {
        self.with(by_max_price(max_price))
    }

    /// Add a [`by_min_price`] criterion.
    pub fn with_min_price(self, min_price: f64) -> Self {
        self.with(by_min_price(min_price))
    }

    /// Add a [`by_price_range`] criterion.
    pub fn with_price_range(self, min: f64, max: f64) -> Self {
        self.with(by_price_range(min, max))
    }

    /// Add an [`in_stock`] criterion.
    pub fn with_in_stock(self) -> Self {
        self.with(in_stock())
    }

    /// Add a [`by_min_rating`] criterion.
    pub fn with_min_rating(self, min_rating: f64) -> Self {
        self.with(by_min_rating(min_rating))
    }

    /// Add a [`by_name_contains`] criterion.
    pub fn with_name_containing(self, needle: &str) -> Self {
        self.with(by_name_contains(needle))
    }

    /// Add a [`by_supplier`] criterion.
    pub fn with_supplier(self, supplier: &str) -> Self {
        self.with(by_supplier(supplier))
    }

    /// Add a [`has_tag`] criterion.
    pub fn with_tag(self, tag: &str) -> Self {
        self.with(has_tag(tag))
    }
}

#[allow(clippy::too_many_arguments)]
fn product(
    id: u32,
    name: &str,
    category: &str,
    price: f64,
    in_stock: bool,
    rating: f64,
    supplier: &str,
    tags: [&str; 2],
) -> Product {
    Product {
        id,
        name: name.to_string(),
        category: category.to_string(),
        price,
        in_stock,
        rating,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        supplier: supplier.to_string(),
    }
}

/// The six-item demo catalogue.
pub fn sample_products() -> Vec<Product> {
    vec![
        product(1, "Laptop", "Electronics", 999.99, true, 4.5, "TechCorp", ["computer", "portable"]),
        product(2, "Mouse", "Electronics", 29.99, true, 4.2, "TechCorp", ["accessory", "wireless"]),
        product(3, "Desk", "Furniture", 299.99, false, 4.0, "FurnitureCo", ["office", "wooden"]),
        product(4, "Chair", "Furniture", 199.99, true, 4.7, "FurnitureCo", ["office", "ergonomic"]),
        product(5, "Monitor", "Electronics", 399.99, true, 4.6, "TechCorp", ["display", "4k"]),
        product(6, "Keyboard", "Electronics", 79.99, false, 4.3, "TechCorp", ["accessory", "mechanical"]),
    ]
}
