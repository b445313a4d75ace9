//! Shop filtering and search.
//!
//! A pure function over the catalog snapshot: category restriction plus
//! case-insensitive substring search on the product name. Result order is
//! always the catalog order; there is no ranking and no pagination.

use crate::types::{Category, Product};

/// Category restriction for the shop view.
///
/// `Todos` is the sentinel meaning "no restriction".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    Todos,
    Solo(Category),
}

impl CategoryFilter {
    /// Parse a filter value from a query parameter.
    ///
    /// `"Todos"` and anything that is not a known category label fall back
    /// to the unrestricted filter.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        Category::parse(value).map_or(Self::Todos, Self::Solo)
    }

    /// Query-parameter / button label for this filter.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Todos => "Todos",
            Self::Solo(category) => category.label(),
        }
    }

    #[must_use]
    pub fn matches(self, category: Category) -> bool {
        match self {
            Self::Todos => true,
            Self::Solo(wanted) => wanted == category,
        }
    }
}

/// Compute the visible subset of the catalog.
///
/// A product is visible when the filter admits its category and its name
/// contains `query` case-insensitively. Matching is plain lowercase
/// substring containment - no accent folding, so "camara" does not match
/// "Cámara". Order is preserved from `products`.
#[must_use]
pub fn visible(products: &[Product], filter: CategoryFilter, query: &str) -> Vec<Product> {
    let needle = query.to_lowercase();
    products
        .iter()
        .filter(|p| filter.matches(p.category) && p.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
