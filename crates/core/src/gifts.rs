//! Query semantics for the gift listing endpoint.
//!
//! The listing accepts `minPrice` / `maxPrice` / `sort` as raw query-string
//! text. Parsing and the filter predicate live here as pure functions so the
//! behaviour is testable without a database or an HTTP stack.

use serde::{Deserialize, Serialize};

/// A gift's stored price range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

/// One entry of a gift's `links` list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GiftLink {
    pub name_link: String,
    pub url: String,
}

/// Caller-supplied price bounds, present only when BOTH bounds parse.
///
/// A bound that is absent or not numeric text counts as missing, and a
/// missing bound disables price filtering entirely. Partial bounds are
/// deliberately not treated as open-ended ranges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceBounds {
    pub min: f64,
    pub max: f64,
}

impl PriceBounds {
    /// Parse both bounds from raw query text. Returns `None` unless both
    /// parse to numbers.
    pub fn from_raw(min: Option<&str>, max: Option<&str>) -> Option<Self> {
        Some(Self {
            min: parse_bound(min)?,
            max: parse_bound(max)?,
        })
    }

    /// The containment test applied to each gift: the gift's own range must
    /// sit inside the caller's bounds (`min >= minPrice` AND
    /// `max <= maxPrice`). Intentionally not a range-overlap test.
    pub fn contains(&self, price: &PriceRange) -> bool {
        price.min >= self.min && price.max <= self.max
    }
}

fn parse_bound(raw: Option<&str>) -> Option<f64> {
    raw?.trim().parse().ok()
}

/// The `sort` query directive. Anything other than `asc`/`desc` (including
/// an absent parameter) leaves the store's natural order untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirective {
    Ascending,
    Descending,
}

impl SortDirective {
    pub fn from_raw(raw: Option<&str>) -> Option<Self> {
        match raw {
            Some("asc") => Some(Self::Ascending),
            Some("desc") => Some(Self::Descending),
            _ => None,
        }
    }
}

/// Sort items by the `min` bound of their price range, in place.
///
/// The sort is stable: items with equal `price.min` keep their relative
/// order. `key` extracts the price range from an item so the db crate's row
/// type does not need to be visible here.
pub fn sort_by_price_min<T>(items: &mut [T], directive: SortDirective, key: impl Fn(&T) -> f64) {
    match directive {
        SortDirective::Ascending => items.sort_by(|a, b| key(a).total_cmp(&key(b))),
        SortDirective::Descending => items.sort_by(|a, b| key(b).total_cmp(&key(a))),
    }
}
