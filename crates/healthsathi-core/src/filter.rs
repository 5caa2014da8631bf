//! Multi-criteria catalog filtering.
//!
//! A criteria set is turned into a [`Filter`]: an AND-composition of
//! `Fn(&T) -> bool` predicates. Inactive criteria contribute no predicate,
//! so an all-inactive set yields an empty filter that admits every item.
//!
//! # Guarantees
//!
//! - The output is a subsequence of the input: order is preserved and the
//!   source slice is never mutated.
//! - Applying the same criteria twice gives the same result as applying it
//!   once.
//! - There is no error path. Fields that cannot satisfy a predicate (for
//!   example a missing fee under a price bracket) simply do not match.
//!
//! # Example
//!
//! ```rust
//! use healthsathi_core::catalog::Catalog;
//! use healthsathi_core::criteria::DoctorCriteria;
//! use healthsathi_core::filter::filter;
//!
//! let catalog = Catalog::sample();
//! let criteria = DoctorCriteria {
//!     specialty: "cardiology".parse().unwrap(),
//!     ..Default::default()
//! };
//! let hits = filter(&catalog.doctors, &criteria);
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].name, "Dr. Amit Kumar");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Sentinel spelling for an inactive criterion.
pub const ALL: &str = "all";

/// A filter dimension: either inactive ([`Selection::All`]) or a concrete value.
///
/// Parses `"all"` (any case) and the empty string as inactive. Serializes
/// back to `"all"` or to the value's own representation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection<V> {
    #[default]
    All,
    Only(V),
}

impl<V> Selection<V> {
    pub fn only(value: V) -> Self {
        Selection::Only(value)
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }

    pub fn value(&self) -> Option<&V> {
        match self {
            Selection::All => None,
            Selection::Only(v) => Some(v),
        }
    }
}

impl<V: FromStr> FromStr for Selection<V> {
    type Err = V::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ALL) {
            return Ok(Selection::All);
        }
        trimmed.parse().map(Selection::Only)
    }
}

impl<V: fmt::Display> fmt::Display for Selection<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => f.write_str(ALL),
            Selection::Only(v) => v.fmt(f),
        }
    }
}

impl<V: Serialize> Serialize for Selection<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Selection::All => serializer.serialize_str(ALL),
            Selection::Only(v) => v.serialize(serializer),
        }
    }
}

impl<'de, V> Deserialize<'de> for Selection<V>
where
    V: FromStr,
    V::Err: fmt::Display,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw {
            None => Ok(Selection::All),
            Some(s) => s.parse().map_err(serde::de::Error::custom),
        }
    }
}

type Predicate<'a, T> = Box<dyn Fn(&T) -> bool + 'a>;

/// AND-composition of item predicates.
pub struct Filter<'a, T> {
    predicates: Vec<Predicate<'a, T>>,
}

impl<'a, T> Filter<'a, T> {
    /// An empty filter; it admits every item.
    pub fn new() -> Self {
        Self {
            predicates: Vec::new(),
        }
    }

    /// Add a predicate unconditionally.
    pub fn with(mut self, predicate: impl Fn(&T) -> bool + 'a) -> Self {
        self.predicates.push(Box::new(predicate));
        self
    }

    /// Add a predicate only when `active` is true.
    pub fn when(self, active: bool, predicate: impl Fn(&T) -> bool + 'a) -> Self {
        if active {
            self.with(predicate)
        } else {
            self
        }
    }

    /// Add `predicate(item, value)` when the selection is concrete.
    pub fn select<V: 'a>(
        self,
        selection: &'a Selection<V>,
        predicate: impl Fn(&T, &V) -> bool + 'a,
    ) -> Self {
        match selection {
            Selection::All => self,
            Selection::Only(value) => self.with(move |item| predicate(item, value)),
        }
    }

    /// Number of active predicates.
    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    pub fn matches(&self, item: &T) -> bool {
        self.predicates.iter().all(|p| p(item))
    }

    /// Return the matching items in source order.
    pub fn apply<'s>(&self, items: &'s [T]) -> Vec<&'s T> {
        let out: Vec<&T> = items.iter().filter(|item| self.matches(item)).collect();
        debug_assert!(out.len() <= items.len());
        out
    }
}

impl<T> Default for Filter<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

/// A criteria set for items of type `T`.
pub trait Criteria<T> {
    /// Build the predicate composition for the currently active criteria.
    fn to_filter(&self) -> Filter<'_, T>;

    /// True when no criterion is active.
    fn is_inactive(&self) -> bool {
        self.to_filter().is_empty()
    }
}

/// Narrow `items` to those satisfying every active criterion.
pub fn filter<'s, T, C>(items: &'s [T], criteria: &C) -> Vec<&'s T>
where
    C: Criteria<T> + ?Sized,
{
    criteria.to_filter().apply(items)
}

/// Case-insensitive substring test.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Case-insensitive equality.
pub fn eq_ci(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Free-text search: empty `needle` matches; otherwise any field contains it.
pub fn search_matches(needle: &str, fields: &[&str]) -> bool {
    if needle.is_empty() {
        return true;
    }
    let needle = needle.to_lowercase();
    fields.iter().any(|f| f.to_lowercase().contains(&needle))
}
