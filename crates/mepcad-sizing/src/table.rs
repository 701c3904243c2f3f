//! Ascending sleeve size tables.

use crate::error::{Result, SizingError};

/// Standard sleeve catalog, nominal inches from 1.5 through 48.
const CATALOG: [f64; 18] = [
    1.5, 2.0, 3.0, 4.0, 5.0, 6.0, 8.0, 10.0, 12.0, 14.0, 16.0, 18.0, 20.0, 24.0, 30.0, 36.0, 42.0,
    48.0,
];

/// An ordered list of manufactured sleeve sizes, in inches.
///
/// Invariant: non-empty and strictly ascending; lookups rely on this
/// ordering.
#[derive(Debug, Clone, PartialEq)]
pub struct SizeTable {
    sizes: Vec<f64>,
}

impl SizeTable {
    /// Create a table from a list of sizes, validating the invariant.
    pub fn new(sizes: Vec<f64>) -> Result<Self> {
        if sizes.is_empty() {
            return Err(SizingError::EmptyTable);
        }
        for (i, &s) in sizes.iter().enumerate() {
            if s <= 0.0 {
                return Err(SizingError::NonPositiveEntry(i));
            }
            if i > 0 && s <= sizes[i - 1] {
                return Err(SizingError::NotAscending(i));
            }
        }
        Ok(Self { sizes })
    }

    /// The full standard catalog (1.5 through 48 in.).
    pub fn catalog() -> Self {
        Self {
            sizes: CATALOG.to_vec(),
        }
    }

    /// Sizes in ascending order.
    pub fn sizes(&self) -> &[f64] {
        &self.sizes
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    /// Always false; the constructor rejects empty tables.
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Largest size in the table.
    pub fn largest(&self) -> f64 {
        self.sizes[self.sizes.len() - 1]
    }

    /// Index of the first entry strictly greater than `value`, if any.
    pub fn first_above(&self, value: f64) -> Option<usize> {
        self.sizes.iter().position(|&s| s > value)
    }

    /// Entry at `index`.
    pub fn size_at(&self, index: usize) -> f64 {
        self.sizes[index]
    }
}
