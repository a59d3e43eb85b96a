//! Shared test utilities for domain testing.
//!
//! - [`TestDatabase`]: PostgreSQL container with the workspace migrations
//!   applied and automatic cleanup
//! - [`TestDataBuilder`]: deterministic test data generation
//!
//! # Usage
//!
//! ```rust,no_run
//! use test_utils::{TestDatabase, TestDataBuilder};
//!
//! # async fn example() {
//! let db = TestDatabase::new().await;
//! let builder = TestDataBuilder::from_test_name("my_test");
//! let name = builder.product_name("binocular");
//! # }
//! ```

mod postgres;

pub use postgres::TestDatabase;

/// Builder for deterministic test data.
///
/// Seeded from the test name so reruns produce identical fixtures.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Create from a test name (the recommended constructor).
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// A unique product name, e.g. `test-binocular-12345`.
    pub fn product_name(&self, label: &str) -> String {
        format!("test-{}-{}", label, self.seed % 100_000)
    }

    /// A deterministic price in cents within the catalog's valid range.
    pub fn price_cents(&self) -> i64 {
        100 + (self.seed % 900_000) as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_is_deterministic() {
        let a = TestDataBuilder::from_test_name("my_test");
        let b = TestDataBuilder::from_test_name("my_test");

        assert_eq!(a.product_name("scope"), b.product_name("scope"));
        assert_eq!(a.price_cents(), b.price_cents());
    }

    #[test]
    fn different_test_names_differ() {
        let a = TestDataBuilder::from_test_name("test_one");
        let b = TestDataBuilder::from_test_name("test_two");

        assert_ne!(a.product_name("scope"), b.product_name("scope"));
    }

    #[test]
    fn price_stays_in_range() {
        let builder = TestDataBuilder::new(u64::MAX);
        let cents = builder.price_cents();
        assert!((100..=999_999_999).contains(&cents));
    }
}
