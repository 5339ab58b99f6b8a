//! TransactionalBuffer Integration Tests
//!
//! Tests validate the public contract only: interface walk-through,
//! multi-producer concurrency, and property-based coverage.

mod properties;
