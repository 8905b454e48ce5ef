//! Representation-dependent sorts.
//!
//! Counting, radix and bucket sort need a numeric view of the element on
//! top of (or instead of) the comparator. The view is a trait bound
//! ([`crate::IntKey`] / [`crate::UnitKey`]) and every entry point returns
//! `Result`, so a violated precondition is an error value instead of an
//! out-of-bounds access.

pub mod bucket;
pub mod counting;
pub mod radix;

use crate::error::SortError;
use crate::key::IntKey;

fn int_key<T: IntKey>(x: &T, algorithm: &str) -> Result<i64, SortError> {
    x.int_key().ok_or_else(|| {
        SortError::invalid_precondition(format!(
            "{algorithm} requires elements with an integer key"
        ))
    })
}
