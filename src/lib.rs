//! Thirteen classic in-memory sorting algorithms behind one contract.
//!
//! Every comparison-based algorithm lives in its own module under
//! [`stable`] or [`unstable`] and exposes `sort` / `sort_by` free functions
//! plus a `SortImpl` unit struct implementing [`Sort`]. The
//! representation-dependent algorithms (counting, radix, bucket) live under
//! [`keyed`]; they additionally require a numeric view of the element via
//! [`IntKey`] or [`UnitKey`] and return a [`SortError`] when that view does
//! not hold.

pub use sort_test_tools::Sort;

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord,
            {
                sort(arr);
            }

            #[inline]
            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                F: FnMut(&T, &T) -> Ordering,
            {
                sort_by(arr, compare);
            }
        }
    };
}

pub mod error;
pub mod key;
pub mod keyed;
mod order;
pub mod stable;
pub mod unstable;

pub use error::SortError;
pub use key::{IntKey, UnitKey};
