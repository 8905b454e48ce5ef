//! Numeric views required by the representation-dependent sorts.
//!
//! The original formulation of these algorithms coerces elements to numbers
//! at runtime. Here the capability is a trait bound, and a failed
//! conversion surfaces as `SortError::InvalidPrecondition` instead of a
//! coercion fault.

/// Integer key, required by counting and radix sort.
///
/// `None` means the element has no integer representation. Radix sort
/// additionally rejects negative keys.
pub trait IntKey {
    fn int_key(&self) -> Option<i64>;
}

/// Fractional key expected to lie in `[0, 1)`, required by bucket sort.
///
/// `None` means the element has no fractional representation. The range
/// check itself is bucket sort's job, so out-of-range values report which
/// value was out of range rather than just "no key".
pub trait UnitKey {
    fn unit_key(&self) -> Option<f64>;
}

macro_rules! int_key_impl {
    ($($t:ty),+) => {
        $(
            impl IntKey for $t {
                #[inline]
                fn int_key(&self) -> Option<i64> {
                    Some(*self as i64)
                }
            }
        )+
    };
}

int_key_impl!(i8, i16, i32, i64, u8, u16, u32);

impl IntKey for u64 {
    #[inline]
    fn int_key(&self) -> Option<i64> {
        i64::try_from(*self).ok()
    }
}

impl IntKey for usize {
    #[inline]
    fn int_key(&self) -> Option<i64> {
        i64::try_from(*self).ok()
    }
}

impl UnitKey for f64 {
    #[inline]
    fn unit_key(&self) -> Option<f64> {
        self.is_finite().then_some(*self)
    }
}

impl UnitKey for f32 {
    #[inline]
    fn unit_key(&self) -> Option<f64> {
        self.is_finite().then_some(*self as f64)
    }
}
