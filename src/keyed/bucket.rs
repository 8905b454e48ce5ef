use std::cmp::Ordering;

use crate::error::SortError;
use crate::key::UnitKey;
use crate::order::apply_order;

#[inline]
pub fn sort<T>(v: &mut [T]) -> Result<(), SortError>
where
    T: Ord + UnitKey,
{
    bucket_sort(v, &mut |a, b| a.lt(b))
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F) -> Result<(), SortError>
where
    T: UnitKey,
    F: FnMut(&T, &T) -> Ordering,
{
    bucket_sort(v, &mut |a, b| compare(a, b) == Ordering::Less)
}

// len buckets, element key in [0, 1) scaled by len to pick one. Keys
// outside that interval are a precondition violation, not an out-of-bounds
// index. Buckets are insertion-sorted with the comparator and concatenated
// in index order.
fn bucket_sort<T, F>(v: &mut [T], is_less: &mut F) -> Result<(), SortError>
where
    T: UnitKey,
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return Ok(());
    }

    let mut buckets: Vec<Vec<usize>> = vec![Vec::new(); len];

    for (i, x) in v.iter().enumerate() {
        let key = x.unit_key().ok_or_else(|| {
            SortError::invalid_precondition("bucket sort requires elements with a fractional key")
        })?;

        if !(0.0..1.0).contains(&key) {
            return Err(SortError::invalid_precondition(format!(
                "bucket sort key {key} lies outside [0, 1)"
            )));
        }

        // key < 1.0, but key * len can still round up to len.
        let bucket = ((key * len as f64) as usize).min(len - 1);
        buckets[bucket].push(i);
    }

    let mut order = Vec::with_capacity(len);
    for bucket in &buckets {
        order.extend_from_slice(bucket);
    }
    apply_order(v, &order);

    // Each bucket now occupies a contiguous range of v. The inner sort is
    // a local insertion sort to keep the algorithm self-contained.
    let mut start = 0;
    for bucket in &buckets {
        let end = start + bucket.len();
        insertion(&mut v[start..end], is_less);
        start = end;
    }

    Ok(())
}

fn insertion<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    for i in 1..v.len() {
        let mut j = i;

        while j > 0 && is_less(&v[j], &v[j - 1]) {
            v.swap(j, j - 1);
            j -= 1;
        }
    }
}
