use std::cmp::Ordering;

use super::int_key;
use crate::error::SortError;
use crate::key::IntKey;
use crate::order::apply_order;

/// Largest `max - min + 1` key range counting sort will allocate a count
/// slot per key for. Beyond this the input is better served by a
/// comparison sort, and the call fails with `UnboundedResource`.
pub const MAX_KEY_RANGE: u64 = 1 << 26;

#[inline]
pub fn sort<T>(v: &mut [T]) -> Result<(), SortError>
where
    T: Ord + IntKey,
{
    counting_sort(v, &mut |a, b| a.lt(b))
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F) -> Result<(), SortError>
where
    T: IntKey,
    F: FnMut(&T, &T) -> Ordering,
{
    counting_sort(v, &mut |a, b| compare(a, b) == Ordering::Less)
}

// Min and max come from the comparator, the count index from the integer
// key, as in the classic formulation. A comparator that disagrees with the
// keys can push an index outside [min, max]; that is caught and reported
// instead of indexing out of bounds.
fn counting_sort<T, F>(v: &mut [T], is_less: &mut F) -> Result<(), SortError>
where
    T: IntKey,
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return Ok(());
    }

    let mut min = 0;
    let mut max = 0;
    for i in 1..len {
        if is_less(&v[i], &v[min]) {
            min = i;
        }
        if is_less(&v[max], &v[i]) {
            max = i;
        }
    }

    let min_key = int_key(&v[min], "counting sort")?;
    let max_key = int_key(&v[max], "counting sort")?;

    if max_key < min_key {
        return Err(SortError::invalid_precondition(
            "counting sort comparator and integer keys disagree about the element order",
        ));
    }

    let range = (max_key as i128 - min_key as i128 + 1) as u128;
    if range > MAX_KEY_RANGE as u128 {
        return Err(SortError::unbounded_resource(format!(
            "counting sort key range {range} exceeds the limit of {MAX_KEY_RANGE}"
        )));
    }
    let range = range as usize;

    let mut counts = vec![0usize; range];
    let mut key_indices = Vec::with_capacity(len);

    for x in v.iter() {
        let key = int_key(x, "counting sort")?;
        if key < min_key || key > max_key {
            return Err(SortError::invalid_precondition(format!(
                "counting sort key {key} lies outside the comparator-derived range \
                 {min_key}..={max_key}"
            )));
        }

        let index = (key - min_key) as usize;
        counts[index] += 1;
        key_indices.push(index);
    }

    for i in 1..range {
        counts[i] += counts[i - 1];
    }

    // Stable placement: walking backwards hands equal keys their slots in
    // reverse, which cancels out to input order.
    let mut order = vec![0usize; len];
    for i in (0..len).rev() {
        let index = key_indices[i];
        counts[index] -= 1;
        order[counts[index]] = i;
    }

    apply_order(v, &order);

    Ok(())
}
