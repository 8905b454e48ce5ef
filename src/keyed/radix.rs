use super::int_key;
use crate::error::SortError;
use crate::key::IntKey;
use crate::order::apply_order;

/// Least-significant-digit radix sort, base 10.
///
/// There is no `sort_by`: digit placement is fully determined by the
/// integer keys, a comparator could not influence the result.
pub fn sort<T>(v: &mut [T]) -> Result<(), SortError>
where
    T: IntKey,
{
    let len = v.len();
    if len < 2 {
        return Ok(());
    }

    let mut keys = Vec::with_capacity(len);
    let mut max_key = 0i64;

    for x in v.iter() {
        let key = int_key(x, "radix sort")?;
        if key < 0 {
            return Err(SortError::invalid_precondition(format!(
                "radix sort requires non-negative integer keys, got {key}"
            )));
        }

        max_key = max_key.max(key);
        keys.push(key);
    }

    let mut digits = 1;
    let mut rest = max_key / 10;
    while rest > 0 {
        digits += 1;
        rest /= 10;
    }

    // One stable counting pass per digit place, least significant first.
    let mut place = 1i64;
    for _ in 0..digits {
        counting_pass(v, &mut keys, place);
        place *= 10;
    }

    Ok(())
}

fn counting_pass<T>(v: &mut [T], keys: &mut [i64], place: i64) {
    let len = v.len();

    let mut counts = [0usize; 10];
    for key in keys.iter() {
        counts[((key / place) % 10) as usize] += 1;
    }

    for i in 1..10 {
        counts[i] += counts[i - 1];
    }

    let mut order = vec![0usize; len];
    for i in (0..len).rev() {
        let digit = ((keys[i] / place) % 10) as usize;
        counts[digit] -= 1;
        order[counts[digit]] = i;
    }

    // The keys have to follow their elements for the next pass.
    apply_order(v, &order);
    apply_order(keys, &order);
}
