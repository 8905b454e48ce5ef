use std::cmp::Ordering;

sort_impl!("quick_unstable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    quick_sort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    quick_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

// Lomuto partition with the last element as pivot. Known limitation: the
// comparison count degrades to O(n^2) on sorted or adversarial input.
// Recursing into the smaller partition and looping on the larger one keeps
// the stack depth at O(log n) without changing the comparisons made.
fn quick_sort<T, F>(mut v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    while v.len() > 1 {
        let pivot_index = partition(v, is_less);

        let (left, rest) = v.split_at_mut(pivot_index);
        let right = &mut rest[1..];

        if left.len() < right.len() {
            quick_sort(left, is_less);
            v = right;
        } else {
            quick_sort(right, is_less);
            v = left;
        }
    }
}

fn partition<T, F>(v: &mut [T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let high = v.len() - 1;
    let mut store = 0;

    for j in 0..high {
        if is_less(&v[j], &v[high]) {
            v.swap(store, j);
            store += 1;
        }
    }

    v.swap(store, high);

    store
}
