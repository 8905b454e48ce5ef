use std::cmp::Ordering;

sort_impl!("bubble_unstable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    bubble_sort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    bubble_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

// len - 1 passes of adjacent-swap bubbling. No early-exit check, every pass
// runs to the end.
fn bubble_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    for i in 0..len.saturating_sub(1) {
        for j in 0..(len - i - 1) {
            if is_less(&v[j + 1], &v[j]) {
                v.swap(j, j + 1);
            }
        }
    }
}
