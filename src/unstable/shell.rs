use std::cmp::Ordering;

sort_impl!("shell_unstable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    shell_sort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    shell_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

// Gap sequence starts at len / 2 and halves until it reaches zero. Each gap
// performs one gapped insertion pass. Stable within a single gap pass only.
fn shell_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    let mut gap = len / 2;

    while gap > 0 {
        for i in gap..len {
            let mut j = i;

            while j >= gap && is_less(&v[j], &v[j - gap]) {
                v.swap(j, j - gap);
                j -= gap;
            }
        }

        gap /= 2;
    }
}
