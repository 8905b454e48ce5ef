use std::cmp::Ordering;

sort_impl!("gnome_unstable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    gnome_sort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    gnome_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

// A single moving index: swap backward while out of order, otherwise
// advance. Insertion sort's comparison pattern with O(1) extra state.
fn gnome_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    let mut index = 0;

    while index < len {
        if index == 0 || !is_less(&v[index], &v[index - 1]) {
            index += 1;
        } else {
            v.swap(index, index - 1);
            index -= 1;
        }
    }
}
