use std::cmp::Ordering;

sort_impl!("heap_unstable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    heap_sort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    heap_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

fn heap_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    // Build a max-heap, sifting down from the last internal node to the root.
    for i in (0..len / 2).rev() {
        sift_down(v, len, i, is_less);
    }

    // Swap the root with the last unsorted element and re-sift.
    for end in (1..len).rev() {
        v.swap(0, end);
        sift_down(v, end, 0, is_less);
    }
}

fn sift_down<T, F>(v: &mut [T], heap_len: usize, mut root: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    loop {
        let mut largest = root;
        let left = 2 * root + 1;
        let right = left + 1;

        if left < heap_len && is_less(&v[largest], &v[left]) {
            largest = left;
        }

        if right < heap_len && is_less(&v[largest], &v[right]) {
            largest = right;
        }

        if largest == root {
            return;
        }

        v.swap(root, largest);
        root = largest;
    }
}
