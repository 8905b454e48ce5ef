use std::cmp::Ordering;

use crate::order::apply_order;

sort_impl!("binary_tree_unstable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    tree_sort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    tree_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

const NONE: usize = usize::MAX;

// Inserts every element into a binary search tree ordered by the
// comparator, ties going right, then reads the in-order traversal back into
// the slice. The tree is an index arena scratch structure discarded after
// the call. Insertion and traversal are iterative, so adversarial input
// degrades to O(n^2) time but cannot exhaust the native stack.
fn tree_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    // Node i is element i; only the links need storing.
    let mut left = vec![NONE; len];
    let mut right = vec![NONE; len];
    let root = 0;

    for i in 1..len {
        let mut node = root;

        loop {
            let child = if is_less(&v[i], &v[node]) {
                &mut left[node]
            } else {
                &mut right[node]
            };

            if *child == NONE {
                *child = i;
                break;
            }

            node = *child;
        }
    }

    // In-order traversal with an explicit stack.
    let mut order = Vec::with_capacity(len);
    let mut stack = Vec::new();
    let mut current = root;

    while current != NONE || !stack.is_empty() {
        while current != NONE {
            stack.push(current);
            current = left[current];
        }

        if let Some(node) = stack.pop() {
            order.push(node);
            current = right[node];
        }
    }

    apply_order(v, &order);
}
