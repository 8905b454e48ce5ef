/// Applies a computed element order to `v` in place.
///
/// `order[pos]` is the current index of the element that belongs at `pos`.
/// The slice is permuted by walking each permutation cycle with swaps, so
/// no element is ever duplicated and no `Clone` bound is needed.
///
/// `order` must be a permutation of `0..v.len()`.
pub(crate) fn apply_order<T>(v: &mut [T], order: &[usize]) {
    debug_assert_eq!(v.len(), order.len());

    let mut visited = vec![false; order.len()];

    for start in 0..order.len() {
        if visited[start] {
            continue;
        }

        let mut pos = start;
        loop {
            visited[pos] = true;

            let src = order[pos];
            if src == start {
                break;
            }

            v.swap(pos, src);
            pos = src;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::apply_order;

    #[test]
    fn identity() {
        let mut v = vec!["a", "b", "c"];
        apply_order(&mut v, &[0, 1, 2]);
        assert_eq!(v, ["a", "b", "c"]);
    }

    #[test]
    fn single_cycle() {
        let mut v = vec!["d", "a", "b", "c"];
        apply_order(&mut v, &[1, 2, 3, 0]);
        assert_eq!(v, ["a", "b", "c", "d"]);
    }

    #[test]
    fn disjoint_cycles() {
        let mut v = vec![3, 1, 4, 1, 5, 9, 2, 6];
        let mut order: Vec<usize> = (0..v.len()).collect();
        order.sort_by_key(|&i| v[i]);

        apply_order(&mut v, &order);
        assert_eq!(v, [1, 1, 2, 3, 4, 5, 6, 9]);
    }

    #[test]
    fn empty() {
        let mut v: Vec<i32> = Vec::new();
        apply_order(&mut v, &[]);
        assert!(v.is_empty());
    }
}
