use std::cmp::Ordering;

sort_impl!("cocktail_unstable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    cocktail_sort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    cocktail_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

// Bidirectional bubble passes, forward then backward, until a full round
// produces no swap.
fn cocktail_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    loop {
        let mut swapped = false;

        for i in 0..(len - 1) {
            if is_less(&v[i + 1], &v[i]) {
                v.swap(i, i + 1);
                swapped = true;
            }
        }

        if !swapped {
            break;
        }

        swapped = false;

        for i in (0..(len - 1)).rev() {
            if is_less(&v[i + 1], &v[i]) {
                v.swap(i, i + 1);
                swapped = true;
            }
        }

        if !swapped {
            break;
        }
    }
}
