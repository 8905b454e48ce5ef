use std::cmp::Ordering;
use std::mem;
use std::ptr;

sort_impl!("merge_stable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    stable_sort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    stable_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

fn stable_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if mem::size_of::<T>() == 0 {
        // Sorting has no meaningful behavior on zero-sized types.
        return;
    }

    let len = v.len();
    if len < 2 {
        return;
    }

    // Every merge copies only the left run, which is never longer than
    // len / 2 at any recursion depth.
    let mut buf = Vec::with_capacity(len / 2);
    merge_sort(v, buf.as_mut_ptr(), is_less);
}

fn merge_sort<T, F>(v: &mut [T], buf: *mut T, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    let mid = len / 2;
    merge_sort(&mut v[..mid], buf, is_less);
    merge_sort(&mut v[mid..], buf, is_less);

    // SAFETY: 0 < mid < len, and buf has capacity for at least mid elements.
    unsafe {
        merge(v, mid, buf, is_less);
    }
}

/// Merges the non-decreasing runs `v[..mid]` and `v[mid..]` into `v`,
/// taking the left element on ties so the merge is stable.
///
/// # Safety
///
/// `buf` must point to scratch memory with room for `mid` elements, and
/// `0 < mid < v.len()` must hold.
unsafe fn merge<T, F>(v: &mut [T], mid: usize, buf: *mut T, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    let v_ptr = v.as_mut_ptr();
    let v_end = v_ptr.add(len);

    // The left run is moved into `buf`; `hole` tracks its unconsumed part
    // and the position in `v` it still has to fill. If `is_less` panics,
    // dropping `hole` copies the unconsumed part back, so `v` holds every
    // element exactly once again.
    ptr::copy_nonoverlapping(v_ptr, buf, mid);
    let mut hole = MergeHole {
        start: buf,
        end: buf.add(mid),
        dest: v_ptr,
    };

    let mut right = v_ptr.add(mid);

    while hole.start < hole.end && right < v_end {
        // Consume the lesser side; on ties prefer the left run.
        let to_copy = if is_less(&*right, &*hole.start) {
            let val = right;
            right = right.add(1);
            val
        } else {
            let val = hole.start;
            hole.start = hole.start.add(1);
            val
        };

        ptr::copy_nonoverlapping(to_copy, hole.dest, 1);
        hole.dest = hole.dest.add(1);
    }

    // `hole` drops here and copies whatever remains of the left run into
    // the remaining gap in `v`. If the left run was fully consumed, the
    // rest of the right run is already in place.
}

struct MergeHole<T> {
    start: *mut T,
    end: *mut T,
    dest: *mut T,
}

impl<T> Drop for MergeHole<T> {
    fn drop(&mut self) {
        // SAFETY: `start..end` are the unconsumed elements of the left run
        // and `dest` has exactly that much room left in `v`.
        unsafe {
            let remaining = self.end.offset_from(self.start) as usize;
            ptr::copy_nonoverlapping(self.start, self.dest, remaining);
        }
    }
}
