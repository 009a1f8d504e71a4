//! Insertion sort.

use core::cmp::Ordering;

use crate::ordering::SortKey;

/// Sorts the slice, preserving the order of equal elements.
///
/// This sort is stable, in-place (i.e., does not allocate), *O*(*n*^2) worst-case and *O*(*n*)
/// when the slice is already sorted.
///
/// # Examples
///
/// ```
/// let mut v = [-5, 4, 1, -3, 2];
///
/// sorting::stable::insertion::sort(&mut v);
/// assert!(v == [-5, -3, 1, 2, 4]);
/// ```
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: SortKey,
{
    insertion_sort(v, &mut |a: &T, b: &T| a.key_lt(b));
}

/// Sorts the slice with a comparator function, preserving the order of equal elements.
///
/// The comparator function must define a total ordering for the elements in the slice. If
/// the ordering is not total, the order of the elements is unspecified.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    insertion_sort(v, &mut |a: &T, b: &T| compare(a, b) == Ordering::Less);
}

#[inline]
fn insertion_sort<T: Copy, F: FnMut(&T, &T) -> bool>(v: &mut [T], is_less: &mut F) {
    if v.len() >= 2 {
        insertion_sort_shift_left(v, 1, is_less);
    }
}

/// Sort `v` assuming `v[..offset]` is already sorted.
///
/// Each new tail element is held aside while the strictly greater elements of the sorted
/// prefix shift one slot to the right, then written once into the gap. Equal elements are
/// never shifted past each other.
pub(crate) fn insertion_sort_shift_left<T, F>(v: &mut [T], offset: usize, is_less: &mut F)
where
    T: Copy,
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(offset != 0);

    for tail in offset.max(1)..v.len() {
        insert_tail(&mut v[..=tail], is_less);
    }
}

/// Sorts `v` assuming `v[..v.len() - 1]` is already sorted.
#[inline]
fn insert_tail<T, F>(v: &mut [T], is_less: &mut F)
where
    T: Copy,
    F: FnMut(&T, &T) -> bool,
{
    let mut gap = v.len() - 1;
    let tmp = v[gap];

    if !is_less(&tmp, &v[gap - 1]) {
        return;
    }

    loop {
        v[gap] = v[gap - 1];
        gap -= 1;

        if gap == 0 || !is_less(&tmp, &v[gap - 1]) {
            break;
        }
    }

    v[gap] = tmp;
}
