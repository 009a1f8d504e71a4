//! Selection sort.

use core::cmp::Ordering;

use crate::ordering::SortKey;

/// Sorts the slice, but might not preserve the order of equal elements.
///
/// This sort is unstable, in-place (i.e., does not allocate) and performs *O*(*n*^2) comparisons
/// but at most *n* - 1 swaps, regardless of the input.
///
/// # Examples
///
/// ```
/// let mut v = [4, 2, 3, 1, 5];
///
/// sorting::unstable::selection::sort(&mut v);
/// assert!(v == [1, 2, 3, 4, 5]);
/// ```
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: SortKey,
{
    selection_sort(v, &mut |a: &T, b: &T| a.key_lt(b));
}

/// Sorts the slice with a comparator function, but might not preserve the order of equal
/// elements.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    selection_sort(v, &mut |a: &T, b: &T| compare(a, b) == Ordering::Less);
}

/// After each outer iteration `v[..=i]` holds the `i + 1` smallest elements in sorted order.
fn selection_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    for i in 0..len.saturating_sub(1) {
        let mut min = i;
        for j in (i + 1)..len {
            if is_less(&v[j], &v[min]) {
                min = j;
            }
        }

        if min != i {
            v.swap(i, min);
        }
    }
}
