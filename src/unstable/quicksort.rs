//! Introspective quicksort.

use core::cmp::Ordering;

use crate::ordering::SortKey;
use crate::stable::insertion::insertion_sort_shift_left;
use crate::stable::powersort::find_existing_run;
use crate::unstable::heapsort::heapsort;
use crate::unstable::pivot::choose_pivot;

// Slices of up to this length get sorted using insertion sort, without any other analysis.
const MAX_LEN_ALWAYS_INSERTION_SORT: usize = 20;

// Sub-slices of up to this length left over by partitioning get sorted using insertion sort.
const SMALL_SORT_THRESHOLD: usize = 16;

/// Sorts the slice, but might not preserve the order of equal elements.
///
/// This sort is unstable (i.e., may reorder equal elements), in-place
/// (i.e., does not allocate), and *O*(*n* \* log(*n*)) worst-case.
///
/// # Current implementation
///
/// The current algorithm is based on [pattern-defeating quicksort][pdqsort] by Orson Peters,
/// which combines the fast average case of quicksort with the fast worst case of heapsort,
/// while achieving linear time on fully sorted and reverse sorted slices. Pivots are chosen
/// deterministically.
///
/// # Examples
///
/// ```
/// let mut v = [-5, 4, 1, -3, 2];
///
/// sorting::unstable::quicksort::sort(&mut v);
/// assert!(v == [-5, -3, 1, 2, 4]);
/// ```
///
/// [pdqsort]: https://github.com/orlp/pdqsort
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: SortKey,
{
    unstable_sort(v, |a: &T, b: &T| a.key_lt(b));
}

/// Sorts the slice with a comparator function, but might not preserve the order of equal
/// elements.
///
/// This sort is unstable (i.e., may reorder equal elements), in-place
/// (i.e., does not allocate), and *O*(*n* \* log(*n*)) worst-case.
///
/// The comparator function must define a total ordering for the elements in the slice. If
/// the ordering is not total, the order of the elements is unspecified, but every original
/// element remains in the slice exactly once.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    unstable_sort(v, |a: &T, b: &T| compare(a, b) == Ordering::Less);
}

// --- IMPL ---

#[inline]
fn unstable_sort<T, F>(v: &mut [T], mut is_less: F)
where
    T: Copy,
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    if len <= MAX_LEN_ALWAYS_INSERTION_SORT {
        insertion_sort_shift_left(v, 1, &mut is_less);
        return;
    }

    introsort(v, &mut is_less);
}

#[inline(never)]
fn introsort<T, F>(v: &mut [T], is_less: &mut F)
where
    T: Copy,
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    let (run_len, was_reversed) = find_existing_run(v, is_less);

    if run_len == len {
        if was_reversed {
            v.reverse();
        }

        // It would be possible to do in-place merging here for a long existing streak. But
        // that makes the implementation a lot bigger, the general sort covers that use-case.
        return;
    }

    // Limit the number of imbalanced partitions to `2 * floor(log2(len))`.
    // The binary OR by one is used to eliminate the zero-check in the logarithm.
    let limit = 2 * (len | 1).ilog2();
    quicksort(v, None, limit, is_less);
}

/// Sorts `v` recursively.
///
/// If the slice had a predecessor in the original array, its pivot is specified as
/// `ancestor_pivot`.
///
/// `limit` is the number of allowed imbalanced partitions before switching to `heapsort`. If zero,
/// this function will immediately switch to heapsort. Every recursive call consumes one unit of
/// `limit`, which bounds the recursion depth to the initial `limit`.
fn quicksort<T, F>(mut v: &mut [T], mut ancestor_pivot: Option<T>, mut limit: u32, is_less: &mut F)
where
    T: Copy,
    F: FnMut(&T, &T) -> bool,
{
    loop {
        if v.len() <= SMALL_SORT_THRESHOLD {
            if v.len() >= 2 {
                insertion_sort_shift_left(v, 1, is_less);
            }
            return;
        }

        // If too many bad pivot choices were made, simply fall back to heapsort in order to
        // guarantee `O(N x log(N))` worst-case.
        if limit == 0 {
            heapsort(v, is_less);
            return;
        }

        limit -= 1;

        let pivot_pos = choose_pivot(v, is_less);

        // If the chosen pivot is equal to the predecessor, then it's the smallest element in the
        // slice. Partition the slice into elements equal to and elements greater than the pivot.
        // This case is usually hit when the slice contains many duplicate elements.
        if let Some(p) = ancestor_pivot {
            if !is_less(&p, &v[pivot_pos]) {
                let num_le = partition(v, pivot_pos, &mut |a, b| !is_less(b, a));

                // Continue sorting elements greater than the pivot. We know that `num_le`
                // contains the pivot. So we can continue after `num_le`.
                v = &mut v[(num_le + 1)..];
                ancestor_pivot = None;
                continue;
            }
        }

        let num_lt = partition(v, pivot_pos, is_less);
        debug_assert!(num_lt < v.len());

        // Split the slice into `left`, `pivot`, and `right`.
        let (left, right) = v.split_at_mut(num_lt);
        let (pivot, right) = right.split_at_mut(1);
        let pivot = pivot[0];

        // Recurse into the left side. We have a fixed recursion limit, testing shows no real
        // benefit for recursing into the shorter side.
        quicksort(left, ancestor_pivot, limit, is_less);

        // Continue with the right side.
        v = right;
        ancestor_pivot = Some(pivot);
    }
}

/// Takes the input slice `v` and re-arranges elements such that when the call returns normally
/// all elements that compare true for `is_less(elem, pivot)` where `pivot == v[pivot_pos]` are
/// on the left side of `v` followed by the pivot itself, followed by the other elements,
/// notionally considered greater or equal to `pivot`.
///
/// Returns the number of elements that are compared true for `is_less(elem, pivot)`, which is
/// also the final position of the pivot.
///
/// If `is_less` does not implement a total order the resulting order and return value are
/// unspecified. All original elements will remain in `v`.
fn partition<T, F>(v: &mut [T], pivot_pos: usize, is_less: &mut F) -> usize
where
    T: Copy,
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len == 0 {
        return 0;
    }

    // Place the pivot at the beginning of slice.
    v.swap(0, pivot_pos);
    let pivot = v[0];

    let num_lt = partition_hoare(&mut v[1..], &pivot, is_less);

    // Place the pivot between the two partitions.
    v.swap(0, num_lt);

    num_lt
}

/// See [`partition`].
///
/// Scans from both ends, swapping the first element not less than the pivot on the left with
/// the last element less than the pivot on the right, until the scans cross.
fn partition_hoare<T, F>(v: &mut [T], pivot: &T, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len == 0 {
        return 0;
    }

    let mut left = 0;
    let mut right = len;

    loop {
        // Find the first element greater than or equal to the pivot.
        while left < right && is_less(&v[left], pivot) {
            left += 1;
        }

        // Find the last element less than the pivot.
        loop {
            right -= 1;
            if left >= right || is_less(&v[right], pivot) {
                break;
            }
        }

        if left >= right {
            break;
        }

        v.swap(left, right);
        left += 1;
    }

    left
}
