//! Adaptive stable merge sort with the powersort merge policy. This is the general sort bound to
//! the `ffi_sort_*` entry points.

use core::cmp::Ordering;

use crate::stable::insertion::insertion_sort_shift_left;

/// Sorts the slice.
///
/// This sort is stable (i.e., does not reorder equal elements) and *O*(*n* \* log(*n*)) worst-case.
///
/// Only defined for totally ordered types. Floats are rejected at compile time because they do
/// not implement [`Ord`].
///
/// # Current implementation
///
/// The current algorithm is an adaptive, iterative merge sort inspired by
/// [timsort](https://en.wikipedia.org/wiki/Timsort), using the merge policy of
/// [powersort](https://arxiv.org/abs/1805.04154).
/// It is designed to be very fast in cases where the slice is nearly sorted, or consists of
/// two or more sorted sequences concatenated one after another.
///
/// Also, it allocates temporary storage half the size of `v`, but for short slices a
/// non-allocating insertion sort is used instead.
///
/// # Examples
///
/// ```
/// let mut v = [-5, 4, 1, -3, 2];
///
/// sorting::stable::powersort::sort(&mut v);
/// assert!(v == [-5, -3, 1, 2, 4]);
/// ```
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord + Copy,
{
    merge_sort(v, |a, b| a.lt(b));
}

/// Sorts the slice with a comparator function.
///
/// This sort is stable (i.e., does not reorder equal elements) and *O*(*n* \* log(*n*)) worst-case.
///
/// The comparator function must define a total ordering for the elements in the slice. If
/// the ordering is not total, the order of the elements is unspecified. An order is a
/// total order if it is (for all `a`, `b` and `c`):
///
/// * total and antisymmetric: exactly one of `a < b`, `a == b` or `a > b` is true, and
/// * transitive, `a < b` and `b < c` implies `a < c`. The same must hold for both `==` and `>`.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    merge_sort(v, |a, b| compare(a, b) == Ordering::Less);
}

/// The algorithm identifies strictly descending and non-descending subsequences, which are called
/// natural runs, scanning left to right. Strictly descending runs are reversed in place and short
/// runs are extended with insertion sort.
///
/// Every boundary between two adjacent runs gets a power: the depth at which the boundary would
/// sit in a perfectly balanced merge tree over the whole slice. Runs wait on a stack, and before
/// a new boundary is pushed every pending run whose boundary is at least as deep gets merged.
/// This keeps the total running time *O*(*n* \* log(*n*)) worst-case and the stack height
/// logarithmic.
fn merge_sort<T, F>(v: &mut [T], mut is_less: F)
where
    T: Copy,
    F: FnMut(&T, &T) -> bool,
{
    // Slices of up to this length get sorted using insertion sort.
    const MAX_INSERTION: usize = 20;
    // Very short runs are extended using insertion sort to span at least this many elements.
    const MIN_RUN: usize = 10;

    let len = v.len();

    // Short arrays get sorted in-place via insertion sort to avoid allocations.
    if len <= MAX_INSERTION {
        if len >= 2 {
            insertion_sort_shift_left(v, 1, &mut is_less);
        }
        return;
    }

    // When merging two sorted runs, this buffer holds a copy of the shorter run, which will
    // always have length at most `len / 2`.
    let mut buf: Vec<T> = Vec::with_capacity(len / 2);

    let scale_factor = merge_tree_scale_factor(len);
    let max_stack_height = len.ilog2() as usize + 2;
    let mut runs: Vec<Run> = Vec::with_capacity(max_stack_height);

    let mut prev_run = next_run(v, 0, MIN_RUN, &mut is_less);

    while prev_run.end() < len {
        let run = next_run(v, prev_run.end(), MIN_RUN, &mut is_less);
        let power = merge_tree_depth(prev_run.start, run.start, run.end(), scale_factor);

        while let Some(&top) = runs.last() {
            if top.power < power {
                break;
            }

            merge(
                &mut v[top.start..prev_run.end()],
                top.len,
                &mut buf,
                &mut is_less,
            );
            prev_run = Run {
                start: top.start,
                len: top.len + prev_run.len,
                power: 0,
            };
            runs.pop();
        }

        runs.push(Run { power, ..prev_run });
        prev_run = run;
    }

    while let Some(top) = runs.pop() {
        merge(
            &mut v[top.start..prev_run.end()],
            top.len,
            &mut buf,
            &mut is_less,
        );
        prev_run = Run {
            start: top.start,
            len: top.len + prev_run.len,
            power: 0,
        };
    }

    // Finally, exactly one run must cover the slice.
    debug_assert!(prev_run.start == 0 && prev_run.len == len);
}

#[derive(Clone, Copy)]
struct Run {
    start: usize,
    len: usize,
    power: u8,
}

impl Run {
    #[inline]
    fn end(&self) -> usize {
        self.start + self.len
    }
}

/// Finds the natural run starting at `start`, reverses it if it's strictly descending and extends
/// it to `min_run` elements if it is shorter than that.
fn next_run<T, F>(v: &mut [T], start: usize, min_run: usize, is_less: &mut F) -> Run
where
    T: Copy,
    F: FnMut(&T, &T) -> bool,
{
    let tail = &mut v[start..];
    let (mut run_len, was_reversed) = find_existing_run(tail, is_less);

    if was_reversed {
        tail[..run_len].reverse();
    }

    // Insertion sort is faster than merge sort on short sequences.
    if run_len < min_run && run_len < tail.len() {
        let end = min_run.min(tail.len());
        insertion_sort_shift_left(&mut tail[..end], run_len, is_less);
        run_len = end;
    }

    Run {
        start,
        len: run_len,
        power: 0,
    }
}

/// Finds a run of sorted elements starting at the beginning of the slice.
///
/// Returns the length of the run, and a bool that is false when the run
/// is ascending, and true if the run strictly descending.
pub(crate) fn find_existing_run<T, F: FnMut(&T, &T) -> bool>(
    v: &[T],
    is_less: &mut F,
) -> (usize, bool) {
    let len = v.len();
    if len < 2 {
        return (len, false);
    }

    let mut run_len = 2;
    let strictly_descending = is_less(&v[1], &v[0]);
    if strictly_descending {
        while run_len < len && is_less(&v[run_len], &v[run_len - 1]) {
            run_len += 1;
        }
    } else {
        while run_len < len && !is_less(&v[run_len], &v[run_len - 1]) {
            run_len += 1;
        }
    }
    (run_len, strictly_descending)
}

/// Merges non-decreasing runs `v[..mid]` and `v[mid..]` using `buf` as temporary storage, and
/// stores the result into `v[..]`.
///
/// The shorter run is copied into `buf`. If it is the left one the merge runs forwards,
/// otherwise backwards, so the output never overtakes the unread part of the longer run.
fn merge<T, F>(v: &mut [T], mid: usize, buf: &mut Vec<T>, is_less: &mut F)
where
    T: Copy,
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    debug_assert!(mid > 0 && mid < len);

    // The runs are already in order.
    if !is_less(&v[mid], &v[mid - 1]) {
        return;
    }

    buf.clear();

    if mid <= len - mid {
        buf.extend_from_slice(&v[..mid]);

        let mut left = 0;
        let mut right = mid;
        let mut out = 0;

        while left < buf.len() && right < len {
            // If equal, prefer the left run to maintain stability.
            if is_less(&v[right], &buf[left]) {
                v[out] = v[right];
                right += 1;
            } else {
                v[out] = buf[left];
                left += 1;
            }
            out += 1;
        }

        // Whatever remains of the right run is already in place.
        let rem = buf.len() - left;
        v[out..out + rem].copy_from_slice(&buf[left..]);
    } else {
        buf.extend_from_slice(&v[mid..]);

        let mut left = mid;
        let mut right = buf.len();
        let mut out = len;

        while left > 0 && right > 0 {
            out -= 1;
            // If equal, prefer the right run to maintain stability.
            if is_less(&buf[right - 1], &v[left - 1]) {
                v[out] = v[left - 1];
                left -= 1;
            } else {
                v[out] = buf[right - 1];
                right -= 1;
            }
        }

        // Whatever remains of the left run is already in place.
        v[left..left + right].copy_from_slice(&buf[..right]);
    }
}

// Nearly-optimal mergesorts: Fast, practical sorting methods that optimally adapt to existing
// runs by J. Ian Munro and Sebastian Wild.
//
// The depth of the boundary between `[left, mid)` and `[mid, right)` is the number of leading
// bits the scaled midpoints of both runs share. Computing it with one multiplication per
// midpoint avoids any division in the hot loop.
#[inline]
fn merge_tree_scale_factor(n: usize) -> u64 {
    let n = n as u64;
    ((1 << 62) + n - 1) / n
}

#[inline]
fn merge_tree_depth(left: usize, mid: usize, right: usize, scale_factor: u64) -> u8 {
    let x = left as u64 + mid as u64;
    let y = mid as u64 + right as u64;
    ((scale_factor * x) ^ (scale_factor * y)).leading_zeros() as u8
}
