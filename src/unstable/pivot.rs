//! Pivot selection for [`super::quicksort`].

// Below this length a plain median of three is taken.
const PSEUDO_MEDIAN_REC_THRESHOLD: usize = 64;

/// Returns the index of a pivot candidate in `v`.
///
/// Three samples are taken at the start, at 4/8 and at 7/8 of the slice. Long slices replace
/// each sample by the median of its own three sub-samples, recursively, so roughly `n^0.53`
/// elements are looked at in total. On sorted or reversed input the middle sample wins.
///
/// `v` must hold at least 8 elements.
pub(crate) fn choose_pivot<T, F: FnMut(&T, &T) -> bool>(v: &[T], is_less: &mut F) -> usize {
    let len = v.len();
    debug_assert!(len >= 8);

    let len_div_8 = len / 8;

    let a = 0;
    let b = len_div_8 * 4;
    let c = len_div_8 * 7;

    if len < PSEUDO_MEDIAN_REC_THRESHOLD {
        median3(v, a, b, c, is_less)
    } else {
        median3_rec(v, a, b, c, len_div_8, is_less)
    }
}

/// Median of the three windows of `n` elements starting at `a`, `b` and `c`. Each window is
/// narrowed to its own median of three first while it is still long enough.
fn median3_rec<T, F: FnMut(&T, &T) -> bool>(
    v: &[T],
    mut a: usize,
    mut b: usize,
    mut c: usize,
    n: usize,
    is_less: &mut F,
) -> usize {
    if n * 8 >= PSEUDO_MEDIAN_REC_THRESHOLD {
        let n8 = n / 8;
        a = median3_rec(v, a, a + n8 * 4, a + n8 * 7, n8, is_less);
        b = median3_rec(v, b, b + n8 * 4, b + n8 * 7, n8, is_less);
        c = median3_rec(v, c, c + n8 * 4, c + n8 * 7, n8, is_less);
    }
    median3(v, a, b, c, is_less)
}

/// Index of the median of `v[a]`, `v[b]` and `v[c]`, using two comparisons when `v[a]` is
/// the median and three otherwise.
#[inline(always)]
fn median3<T, F: FnMut(&T, &T) -> bool>(
    v: &[T],
    a: usize,
    b: usize,
    c: usize,
    is_less: &mut F,
) -> usize {
    let a_lt_b = is_less(&v[a], &v[b]);
    let a_lt_c = is_less(&v[a], &v[c]);

    if a_lt_b != a_lt_c {
        // `v[a]` sits between the other two.
        return a;
    }

    // `v[a]` is below both or above both. Take the smaller of `b` and `c` in the first case
    // and the larger in the second.
    let b_lt_c = is_less(&v[b], &v[c]);
    if b_lt_c == a_lt_b {
        b
    } else {
        c
    }
}
