//! Heapsort, the guaranteed *O*(*n* \* log(*n*)) fallback of [`super::quicksort`].

/// Sorts `v` in place with a max-heap held in the slice itself, *O*(*n* \* log(*n*)) for any
/// input.
///
/// Only reached once `quicksort` has used up its imbalance budget, so it is kept out of line.
#[inline(never)]
pub(crate) fn heapsort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    // The first `len / 2` iterations build the heap, the remaining `len` iterations pop the
    // maximum into the shrinking tail.
    for i in (0..len + len / 2).rev() {
        let sift_idx = if i >= len {
            i - len
        } else {
            v.swap(0, i);
            0
        };

        sift_down(&mut v[..i.min(len)], sift_idx, is_less);
    }
}

// Restores `v[parent] >= v[child]` below `node`, moving `v[node]` down as far as needed.
#[inline(always)]
fn sift_down<T, F>(v: &mut [T], mut node: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    loop {
        let mut child = 2 * node + 1;
        if child >= len {
            break;
        }

        // Larger of the two children.
        if child + 1 < len {
            child += is_less(&v[child], &v[child + 1]) as usize;
        }

        // Heap order already holds here.
        if !is_less(&v[node], &v[child]) {
            break;
        }

        v.swap(node, child);
        node = child;
    }
}
