//! Shared test and benchmark tooling for the sort engines.
//!
//! Implement [`Sort`] for a zero-sized type and call [`instantiate_sort_tests!`] with it to
//! stamp out the property suite as `#[test]` functions in the calling module.

use std::cmp::Ordering;

pub mod patterns;

pub trait Sort {
    fn name() -> String;

    /// Quadratic sorts are only exercised on the short test sizes.
    const QUADRATIC: bool = false;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord + Copy;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        T: Copy,
        F: FnMut(&T, &T) -> Ordering;
}

#[macro_export]
macro_rules! instantiate_sort_test_inner {
    ($sort_impl:ty, $test_fn_name:ident) => {
        #[test]
        fn $test_fn_name() {
            $crate::tests::$test_fn_name::<$sort_impl>();
        }
    };
}

#[macro_export]
macro_rules! instantiate_sort_tests {
    ($sort_impl:ty) => {
        $crate::instantiate_sort_test_inner!($sort_impl, basic);
        $crate::instantiate_sort_test_inner!($sort_impl, fixed_seed);
        $crate::instantiate_sort_test_inner!($sort_impl, random);
        $crate::instantiate_sort_test_inner!($sort_impl, random_narrow);
        $crate::instantiate_sort_test_inner!($sort_impl, random_zipf);
        $crate::instantiate_sort_test_inner!($sort_impl, random_binary);
        $crate::instantiate_sort_test_inner!($sort_impl, random_sorted);
        $crate::instantiate_sort_test_inner!($sort_impl, all_equal);
        $crate::instantiate_sort_test_inner!($sort_impl, ascending);
        $crate::instantiate_sort_test_inner!($sort_impl, descending);
        $crate::instantiate_sort_test_inner!($sort_impl, saw_ascending);
        $crate::instantiate_sort_test_inner!($sort_impl, saw_descending);
        $crate::instantiate_sort_test_inner!($sort_impl, pipe_organ);
        $crate::instantiate_sort_test_inner!($sort_impl, int_edge);
        $crate::instantiate_sort_test_inner!($sort_impl, min_max_reversed);
        $crate::instantiate_sort_test_inner!($sort_impl, idempotent);
        $crate::instantiate_sort_test_inner!($sort_impl, sort_by_reverse);
        $crate::instantiate_sort_test_inner!($sort_impl, sort_by_key_only);
        $crate::instantiate_sort_test_inner!($sort_impl, comparison_count_bound);
        $crate::instantiate_sort_test_inner!($sort_impl, deep_recursion);
    };
}

/// The stability suite, for sorts that keep equal elements in input order.
#[macro_export]
macro_rules! instantiate_stable_sort_tests {
    ($sort_impl:ty) => {
        $crate::instantiate_sort_test_inner!($sort_impl, stability);
        $crate::instantiate_sort_test_inner!($sort_impl, stability_presorted_runs);
    };
}
