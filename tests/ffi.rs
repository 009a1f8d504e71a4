//! Every exported entry point, called the way a foreign host calls it.

use std::fmt::Debug;
use std::ptr::{self, NonNull};

use sort_test_tools::patterns;
use sorting::ffi::*;
use sorting::{symbol_name, Algorithm, ElementType};

type EntryPoint<T> = unsafe extern "C" fn(*mut T, usize);

trait Element: Copy + PartialOrd + Debug {
    const MIN: Self;
    const MAX: Self;

    fn from_pattern(v: i32) -> Self;
}

macro_rules! impl_element { ($($t:ident)*) => ($(
    impl Element for $t {
        const MIN: Self = $t::MIN;
        const MAX: Self = $t::MAX;

        fn from_pattern(v: i32) -> Self {
            v as $t
        }
    }
)*) }

impl_element! { i8 i16 i32 i64 u8 u16 u32 u64 f32 f64 }

fn call<T>(entry: EntryPoint<T>, v: &mut [T]) {
    // SAFETY: `v` is a live, aligned, exclusively borrowed buffer of `v.len()` elements.
    unsafe { entry(v.as_mut_ptr(), v.len()) }
}

fn sorted_copy<T: Element>(v: &[T]) -> Vec<T> {
    let mut expected = v.to_vec();
    expected.sort_by(|a, b| a.partial_cmp(b).unwrap());
    expected
}

fn check_patterns<T: Element>(entry: EntryPoint<T>) {
    let seed = patterns::random_init_seed();
    let pattern_fns: [(&str, fn(usize) -> Vec<i32>); 6] = [
        ("random", patterns::random),
        ("random_binary", patterns::random_binary),
        ("ascending", patterns::ascending),
        ("descending", patterns::descending),
        ("all_equal", patterns::all_equal),
        ("pipe_organ", patterns::pipe_organ),
    ];

    for len in [2, 3, 7, 16, 20, 21, 64, 500, 1_000] {
        for (name, pattern_fn) in pattern_fns {
            let mut v: Vec<T> = pattern_fn(len).into_iter().map(T::from_pattern).collect();
            let expected = sorted_copy(&v);

            call(entry, &mut v);
            assert_eq!(v, expected, "pattern: {name}, len: {len}, seed: {seed}");
        }
    }
}

fn check_trivial_lengths<T: Element>(entry: EntryPoint<T>) {
    // SAFETY: With `n < 2` the pointer is never read.
    unsafe {
        entry(ptr::null_mut(), 0);
        entry(NonNull::<T>::dangling().as_ptr(), 0);
        entry(ptr::null_mut(), 1);
    }

    let mut v = [T::from_pattern(7)];
    call(entry, &mut v);
    assert_eq!(v, [T::from_pattern(7)]);

    // A null buffer is ignored whatever the length.
    // SAFETY: The null pointer is rejected before any access.
    unsafe { entry(ptr::null_mut(), 5) };
}

fn check_prefix_only<T: Element>(entry: EntryPoint<T>) {
    let mut v: Vec<T> = [9, 8, 7, 6, 5, 4, 3, 2, 1, 0]
        .into_iter()
        .map(T::from_pattern)
        .collect();

    // SAFETY: The first 5 elements of `v` are valid.
    unsafe { entry(v.as_mut_ptr(), 5) };

    let expected: Vec<T> = [5, 6, 7, 8, 9, 4, 3, 2, 1, 0]
        .into_iter()
        .map(T::from_pattern)
        .collect();
    assert_eq!(v, expected);
}

fn check_min_max_reversed<T: Element>(entry: EntryPoint<T>) {
    for len in [2, 21, 1_001] {
        let mut v: Vec<T> = (0..len)
            .map(|i| if i < len / 2 { T::MAX } else { T::MIN })
            .collect();
        call(entry, &mut v);

        let min_count = len - len / 2;
        assert!(v[..min_count].iter().all(|&x| x == T::MIN));
        assert!(v[min_count..].iter().all(|&x| x == T::MAX));
    }
}

fn check_entry_point<T: Element>(entry: EntryPoint<T>) {
    check_trivial_lengths(entry);
    check_prefix_only(entry);
    check_min_max_reversed(entry);
    check_patterns(entry);
}

macro_rules! entry_point_tests {
    ($stem:ident => $algorithm:ident; $($t:ident)*) => {
        paste::paste! {
            mod $stem {
                use super::*;

                $(
                    #[test]
                    fn $t() {
                        // The symbol table names exactly this exported function.
                        let name = symbol_name(Algorithm::$algorithm, ElementType::[<$t:upper>]);
                        assert_eq!(name.as_deref(), Some(stringify!([<ffi_ $stem _ $t>])));

                        check_entry_point::<$t>([<ffi_ $stem _ $t>]);
                    }
                )*
            }
        }
    };
}

entry_point_tests!(sort => General; i8 i16 i32 i64 u8 u16 u32 u64);
entry_point_tests!(insertionsort => Insertion; i8 i16 i32 i64 u8 u16 u32 u64 f32 f64);
entry_point_tests!(selectionsort => Selection; i8 i16 i32 i64 u8 u16 u32 u64 f32 f64);
entry_point_tests!(quicksort => Quicksort; i8 i16 i32 i64 u8 u16 u32 u64 f32 f64);

#[test]
fn every_table_entry_is_exported() {
    let exported = Algorithm::ALL
        .into_iter()
        .flat_map(|a| ElementType::ALL.into_iter().filter_map(move |e| symbol_name(a, e)))
        .count();

    // One generated test above per exported function.
    assert_eq!(exported, 8 + 3 * 10);
}

#[test]
fn mixed_signs_i32() {
    let entry_points: [EntryPoint<i32>; 4] = [
        ffi_sort_i32,
        ffi_insertionsort_i32,
        ffi_selectionsort_i32,
        ffi_quicksort_i32,
    ];

    for entry in entry_points {
        let mut v = [5, -3, 0, 5, 2, -3];
        call(entry, &mut v);
        assert_eq!(v, [-3, -3, 0, 2, 5, 5]);
    }
}

#[test]
fn unsigned_u8() {
    let entry_points: [EntryPoint<u8>; 4] = [
        ffi_sort_u8,
        ffi_insertionsort_u8,
        ffi_selectionsort_u8,
        ffi_quicksort_u8,
    ];

    for entry in entry_points {
        let mut v = [255, 0, 128, 1];
        call(entry, &mut v);
        assert_eq!(v, [0, 1, 128, 255]);
    }
}

#[test]
fn float_nan_last() {
    let entry_points: [EntryPoint<f64>; 3] = [
        ffi_insertionsort_f64,
        ffi_selectionsort_f64,
        ffi_quicksort_f64,
    ];

    for entry in entry_points {
        let mut v = [3.5, f64::NAN, -1.0, f64::INFINITY, f64::NAN, -0.0, 2.0];
        call(entry, &mut v);

        assert_eq!(v[..5], [-1.0, 0.0, 2.0, 3.5, f64::INFINITY]);
        assert!(v[5..].iter().all(|x| x.is_nan()));
    }

    let entry_points: [EntryPoint<f32>; 3] = [
        ffi_insertionsort_f32,
        ffi_selectionsort_f32,
        ffi_quicksort_f32,
    ];

    for entry in entry_points {
        let mut v: Vec<f32> = (0..100)
            .map(|i| if i % 7 == 0 { f32::NAN } else { (50 - i) as f32 })
            .collect();
        call(entry, &mut v);

        let nan_count = v.iter().filter(|x| x.is_nan()).count();
        assert_eq!(nan_count, 15);
        assert!(v[100 - nan_count..].iter().all(|x| x.is_nan()));
        assert!(v[..100 - nan_count].windows(2).all(|w| w[0] <= w[1]));
    }
}
