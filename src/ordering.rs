//! The element ordering shared by every engine.

use core::cmp::Ordering;

use num_traits::Float;

/// A numeric element type that can be sorted by the in-place engines.
///
/// Integers use their natural signed or unsigned order. Floats use a total order in which
/// `NaN` is greater than every non-`NaN` value and equal to every other `NaN`, while `-0.0`
/// and `+0.0` compare equal. Any sorted float buffer therefore ends in a contiguous run of
/// all the `NaN`s it contained.
///
/// The trait is sealed, the set of supported types is exactly the set of types exported
/// through [`crate::ffi`].
pub trait SortKey: Copy + private::Sealed {
    fn key_cmp(&self, other: &Self) -> Ordering;

    #[inline(always)]
    fn key_lt(&self, other: &Self) -> bool {
        self.key_cmp(other) == Ordering::Less
    }
}

/// Compares two floats, treating `NaN` as the greatest value.
#[inline]
pub fn nan_last_cmp<F: Float>(a: F, b: F) -> Ordering {
    match a.partial_cmp(&b) {
        Some(ord) => ord,
        // At least one side is NaN.
        None => a.is_nan().cmp(&b.is_nan()),
    }
}

/// `a < b` under the order of [`nan_last_cmp`], without materializing an [`Ordering`].
#[inline(always)]
pub fn nan_last_lt<F: Float>(a: F, b: F) -> bool {
    a < b || (!a.is_nan() && b.is_nan())
}

macro_rules! impl_int_key { ($($t:ty)*) => ($(
    impl SortKey for $t {
        #[inline(always)]
        fn key_cmp(&self, other: &Self) -> Ordering {
            self.cmp(other)
        }

        #[inline(always)]
        fn key_lt(&self, other: &Self) -> bool {
            *self < *other
        }
    }
)*) }

macro_rules! impl_float_key { ($($t:ty)*) => ($(
    impl SortKey for $t {
        #[inline(always)]
        fn key_cmp(&self, other: &Self) -> Ordering {
            nan_last_cmp(*self, *other)
        }

        #[inline(always)]
        fn key_lt(&self, other: &Self) -> bool {
            nan_last_lt(*self, *other)
        }
    }
)*) }

impl_int_key! {
    i8 i16 i32 i64
    u8 u16 u32 u64
}

impl_float_key! {
    f32 f64
}

mod private {
    pub trait Sealed {}

    macro_rules! sealed_impl { ($($t:ty)*) => ($(
        impl Sealed for $t {}
    )*) }

    sealed_impl! {
        i8 i16 i32 i64
        u8 u16 u32 u64
        f32 f64
    }
}
