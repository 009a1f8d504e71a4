//! The C entry points.
//!
//! Every function takes the address of the first element and the element count of a host
//! owned buffer and sorts it in place. Nothing is returned, returning is the success signal.
//!
//! # Safety
//!
//! For every entry point, when `n >= 2`, `array_pointer` must be aligned for the element type
//! and valid for reads and writes of `n` contiguous elements, and no other thread may access
//! that memory until the call returns. With `n < 2` the pointer is never read and may be null
//! or dangling.

use core::mem;
use core::slice;

use crate::stable::{insertion, powersort};
use crate::unstable::{quicksort, selection};

/// Borrows the host buffer for the duration of one call, or returns `None` if there is nothing
/// to sort.
///
/// # Safety
///
/// See the [module documentation](self).
#[inline(always)]
unsafe fn host_buffer<'a, T>(array_pointer: *mut T, n: usize) -> Option<&'a mut [T]> {
    if n < 2 || array_pointer.is_null() {
        return None;
    }

    debug_assert!(array_pointer.align_offset(mem::align_of::<T>()) == 0);

    // SAFETY: The caller guarantees `array_pointer` is aligned and valid for `n` elements that
    // nobody else touches while the returned slice lives.
    Some(unsafe { slice::from_raw_parts_mut(array_pointer, n) })
}

macro_rules! ffi_sort_entry_points {
    ($stem:ident => $sort:path; $($t:ident)*) => {
        paste::paste! {
            $(
                #[doc = "Sorts `n` `" $t "` elements at `array_pointer` in place,"]
                #[doc = "using the `" $stem "` engine."]
                ///
                /// # Safety
                ///
                /// See the [module documentation](self).
                #[no_mangle]
                pub unsafe extern "C" fn [<ffi_ $stem _ $t>](array_pointer: *mut $t, n: usize) {
                    // SAFETY: Forwarded caller contract.
                    if let Some(v) = unsafe { host_buffer(array_pointer, n) } {
                        $sort(v);
                    }
                }
            )*
        }
    };
}

// Floats have no total order under `Ord`, the general sort is only exported for integers.
ffi_sort_entry_points!(sort => powersort::sort; i8 i16 i32 i64 u8 u16 u32 u64);

ffi_sort_entry_points!(insertionsort => insertion::sort; i8 i16 i32 i64 u8 u16 u32 u64 f32 f64);
ffi_sort_entry_points!(selectionsort => selection::sort; i8 i16 i32 i64 u8 u16 u32 u64 f32 f64);
ffi_sort_entry_points!(quicksort => quicksort::sort; i8 i16 i32 i64 u8 u16 u32 u64 f32 f64);
