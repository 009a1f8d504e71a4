//! In-place sorting engines for fixed-width numeric buffers.
//!
//! The crate is loaded by a foreign host as a dynamic library. The host observes the element
//! type of its buffer at runtime and picks one of the `ffi_*` entry points in [`ffi`], each of
//! which sorts `n` contiguous elements behind a raw pointer, in place.
//!
//! Four engines are available:
//!
//! * [`stable::powersort`], the general sort bound to `ffi_sort_*`. Stable, adaptive and
//!   *O*(*n* \* log(*n*)) worst-case. Integers only.
//! * [`stable::insertion`], stable, in-place and *O*(*n*) on already sorted input.
//! * [`unstable::selection`], in-place with at most *n* swaps.
//! * [`unstable::quicksort`], in-place and *O*(*n* \* log(*n*)) worst-case.
//!
//! All engines are written once against an `is_less` predicate and instantiated per element
//! type. Floats are ordered by [`ordering::SortKey`], which places `NaN` after every other
//! value.

pub mod algorithm;
pub mod ffi;
pub mod ordering;
pub mod stable;
pub mod unstable;

pub use algorithm::{symbol_name, Algorithm, ElementType};
pub use ordering::SortKey;
