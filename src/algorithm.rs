//! The exported function table, described as data.
//!
//! A host picks an entry point by the element type it observes at runtime and the algorithm it
//! wants. [`symbol_name`] yields the exact exported name for every supported pair, and `None`
//! for the two pairs that do not exist (general sort over floats).

use core::fmt;
use core::mem;

/// Which engine processes the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// [`crate::stable::powersort`], integers only.
    General,
    /// [`crate::stable::insertion`].
    Insertion,
    /// [`crate::unstable::selection`].
    Selection,
    /// [`crate::unstable::quicksort`].
    Quicksort,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::General,
        Algorithm::Insertion,
        Algorithm::Selection,
        Algorithm::Quicksort,
    ];

    /// The algorithm part of the exported symbol names.
    pub const fn symbol_stem(self) -> &'static str {
        match self {
            Algorithm::General => "sort",
            Algorithm::Insertion => "insertionsort",
            Algorithm::Selection => "selectionsort",
            Algorithm::Quicksort => "quicksort",
        }
    }

    /// Whether an entry point exists for `element`.
    pub const fn supports(self, element: ElementType) -> bool {
        !matches!(self, Algorithm::General) || !element.is_float()
    }

    /// Whether equal elements keep their relative input order.
    pub const fn is_stable(self) -> bool {
        matches!(self, Algorithm::General | Algorithm::Insertion)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol_stem())
    }
}

/// The element type of a host buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementType {
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
}

impl ElementType {
    pub const ALL: [ElementType; 10] = [
        ElementType::I8,
        ElementType::I16,
        ElementType::I32,
        ElementType::I64,
        ElementType::U8,
        ElementType::U16,
        ElementType::U32,
        ElementType::U64,
        ElementType::F32,
        ElementType::F64,
    ];

    /// The type part of the exported symbol names, which is also the Rust type name.
    pub const fn symbol_suffix(self) -> &'static str {
        match self {
            ElementType::I8 => "i8",
            ElementType::I16 => "i16",
            ElementType::I32 => "i32",
            ElementType::I64 => "i64",
            ElementType::U8 => "u8",
            ElementType::U16 => "u16",
            ElementType::U32 => "u32",
            ElementType::U64 => "u64",
            ElementType::F32 => "f32",
            ElementType::F64 => "f64",
        }
    }

    /// Width of one element in bytes.
    pub const fn size_of(self) -> usize {
        match self {
            ElementType::I8 => mem::size_of::<i8>(),
            ElementType::I16 => mem::size_of::<i16>(),
            ElementType::I32 => mem::size_of::<i32>(),
            ElementType::I64 => mem::size_of::<i64>(),
            ElementType::U8 => mem::size_of::<u8>(),
            ElementType::U16 => mem::size_of::<u16>(),
            ElementType::U32 => mem::size_of::<u32>(),
            ElementType::U64 => mem::size_of::<u64>(),
            ElementType::F32 => mem::size_of::<f32>(),
            ElementType::F64 => mem::size_of::<f64>(),
        }
    }

    pub const fn is_float(self) -> bool {
        matches!(self, ElementType::F32 | ElementType::F64)
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol_suffix())
    }
}

/// The exported name of the entry point sorting `element` buffers with `algorithm`, e.g.
/// `ffi_quicksort_f64`.
pub fn symbol_name(algorithm: Algorithm, element: ElementType) -> Option<String> {
    algorithm
        .supports(element)
        .then(|| format!("ffi_{algorithm}_{element}"))
}
