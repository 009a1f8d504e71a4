// Minimum-selection sort, at most n - 1 swaps.
pub mod selection;

// Introspective quicksort with pseudo-median pivots and heapsort fallback.
pub mod quicksort;

mod heapsort;
mod pivot;
