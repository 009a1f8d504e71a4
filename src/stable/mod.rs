// Shift-based insertion sort, also the small-sort of every other engine.
pub mod insertion;

// Powersort-policy merge sort, the general sort.
pub mod powersort;
