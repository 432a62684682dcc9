// In-place quicksort with a randomized median of 3 pivot.
pub mod rust_median3_quicksort;

// Same partition scheme, but always pivots on the last element.
#[cfg(feature = "lomuto_last_quicksort")]
pub mod rust_lomuto_last_quicksort;
