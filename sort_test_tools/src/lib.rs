pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> std::cmp::Ordering;
}

/// Partitions that move every element not greater than the pivot to the front.
pub trait Partition {
    fn name() -> String;

    fn partition<T>(arr: &mut [T], pivot: &T) -> usize
    where
        T: Ord;

    fn partition_by<T, F>(arr: &mut [T], pivot: &T, is_less: &mut F) -> usize
    where
        F: FnMut(&T, &T) -> bool;
}

pub mod patterns;

#[doc(hidden)]
pub use paste;
