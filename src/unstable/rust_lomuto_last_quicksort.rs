//! Basic in-place quicksort that always pivots on the last element.
//!
//! Shares the partition of the median of 3 variant. Sorted and reverse sorted inputs are its worst
//! case.

use core::cmp::Ordering;

use crate::partition::lomuto_partition_last;

sort_impl!("rust_lomuto_last_quicksort_unstable");

/// Sorts `v[start..=finish]` in place and returns `v`.
///
/// # Panics
///
/// Panics if `start < finish` and `finish >= v.len()`.
pub fn quick_sort<T>(v: &mut [T], start: usize, finish: usize) -> &mut [T]
where
    T: Ord,
{
    if start >= finish {
        return v;
    }

    quicksort(&mut v[start..=finish], &mut |a: &T, b: &T| a.lt(b));
    v
}

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    quicksort(v, &mut |a: &T, b: &T| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    quicksort(v, &mut |a: &T, b: &T| compare(a, b) == Ordering::Less);
}

fn quicksort<T, F>(mut v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    loop {
        if v.len() < 2 {
            return;
        }

        let mid = lomuto_partition_last(v, is_less);

        let (left, right) = v.split_at_mut(mid);
        let right = &mut right[1..];

        // Recurse into the shorter side, sorted input would otherwise recurse once per element.
        if left.len() < right.len() {
            quicksort(left, is_less);
            v = right;
        } else {
            quicksort(right, is_less);
            v = left;
        }
    }
}
