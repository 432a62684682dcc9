//! In-place quicksort with a single pass Lomuto partition and randomized median of 3 pivot
//! selection.

use core::cmp::Ordering;

use rand::Rng;

use crate::partition::lomuto_partition_last;
use crate::pivot::choose_pivot;

sort_impl!("rust_median3_quicksort_unstable");

/// Subranges longer than this pick a median of 3 pivot, shorter ones pivot on their last
/// element.
pub const RANDOM_PIVOT_THRESHOLD: usize = 6;

/// Sorts `v[start..=finish]` in place and returns `v`.
///
/// Elements outside of `start..=finish` are not touched. A range with `finish <= start` holds at
/// most one element and is left as is, this includes calls on an empty slice.
///
/// This sort is unstable (i.e., may reorder equal elements) and in-place (i.e., does not
/// allocate). Pivots are sampled with [`rand::thread_rng`], use [`quick_sort_with_rng`] for
/// reproducible runs.
///
/// # Panics
///
/// Panics if `start < finish` and `finish >= v.len()`.
///
/// # Examples
///
/// ```
/// use median3_quicksort::unstable::rust_median3_quicksort::quick_sort;
///
/// let mut v = [2, 1, 3, 100, 7, 9, 16];
/// let len = v.len();
/// assert_eq!(quick_sort(&mut v, 0, len - 1), [1, 2, 3, 7, 9, 16, 100]);
/// ```
pub fn quick_sort<T>(v: &mut [T], start: usize, finish: usize) -> &mut [T]
where
    T: Ord,
{
    quick_sort_with_rng(v, start, finish, &mut rand::thread_rng())
}

/// Same as [`quick_sort`], drawing pivot samples from `rng`.
pub fn quick_sort_with_rng<'a, T, R>(
    v: &'a mut [T],
    start: usize,
    finish: usize,
    rng: &mut R,
) -> &'a mut [T]
where
    T: Ord,
    R: Rng + ?Sized,
{
    if start >= finish {
        return v;
    }

    quicksort(&mut v[start..=finish], &mut |a: &T, b: &T| a.lt(b), rng);
    v
}

/// Sorts the slice, but might not preserve the order of equal elements.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    sort_with_rng(v, &mut rand::thread_rng());
}

/// Sorts the slice with a comparator function, but might not preserve the order of equal
/// elements.
///
/// The comparator function must define a total ordering for the elements in the slice. If the
/// ordering is not total, the order of the elements is unspecified.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    sort_by_with_rng(v, compare, &mut rand::thread_rng());
}

#[inline]
pub fn sort_with_rng<T, R>(v: &mut [T], rng: &mut R)
where
    T: Ord,
    R: Rng + ?Sized,
{
    quicksort(v, &mut |a: &T, b: &T| a.lt(b), rng);
}

#[inline]
pub fn sort_by_with_rng<T, F, R>(v: &mut [T], mut compare: F, rng: &mut R)
where
    F: FnMut(&T, &T) -> Ordering,
    R: Rng + ?Sized,
{
    quicksort(v, &mut |a: &T, b: &T| compare(a, b) == Ordering::Less, rng);
}

// --- IMPL ---

/// Sorts `v` recursively.
///
/// Only the shorter side of each partition is sorted by a recursive call, the longer side is
/// handled by the loop. This bounds the recursion depth by `log2(v.len())`.
fn quicksort<T, F, R>(mut v: &mut [T], is_less: &mut F, rng: &mut R)
where
    F: FnMut(&T, &T) -> bool,
    R: Rng + ?Sized,
{
    loop {
        let len = v.len();
        if len < 2 {
            return;
        }

        if len > RANDOM_PIVOT_THRESHOLD {
            let pivot_pos = choose_pivot(v, is_less, rng);
            v.swap(pivot_pos, len - 1);
        }

        let mid = lomuto_partition_last(v, is_less);

        // Split the slice into `left`, `pivot`, and `right`.
        let (left, right) = v.split_at_mut(mid);
        let right = &mut right[1..];

        if left.len() < right.len() {
            quicksort(left, is_less, rng);
            v = right;
        } else {
            quicksort(right, is_less, rng);
            v = left;
        }
    }
}
