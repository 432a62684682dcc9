use median3_quicksort::partition::lomuto_partition_last;
use median3_quicksort::pivot::{choose_pivot, median3, sample_distinct_3};
use median3_quicksort::unstable::rust_median3_quicksort::{
    quick_sort, quick_sort_with_rng, sort_with_rng, RANDOM_PIVOT_THRESHOLD,
};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{RngCore, SeedableRng};

/// Fails the test as soon as the sort asks for randomness.
struct NoRandomness;

impl RngCore for NoRandomness {
    fn next_u32(&mut self) -> u32 {
        panic!("pivot sampling was not expected");
    }

    fn next_u64(&mut self) -> u64 {
        panic!("pivot sampling was not expected");
    }

    fn fill_bytes(&mut self, _dest: &mut [u8]) {
        panic!("pivot sampling was not expected");
    }

    fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand::Error> {
        panic!("pivot sampling was not expected");
    }
}

fn sort_full(v: &mut [i32]) -> Vec<i32> {
    let finish = v.len().saturating_sub(1);
    quick_sort(v, 0, finish).to_vec()
}

#[test]
fn single_element() {
    assert_eq!(sort_full(&mut [1]), [1]);
}

#[test]
fn two_elements() {
    assert_eq!(sort_full(&mut [2, 1]), [1, 2]);
}

#[test]
fn three_elements() {
    assert_eq!(sort_full(&mut [2, 1, 3]), [1, 2, 3]);
}

#[test]
fn small() {
    assert_eq!(
        sort_full(&mut [2, 1, 3, 100, 7, 9, 16]),
        [1, 2, 3, 7, 9, 16, 100]
    );
}

#[test]
fn shuffled_permutation_many_seeds() {
    let sorted_nums: Vec<i32> = (0..100).collect();

    for seed in 0..500 {
        let mut shuffled_nums = sorted_nums.clone();
        shuffled_nums.shuffle(&mut StdRng::seed_from_u64(seed));

        let mut pivot_rng = StdRng::seed_from_u64(seed.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        quick_sort_with_rng(&mut shuffled_nums, 0, 99, &mut pivot_rng);

        assert_eq!(shuffled_nums, sorted_nums, "seed: {seed}");
    }
}

#[test]
fn returns_same_storage() {
    let mut v = [3, 1, 2];
    let ptr = v.as_ptr();
    let sorted = quick_sort(&mut v, 0, 2);
    assert_eq!(sorted.as_ptr(), ptr);
    assert_eq!(sorted.len(), 3);
}

#[test]
fn empty_range_is_noop() {
    let mut v = [5, 4, 3, 2, 1];
    quick_sort(&mut v, 3, 2);
    assert_eq!(v, [5, 4, 3, 2, 1]);

    // Reversed bounds far out of range never touch the slice.
    quick_sort(&mut v, 100, 0);
    assert_eq!(v, [5, 4, 3, 2, 1]);
}

#[test]
fn singleton_range_is_noop() {
    let mut v = [5, 4, 3, 2, 1];
    for i in 0..v.len() {
        quick_sort(&mut v, i, i);
    }
    assert_eq!(v, [5, 4, 3, 2, 1]);
}

#[test]
fn empty_slice() {
    let mut v: [i32; 0] = [];
    quick_sort(&mut v, 0, 0);
    assert!(v.is_empty());
}

#[test]
fn elements_outside_range_untouched() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut v: Vec<i32> = (0..200).rev().collect();
    let original = v.clone();

    quick_sort_with_rng(&mut v, 40, 159, &mut rng);

    assert_eq!(v[..40], original[..40]);
    assert_eq!(v[160..], original[160..]);

    let mut expected_inner = original[40..160].to_vec();
    expected_inner.sort();
    assert_eq!(v[40..160], expected_inner[..]);
}

#[test]
fn already_sorted_is_unchanged() {
    let mut rng = StdRng::seed_from_u64(11);
    let sorted: Vec<i32> = (0..1_000).collect();
    let mut v = sorted.clone();

    quick_sort_with_rng(&mut v, 0, 999, &mut rng);
    assert_eq!(v, sorted);
}

#[test]
fn duplicates_and_all_equal() {
    let mut rng = StdRng::seed_from_u64(3);

    let mut v = vec![4; 500];
    quick_sort_with_rng(&mut v, 0, 499, &mut rng);
    assert_eq!(v, vec![4; 500]);

    let mut v = vec![3, 1, 2, 1, 3, 0, 2, 2, 1, 0, 3, 3, 1];
    let mut expected = v.clone();
    expected.sort();
    quick_sort_with_rng(&mut v, 0, 12, &mut rng);
    assert_eq!(v, expected);
}

#[test]
fn same_seed_same_comparisons() {
    let input: Vec<i32> = (0..300).map(|i| (i * 7919) % 301).collect();

    let run = |seed: u64| {
        let mut v = input.clone();
        let mut log = Vec::new();
        median3_quicksort::unstable::rust_median3_quicksort::sort_by_with_rng(
            &mut v,
            |a, b| {
                log.push((*a, *b));
                a.cmp(b)
            },
            &mut StdRng::seed_from_u64(seed),
        );
        (v, log)
    };

    let (v_a, log_a) = run(42);
    let (v_b, log_b) = run(42);
    assert_eq!(v_a, v_b);
    assert_eq!(log_a, log_b);
}

#[test]
fn short_ranges_do_not_sample() {
    for len in 0..=RANDOM_PIVOT_THRESHOLD {
        let mut v: Vec<i32> = (0..len as i32).rev().collect();
        sort_with_rng(&mut v, &mut NoRandomness);
        assert!(v.windows(2).all(|w| w[0] <= w[1]));
    }
}

#[test]
#[should_panic(expected = "pivot sampling was not expected")]
fn longer_ranges_sample() {
    let mut v: Vec<i32> = (0..(RANDOM_PIVOT_THRESHOLD + 1) as i32).rev().collect();
    sort_with_rng(&mut v, &mut NoRandomness);
}

#[test]
#[should_panic]
fn finish_out_of_bounds() {
    let mut v = [3, 2, 1];
    quick_sort(&mut v, 0, 3);
}

#[test]
fn strings() {
    let mut arr = ["zebra", "apple", "mango", "banana", "kiwi", "fig", "cherry", "date"];
    quick_sort(&mut arr, 0, 7);
    assert_eq!(
        arr,
        ["apple", "banana", "cherry", "date", "fig", "kiwi", "mango", "zebra"]
    );
}

// --- PIVOT ---

#[test]
fn sample_distinct_3_is_distinct_and_in_range() {
    let mut rng = StdRng::seed_from_u64(1);

    for len in 3..40 {
        for _ in 0..50 {
            let [a, b, c] = sample_distinct_3(len, &mut rng);
            assert!(a < len && b < len && c < len);
            assert!(a != b && a != c && b != c);
        }
    }
}

#[test]
fn sample_distinct_3_len_3_is_permutation() {
    let mut rng = StdRng::seed_from_u64(2);

    for _ in 0..100 {
        let mut samples = sample_distinct_3(3, &mut rng);
        samples.sort();
        assert_eq!(samples, [0, 1, 2]);
    }
}

#[test]
#[should_panic]
fn sample_distinct_3_too_short() {
    sample_distinct_3(2, &mut StdRng::seed_from_u64(0));
}

#[test]
fn median3_all_orders() {
    let v = [10, 20, 30];
    let orders = [
        [0, 1, 2],
        [0, 2, 1],
        [1, 0, 2],
        [1, 2, 0],
        [2, 0, 1],
        [2, 1, 0],
    ];

    for order in orders {
        assert_eq!(median3(&v, order, &mut |a, b| a < b), 1, "{order:?}");
    }
}

#[test]
fn median3_with_equal_values() {
    // Equal samples still map back to a position holding the median value.
    let v = [5, 5, 1];
    let pos = median3(&v, [0, 1, 2], &mut |a, b| a < b);
    assert_eq!(v[pos], 5);

    let v = [1, 9, 1];
    let pos = median3(&v, [0, 1, 2], &mut |a, b| a < b);
    assert_eq!(v[pos], 1);

    let v = [7, 7, 7];
    let pos = median3(&v, [2, 0, 1], &mut |a, b| a < b);
    assert!(pos <= 2);
}

#[test]
fn choose_pivot_picks_median_of_samples() {
    let v: Vec<i32> = (0..64).map(|i| (i * 37) % 64).collect();

    for seed in 0..100 {
        let samples = sample_distinct_3(v.len(), &mut StdRng::seed_from_u64(seed));
        let pivot_pos = choose_pivot(&v, &mut |a, b| a < b, &mut StdRng::seed_from_u64(seed));

        assert!(samples.contains(&pivot_pos));

        let mut values = samples.map(|i| v[i]);
        values.sort();
        assert_eq!(v[pivot_pos], values[1]);
    }
}

// --- PARTITION ---

#[test]
fn partition_last_places_pivot() {
    let mut v = [3, 7, 1, 5, 5];
    let mid = lomuto_partition_last(&mut v, &mut |a, b| a < b);

    assert_eq!(mid, 3);
    assert_eq!(v[mid], 5);
    assert!(v[..mid].iter().all(|x| *x <= 5));
    assert!(v[mid + 1..].iter().all(|x| *x > 5));
}

#[test]
fn partition_last_all_equal_ends_at_last() {
    let mut v = [2; 9];
    assert_eq!(lomuto_partition_last(&mut v, &mut |a, b| a < b), 8);
}

#[test]
fn partition_last_single_and_empty() {
    let mut v = [1];
    assert_eq!(lomuto_partition_last(&mut v, &mut |a, b| a < b), 0);

    let mut v: [i32; 0] = [];
    assert_eq!(lomuto_partition_last(&mut v, &mut |a, b| a < b), 0);
}
