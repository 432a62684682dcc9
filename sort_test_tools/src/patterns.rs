use std::env;
use std::ops::Range;

use once_cell::sync::Lazy;
use rand::prelude::*;
use zipf::ZipfDistribution;

/// Seed shared by every pattern in this process.
///
/// Set `OVERRIDE_SEED` to reproduce a failing run, the seed of each run is printed once.
pub fn random_init_seed() -> u64 {
    static SEED: Lazy<u64> = Lazy::new(|| {
        let seed = match env::var("OVERRIDE_SEED") {
            Ok(seed) => seed
                .parse()
                .expect("OVERRIDE_SEED must be an unsigned 64-bit integer"),
            Err(_) => thread_rng().gen(),
        };
        println!("Seed: {seed}");
        seed
    });

    *SEED
}

fn new_seeded_rng(len: usize) -> StdRng {
    // Mix in the length so different sizes don't share a prefix.
    StdRng::seed_from_u64(random_init_seed() ^ (len as u64).rotate_left(32))
}

pub fn random(len: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    let mut rng = new_seeded_rng(len);
    (0..len).map(|_| rng.gen::<i32>()).collect()
}

pub fn random_uniform(len: usize, range: Range<i32>) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    let mut rng = new_seeded_rng(len);
    (0..len).map(|_| rng.gen_range(range.clone())).collect()
}

pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    // https://en.wikipedia.org/wiki/Zipf's_law

    if len == 0 {
        return Vec::new();
    }

    let mut rng = new_seeded_rng(len);
    let dist = ZipfDistribution::new(len, exponent).expect("zipf exponent must be positive");

    (0..len).map(|_| dist.sample(&mut rng) as i32).collect()
}

/// A shuffled permutation of `0..len`.
pub fn permutation(len: usize) -> Vec<i32> {
    let mut v = ascending(len);
    v.shuffle(&mut new_seeded_rng(len));
    v
}

pub fn all_equal(len: usize) -> Vec<i32> {
    // ......
    // ::::::

    (0..len).map(|_| 66).collect()
}

pub fn ascending(len: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..len as i32).rev().collect()
}

pub fn saw_ascending(len: usize, saw_count: usize) -> Vec<i32> {
    //   .:  .:
    // .:::.:::

    if len == 0 {
        return Vec::new();
    }

    let saw_len = (len / saw_count.max(1)).max(1);
    (0..len).map(|i| (i % saw_len) as i32).collect()
}

pub fn saw_descending(len: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.
    // :::.:::.

    if len == 0 {
        return Vec::new();
    }

    let saw_len = (len / saw_count.max(1)).max(1);
    (0..len)
        .map(|i| (saw_len - 1 - (i % saw_len)) as i32)
        .collect()
}

pub fn pipe_organ(len: usize) -> Vec<i32> {
    //   .:.
    // .:::::.

    let half = len / 2;
    (0..half as i32)
        .chain((0..(len - half) as i32).rev())
        .collect()
}
