use rand::Rng;

/// Selects a pivot from `v`. Uses the median of 3 randomly sampled, distinct positions.
///
/// Panics if `v` holds fewer than 3 elements.
pub fn choose_pivot<T, F, R>(v: &[T], is_less: &mut F, rng: &mut R) -> usize
where
    F: FnMut(&T, &T) -> bool,
    R: Rng + ?Sized,
{
    let samples = sample_distinct_3(v.len(), rng);
    let pivot_pos = median3(v, samples, is_less);

    log::trace!(
        "median of 3 pivot at {pivot_pos}, sampled {samples:?} from len {}",
        v.len()
    );

    pivot_pos
}

/// Draws three pairwise distinct positions in `0..len`.
///
/// Each position is drawn uniformly and the whole triple is redrawn until no two coincide.
///
/// Panics if `len < 3`, no such triple exists.
pub fn sample_distinct_3<R>(len: usize, rng: &mut R) -> [usize; 3]
where
    R: Rng + ?Sized,
{
    assert!(
        len >= 3,
        "sampling 3 distinct positions requires len >= 3, got {len}"
    );

    loop {
        let a = rng.gen_range(0..len);
        let b = rng.gen_range(0..len);
        let c = rng.gen_range(0..len);

        if a != b && a != c && b != c {
            return [a, b, c];
        }
    }
}

/// Returns whichever of the positions `a`, `b`, `c` holds the median value.
///
/// The positions are compared by the values they point at, equal values are fine and any
/// of the tied positions is a valid answer.
#[inline]
pub fn median3<T, F>(v: &[T], [a, b, c]: [usize; 3], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let positions = [a, b, c];

    // Compiler tends to make this branchless when sensible.
    let x = is_less(&v[b], &v[a]);
    let y = is_less(&v[c], &v[a]);
    let z = is_less(&v[c], &v[b]);

    // If x == y, a is either the minimum or the maximum, so the median is decided between b and
    // c by z. Otherwise a sits between b and c.
    let index = (x == y) as usize + (y != z) as usize;
    positions[index]
}
