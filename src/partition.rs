partition_impl!("lomuto_branchy_le");

/// Partitions `v` around its last element and returns the final position of that element.
///
/// When the call returns all elements left of the returned position are not greater than the
/// pivot and all elements right of it are greater. Elements equal to the pivot end up on the
/// left side.
///
/// Returns 0 for an empty slice.
pub fn lomuto_partition_last<T, F>(v: &mut [T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len == 0 {
        return 0;
    }

    let (v_without_pivot, pivot) = v.split_at_mut(len - 1);
    let num_le = partition_by(v_without_pivot, &pivot[0], is_less);

    // Place the pivot between the two partitions.
    v.swap(num_le, len - 1);

    num_le
}

/// Moves every element of `v` that is not greater than `pivot` to the front of `v`, in a single
/// left to right pass.
///
/// Returns the number of such elements.
///
/// If `is_less` does not implement a total order the resulting order and return value are
/// unspecified. All original elements will remain in `v`.
pub fn partition_by<T, F>(v: &mut [T], pivot: &T, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    // `unknown` scans every element, `greater` is the first slot of the high side.
    let mut greater = 0;
    for unknown in 0..len {
        if !is_less(pivot, &v[unknown]) {
            v.swap(unknown, greater);
            greater += 1;
        }
    }

    greater
}
