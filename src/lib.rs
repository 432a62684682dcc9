macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(v: &mut [T])
            where
                T: Ord,
            {
                sort(v);
            }

            #[inline]
            fn sort_by<T, F>(v: &mut [T], compare: F)
            where
                F: FnMut(&T, &T) -> std::cmp::Ordering,
            {
                sort_by(v, compare);
            }
        }
    };
}

macro_rules! partition_impl {
    ($name:expr) => {
        pub struct PartitionImpl;

        impl sort_test_tools::Partition for PartitionImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn partition<T>(v: &mut [T], pivot: &T) -> usize
            where
                T: Ord,
            {
                partition_by(v, pivot, &mut |a, b| a.lt(b))
            }

            #[inline]
            fn partition_by<T, F>(v: &mut [T], pivot: &T, is_less: &mut F) -> usize
            where
                F: FnMut(&T, &T) -> bool,
            {
                partition_by(v, pivot, is_less)
            }
        }
    };
}

pub mod parse_tree;
pub mod partition;
pub mod pivot;
pub mod unstable;
