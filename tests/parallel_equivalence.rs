#![cfg(feature = "parallel")]

use algo_patterns::{
    max_sub_array_sum, par_max_sub_array_sum, patterns::sliding_window::PAR_CHUNK_WINDOWS,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn parallel_matches_sequential_small(
        values in prop::collection::vec(-1_000i64..1_000, 0usize..64),
        k in 0usize..70
    ) {
        prop_assert_eq!(par_max_sub_array_sum(&values, k), max_sub_array_sum(&values, k));
    }
}

#[test]
fn parallel_matches_sequential_across_chunk_boundaries() {
    let len = PAR_CHUNK_WINDOWS * 5 + 17;
    let values: Vec<i64> = (0..len as i64).map(|i| ((i * 104_729) % 4001) - 2000).collect();
    for k in [1, 2, 31, PAR_CHUNK_WINDOWS - 1, PAR_CHUNK_WINDOWS, PAR_CHUNK_WINDOWS + 1, len] {
        assert_eq!(
            par_max_sub_array_sum(&values, k),
            max_sub_array_sum(&values, k),
            "k={k}"
        );
    }
}

#[test]
fn parallel_finds_a_spike_in_the_last_chunk() {
    let len = PAR_CHUNK_WINDOWS * 3;
    let mut values = vec![0i32; len];
    values[len - 1] = 50;
    values[len - 2] = 50;
    assert_eq!(par_max_sub_array_sum(&values, 2), Some(100));
}
