//! Concrete scenarios every release must keep answering the same way.

use rangeseek::{
    lower_bound, search_binary, search_exponential, search_interpolation, upper_bound, Algorithm,
};

#[test]
fn test_binary_finds_four_at_index_three() {
    let data = [1, 2, 3, 4, 5, 6, 7];
    let pos = search_binary(&data, 4);
    assert_eq!(pos, 3);
    assert_eq!(data[pos], 4);
}

#[test]
fn test_negative_target_is_sentinel_everywhere() {
    let data = [1, 2, 3, 4, 5, 6, 7];
    for algorithm in Algorithm::ALL {
        if algorithm.is_bound() {
            // The bounds answer with an insertion point: the front
            assert_eq!(algorithm.search(&data, -4), 0, "{}", algorithm);
        } else {
            assert_eq!(algorithm.search(&data, -4), data.len(), "{}", algorithm);
        }
    }
}

#[test]
fn test_bounds_on_runs() {
    let data = [1, 1, 1, 2, 2, 3, 3, 3, 4, 4, 4, 5, 5];
    assert_eq!(lower_bound(&data, 3), 5);
    assert_eq!(upper_bound(&data, 3), 8);
    assert_eq!(data[upper_bound(&data, 3)], 4);
}

#[test]
fn test_interpolation_non_arithmetic_spacing() {
    assert_eq!(search_interpolation(&[1, 2, 4, 7, 11, 16], 7), 3);
}

#[test]
fn test_interpolation_single_element() {
    assert_eq!(search_interpolation(&[42], 42), 0);
}

#[test]
fn test_gap_between_two_elements() {
    let data = [10, 20];
    assert_eq!(search_exponential(&data, 15), 2);
    assert_eq!(search_interpolation(&data, 15), 2);
}
