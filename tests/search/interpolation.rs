//! Interpolation search on awkward distributions.

use rangeseek::{estimate_offset, search_interpolation};

#[test]
fn test_single_element() {
    let data = [42];
    assert_eq!(search_interpolation(&data, 42), 0);
    assert_eq!(search_interpolation(&data, 7), data.len());
}

#[test]
fn test_two_elements() {
    let data = [10, 20];
    assert_eq!(search_interpolation(&data, 10), 0);
    assert_eq!(search_interpolation(&data, 20), 1);
    assert_eq!(search_interpolation(&data, 15), data.len());
}

#[test]
fn test_non_uniform_distribution() {
    let data = [1, 2, 4, 7, 11, 16];
    assert_eq!(search_interpolation(&data, 1), 0);
    assert_eq!(search_interpolation(&data, 7), 3);
    assert_eq!(search_interpolation(&data, 16), 5);
}

#[test]
fn test_non_uniform_distribution_missing() {
    let data = [1, 2, 4, 7, 11, 16];
    for v in [0, 3, 5, 6, 8, 12, 15, 17] {
        assert_eq!(search_interpolation(&data, v), data.len(), "value {}", v);
    }
}

#[test]
fn test_equal_values_do_not_divide_by_zero() {
    let data = [9; 6];
    assert_eq!(search_interpolation(&data, 9), 0);
    assert_eq!(search_interpolation(&data, 8), data.len());
    assert_eq!(estimate_offset(9, 9, 9, 6), None);
}

#[test]
fn test_clustered_then_outlier() {
    // One huge value drags every estimate towards the front
    let mut data: Vec<i64> = (0..500).collect();
    data.push(1_000_000_000);
    for (i, &e) in data.iter().enumerate() {
        assert_eq!(search_interpolation(&data, e), i);
    }
    assert_eq!(search_interpolation(&data, 600), data.len());
}

#[test]
fn test_float_progression() {
    let data: Vec<f64> = (0..100).map(|i| i as f64 * 0.5).collect();
    assert_eq!(search_interpolation(&data, 24.5), 49);
    assert_eq!(search_interpolation(&data, 24.25), data.len());
}
