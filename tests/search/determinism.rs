//! Repeated calls give identical answers and never touch the input.

use rangeseek::Algorithm;

#[test]
fn test_repeated_calls_agree() {
    let data: Vec<i64> = (0..257).map(|i| i * i).collect();
    for algorithm in Algorithm::ALL {
        for value in [-1, 0, 1, 2, 64, 65, 65_536, 66_000] {
            let first = algorithm.search(&data, value);
            for _ in 0..3 {
                assert_eq!(algorithm.search(&data, value), first, "{} value={}", algorithm, value);
            }
        }
    }
}

#[test]
fn test_input_is_left_untouched() {
    let data: Vec<i64> = (0..100).rev().map(|i| 100 - i).collect();
    let snapshot = data.clone();
    for algorithm in Algorithm::ALL {
        let _ = algorithm.search(&data, 50);
    }
    assert_eq!(data, snapshot);
}

#[test]
fn test_shared_across_threads() {
    let data: Vec<u32> = (0..10_000).collect();
    std::thread::scope(|s| {
        for algorithm in Algorithm::ALL {
            let data = &data;
            s.spawn(move || {
                for v in (0..10_000).step_by(97) {
                    let pos = algorithm.search(data, v);
                    if algorithm.is_bound() {
                        assert!(pos <= data.len());
                    } else {
                        assert_eq!(pos, v as usize);
                    }
                }
            });
        }
    });
}
