#![no_main]

use libfuzzer_sys::fuzz_target;

use classic_sort_fuzz::algorithm_and_values;

fuzz_target!(|data: &[u8]| {
    let Some((algorithm, mut v)) = algorithm_and_values(data) else {
        return;
    };

    let mut expected = v.clone();
    expected.sort();

    algorithm.sort(&mut v);
    assert_eq!(v, expected, "{algorithm}");
});
