#![no_main]

use libfuzzer_sys::fuzz_target;

use classic_sort_fuzz::algorithm_and_values;

// The predicate answers from the fuzzer input, so it is almost never a strict weak ordering. The
// result order is arbitrary, but the elements must survive.
fuzz_target!(|data: &[u8]| {
    let Some((algorithm, mut v)) = algorithm_and_values(data) else {
        return;
    };

    let answers = data.to_vec();
    let mut answer_idx = 0;

    let mut expected = v.clone();
    expected.sort();

    algorithm.sort_by_less(&mut v, |_, _| {
        answer_idx += 1;
        answers[answer_idx % answers.len()] & 1 == 1
    });

    v.sort();
    assert_eq!(v, expected, "{algorithm}");
});
