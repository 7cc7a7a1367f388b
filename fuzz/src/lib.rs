use classic_sort::Algorithm;

/// Splits fuzzer input into the algorithm to run, picked by the first byte, and the rest
/// reinterpreted as little endian `i32` values.
pub fn algorithm_and_values(data: &[u8]) -> Option<(Algorithm, Vec<i32>)> {
    let (selector, rest) = data.split_first()?;
    let algorithm = Algorithm::ALL[*selector as usize % Algorithm::ALL.len()];

    let values = rest
        .chunks_exact(4)
        .map(|chunk| i32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect();

    Some((algorithm, values))
}
