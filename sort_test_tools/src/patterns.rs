//! Input generators for the test suite and the benchmarks.
//!
//! Every generator draws from one seed per process, which the test suite prints before the first
//! test runs. Setting `OVERRIDE_SEED` replays that exact input.

use std::env;
use std::ops::RangeInclusive;
use std::sync::atomic::{AtomicBool, Ordering};

use once_cell::sync::OnceCell;

use rand::distributions::Uniform;
use rand::prelude::*;

use zipf::ZipfDistribution;

/// Uniformly distributed values over the whole `i32` range, duplicates are rare.
pub fn random(len: usize) -> Vec<i32> {
    let mut rng = seeded_rng();
    (0..len).map(|_| rng.gen()).collect()
}

/// Uniformly distributed values drawn from `range`.
pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<Uniform<i32>>,
{
    let dist: Uniform<i32> = range.into();
    seeded_rng().sample_iter(dist).take(len).collect()
}

/// Values in `1..=len` following Zipf's law, a few values make up most of the input.
///
/// Panics if `exponent` is not a positive finite number.
pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    if len == 0 {
        return Vec::new();
    }

    let dist = match ZipfDistribution::new(len, exponent) {
        Ok(dist) => dist,
        Err(()) => panic!("invalid zipf exponent {exponent}"),
    };

    seeded_rng()
        .sample_iter(dist)
        .take(len)
        .map(|val| val as i32)
        .collect()
}

/// Random values where the leading `sorted_percent` of the slice is already in order.
pub fn random_sorted(len: usize, sorted_percent: f64) -> Vec<i32> {
    let mut v = random(len);
    let prefix_len = ((len as f64) * sorted_percent / 100.0).round() as usize;
    v[..prefix_len.min(len)].sort_unstable();
    v
}

pub fn all_equal(len: usize) -> Vec<i32> {
    vec![66; len]
}

pub fn ascending(len: usize) -> Vec<i32> {
    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    (0..len as i32).rev().collect()
}

/// Roughly `run_count` runs of random values, each run ascending or descending at random.
pub fn saw_mixed(len: usize, run_count: usize) -> Vec<i32> {
    let mut v = random(len);
    if len == 0 {
        return v;
    }

    let run_len = (len / run_count.max(1)).max(1);
    let descending = random_uniform(len / run_len + 1, 0..=1);

    for (run, desc) in v.chunks_mut(run_len).zip(descending) {
        sort_run(run, desc == 1);
    }

    v
}

/// An ascending first half followed by a descending second half.
pub fn pipe_organ(len: usize) -> Vec<i32> {
    let mut v = random(len);
    let (rising, falling) = v.split_at_mut(len / 2);
    sort_run(rising, false);
    sort_run(falling, true);
    v
}

/// Draws a fresh seed for every generator call instead of one per process.
///
/// For benchmarks only, tests need reproducible input.
pub fn use_random_seed_each_time() {
    if let SeedSource::ExternalOverride = process_seed().0 {
        panic!("OVERRIDE_SEED is set, refusing to switch to a fresh seed per call");
    }

    RANDOM_EACH_TIME.store(true, Ordering::Release);
}

/// The seed the next generator call will use.
pub fn random_init_seed() -> u64 {
    if RANDOM_EACH_TIME.load(Ordering::Acquire) {
        thread_rng().gen()
    } else {
        process_seed().1
    }
}

/// `0..=log2(len)`, a value range that yields many duplicates at every length.
pub fn log2_range(len: usize) -> RangeInclusive<i32> {
    0..=(len.max(1) as f64).log2().round() as i32
}

#[derive(Copy, Clone, PartialEq, Eq)]
enum SeedSource {
    OncePerProcess,
    ExternalOverride,
}

static RANDOM_EACH_TIME: AtomicBool = AtomicBool::new(false);

fn process_seed() -> (SeedSource, u64) {
    static SEED: OnceCell<(SeedSource, u64)> = OnceCell::new();

    *SEED.get_or_init(|| match env::var("OVERRIDE_SEED") {
        Ok(raw) => match raw.trim().parse::<u64>() {
            Ok(seed) => (SeedSource::ExternalOverride, seed),
            Err(err) => panic!("OVERRIDE_SEED={raw:?} is not a u64: {err}"),
        },
        Err(_) => (SeedSource::OncePerProcess, thread_rng().gen()),
    })
}

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}

fn sort_run(run: &mut [i32], descending: bool) {
    if descending {
        run.sort_unstable_by(|a, b| b.cmp(a));
    } else {
        run.sort_unstable();
    }
}
