//! Provides a set of patterns useful for testing and benchmarking the descending sorts.
//! Currently limited to i32 values.
//!
//! Unless [`use_random_seed_each_time`] was called, every generator is seeded with the same
//! per-process seed, so `random(4)` yields the same values within one process.

use std::env;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};

use rand::prelude::*;

use zipf::ZipfDistribution;

use once_cell::sync::OnceCell;

pub fn random(len: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    random_vec(len)
}

pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<rand::distributions::Uniform<i32>>,
{
    // :.:.:.::
    let mut rng = new_seed();

    let dist: rand::distributions::Uniform<i32> = range.into();

    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    // https://en.wikipedia.org/wiki/Zipf's_law
    if len == 0 {
        return Vec::new();
    }

    let mut rng = new_seed();
    let dist = ZipfDistribution::new(len, exponent).unwrap();

    (0..len).map(|_| dist.sample(&mut rng) as i32).collect()
}

pub fn random_sorted(len: usize, sorted_percent: f64) -> Vec<i32> {
    // :.
    // :::. :
    // :::::.::
    // [----][--]
    //  ^      ^
    //  |      |
    // sorted  |
    //     unsorted

    // Simulate a previously sorted slice that got new unsorted values appended. Sorted here means
    // greatest first, the order the sorts under test produce.
    let mut v = random_vec(len);
    let sorted_len = ((len as f64) * (sorted_percent / 100.0)).round() as usize;

    v[0..sorted_len].sort_unstable_by(|a, b| b.cmp(a));

    v
}

pub fn all_equal(len: usize) -> Vec<i32> {
    // ......
    // ::::::

    (0..len).map(|_| 66).collect::<Vec<_>>()
}

pub fn ascending(len: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..len as i32).collect::<Vec<_>>()
}

pub fn descending(len: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..len as i32).rev().collect::<Vec<_>>()
}

pub fn saw_mixed(len: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.    .::.    .:
    // :::.:::..::::::..:::

    if len == 0 {
        return Vec::new();
    }

    let mut vals = random_vec(len);
    let chunk_len = (len / saw_count.max(1)).max(1);
    let saw_directions = random_uniform((len / chunk_len) + 1, 0..=1);

    for (chunk, direction) in vals.chunks_mut(chunk_len).zip(saw_directions) {
        if direction == 0 {
            chunk.sort_unstable();
        } else {
            chunk.sort_unstable_by(|a, b| b.cmp(a));
        }
    }

    vals
}

pub fn pipe_organ(len: usize) -> Vec<i32> {
    //   .:.
    // .:::::.

    let mut vals = random_vec(len);

    vals[..(len / 2)].sort_unstable();
    vals[(len / 2)..].sort_unstable_by(|a, b| b.cmp(a));

    vals
}

/// Returns `count` random inclusive windows `(low, high)` with `low <= high < len`.
///
/// `len` must be at least 1.
pub fn random_windows(len: usize, count: usize) -> Vec<(usize, usize)> {
    assert!(len > 0);

    let mut rng = new_seed();

    (0..count)
        .map(|_| {
            let a = rng.gen_range(0..len);
            let b = rng.gen_range(0..len);
            (a.min(b), a.max(b))
        })
        .collect()
}

/// Makes every generator call draw a fresh seed, so repeated calls yield different inputs.
/// Benchmarks call this, tests rely on the fixed per-process seed.
pub fn use_random_seed_each_time() {
    assert!(
        external_seed().is_none(),
        "OVERRIDE_SEED pins the seed, it cannot be combined with fresh seeds per call"
    );

    RANDOM_EACH_TIME.store(true, Ordering::Release);
}

/// The seed all random patterns derive from. Set `OVERRIDE_SEED` to reproduce a failure.
pub fn random_init_seed() -> u64 {
    if RANDOM_EACH_TIME.load(Ordering::Acquire) {
        return thread_rng().gen();
    }

    static SEED: OnceCell<u64> = OnceCell::new();
    *SEED.get_or_init(|| external_seed().unwrap_or_else(|| thread_rng().gen()))
}

static RANDOM_EACH_TIME: AtomicBool = AtomicBool::new(false);

fn external_seed() -> Option<u64> {
    let seed = env::var("OVERRIDE_SEED").ok()?;
    match u64::from_str(&seed) {
        Ok(seed) => Some(seed),
        Err(err) => panic!("OVERRIDE_SEED {seed:?} is not a u64: {err}"),
    }
}

fn new_seed() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}

fn random_vec(len: usize) -> Vec<i32> {
    let mut rng = new_seed();

    (0..len).map(|_| rng.gen::<i32>()).collect()
}
