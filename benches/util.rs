use std::cell::Cell;
use std::env;

use criterion::{black_box, BatchSize, Criterion};

use once_cell::sync::OnceCell;

use regex::Regex;

/// Core every benchmark thread runs on. Core 0 tends to be busy with interrupts.
const BENCH_CORE: usize = 2;

/// Pins the calling thread to [`BENCH_CORE`], once per thread. Machines with fewer cores run
/// unpinned.
pub fn pin_to_bench_core() {
    thread_local! {
        static PINNED: Cell<bool> = Cell::new(false);
    }

    PINNED.with(|pinned| {
        if pinned.replace(true) {
            return;
        }

        let core = core_affinity::get_core_ids().and_then(|ids| ids.into_iter().nth(BENCH_CORE));
        if let Some(core) = core {
            core_affinity::set_for_current(core);
        }
    });
}

fn bench_filter() -> Option<&'static Regex> {
    static FILTER: OnceCell<Option<Regex>> = OnceCell::new();

    FILTER
        .get_or_init(|| {
            let pattern = env::var("BENCH_REGEX").ok()?;
            match Regex::new(&pattern) {
                Ok(filter) => Some(filter),
                Err(err) => panic!("BENCH_REGEX {pattern:?} is not a valid regex: {err}"),
            }
        })
        .as_ref()
}

/// `BENCH_REGEX` limits which benchmarks run, all run if it is unset.
pub fn should_run_benchmark(name: &str) -> bool {
    bench_filter().map_or(true, |filter| filter.is_match(name))
}

/// One benchmark input: `len` values from `pattern`, converted by `transform`.
pub struct BenchInput<'a, T> {
    pub len: usize,
    pub type_name: &'a str,
    pub transform: fn(Vec<i32>) -> Vec<T>,
    pub pattern_name: &'a str,
    pub pattern: fn(usize) -> Vec<i32>,
}

impl<T> BenchInput<'_, T> {
    pub fn name(&self, sort_name: &str, kind: &str) -> String {
        format!(
            "{sort_name}-{kind}-{}-{}-{}",
            self.type_name, self.pattern_name, self.len
        )
    }

    pub fn generate(&self) -> Vec<T> {
        (self.transform)((self.pattern)(self.len))
    }
}

/// Times `sort_fn` on fresh copies of `input`, generating them outside the measurement.
#[inline(never)]
pub fn bench_sort<T>(
    c: &mut Criterion,
    input: &BenchInput<'_, T>,
    sort_name: &str,
    sort_fn: impl Fn(&mut [T]),
) {
    let name = input.name(sort_name, "hot");
    if !should_run_benchmark(&name) {
        return;
    }

    // Only this thread is pinned, criterion keeps its other threads free.
    pin_to_bench_core();

    let batch_size = match input.len {
        0..=30 => BatchSize::SmallInput,
        _ => BatchSize::LargeInput,
    };

    c.bench_function(&name, |b| {
        b.iter_batched_ref(
            || input.generate(),
            |v| sort_fn(black_box(v.as_mut_slice())),
            batch_size,
        )
    });
}
