#![allow(dead_code)]

use criterion::{BenchmarkGroup, Criterion, black_box};
use std::sync::OnceLock;
use std::time::Duration;

const RNG_A: u64 = 6364136223846793005;
const RNG_C: u64 = 1442695040888963407;

pub fn lcg_next(state: &mut u64) -> u64 {
    *state = state.wrapping_mul(RNG_A).wrapping_add(RNG_C);
    *state
}

/// Finite `x` whose lo word sits on 0 or `u32::MAX`, each paired with a
/// target that forces a carry or borrow into the hi word.
pub fn gen_boundary_pairs(count: usize, seed: u64) -> Vec<(f64, f64)> {
    let mut state = seed;
    let mut values = Vec::with_capacity(count);
    while values.len() < count {
        let hi = (lcg_next(&mut state) >> 32) as u32;
        let r = lcg_next(&mut state);
        let lo = if r & 1 == 0 { 0 } else { u32::MAX };
        let x = f64::from_bits(((hi as u64) << 32) | lo as u64);
        if !x.is_finite() || x == 0.0 {
            continue;
        }
        // lo == MAX steps away from zero, lo == 0 toward it.
        let away = if x > 0.0 { f64::INFINITY } else { f64::NEG_INFINITY };
        let y = if lo == u32::MAX { away } else { -away };
        values.push((x, y));
    }
    values
}

/// Raw patterns stepped toward a rotating set of edge targets.
pub fn gen_pattern_pairs(count: usize, seed: u64, targets: &[f64]) -> Vec<(f64, f64)> {
    gen_patterns(count, seed)
        .into_iter()
        .zip(targets.iter().copied().cycle())
        .collect()
}

/// Raw bit patterns: every class shows up, NaNs included.
pub fn gen_patterns(count: usize, seed: u64) -> Vec<f64> {
    let mut state = seed;
    (0..count)
        .map(|_| f64::from_bits(lcg_next(&mut state)))
        .collect()
}

pub fn bench_inputs2<F, G>(
    group: &mut BenchmarkGroup<'_, criterion::measurement::WallTime>,
    inputs: &[(f64, f64)],
    fast: F,
    glibc: G,
) where
    F: Fn(f64, f64) -> f64 + Copy,
    G: Fn(f64, f64) -> f64 + Copy,
{
    group.bench_function("floatbits", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for &(x, y) in inputs {
                acc += fast(black_box(x), black_box(y));
            }
            black_box(acc)
        })
    });
    group.bench_function("glibc", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for &(x, y) in inputs {
                acc += glibc(black_box(x), black_box(y));
            }
            black_box(acc)
        })
    });
}

pub fn configure_criterion() -> Criterion {
    Criterion::default()
        .sample_size(200)
        .measurement_time(Duration::from_secs(10))
        .warm_up_time(Duration::from_secs(5))
}

struct LibmFns {
    nextafter: unsafe extern "C" fn(f64, f64) -> f64,
}

static LIBM_FNS: OnceLock<LibmFns> = OnceLock::new();

fn libm_path() -> String {
    if let Ok(value) = std::env::var("FLOATBITS_GLIBC_LIBM") {
        let value = value.trim().to_string();
        if !value.is_empty() {
            return value;
        }
    }
    String::from("libm.so.6")
}

fn load_libm() -> LibmFns {
    let path = libm_path();
    let lib = unsafe { libloading::Library::new(&path).expect("load glibc libm") };
    let lib = Box::leak(Box::new(lib));
    unsafe {
        let nextafter: libloading::Symbol<unsafe extern "C" fn(f64, f64) -> f64> =
            lib.get(b"nextafter").expect("load nextafter");
        eprintln!("Using libm from {path}");
        LibmFns {
            nextafter: *nextafter,
        }
    }
}

fn libm() -> &'static LibmFns {
    LIBM_FNS.get_or_init(load_libm)
}

#[inline(never)]
pub fn glibc_nextafter(x: f64, y: f64) -> f64 {
    unsafe { (libm().nextafter)(x, y) }
}
