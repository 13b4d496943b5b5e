//! Integration tests for data initialization
//!
//! Tests verify:
//! - Counter advances once per call, for every policy
//! - Factor alternation and reset behaviour
//! - Reproducibility of randomized policies
//! - Exact values for the positional and integer policies

mod common;

use common::{assert_bitwise_eq, fresh_init, zeroed};
use kernperf::data::{
    DataInit, INT_HIGH_SENTINEL, INT_LOW_SENTINEL, SeededDraws, checksum, positional_value,
};
use kernperf::dtype::{Complex, Int, Real};
use kernperf::runtime::{DEFAULT_ALIGN, Variant};

/// One fixed sequence of calls touching every policy; returns all outputs.
fn session(init: &mut DataInit, variant: Variant) -> (Vec<Int>, Vec<Real>, Vec<Complex>, f64) {
    let ints = init.alloc_and_init::<Int>(64, DEFAULT_ALIGN, variant).unwrap();
    let mut reals = init.alloc_and_init::<Real>(300, DEFAULT_ALIGN, variant).unwrap();
    init.init_real_rand_sign(&mut reals[100..], variant);
    let cplx = init.alloc_and_init::<Complex>(50, DEFAULT_ALIGN, variant).unwrap();
    let rv = init.alloc_and_init_rand_value(80, DEFAULT_ALIGN, variant).unwrap();
    let scalar = init.init_scalar(variant);
    let sum = checksum(&ints, 1.0)
        + checksum(&reals, 1.0)
        + checksum(&cplx, 1.0)
        + checksum(&rv, 1.0);
    (ints.to_vec(), reals.to_vec(), cplx.to_vec(), sum + scalar)
}

// ============================================================================
// Counter
// ============================================================================

#[test]
fn test_counter_counts_every_call() {
    let mut init = fresh_init();
    let mut r = zeroed::<Real>(10);
    let mut i = zeroed::<Int>(10);
    let mut c = zeroed::<Complex>(10);

    for _ in 0..3 {
        init.init_real(&mut r, Variant::BaseSeq);
        init.init_int(&mut i, Variant::BaseSeq);
        init.init_complex(&mut c, Variant::BaseSeq);
        init.init_real_const(&mut r, 2.5, Variant::BaseSeq);
        init.init_real_rand_sign(&mut r, Variant::BaseSeq);
        init.init_real_rand_value(&mut r, Variant::BaseSeq);
        init.init_scalar(Variant::BaseSeq);
    }
    assert_eq!(init.count(), 21);

    init.reset();
    assert_eq!(init.count(), 0);
}

#[test]
fn test_empty_buffers_still_count() {
    let mut init = fresh_init();
    let mut r = zeroed::<Real>(0);
    init.init_real(&mut r, Variant::BaseSeq);
    init.init_real_rand_sign(&mut r, Variant::BaseSeq);
    let _ = init.alloc_and_init::<Int>(0, DEFAULT_ALIGN, Variant::BaseSeq).unwrap();
    assert_eq!(init.count(), 3);
}

#[test]
fn test_consecutive_calls_alternate_factor() {
    let mut init = fresh_init();
    let mut prev: Option<Real> = None;
    for _ in 0..6 {
        let mut r = zeroed::<Real>(1);
        init.init_real(&mut r, Variant::BaseSeq);
        if let Some(p) = prev {
            assert_ne!(p, r[0]);
        }
        prev = Some(r[0]);
    }
}

#[test]
fn test_even_aligned_starts_agree() {
    let mut init = fresh_init();
    let mut first = zeroed::<Real>(5);
    let mut second = zeroed::<Real>(5);
    init.init_real(&mut first, Variant::BaseSeq);
    init.init_real(&mut second, Variant::BaseSeq);

    // Two more calls put the counter back on an even count.
    let mut third = zeroed::<Real>(5);
    let mut fourth = zeroed::<Real>(5);
    init.init_real(&mut third, Variant::BaseSeq);
    init.init_real(&mut fourth, Variant::BaseSeq);

    assert_eq!(&first[..], &third[..]);
    assert_eq!(&second[..], &fourth[..]);
    assert_ne!(&first[..], &second[..]);
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_positional_real_len3_fresh_counter() {
    let mut init = fresh_init();
    let buf = init.alloc_and_init::<Real>(3, DEFAULT_ALIGN, Variant::BaseSeq).unwrap();
    assert_eq!(buf[0], 0.2 * 1.1 / 1.12345);
    assert_eq!(buf[1], 0.2 * 2.1 / 2.12345);
    assert_eq!(buf[2], 0.2 * 3.1 / 3.12345);
}

#[test]
fn test_int_len10_follows_draw_sequence() {
    let mut init = fresh_init();
    let buf = init.alloc_and_init::<Int>(10, DEFAULT_ALIGN, Variant::BaseSeq).unwrap();

    let mut draws = SeededDraws::reseeded();
    let mut expected: Vec<Int> = (0..10)
        .map(|_| if draws.uniform() < 0.5 { -1 } else { 1 })
        .collect();
    let ilo = (10.0 * draws.uniform()) as usize;
    let ihi = (10.0 * draws.uniform()) as usize;
    expected[ilo] = INT_LOW_SENTINEL;
    expected[ihi] = INT_HIGH_SENTINEL;

    assert_eq!(&buf[..], &expected[..]);
    assert_eq!(buf[ihi], 19);
    if ilo != ihi {
        assert_eq!(buf[ilo], -58);
    }
}

#[test]
fn test_int_single_element_ends_with_high_sentinel() {
    // Both outlier draws must land on index 0; +19 is written last.
    let mut init = fresh_init();
    let buf = init.alloc_and_init::<Int>(1, DEFAULT_ALIGN, Variant::BaseSeq).unwrap();
    assert_eq!(&buf[..], &[INT_HIGH_SENTINEL]);
}

#[test]
fn test_const_fill() {
    let mut init = fresh_init();
    let buf = init
        .alloc_and_init_const(7, DEFAULT_ALIGN, -3.25, Variant::BaseSeq)
        .unwrap();
    assert!(buf.iter().all(|&v| v == -3.25));
    assert_eq!(init.count(), 1);
}

#[test]
fn test_rand_sign_magnitudes_are_positional() {
    let mut init = fresh_init();
    init.increment();
    let buf = init
        .alloc_and_init_rand_sign(200, DEFAULT_ALIGN, Variant::BaseSeq)
        .unwrap();
    for (i, &v) in buf.iter().enumerate() {
        assert_eq!(v.abs(), positional_value(0.1, i));
    }
    assert!(buf.iter().any(|&v| v < 0.0));
    assert!(buf.iter().any(|&v| v > 0.0));
}

#[test]
fn test_complex_uses_complex_factor() {
    let mut init = fresh_init();
    let buf = init
        .alloc_and_init::<Complex>(4, DEFAULT_ALIGN, Variant::BaseSeq)
        .unwrap();
    for (i, z) in buf.iter().enumerate() {
        let ratio = (i as f64 + 1.1) / (i as f64 + 1.12345);
        assert!((z.re - 0.2 * ratio).abs() < 1e-15);
        assert!((z.im - 0.3 * ratio).abs() < 1e-15);
    }
}

// ============================================================================
// Reproducibility
// ============================================================================

#[test]
fn test_session_is_deterministic() {
    let mut a = fresh_init();
    let mut b = fresh_init();
    let (ia, ra, ca, sa) = session(&mut a, Variant::BaseSeq);
    let (ib, rb, cb, sb) = session(&mut b, Variant::BaseSeq);
    assert_eq!(ia, ib);
    assert_bitwise_eq(&ra, &rb, "reals");
    assert_eq!(ca, cb);
    assert_eq!(sa.to_bits(), sb.to_bits());
}

#[test]
fn test_reset_reproduces_session() {
    let mut init = fresh_init();
    let first = session(&mut init, Variant::BaseSeq);
    init.reset();
    let second = session(&mut init, Variant::BaseSeq);
    assert_eq!(first, second);
}

#[test]
fn test_random_policies_reseed_each_call() {
    let mut init = fresh_init();
    let a = init
        .alloc_and_init_rand_value(123, DEFAULT_ALIGN, Variant::BaseSeq)
        .unwrap();
    let b = init
        .alloc_and_init_rand_value(123, DEFAULT_ALIGN, Variant::BaseSeq)
        .unwrap();
    assert_bitwise_eq(&a, &b, "rand_value");

    // Same for integers: no dependence on the intervening calls.
    let i1 = init.alloc_and_init::<Int>(33, DEFAULT_ALIGN, Variant::BaseSeq).unwrap();
    let _ = init.alloc_and_init::<Real>(10, DEFAULT_ALIGN, Variant::BaseSeq).unwrap();
    let i2 = init.alloc_and_init::<Int>(33, DEFAULT_ALIGN, Variant::BaseSeq).unwrap();
    assert_eq!(&i1[..], &i2[..]);
}

#[test]
fn test_first_touch_does_not_change_contents() {
    let mut with_touch = fresh_init();
    let mut without_touch = fresh_init().without_first_touch();
    let a = session(&mut with_touch, Variant::BaseThreads);
    let b = session(&mut without_touch, Variant::BaseThreads);
    let c = session(&mut fresh_init(), Variant::BaseSeq);
    assert_eq!(a, b);
    assert_eq!(a, c);
}
