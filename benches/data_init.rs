#![allow(dead_code)]

use fluxbench::{Bencher, flux};
use std::hint::black_box;

use kernperf::prelude::*;

// ---------------------------------------------------------------------------
// Group 1: Real fill policies (1M elements)
// ---------------------------------------------------------------------------

#[flux::bench(group = "init_real_1m")]
fn positional_1m(b: &mut Bencher) {
    let mut init = DataInit::new();
    let mut buf = allocate::<Real>(1 << 20, DEFAULT_ALIGN, Variant::BaseSeq).unwrap();
    b.iter(|| {
        init.init_real(&mut buf, Variant::BaseSeq);
        black_box(buf[0])
    });
}

#[flux::bench(group = "init_real_1m")]
fn rand_sign_1m(b: &mut Bencher) {
    let mut init = DataInit::new();
    let mut buf = allocate::<Real>(1 << 20, DEFAULT_ALIGN, Variant::BaseSeq).unwrap();
    b.iter(|| {
        init.init_real_rand_sign(&mut buf, Variant::BaseSeq);
        black_box(buf[0])
    });
}

#[flux::bench(group = "init_real_1m")]
fn rand_value_1m(b: &mut Bencher) {
    let mut init = DataInit::new();
    let mut buf = allocate::<Real>(1 << 20, DEFAULT_ALIGN, Variant::BaseSeq).unwrap();
    b.iter(|| {
        init.init_real_rand_value(&mut buf, Variant::BaseSeq);
        black_box(buf[0])
    });
}

// ---------------------------------------------------------------------------
// Group 2: First-touch cost (threaded variant vs. plain)
// ---------------------------------------------------------------------------

#[flux::bench(group = "first_touch_4m")]
fn fill_without_first_touch(b: &mut Bencher) {
    let mut init = DataInit::new().without_first_touch();
    b.iter(|| {
        black_box(init.alloc_and_init::<Real>(1 << 22, DEFAULT_ALIGN, Variant::BaseThreads))
    });
}

#[flux::bench(group = "first_touch_4m")]
fn fill_with_first_touch(b: &mut Bencher) {
    let mut init = DataInit::new();
    b.iter(|| {
        black_box(init.alloc_and_init::<Real>(1 << 22, DEFAULT_ALIGN, Variant::BaseThreads))
    });
}

// ---------------------------------------------------------------------------
// Group 3: Integer and complex fills
// ---------------------------------------------------------------------------

#[flux::bench(group = "init_other_1m")]
fn int_1m(b: &mut Bencher) {
    let mut init = DataInit::new();
    let mut buf = allocate::<Int>(1 << 20, DEFAULT_ALIGN, Variant::BaseSeq).unwrap();
    b.iter(|| {
        init.init_int(&mut buf, Variant::BaseSeq);
        black_box(buf[0])
    });
}

#[flux::bench(group = "init_other_1m")]
fn complex_1m(b: &mut Bencher) {
    let mut init = DataInit::new();
    let mut buf = allocate::<Complex>(1 << 20, DEFAULT_ALIGN, Variant::BaseSeq).unwrap();
    b.iter(|| {
        init.init_complex(&mut buf, Variant::BaseSeq);
        black_box(buf[0])
    });
}

fn main() {
    fluxbench_cli::run().unwrap();
}
