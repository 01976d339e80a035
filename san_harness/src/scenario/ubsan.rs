//! Arithmetic and pointer UB. Rust has no UBSan runtime; the checks rustc
//! emits (`overflow-checks`, division guards, debug-assertion null checks)
//! stand in for it and abort with the defect named in the panic message.
//!
//! Operands go through [`black_box`] so none of this is rejected at compile
//! time by `arithmetic_overflow` or `unconditional_panic`.

use core::{hint::black_box, ptr};

// Never constructed, only read through a null pointer.
#[allow(dead_code)]
#[repr(C)]
struct Foo {
    a: i32,
    b: i32,
}

pub fn signed_overflow(argc: usize) {
    let mut k = black_box(i32::MAX);
    k += black_box(argc) as i32; // BOOM
    eprintln!("ubsan_test_signed_overflow: {k}");
}

pub fn zero_div(argc: usize) {
    let mut k = black_box(argc) as i32;
    k /= k - k; // BOOM
    eprintln!("ubsan_test_zero_div: {k}");
}

pub fn nullptr_access() {
    let k: *const Foo = black_box(ptr::null());
    let m = unsafe { (*k).a }; // BOOM
    eprintln!("ubsan_test_nullptr_access: {m}");
}
