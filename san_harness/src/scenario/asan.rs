//! AddressSanitizer targets. Each body reads or frees memory it no longer owns.

use core::{hint::black_box, ptr};

const ARRAY_LEN: usize = 100;
const GREETING_LEN: usize = 10;

pub fn use_after_free(argc: usize) {
    let array = vec![0_i32; ARRAY_LEN];
    let stale = array.as_ptr();
    drop(array);

    // BOOM
    let a = unsafe { ptr::read_volatile(stale.add(argc)) };
    eprintln!("asan_test_use_after_free: {a}");
}

pub fn use_after_free_scalar() {
    let s = Box::into_raw(Box::new(9_i32));
    drop(unsafe { Box::from_raw(s) });

    // BOOM
    let a = unsafe { ptr::read_volatile(s) };
    eprintln!("asan_test_use_after_free: {a}");
}

pub fn array_bounds() {
    let s: [u8; GREETING_LEN] = black_box(*b"123456789\0");
    let base = s.as_ptr();
    // One past the end on the last iteration.
    for i in 0..=GREETING_LEN {
        let c = unsafe { ptr::read_volatile(base.add(i)) };
        eprintln!("asan_test_array_bounds: {}", char::from(c));
    }
}

pub fn double_free() {
    let s = Box::into_raw(Box::new(9_i32));
    drop(unsafe { Box::from_raw(s) });
    // double-free !
    drop(unsafe { Box::from_raw(s) });

    let a = unsafe { ptr::read_volatile(s) };
    eprintln!("asan_test_double_free: {a}");
}
