use core::{mem::MaybeUninit, ptr};

const SLOTS: usize = 10;
const INITIALIZED_SLOT: usize = 5;

/// Branches on a heap slot that was never written. `argc` must not be the
/// initialized slot; it is 1 for a plain invocation.
pub fn corruption(argc: usize) {
    let mut a = Box::<[i32]>::new_uninit_slice(SLOTS);
    a[INITIALIZED_SLOT] = MaybeUninit::new(0);

    let b = unsafe { ptr::read_volatile(a[argc].as_ptr()) };
    if b != 0 {
        println!("xx");
    }

    let a1 = unsafe { a[1].assume_init() };
    eprintln!("msan_test_corruption: {a1}");
}
