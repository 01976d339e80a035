use std::thread;

use anyhow::{Result, anyhow};

/// Written by both threads without any synchronization. Keep it that way.
static mut GLOBAL: i32 = 0;

fn racing_writer() {
    unsafe { GLOBAL = 42 };
}

/// Unordered write-write race between the main thread and one worker. The
/// join only orders the final read.
pub fn race(argc: usize) -> Result<()> {
    let worker = thread::Builder::new()
        .name("racing-writer".into())
        .spawn(racing_writer)
        .map_err(|e| anyhow!("Failed to spawn racing writer: {e:}"))?;

    unsafe { GLOBAL = argc as i32 };

    worker
        .join()
        .map_err(|e| anyhow!("Racing writer panicked: {e:?}"))?;

    let global = unsafe { GLOBAL };
    eprintln!("tsan_test_race: {global}");
    Ok(())
}
