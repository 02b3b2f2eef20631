//! Simulated work for the demo loop.

use std::hint::black_box;
use std::thread;
use std::time::Duration;

use multiwatch::Stopwatch;

/// Stand-in for per-iteration setup that should not be timed.
pub fn setup(d: Duration) {
    if !d.is_zero() {
        thread::sleep(d);
    }
}

/// Spins on arithmetic for at least `d` and returns a checksum so the loop
/// cannot be optimized out.
pub fn busy_work(d: Duration) -> u64 {
    let sw = Stopwatch::start_new();
    let mut acc: u64 = 0x9e37_79b9_7f4a_7c15;
    loop {
        for i in 0..1_024u64 {
            acc = black_box(acc.rotate_left(5) ^ i.wrapping_mul(0x100_0000_01b3));
        }
        if sw.elapsed() >= d {
            return acc;
        }
    }
}
