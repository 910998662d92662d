//! Measures a piece of work and paces a loop against a fixed start instant.
//!
//! Every iteration waits until its slot since `start` has arrived, so time spent doing the work
//! does not push later iterations back.

use tiny_timing::{Error, measure, monotonic_now, sleep};

const TICK_SECONDS: f64 = 0.1;

fn main() -> Result<(), Error> {
    let timed = measure(|| (1..=1_000_u64).sum::<u64>());
    println!("sum {} computed in {:.6} seconds", timed.value(), timed.elapsed_seconds());

    let start = monotonic_now();

    for tick in 1..=5_u32 {
        sleep(f64::from(tick) * TICK_SECONDS, Some(start))?;

        let now = monotonic_now();
        println!("tick {tick} at {:.3} seconds", now.seconds_since(start));
    }

    Ok(())
}
