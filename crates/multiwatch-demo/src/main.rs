mod config;
mod report;
mod workload;

use anyhow::Result;

use multiwatch::logging::{LoggingConfig, init_logging};
use multiwatch::{Accumulator, Stopwatch};

use crate::config::DemoConfig;

fn main() -> Result<()> {
    let config = DemoConfig::from_env()?;

    init_logging(LoggingConfig {
        env_filter: config.log_filter.clone(),
        ..LoggingConfig::default()
    });
    log::info!(
        "timing {} iterations: {:?} setup (untimed), {:?} work (timed)",
        config.iterations,
        config.setup,
        config.work
    );

    let mut hot = Accumulator::new();
    let mut whole = Stopwatch::start_new();

    for i in 0..config.iterations {
        workload::setup(config.setup);

        hot.start();
        let checksum = workload::busy_work(config.work);
        hot.stop();

        log::debug!(
            "iteration {i}: checksum {checksum:#018x}, hot total {} ms",
            hot.elapsed_milliseconds()
        );
    }
    whole.stop();

    // The whole hot accumulator, the loop stopwatch and one mean-sized run,
    // each folded in as a single run.
    let mut merged = Accumulator::new();
    merged.add_from(&hot);
    merged.add_stopwatch(&whole);
    merged.add_ticks(hot.average_ticks()?);
    log::debug!("merged {} contributions", merged.count());

    println!();
    println!("{}", report::HEADER);
    println!("{}", report::row("hot", &hot.summary()));
    println!("{}", report::row("merged", &merged.summary()));
    println!();
    println!("  whole loop    {}", report::seconds(whole.elapsed()));
    println!("  hot average   {}", report::seconds(hot.average()?));
    println!();

    let empty = Accumulator::new();
    println!("  empty average_milliseconds: {}", empty.average_milliseconds());
    if let Err(e) = empty.average() {
        println!("  empty average: {e}");
    }
    println!();

    log::info!("done");
    Ok(())
}
