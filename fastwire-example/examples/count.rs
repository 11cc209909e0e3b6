//! Field counting example.
//!
//! Runs the synthetic market data stream through the driver with a
//! counting consumer and reports per-type field totals instead of
//! printing the records themselves.

mod common;

use common::{ExampleConfig, init_logging, synthetic_feed};
use fastwire_engine::{SynchronousDriver, VecMessageSource};
use fastwire_interpret::MessageCounter;
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_logging();

    let cfg = ExampleConfig::from_env();
    info!("Counting fields across {} synthetic messages", cfg.feed_size);

    let mut source = VecMessageSource::new(synthetic_feed(cfg.feed_size));
    let mut driver = SynchronousDriver::new()
        .with_limit(cfg.limit)
        .with_reset_on_message(cfg.reset_on_message);

    let mut counter = MessageCounter::new();
    let delivered = driver.run(&mut source, &mut counter);
    let counts = counter.counts();

    println!("Messages:         {}", counts.messages);
    println!("Scalar fields:    {}", counts.scalar_total());
    println!("  uInt32:         {}", counts.uint32);
    println!("  ascii:          {}", counts.ascii);
    println!("  decimal:        {}", counts.decimal);
    println!("Sequences:        {}", counts.sequences);
    println!("Sequence entries: {}", counts.sequence_entries);
    println!("Groups:           {}", counts.groups);
    println!("Walk errors:      {}", counts.structural_errors);

    info!("Driver delivered {} messages", delivered);
    Ok(())
}
