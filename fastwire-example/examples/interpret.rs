//! Message interpreter example.
//!
//! Validates a run configuration the way an interpreting application would,
//! then feeds a synthetic market data stream through the synchronous driver
//! and prints every record in the human-readable interpreter format. The
//! wire-level codec is an external engine; the synthetic feed stands in for
//! its output over the configured input file.

mod common;

use common::{ExampleConfig, init_logging, synthetic_feed};
use fastwire_engine::{DriverConfig, SynchronousDriver, VecMessageSource};
use fastwire_interpret::MessageInterpreter;
use tracing::info;

fn usage() -> ! {
    eprintln!("usage: interpret <templates.xml> <messages.fast>");
    eprintln!("  FASTWIRE_FEED   synthetic messages to generate (default 5)");
    eprintln!("  FASTWIRE_LIMIT  stop after this many records (default all)");
    eprintln!("  FASTWIRE_RESET  reset decoder state before every message");
    std::process::exit(2);
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let cfg = ExampleConfig::from_env();
    let mut config = DriverConfig::new()
        .with_limit(cfg.limit)
        .with_reset_on_message(cfg.reset_on_message);
    let mut args = std::env::args().skip(1);
    if let Some(path) = args.next() {
        config = config.with_template_file(path);
    }
    if let Some(path) = args.next() {
        config = config.with_input_file(path);
    }
    if let Err(err) = config.validate() {
        eprintln!("error: {}", err);
        usage();
    }

    info!(
        "Interpreting {} synthetic messages (limit {})",
        cfg.feed_size,
        config.limit()
    );

    let mut source = VecMessageSource::new(synthetic_feed(cfg.feed_size));
    let mut driver = SynchronousDriver::from_config(&config);

    let stdout = std::io::stdout();
    let mut interpreter = MessageInterpreter::new(stdout.lock());
    let delivered = driver.run(&mut source, &mut interpreter);

    info!(
        "Delivered {} messages, {} walk errors, {} source resets",
        delivered,
        interpreter.error_count(),
        source.reset_count()
    );
    Ok(())
}
