use std::io;

use anyhow::Context;

use stockroom_cli::{CliConfig, Session};
use stockroom_inventory::Tracker;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::from_env();
    stockroom_observability::init(config.log_format);
    config.report_ignored();

    tracing::info!(
        low_stock_threshold = ?config.low_stock_threshold,
        "starting inventory session"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(Tracker::new(), stdin.lock(), stdout.lock(), config);
    session.run().context("inventory session failed")?;

    tracing::info!(items = session.tracker().store().len(), "session ended");
    Ok(())
}
