use anyhow::{Context, Result};
use tracing::info;

use moveguard_proto::{Session, SessionConfig};

fn main() -> Result<()> {
    // Replies own stdout.
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();
    info!("moveguard starting");

    Session::new(SessionConfig::default())
        .run_stdio()
        .context("session aborted")?;
    Ok(())
}
