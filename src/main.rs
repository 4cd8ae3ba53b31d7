mod cmd;

use jobboard::prelude::Result;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    if let Err(e) = cmd::run().await {
        tracing::error!("{} failed: {}", e.code(), e);
        eprintln!("{}", e);
        std::process::exit(1);
    }
    Ok(())
}
