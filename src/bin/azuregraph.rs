use anyhow::Result;
use azuregraph::cli::{start, telemetry};

// Main function
#[tokio::main]
async fn main() -> Result<()> {
    let (action, globals) = start()?;

    let result = action.execute(&globals).await;

    telemetry::shutdown_tracer();

    result
}
