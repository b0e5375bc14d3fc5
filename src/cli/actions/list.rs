use crate::graph::{Client, Page, Query};
use anyhow::{Context, Result};
use serde_json::Value;
use tracing::info;

#[derive(Debug)]
pub struct Args {
    pub resource: String,
    pub query: Query,
}

/// Fetch one page of a collection; the result is the bare `value` array.
/// # Errors
/// Returns an error if the request fails.
pub async fn execute(client: &Client, args: Args) -> Result<Value> {
    let page: Page<Value> = client
        .list_as(&args.resource, &args.query)
        .await
        .with_context(|| format!("list {}", args.resource))?;

    info!("listed {} {}", page.value.len(), args.resource);

    if let Some(token) = page.next_skiptoken() {
        info!("more results available, continue with --skiptoken \"{token}\"");
    }

    Ok(Value::Array(page.value))
}
