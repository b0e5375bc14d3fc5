use crate::cli::{
    actions::{get, list, Action},
    globals::GlobalArgs,
};
use crate::graph::Client;
use anyhow::{Context, Result};
use std::{io::Write, sync::Arc};

/// Execute the provided action and print its JSON result to stdout.
// This is the single dispatch point for all CLI actions.
/// # Errors
/// Returns an error if login fails, the action fails or stdout is closed.
pub async fn execute(action: Action, globals: &GlobalArgs) -> Result<()> {
    let dispatcher = globals
        .dispatcher()
        .connect()
        .await
        .with_context(|| format!("login to tenant {} failed", globals.tenant_id))?;

    let client = Client::new(Arc::new(dispatcher));

    let output = match action {
        Action::Get(args) => get::execute(&client, args).await?,
        Action::List(args) => list::execute(&client, args).await?,
    };

    let mut out = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, &output)?;
    writeln!(out)?;
    out.flush()?;

    Ok(())
}
