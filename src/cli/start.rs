use crate::cli::{actions::Action, commands, dispatch, globals::GlobalArgs, telemetry};
use anyhow::Result;

/// Start the CLI
/// # Errors
/// Returns an error if logging cannot be initialized or arguments are missing.
pub fn start() -> Result<(Action, GlobalArgs)> {
    let matches = commands::new().get_matches();

    let verbosity = matches.get_one::<u8>("verbosity").copied().unwrap_or(0);

    telemetry::init(Some(telemetry::level(verbosity)))?;

    let globals = dispatch::globals(&matches)?;
    let action = dispatch::handler(&matches)?;

    Ok((action, globals))
}
