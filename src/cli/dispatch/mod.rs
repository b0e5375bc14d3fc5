use crate::cli::{
    actions::{get, list, Action},
    globals::GlobalArgs,
};
use crate::graph::Query;
use anyhow::{anyhow, Context, Result};
use secrecy::SecretString;

fn required(matches: &clap::ArgMatches, id: &str) -> Result<String> {
    matches
        .get_one::<String>(id)
        .cloned()
        .with_context(|| format!("missing required argument: --{id}"))
}

/// # Errors
/// Returns an error if required arguments are missing.
pub fn globals(matches: &clap::ArgMatches) -> Result<GlobalArgs> {
    let mut globals = GlobalArgs::new(
        required(matches, "tenant-id")?,
        required(matches, "client-id")?,
    );
    globals.set_secret(SecretString::from(required(matches, "client-secret")?));

    if let Some(url) = matches.get_one::<String>("graph-url") {
        globals.graph_url.clone_from(url);
    }
    if let Some(url) = matches.get_one::<String>("login-url") {
        globals.login_url.clone_from(url);
    }
    if let Some(version) = matches.get_one::<String>("api-version") {
        globals.api_version.clone_from(version);
    }

    Ok(globals)
}

/// # Errors
/// Returns an error if the subcommand or its arguments are missing.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    match matches.subcommand() {
        Some(("get", sub_m)) => Ok(Action::Get(get::Args {
            resource: required(sub_m, "resource")?,
            name: required(sub_m, "name")?,
        })),
        Some(("list", sub_m)) => {
            let mut query = Query::new();
            for filter in sub_m.get_many::<String>("filter").into_iter().flatten() {
                query = query.filter(filter);
            }
            query.top = sub_m.get_one::<u32>("top").copied();
            query.orderby = sub_m.get_one::<String>("orderby").cloned();
            query.expand = sub_m.get_one::<String>("expand").cloned();
            query.skiptoken = sub_m.get_one::<String>("skiptoken").cloned();

            Ok(Action::List(list::Args {
                resource: required(sub_m, "resource")?,
                query,
            }))
        }
        Some((name, _)) => Err(anyhow!("unknown subcommand: {name}")),
        None => Err(anyhow!("missing subcommand: get or list")),
    }
}
