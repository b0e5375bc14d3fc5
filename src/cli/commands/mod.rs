mod auth;
mod logging;

pub use self::logging::validator_log_level;

use crate::graph::Resource;
use clap::{
    builder::{
        styling::{AnsiColor, Effects, Styles},
        PossibleValuesParser,
    },
    Arg, ArgAction, ColorChoice, Command,
};

fn resource_arg() -> Arg {
    Arg::new("resource")
        .help("Directory collection")
        .required(true)
        .value_parser(PossibleValuesParser::new(Resource::names()))
}

fn get_command() -> Command {
    Command::new("get")
        .about("Fetch one object by object id or user principal name")
        .arg(resource_arg())
        .arg(
            Arg::new("name")
                .help("Object id (GUID) or alternate key such as a UPN")
                .required(true),
        )
}

fn list_command() -> Command {
    Command::new("list")
        .about("List a collection, optionally filtered, sorted and paged")
        .arg(resource_arg())
        .arg(
            Arg::new("filter")
                .long("filter")
                .help("OData filter expression; repeat to combine with 'and'")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("top")
                .long("top")
                .help("Maximum number of objects per page")
                .value_parser(clap::value_parser!(u32)),
        )
        .arg(
            Arg::new("orderby")
                .long("orderby")
                .help("Sort expression, example: displayName"),
        )
        .arg(
            Arg::new("expand")
                .long("expand")
                .help("Navigation property to expand, example: manager"),
        )
        .arg(
            Arg::new("skiptoken")
                .long("skiptoken")
                .help("Continuation token from a previous page"),
        )
}

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    let command = Command::new("azuregraph")
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(get_command())
        .subcommand(list_command());

    let command = auth::with_args(command);
    logging::with_args(command)
}
