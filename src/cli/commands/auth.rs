use crate::graph::transport::{DEFAULT_API_VERSION, DEFAULT_GRAPH_URL, DEFAULT_LOGIN_URL};
use clap::{Arg, Command};

pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("tenant-id")
                .long("tenant-id")
                .help("Directory (tenant) id or verified domain, example: contoso.onmicrosoft.com")
                .env("AZUREGRAPH_TENANT_ID")
                .required(true),
        )
        .arg(
            Arg::new("client-id")
                .long("client-id")
                .help("Application (client) id")
                .env("AZUREGRAPH_CLIENT_ID")
                .required(true),
        )
        .arg(
            Arg::new("client-secret")
                .long("client-secret")
                .help("Application client secret")
                .env("AZUREGRAPH_CLIENT_SECRET")
                .hide_env_values(true)
                .required(true),
        )
        .arg(
            Arg::new("graph-url")
                .long("graph-url")
                .help("Directory API base URL")
                .env("AZUREGRAPH_GRAPH_URL")
                .default_value(DEFAULT_GRAPH_URL),
        )
        .arg(
            Arg::new("login-url")
                .long("login-url")
                .help("OAuth2 login base URL")
                .env("AZUREGRAPH_LOGIN_URL")
                .default_value(DEFAULT_LOGIN_URL),
        )
        .arg(
            Arg::new("api-version")
                .long("api-version")
                .help("Value sent as the api-version query parameter")
                .env("AZUREGRAPH_API_VERSION")
                .default_value(DEFAULT_API_VERSION),
        )
}
