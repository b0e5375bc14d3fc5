//! # azuregraph
//!
//! A typed client for the Azure AD Graph directory API.
//!
//! The [`graph`] module maps two intents, "fetch one" and "fetch many", onto
//! HTTP calls performed by a [`graph::Dispatcher`], and decodes the JSON
//! payloads into plain records such as [`graph::User`]. The [`cli`] module
//! wires the same client into the `azuregraph` command line tool.
//!
//! ```no_run
//! # async fn run() -> anyhow::Result<()> {
//! use azuregraph::graph::{Client, Credentials, GraphDispatcher, User};
//! use secrecy::SecretString;
//! use std::sync::Arc;
//!
//! let credentials = Credentials {
//!     tenant_id: "contoso.onmicrosoft.com".to_string(),
//!     client_id: "client-id".to_string(),
//!     client_secret: SecretString::from("client-secret".to_string()),
//! };
//! let dispatcher = GraphDispatcher::builder(credentials).connect().await?;
//! let client = Client::new(Arc::new(dispatcher));
//!
//! let user: User = client.get("jdoe@contoso.onmicrosoft.com").await?;
//! let admins: Vec<User> = client.list(&["jobTitle eq 'Administrator'"]).await?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod graph;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub static APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
