//! Typed request/response mapping for the directory API.

pub mod auth;
pub mod client;
pub mod dispatcher;
pub mod entity;
pub mod error;
pub mod group;
pub mod query;
pub mod resource;
pub mod transport;
pub mod user;

pub use self::auth::{AccessToken, Credentials};
pub use self::client::Client;
pub use self::dispatcher::Dispatcher;
pub use self::entity::{Entity, Page};
pub use self::error::{DispatchError, Error, ErrorKind, Result};
pub use self::group::Group;
pub use self::query::Query;
pub use self::resource::Resource;
pub use self::transport::{GraphDispatcher, GraphDispatcherBuilder};
pub use self::user::{
    AssignedLicense, AssignedPlan, PasswordProfile, ProvisionedPlan, ProvisioningError,
    SignInName, User,
};
