use crate::graph::{error::Result, query::Query};
use async_trait::async_trait;
use reqwest::Method;
use url::Url;

/// Endpoint construction and HTTP execution for the directory client.
///
/// Implementations are shared behind an `Arc` and may be called from many
/// tasks at once, so they must be safe for concurrent use. Deadlines and
/// cancellation belong here, not in the client.
#[async_trait]
pub trait Dispatcher: Send + Sync {
    /// Build the request target for `resource`, scoped by `ids` (one path
    /// segment each) and carrying `query` as query parameters.
    ///
    /// # Errors
    /// Returns [`Error::Endpoint`](crate::graph::Error::Endpoint) if the
    /// resource type is unknown or an identifier is malformed.
    fn resolve_endpoint(&self, resource: &str, ids: &[&str], query: &Query) -> Result<Url>;

    /// Perform one HTTP exchange and return the raw response body.
    ///
    /// # Errors
    /// Returns [`Error::Dispatch`](crate::graph::Error::Dispatch) on network
    /// failure or a non-success status.
    async fn dispatch(&self, method: Method, endpoint: &Url, body: Option<&[u8]>)
        -> Result<Vec<u8>>;
}
