//! `reqwest` implementation of the [`Dispatcher`] for the Graph API.
//!
//! Flow Overview:
//! - `GraphDispatcher::builder(credentials)` collects the base URLs and API version.
//! - `connect()` builds the HTTP client and performs the client-credentials login.
//! - `resolve_endpoint` maps `(resource, ids, query)` to
//!   `{graph_url}/{tenant}/{resource}/{id}?api-version=..&$filter=..`.
//! - `dispatch` sends the request with the bearer token and returns the body
//!   of a successful response.

use crate::graph::{
    auth::{self, AccessToken, Credentials},
    dispatcher::Dispatcher,
    error::{graph_error_message, DispatchError, Error, Result},
    query::Query,
    resource::Resource,
};
use async_trait::async_trait;
use reqwest::{
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
    Client, Method,
};
use std::{fmt, time::Duration};
use tracing::{debug, info_span, Instrument};
use url::Url;

pub const DEFAULT_GRAPH_URL: &str = "https://graph.windows.net";
pub const DEFAULT_LOGIN_URL: &str = "https://login.windows.net";
pub const DEFAULT_API_VERSION: &str = "1.6";

const GRAPH_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
const GRAPH_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct GraphDispatcherBuilder {
    credentials: Credentials,
    graph_url: String,
    login_url: String,
    api_version: String,
    user_agent: String,
}

impl GraphDispatcherBuilder {
    #[must_use]
    pub fn graph_url(mut self, url: &str) -> Self {
        self.graph_url = url.to_string();
        self
    }

    #[must_use]
    pub fn login_url(mut self, url: &str) -> Self {
        self.login_url = url.to_string();
        self
    }

    #[must_use]
    pub fn api_version(mut self, version: &str) -> Self {
        self.api_version = version.to_string();
        self
    }

    #[must_use]
    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    /// Build the dispatcher around an already acquired token.
    /// # Errors
    /// Returns an endpoint error if a URL is invalid, or a dispatch error if
    /// the HTTP client cannot be constructed.
    pub fn with_token(self, token: AccessToken) -> Result<GraphDispatcher> {
        let graph_url = parse_base_url(&self.graph_url)?;
        let client = http_client(&self.user_agent)?;

        if self.api_version.trim().is_empty() {
            return Err(Error::endpoint("api version must not be empty"));
        }

        Ok(GraphDispatcher {
            client,
            graph_url,
            tenant_id: self.credentials.tenant_id,
            api_version: self.api_version,
            token,
        })
    }

    /// Log in with the client credentials and build the dispatcher.
    /// # Errors
    /// Returns an endpoint error if a URL is invalid, or the login error.
    pub async fn connect(self) -> Result<GraphDispatcher> {
        let login_url = parse_base_url(&self.login_url)?;
        let graph_url = parse_base_url(&self.graph_url)?;
        let client = http_client(&self.user_agent)?;

        let token =
            auth::client_credentials(&client, &login_url, &self.credentials, graph_url.as_str())
                .await?;

        debug!("logged in, token expires in {:?} seconds", token.expires_in);

        self.with_token(token)
    }
}

pub struct GraphDispatcher {
    client: Client,
    graph_url: Url,
    tenant_id: String,
    api_version: String,
    token: AccessToken,
}

impl GraphDispatcher {
    #[must_use]
    pub fn builder(credentials: Credentials) -> GraphDispatcherBuilder {
        GraphDispatcherBuilder {
            credentials,
            graph_url: DEFAULT_GRAPH_URL.to_string(),
            login_url: DEFAULT_LOGIN_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            user_agent: crate::APP_USER_AGENT.to_string(),
        }
    }

    #[must_use]
    pub fn tenant_id(&self) -> &str {
        &self.tenant_id
    }
}

#[async_trait]
impl Dispatcher for GraphDispatcher {
    fn resolve_endpoint(&self, resource: &str, ids: &[&str], query: &Query) -> Result<Url> {
        let resource: Resource = resource.parse()?;

        if ids.iter().any(|id| id.trim().is_empty()) {
            return Err(Error::endpoint(format!(
                "empty identifier for resource {resource}"
            )));
        }

        // `.` and `..` are dropped by URL path normalization.
        if let Some(id) = ids.iter().find(|id| matches!(**id, "." | "..")) {
            return Err(Error::endpoint(format!(
                "invalid identifier {id:?} for resource {resource}"
            )));
        }

        let mut url = self.graph_url.clone();
        url.path_segments_mut()
            .map_err(|()| Error::endpoint(format!("invalid graph URL: {}", self.graph_url)))?
            .pop_if_empty()
            .push(&self.tenant_id)
            .push(resource.path())
            .extend(ids);

        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("api-version", &self.api_version);
            for (key, value) in query.pairs() {
                pairs.append_pair(key, &value);
            }
        }

        debug!("endpoint URL: {}", url);

        Ok(url)
    }

    async fn dispatch(
        &self,
        method: Method,
        endpoint: &Url,
        body: Option<&[u8]>,
    ) -> Result<Vec<u8>> {
        let span = info_span!(
            "graph.dispatch",
            http.method = %method,
            url = %endpoint
        );

        async {
            let mut request = self
                .client
                .request(method, endpoint.as_str())
                .header(AUTHORIZATION, self.token.authorization())
                .header(ACCEPT, "application/json")
                .header(CONTENT_TYPE, "application/json; charset=UTF-8");
            if let Some(body) = body {
                request = request.body(body.to_vec());
            }

            let response = request.send().await?;
            let status = response.status();
            let buf = response.bytes().await?;

            if !status.is_success() {
                return Err(DispatchError::Status {
                    url: endpoint.to_string(),
                    status,
                    message: graph_error_message(&buf),
                }
                .into());
            }

            debug!("{} - {} bytes", status, buf.len());

            Ok(buf.to_vec())
        }
        .instrument(span)
        .await
    }
}

impl fmt::Debug for GraphDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphDispatcher")
            .field("graph_url", &self.graph_url.as_str())
            .field("tenant_id", &self.tenant_id)
            .field("api_version", &self.api_version)
            .field("token", &self.token)
            .finish_non_exhaustive()
    }
}

fn http_client(user_agent: &str) -> Result<Client> {
    Ok(Client::builder()
        .user_agent(user_agent)
        .connect_timeout(GRAPH_CONNECT_TIMEOUT)
        .timeout(GRAPH_REQUEST_TIMEOUT)
        .build()?)
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).map_err(|e| Error::endpoint(format!("invalid URL {raw}: {e}")))?;

    match url.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(Error::endpoint(format!(
                "Error parsing URL: unsupported scheme {scheme}"
            )))
        }
    }

    if url.cannot_be_a_base() || url.host().is_none() {
        return Err(Error::endpoint(format!(
            "Error parsing URL: no host specified in {raw}"
        )));
    }

    Ok(url)
}
