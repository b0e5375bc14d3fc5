//! OAuth2 client-credentials login.
//!
//! The directory API only accepts bearer tokens minted by the tenant's login
//! endpoint. A token is requested once when a [`GraphDispatcher`] connects;
//! nothing here refreshes it.
//!
//! [`GraphDispatcher`]: crate::graph::GraphDispatcher

use crate::graph::error::{graph_error_message, DispatchError, Error, Result};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use tracing::{debug, instrument};
use url::Url;

/// Application identity registered in the tenant.
#[derive(Clone)]
pub struct Credentials {
    pub tenant_id: String,
    pub client_id: String,
    pub client_secret: SecretString,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("tenant_id", &self.tenant_id)
            .field("client_id", &self.client_id)
            .finish_non_exhaustive()
    }
}

#[derive(Deserialize)]
struct TokenResponse {
    token_type: String,
    access_token: String,
    #[serde(default)]
    expires_in: Option<Value>,
}

/// Bearer token as returned by the login endpoint.
#[derive(Clone)]
pub struct AccessToken {
    pub token_type: String,
    pub access_token: SecretString,
    pub expires_in: Option<u64>,
}

impl AccessToken {
    /// Value for the `Authorization` header.
    #[must_use]
    pub fn authorization(&self) -> String {
        format!("{} {}", self.token_type, self.access_token.expose_secret())
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("token_type", &self.token_type)
            .field("expires_in", &self.expires_in)
            .finish_non_exhaustive()
    }
}

/// `{login_url}/{tenant_id}/oauth2/token`
/// # Errors
/// Returns an endpoint error if the login URL cannot be a base or the tenant is blank.
pub fn token_endpoint(login_url: &Url, tenant_id: &str) -> Result<Url> {
    let tenant_id = tenant_id.trim();
    if tenant_id.is_empty() {
        return Err(Error::endpoint("tenant id must not be empty"));
    }

    let mut url = login_url.clone();
    url.path_segments_mut()
        .map_err(|()| Error::endpoint(format!("invalid login URL: {login_url}")))?
        .pop_if_empty()
        .extend([tenant_id, "oauth2", "token"]);

    Ok(url)
}

/// Request an access token for `resource` with the client-credentials grant.
/// # Errors
/// Returns a dispatch error if the login endpoint rejects the request, or a
/// decode error if the answer carries no token.
#[instrument(skip(client, credentials), fields(tenant_id = %credentials.tenant_id))]
pub async fn client_credentials(
    client: &Client,
    login_url: &Url,
    credentials: &Credentials,
    resource: &str,
) -> Result<AccessToken> {
    let token_url = token_endpoint(login_url, &credentials.tenant_id)?;

    debug!("token URL: {}, client ID: {}", token_url, credentials.client_id);

    let form = [
        ("grant_type", "client_credentials"),
        ("client_id", credentials.client_id.as_str()),
        ("client_secret", credentials.client_secret.expose_secret()),
        ("resource", resource),
    ];

    let response = client.post(token_url.as_str()).form(&form).send().await?;

    let status = response.status();
    let body = response.bytes().await?;

    if !status.is_success() {
        return Err(DispatchError::Status {
            url: token_url.to_string(),
            status,
            message: graph_error_message(&body),
        }
        .into());
    }

    let token: TokenResponse = serde_json::from_slice(&body)?;

    Ok(AccessToken {
        token_type: token.token_type,
        access_token: SecretString::from(token.access_token),
        // v1 endpoints send this as a string
        expires_in: token
            .expires_in
            .and_then(|v| v.as_u64().or_else(|| v.as_str()?.parse().ok())),
    })
}
