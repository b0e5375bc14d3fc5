use crate::graph::{
    transport::{DEFAULT_API_VERSION, DEFAULT_GRAPH_URL, DEFAULT_LOGIN_URL},
    Credentials, GraphDispatcher, GraphDispatcherBuilder,
};
use secrecy::SecretString;

/// Connection settings shared by every action.
#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub tenant_id: String,
    pub client_id: String,
    pub client_secret: SecretString,
    pub graph_url: String,
    pub login_url: String,
    pub api_version: String,
}

impl GlobalArgs {
    #[must_use]
    pub fn new(tenant_id: String, client_id: String) -> Self {
        Self {
            tenant_id,
            client_id,
            client_secret: SecretString::default(),
            graph_url: DEFAULT_GRAPH_URL.to_string(),
            login_url: DEFAULT_LOGIN_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
        }
    }

    pub fn set_secret(&mut self, secret: SecretString) {
        self.client_secret = secret;
    }

    #[must_use]
    pub fn credentials(&self) -> Credentials {
        Credentials {
            tenant_id: self.tenant_id.clone(),
            client_id: self.client_id.clone(),
            client_secret: self.client_secret.clone(),
        }
    }

    #[must_use]
    pub fn dispatcher(&self) -> GraphDispatcherBuilder {
        GraphDispatcher::builder(self.credentials())
            .graph_url(&self.graph_url)
            .login_url(&self.login_url)
            .api_version(&self.api_version)
    }
}
