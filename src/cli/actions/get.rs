use crate::graph::Client;
use anyhow::{Context, Result};
use serde_json::Value;
use tracing::info;

#[derive(Debug)]
pub struct Args {
    pub resource: String,
    pub name: String,
}

/// Fetch one object as raw JSON.
/// # Errors
/// Returns an error if the lookup fails.
pub async fn execute(client: &Client, args: Args) -> Result<Value> {
    let object: Value = client
        .get_as(&args.resource, &args.name)
        .await
        .with_context(|| format!("get {} {}", args.resource, args.name))?;

    info!("fetched {}/{}", args.resource, args.name);

    Ok(object)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{AccessToken, Credentials, ErrorKind, GraphDispatcher};
    use secrecy::SecretString;
    use serde_json::json;
    use std::{net::TcpListener, sync::Arc};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn can_bind_localhost() -> bool {
        TcpListener::bind("127.0.0.1:0").is_ok()
    }

    fn client(graph_url: &str) -> Result<Client> {
        let credentials = Credentials {
            tenant_id: "contoso".to_string(),
            client_id: "client-id".to_string(),
            client_secret: SecretString::from("s3cr3t".to_string()),
        };
        let dispatcher = GraphDispatcher::builder(credentials)
            .graph_url(graph_url)
            .with_token(AccessToken {
                token_type: "Bearer".to_string(),
                access_token: SecretString::from("token".to_string()),
                expires_in: None,
            })?;
        Ok(Client::new(Arc::new(dispatcher)))
    }

    #[tokio::test]
    async fn get_returns_raw_object() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/contoso/domains/contoso.com"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": "contoso.com",
                "isVerified": true
            })))
            .mount(&server)
            .await;

        let object = execute(
            &client(&server.uri())?,
            Args {
                resource: "domains".to_string(),
                name: "contoso.com".to_string(),
            },
        )
        .await?;

        assert_eq!(object["isVerified"], true);
        Ok(())
    }

    #[tokio::test]
    async fn get_keeps_error_kind_in_chain() -> Result<()> {
        let err = execute(
            &client("https://graph.windows.net")?,
            Args {
                resource: "users".to_string(),
                name: String::new(),
            },
        )
        .await
        .err()
        .ok_or_else(|| anyhow::anyhow!("expected error"))?;

        let kind = err
            .downcast_ref::<crate::graph::Error>()
            .map(crate::graph::Error::kind);
        assert_eq!(kind, Some(ErrorKind::Endpoint));
        assert!(format!("{err:#}").contains("identifier must not be empty"));
        Ok(())
    }
}
