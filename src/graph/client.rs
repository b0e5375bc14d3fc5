//! Typed get/list over a [`Dispatcher`].
//!
//! Every call is one resolve, one GET and one decode. The client keeps no
//! state besides the dispatcher handle, so clones are cheap and can be moved
//! into as many tasks as needed.

use crate::graph::{
    dispatcher::Dispatcher,
    entity::{Entity, Envelope, Page},
    error::{Error, Result},
    query::Query,
    user::User,
};
use reqwest::Method;
use serde::de::DeserializeOwned;
use std::{fmt, sync::Arc};
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct Client {
    dispatcher: Arc<dyn Dispatcher>,
}

impl Client {
    #[must_use]
    pub fn new(dispatcher: Arc<dyn Dispatcher>) -> Self {
        Self { dispatcher }
    }

    /// Fetch one entity by object ID or alternate key (e.g. a UPN).
    /// # Errors
    /// Returns an endpoint, dispatch or decode error.
    pub async fn get<E: Entity>(&self, id: &str) -> Result<E> {
        self.get_as(E::RESOURCE, id).await
    }

    /// Fetch the unpaged collection of `E`, narrowed by OData filter expressions.
    /// # Errors
    /// Returns an endpoint, dispatch or decode error.
    pub async fn list<E: Entity>(&self, filters: &[&str]) -> Result<Vec<E>> {
        self.list_with(&Query::filtered(filters)).await
    }

    /// # Errors
    /// Returns an endpoint, dispatch or decode error.
    pub async fn list_with<E: Entity>(&self, query: &Query) -> Result<Vec<E>> {
        Ok(self.list_page(query).await?.value)
    }

    /// Like [`Client::list_with`] but keeps the continuation link.
    /// # Errors
    /// Returns an endpoint, dispatch or decode error.
    pub async fn list_page<E: Entity>(&self, query: &Query) -> Result<Page<E>> {
        self.list_as(E::RESOURCE, query).await
    }

    /// Fetch one item of any resource into any deserializable type.
    /// # Errors
    /// Returns an endpoint error for an unknown resource or blank `id`, a
    /// dispatch error if the request fails, or a decode error.
    #[instrument(skip(self))]
    pub async fn get_as<T: DeserializeOwned>(&self, resource: &str, id: &str) -> Result<T> {
        if id.trim().is_empty() {
            return Err(Error::endpoint("identifier must not be empty"));
        }

        if matches!(id, "." | "..") {
            return Err(Error::endpoint(format!("invalid identifier {id:?}")));
        }

        let endpoint = self
            .dispatcher
            .resolve_endpoint(resource, &[id], &Query::default())?;

        let buf = self.dispatcher.dispatch(Method::GET, &endpoint, None).await?;

        debug!("decoding {} bytes from {}", buf.len(), endpoint.path());

        Ok(serde_json::from_slice(&buf)?)
    }

    /// Fetch one page of any collection.
    /// # Errors
    /// Returns an endpoint, dispatch or decode error.
    #[instrument(skip(self))]
    pub async fn list_as<T: DeserializeOwned>(
        &self,
        resource: &str,
        query: &Query,
    ) -> Result<Page<T>> {
        let endpoint = self.dispatcher.resolve_endpoint(resource, &[], query)?;

        let buf = self.dispatcher.dispatch(Method::GET, &endpoint, None).await?;

        let envelope: Envelope<T> = serde_json::from_slice(&buf)?;

        debug!(
            "decoded {} items from {}",
            envelope.value.len(),
            endpoint.path()
        );

        Ok(envelope.into())
    }

    /// # Errors
    /// See [`Client::get`].
    pub async fn user_get(&self, id: &str) -> Result<User> {
        self.get(id).await
    }

    /// # Errors
    /// See [`Client::list`].
    pub async fn user_list(&self, filters: &[&str]) -> Result<Vec<User>> {
        self.list(filters).await
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client").finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::graph::{
        error::{DispatchError, ErrorKind},
        group::Group,
        resource::Resource,
    };
    use async_trait::async_trait;
    use reqwest::StatusCode;
    use serde_json::Value;
    use std::sync::Mutex;
    use url::Url;

    enum Reply {
        Body(&'static str),
        Status(StatusCode, &'static str),
    }

    struct StubDispatcher {
        reply: Reply,
        calls: Mutex<Vec<(Method, String)>>,
    }

    impl StubDispatcher {
        fn new(reply: Reply) -> Arc<Self> {
            Arc::new(Self {
                reply,
                calls: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> Vec<(Method, String)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Dispatcher for StubDispatcher {
        fn resolve_endpoint(&self, resource: &str, ids: &[&str], query: &Query) -> Result<Url> {
            let resource: Resource = resource.parse()?;
            let mut url = Url::parse("https://graph.test/tenant/").unwrap();
            url.path_segments_mut()
                .unwrap()
                .pop_if_empty()
                .push(resource.path())
                .extend(ids);
            for (key, value) in query.pairs() {
                url.query_pairs_mut().append_pair(key, &value);
            }
            Ok(url)
        }

        async fn dispatch(
            &self,
            method: Method,
            endpoint: &Url,
            _body: Option<&[u8]>,
        ) -> Result<Vec<u8>> {
            self.calls
                .lock()
                .unwrap()
                .push((method, endpoint.to_string()));
            match &self.reply {
                Reply::Body(body) => Ok(body.as_bytes().to_vec()),
                Reply::Status(status, message) => Err(DispatchError::Status {
                    url: endpoint.to_string(),
                    status: *status,
                    message: (*message).to_string(),
                }
                .into()),
            }
        }
    }

    fn client(stub: &Arc<StubDispatcher>) -> Client {
        Client::new(stub.clone())
    }

    #[tokio::test]
    async fn get_decodes_sparse_user() {
        let stub = StubDispatcher::new(Reply::Body(
            r#"{"displayName":"Jane Doe","accountEnabled":true}"#,
        ));

        let user: User = client(&stub).get("jdoe@example.com").await.unwrap();

        assert_eq!(user.display_name.as_deref(), Some("Jane Doe"));
        assert_eq!(user.account_enabled, Some(true));
        assert_eq!(user.mail, None);
        assert!(user.other_mails.is_empty());
        assert_eq!(
            stub.calls(),
            vec![(
                Method::GET,
                "https://graph.test/tenant/users/jdoe@example.com".to_string()
            )]
        );
    }

    #[tokio::test]
    async fn get_is_idempotent() {
        let stub = StubDispatcher::new(Reply::Body(
            r#"{"objectId":"42","displayName":"Jane Doe","otherMails":["a@b.c"]}"#,
        ));
        let client = client(&stub);

        let first = client.user_get("42").await.unwrap();
        let second = client.user_get("42").await.unwrap();

        assert_eq!(first, second);
        assert_eq!(stub.calls().len(), 2);
    }

    #[tokio::test]
    async fn get_rejects_blank_identifier_without_dispatch() {
        let stub = StubDispatcher::new(Reply::Body("{}"));

        let err = client(&stub).get::<User>("  ").await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Endpoint);
        assert!(stub.calls().is_empty());
    }

    #[tokio::test]
    async fn get_rejects_dot_segment_identifier_without_dispatch() {
        let stub = StubDispatcher::new(Reply::Body(r#"{"value":[{"displayName":"A"}]}"#));

        for id in [".", ".."] {
            let err = client(&stub).get::<User>(id).await.unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Endpoint);
        }

        assert!(stub.calls().is_empty());
    }

    #[tokio::test]
    async fn get_unknown_resource_is_endpoint_error() {
        let stub = StubDispatcher::new(Reply::Body("{}"));

        let err = client(&stub)
            .get_as::<Value>("widgets", "1")
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Endpoint);
        assert!(stub.calls().is_empty());
    }

    #[tokio::test]
    async fn get_malformed_json_is_decode_error() {
        let stub = StubDispatcher::new(Reply::Body(r#"{"displayName":"Jane"#));

        let result = client(&stub).get::<User>("jdoe").await;

        assert_eq!(result.map_err(|e| e.kind()), Err(ErrorKind::Decode));
    }

    #[tokio::test]
    async fn get_schema_mismatch_is_decode_error() {
        let stub = StubDispatcher::new(Reply::Body(r#"{"accountEnabled":"maybe"}"#));

        let result = client(&stub).get::<User>("jdoe").await;

        assert_eq!(result.map_err(|e| e.kind()), Err(ErrorKind::Decode));
    }

    #[tokio::test]
    async fn status_error_short_circuits_decode() {
        // The body would not decode either; a dispatch error proves decode never ran.
        let stub = StubDispatcher::new(Reply::Status(StatusCode::NOT_FOUND, "not there"));

        let err = client(&stub).get::<User>("ghost").await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Dispatch);
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
        assert!(err.to_string().contains("not there"));

        let err = client(&stub).list::<User>(&[]).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Dispatch);
    }

    #[tokio::test]
    async fn list_keeps_server_order() {
        let stub = StubDispatcher::new(Reply::Body(
            r#"{"odata.metadata":"x","value":[{"displayName":"B"},{"displayName":"A"}]}"#,
        ));

        let users = client(&stub).user_list(&[]).await.unwrap();

        let names: Vec<_> = users
            .iter()
            .map(|u| u.display_name.as_deref().unwrap_or_default())
            .collect();
        assert_eq!(names, vec!["B", "A"]);
        assert_eq!(
            stub.calls(),
            vec![(Method::GET, "https://graph.test/tenant/users".to_string())]
        );
    }

    #[tokio::test]
    async fn list_empty_collection_is_ok() {
        let stub = StubDispatcher::new(Reply::Body(r#"{"value":[]}"#));

        let groups = client(&stub).list::<Group>(&[]).await.unwrap();

        assert!(groups.is_empty());
    }

    #[tokio::test]
    async fn list_without_envelope_is_decode_error() {
        for body in [r#"[{"displayName":"A"}]"#, r#"{"items":[]}"#, "not json"] {
            let stub = StubDispatcher::new(Reply::Body(body));
            let result = client(&stub).list::<User>(&[]).await;
            assert_eq!(result.map_err(|e| e.kind()), Err(ErrorKind::Decode), "{body}");
        }
    }

    #[tokio::test]
    async fn list_encodes_filters() {
        let stub = StubDispatcher::new(Reply::Body(r#"{"value":[]}"#));

        client(&stub)
            .list::<User>(&["accountEnabled eq true", "city eq 'Oslo'"])
            .await
            .unwrap();

        let calls = stub.calls();
        let url = Url::parse(&calls[0].1).unwrap();
        let filter = url
            .query_pairs()
            .find(|(k, _)| k == "$filter")
            .map(|(_, v)| v.into_owned());
        assert_eq!(
            filter.as_deref(),
            Some("(accountEnabled eq true) and (city eq 'Oslo')")
        );
    }

    #[tokio::test]
    async fn list_page_returns_continuation() {
        let stub = StubDispatcher::new(Reply::Body(
            r#"{"value":[{"objectId":"1"}],"odata.nextLink":"directoryObjects/$/Microsoft.DirectoryServices.User?$skiptoken=X'44'"}"#,
        ));

        let page = client(&stub)
            .list_page::<User>(&Query::new().top(1))
            .await
            .unwrap();

        assert_eq!(page.value.len(), 1);
        assert_eq!(page.next_skiptoken().as_deref(), Some("X'44'"));
        assert!(stub.calls()[0].1.ends_with("users?%24top=1"));
    }

    #[tokio::test]
    async fn list_as_value_for_untyped_resources() {
        let stub = StubDispatcher::new(Reply::Body(
            r#"{"value":[{"name":"contoso.com","isDefault":true}]}"#,
        ));

        let page: Page<Value> = client(&stub)
            .list_as("domains", &Query::default())
            .await
            .unwrap();

        assert_eq!(page.value[0]["name"], "contoso.com");
        assert_eq!(page.next_link, None);
    }

    #[tokio::test]
    async fn client_is_shareable_across_tasks() {
        let stub = StubDispatcher::new(Reply::Body(r#"{"displayName":"Jane Doe"}"#));
        let client = client(&stub);

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let client = client.clone();
                tokio::spawn(async move { client.get::<User>(&i.to_string()).await })
            })
            .collect();

        for handle in handles {
            let user = handle.await.unwrap().unwrap();
            assert_eq!(user.display_name.as_deref(), Some("Jane Doe"));
        }
        assert_eq!(stub.calls().len(), 4);
    }
}
