//! Shared decoding pieces for directory records.

use serde::{de::DeserializeOwned, Deserialize, Deserializer};
use url::form_urlencoded;

/// A record type served by one directory collection.
pub trait Entity: DeserializeOwned + Send {
    /// Collection name passed to endpoint resolution.
    const RESOURCE: &'static str;
}

/// Treat an explicit JSON `null` like a missing key.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Collection response body. `value` is mandatory.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub value: Vec<T>,
    #[serde(rename = "odata.nextLink", default)]
    pub next_link: Option<String>,
}

/// One page of a collection, in server order.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub value: Vec<T>,
    pub next_link: Option<String>,
}

impl<T> Page<T> {
    /// The decoded `$skiptoken` to request the following page with.
    #[must_use]
    pub fn next_skiptoken(&self) -> Option<String> {
        let link = self.next_link.as_deref()?;
        let (_, query) = link.split_once('?')?;
        form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == "$skiptoken")
            .map(|(_, token)| token.into_owned())
            .filter(|token| !token.is_empty())
    }
}

impl<T> From<Envelope<T>> for Page<T> {
    fn from(envelope: Envelope<T>) -> Self {
        Self {
            value: envelope.value,
            next_link: envelope.next_link,
        }
    }
}
