use rboard_types::{post::Post, thread::Thread};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use super::{endpoint::Endpoint, error::Error};

#[derive(Debug, Clone)]
pub enum ClientResponse {
    Threads(Vec<Thread>),
    Posts(Vec<Post>),
    Created(Thread),
    Accepted,
}

impl ClientResponse {
    pub async fn parse(
        method: &Method,
        endpoint: &Endpoint,
        resp: reqwest::Response,
    ) -> Result<Self, Error> {
        match (method, endpoint) {
            (&Method::GET, Endpoint::Threads) => {
                Ok(ClientResponse::Threads(collection(endpoint, &resp.bytes().await?)?))
            }
            (&Method::GET, Endpoint::Posts(_)) => {
                Ok(ClientResponse::Posts(collection(endpoint, &resp.bytes().await?)?))
            }
            (&Method::POST, Endpoint::Threads) => Ok(ClientResponse::Created(
                serde_json::from_slice(&resp.bytes().await?)?,
            )),
            _ => Ok(ClientResponse::Accepted),
        }
    }
}

/// Decode a collection body.
/// A body that is valid JSON but not an array yields an empty collection,
/// array items of the wrong shape are dropped.
pub fn collection<T: DeserializeOwned>(endpoint: &Endpoint, body: &[u8]) -> Result<Vec<T>, Error> {
    match serde_json::from_slice::<Value>(body)? {
        Value::Array(items) => Ok(items
            .into_iter()
            .filter_map(|item| {
                serde_json::from_value(item)
                    .map_err(|e| warn!("{}: skipping malformed item: {}", endpoint, e))
                    .ok()
            })
            .collect()),
        other => {
            warn!(
                "{}: expected an array, got {}, treating as empty",
                endpoint,
                kind(&other)
            );
            Ok(vec![])
        }
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tracing_test::traced_test]
    #[test]
    fn test_non_array_is_empty() {
        let posts: Vec<Post> =
            collection(&Endpoint::Threads, br#"{"posts": [{"id": 1}]}"#).unwrap();
        assert!(posts.is_empty());
        assert!(logs_contain("expected an array"));
    }

    #[tracing_test::traced_test]
    #[test]
    fn test_malformed_items_are_skipped() {
        let threads: Vec<Thread> = collection(
            &Endpoint::Threads,
            br#"[{"id": 1, "title": "ok"}, {"title": "no id"}, 5]"#,
        )
        .unwrap();
        assert_eq!(threads.len(), 1);
        assert_eq!(threads[0].title, "ok");
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let result: Result<Vec<Thread>, Error> = collection(&Endpoint::Threads, b"<html>");
        assert!(matches!(result, Err(Error::Decode(_))));
    }
}
