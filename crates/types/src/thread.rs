use std::fmt::{Display, Formatter};

use serde::{Deserialize, Deserializer, Serialize};

/// Opaque thread identifier.
/// The API emits ids either as strings or as integers, both are accepted and kept as text.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ThreadId(String);

impl ThreadId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ThreadId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ThreadId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ThreadId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl<'de> Deserialize<'de> for ThreadId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Signed(i64),
            Unsigned(u64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(id) => Self(id),
            RawId::Signed(id) => Self(id.to_string()),
            RawId::Unsigned(id) => Self(id.to_string()),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thread {
    pub id: ThreadId,
    pub title: String,
}

/// Body of `POST /threads`.
#[derive(Clone, Debug, Serialize)]
pub struct NewThread {
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tracing_test::traced_test]
    #[test]
    fn test_thread_id_from_number_or_string() {
        let threads: Vec<Thread> = serde_json::from_str(
            r#"[{"id": 7, "title": "numeric"}, {"id": "a1b2", "title": "opaque"}]"#,
        )
        .unwrap();
        assert_eq!(threads[0].id, ThreadId::from("7"));
        assert_eq!(threads[1].id.as_str(), "a1b2");
        assert_eq!(threads[1].id.to_string(), "a1b2");
    }

    #[test]
    fn test_thread_id_serializes_as_string() {
        let thread = Thread {
            id: ThreadId::from("42"),
            title: "Rust".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&thread).unwrap(),
            serde_json::json!({"id": "42", "title": "Rust"})
        );
    }

    #[test]
    fn test_thread_id_rejects_other_shapes() {
        assert!(serde_json::from_str::<ThreadId>("true").is_err());
        assert!(serde_json::from_str::<ThreadId>("{}").is_err());
    }
}
