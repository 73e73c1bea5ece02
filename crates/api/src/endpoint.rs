use std::fmt::{Display, Formatter};

use rboard_types::thread::ThreadId;

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Endpoint {
    Threads,
    Posts(ThreadId),
}

impl Endpoint {
    pub fn path(&self) -> String {
        self.to_string()
    }

    /// Full url of the endpoint below `base`, which must not end with a slash.
    pub fn url(&self, base: &str) -> String {
        format!("{}{}", base, self)
    }
}

impl Display for Endpoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Threads => write!(f, "/threads"),
            Self::Posts(id) => write!(
                f,
                "/threads/{}/posts",
                urlencoding::encode(id.as_str())
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(Endpoint::Threads.path(), "/threads");
        assert_eq!(
            Endpoint::Posts(ThreadId::from("3")).url("http://localhost:8080"),
            "http://localhost:8080/threads/3/posts"
        );
    }

    #[test]
    fn test_opaque_ids_are_encoded() {
        assert_eq!(
            Endpoint::Posts(ThreadId::from("a b/c")).path(),
            "/threads/a%20b%2Fc/posts"
        );
    }
}
