use std::fmt::{Display, Formatter};
use std::str::FromStr;

use rboard_types::thread::ThreadId;

use super::error::Error;

/// Client-side routes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    /// `/`
    Home,
    /// `/create`
    Create,
    /// `/threads/:thread_id`
    Thread(ThreadId),
}

impl Display for Route {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Home => write!(f, "/"),
            Self::Create => write!(f, "/create"),
            Self::Thread(id) => write!(f, "/threads/{}", urlencoding::encode(id.as_str())),
        }
    }
}

impl FromStr for Route {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || Error::UnknownRoute(s.to_string());
        let path = s.trim();
        if !path.starts_with('/') {
            return Err(unknown());
        }
        match path.trim_end_matches('/') {
            "" => Ok(Self::Home),
            "/create" => Ok(Self::Create),
            other => {
                let raw = other
                    .strip_prefix("/threads/")
                    .filter(|id| !id.is_empty() && !id.contains('/'))
                    .ok_or_else(unknown)?;
                let id = urlencoding::decode(raw).map_err(|_| unknown())?;
                Ok(Self::Thread(ThreadId::new(id.into_owned())))
            }
        }
    }
}
