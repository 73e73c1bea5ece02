use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Post identifier, numeric or textual depending on the source.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PostId {
    Number(i64),
    Text(String),
}

impl PostId {
    fn key(&self) -> IdKey<'_> {
        match self {
            Self::Number(n) => IdKey::Number(*n),
            Self::Text(s) => s
                .trim()
                .parse()
                .map(IdKey::Number)
                .unwrap_or(IdKey::Text(s.as_str())),
        }
    }
}

impl Display for PostId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for PostId {
    fn from(id: i64) -> Self {
        Self::Number(id)
    }
}

impl From<&str> for PostId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_string())
    }
}

// Variant order matters: numeric ids sort below textual ones.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum IdKey<'a> {
    Number(i64),
    Text(&'a str),
}

// Unparseable timestamps sort above parsed ones and compare by raw text.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Stamp<'a> {
    Parsed(NaiveDateTime),
    Raw(&'a str),
}

impl<'a> Stamp<'a> {
    const FORMATS: [&'static str; 4] = [
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M:%S",
        "%Y/%m/%d %H:%M",
    ];

    fn parse(raw: &'a str) -> Self {
        let trimmed = raw.trim();
        if let Ok(time) = DateTime::parse_from_rfc3339(trimmed) {
            return Self::Parsed(time.naive_utc());
        }
        Self::FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
            .map(Self::Parsed)
            .unwrap_or(Self::Raw(raw))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl Post {
    /// Content split on `\n`, one entry per rendered line.
    /// Blank lines, trailing ones included, are kept.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.content.split('\n')
    }

    fn sort_key(&self) -> (Option<Stamp<'_>>, IdKey<'_>) {
        (
            self.timestamp
                .as_deref()
                .filter(|t| !t.trim().is_empty())
                .map(Stamp::parse),
            self.id.key(),
        )
    }

    /// Ordering for display: newest first.
    /// Timestamped posts come before untimestamped ones, ties and missing
    /// timestamps fall back to descending id.
    pub fn newest_first(a: &Post, b: &Post) -> Ordering {
        b.sort_key().cmp(&a.sort_key())
    }
}

/// Body of `POST /threads/{id}/posts`.
#[derive(Clone, Debug, Serialize)]
pub struct NewPost {
    pub content: String,
}

pub fn sort_newest_first(posts: &mut [Post]) {
    posts.sort_by(Post::newest_first);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: PostId, timestamp: Option<&str>) -> Post {
        Post {
            id,
            content: String::new(),
            timestamp: timestamp.map(str::to_string),
        }
    }

    fn ids(posts: &[Post]) -> Vec<String> {
        posts.iter().map(|p| p.id.to_string()).collect()
    }

    #[tracing_test::traced_test]
    #[test]
    fn test_sort_by_timestamp() {
        let mut posts = vec![
            post(PostId::Number(1), Some("2024-01-15 10:00")),
            post(PostId::Number(2), Some("2024-01-15 12:00")),
        ];
        sort_newest_first(&mut posts);
        assert_eq!(ids(&posts), vec!["2", "1"]);
    }

    #[tracing_test::traced_test]
    #[test]
    fn test_sort_without_timestamp_by_id() {
        let mut posts = vec![
            post(PostId::Number(1), None),
            post(PostId::Number(3), None),
            post(PostId::Number(2), None),
        ];
        sort_newest_first(&mut posts);
        assert_eq!(ids(&posts), vec!["3", "2", "1"]);
    }

    #[test]
    fn test_sort_timestamp_beats_id() {
        let mut posts = vec![
            post(PostId::Number(9), Some("2024-01-15 09:00")),
            post(PostId::Number(1), Some("2024-01-16T08:00:00Z")),
            post(PostId::Number(5), Some("2024/01/15 10:30")),
        ];
        sort_newest_first(&mut posts);
        assert_eq!(ids(&posts), vec!["1", "5", "9"]);
    }

    #[test]
    fn test_sort_equal_timestamps_fall_back_to_id() {
        let mut posts = vec![
            post(PostId::Number(1), Some("2024-01-15 10:00")),
            post(PostId::Number(4), Some("2024-01-15 10:00")),
        ];
        sort_newest_first(&mut posts);
        assert_eq!(ids(&posts), vec!["4", "1"]);
    }

    #[test]
    fn test_sort_mixed_presence_puts_timestamped_first() {
        let mut posts = vec![
            post(PostId::Number(10), None),
            post(PostId::Number(1), Some("2024-01-15 10:00")),
            post(PostId::Number(3), Some("")),
            post(PostId::Number(2), Some("2024-01-15 11:00")),
        ];
        sort_newest_first(&mut posts);
        assert_eq!(ids(&posts), vec!["2", "1", "10", "3"]);
    }

    #[test]
    fn test_sort_textual_ids() {
        let mut posts = vec![
            post(PostId::from("2"), None),
            post(PostId::from("b"), None),
            post(PostId::Number(10), None),
            post(PostId::from("a"), None),
        ];
        sort_newest_first(&mut posts);
        assert_eq!(ids(&posts), vec!["b", "a", "10", "2"]);
    }

    #[test]
    fn test_deserialize_post_shapes() {
        let posts: Vec<Post> = serde_json::from_str(
            r#"[
                {"id": 1, "content": "first\nsecond", "timestamp": "2024-01-15 10:00"},
                {"id": "x9", "content": "no stamp"},
                {"id": 3}
            ]"#,
        )
        .unwrap();
        assert_eq!(posts[0].id, PostId::Number(1));
        assert_eq!(posts[0].lines().collect::<Vec<_>>(), vec!["first", "second"]);
        assert_eq!(posts[1].id, PostId::from("x9"));
        assert_eq!(posts[1].timestamp, None);
        assert_eq!(posts[2].content, "");
    }

    #[test]
    fn test_lines_keep_blank_lines() {
        let post = Post {
            id: PostId::Number(1),
            content: "first\n\nlast\n".to_string(),
            timestamp: None,
        };
        assert_eq!(post.lines().collect::<Vec<_>>(), vec!["first", "", "last", ""]);
    }
}
