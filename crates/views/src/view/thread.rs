use std::fmt::{Display, Formatter};

use rboard_api::{client::Client, error::Error as ApiError};
use rboard_types::{
    post::{sort_newest_first, Post},
    thread::ThreadId,
};
use tracing::{debug, info, warn};

use super::{write_header, SubmitOutcome, LOADING};
use crate::{load_state::LoadState, route::Route};

/// Posts of one thread plus the form to reply.
#[derive(Debug, Clone)]
pub struct ThreadView {
    id: ThreadId,
    title: Option<String>,
    posts: LoadState<Vec<Post>>,
    draft: String,
}

impl ThreadView {
    pub fn new(id: ThreadId, title: Option<String>) -> Self {
        Self {
            id,
            title,
            posts: LoadState::Loading,
            draft: String::new(),
        }
    }

    pub fn id(&self) -> &ThreadId {
        &self.id
    }

    pub fn state(&self) -> &LoadState<Vec<Post>> {
        &self.posts
    }

    pub fn posts(&self) -> &[Post] {
        self.posts.data().map(Vec::as_slice).unwrap_or_default()
    }

    /// False only once the server said the thread does not exist.
    /// Other failures are treated as transient.
    pub fn exists(&self) -> bool {
        !self.posts.is_not_found()
    }

    pub fn can_post(&self) -> bool {
        self.exists()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Append a line to the reply being written.
    pub fn push_line(&mut self, line: &str) {
        if !self.draft.is_empty() {
            self.draft.push('\n');
        }
        self.draft.push_str(line);
    }

    pub fn clear_draft(&mut self) {
        self.draft.clear();
    }

    /// Fetch the thread's posts and replace the view state with the outcome.
    pub async fn load(&mut self, http: &Client) {
        debug!("Loading posts for thread {}", self.id);
        self.posts = match http.get_posts(&self.id).await {
            Ok(mut posts) => {
                sort_newest_first(&mut posts);
                LoadState::Loaded(posts)
            }
            Err(e) if e.is_not_found() => {
                info!("Thread {} does not exist", self.id);
                LoadState::NotFound
            }
            Err(e) => {
                warn!("Error loading posts for thread {}: {}", self.id, e);
                std::mem::take(&mut self.posts).fail(e.to_string())
            }
        };
    }

    /// Send the draft as a new post, then re-fetch the thread so the list
    /// shows what the server has rather than a local guess.
    pub async fn submit(&mut self, http: &Client) -> SubmitOutcome {
        if self.draft.trim().is_empty() || !self.can_post() {
            return SubmitOutcome::Rejected;
        }
        match http.create_post(&self.id, &self.draft).await {
            Ok(()) => {
                self.load(http).await;
                self.draft.clear();
                match self.posts.detail() {
                    Some(detail) => SubmitOutcome::Alert(format!(
                        "Posted, but the thread could not be reloaded: {}",
                        detail
                    )),
                    None => SubmitOutcome::Posted,
                }
            }
            Err(e) => {
                warn!("Error posting to thread {}: {}", self.id, e);
                SubmitOutcome::Alert(post_failure_message(&e))
            }
        }
    }
}

fn post_failure_message(e: &ApiError) -> String {
    if e.is_not_found() {
        return "Could not post: thread not found (404)".to_string();
    }
    match e.status() {
        Some(code) => format!("Could not post: server responded with {}", code),
        None => "Could not post: network error".to_string(),
    }
}

impl Display for ThreadView {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write_header(f)?;
        match &self.title {
            Some(title) => writeln!(f, "-- {} --", title)?,
            None => writeln!(f, "-- Thread {} --", self.id)?,
        }
        match &self.posts {
            LoadState::Loading => return writeln!(f, "{}", LOADING),
            LoadState::NotFound => writeln!(f, "This thread does not exist.")?,
            LoadState::Failed { detail, .. } => {
                writeln!(f, "(could not refresh posts: {})", detail)?
            }
            LoadState::Loaded(posts) if posts.is_empty() => writeln!(f, "(no posts yet)")?,
            LoadState::Loaded(_) => {}
        }
        for post in self.posts() {
            match &post.timestamp {
                Some(ts) => writeln!(f, "#{}  {}", post.id, ts)?,
                None => writeln!(f, "#{}", post.id)?,
            }
            for line in post.lines() {
                writeln!(f, "    {}", line)?;
            }
        }
        if self.can_post() {
            writeln!(f, "-- Reply --")?;
            for line in self.draft.lines() {
                writeln!(f, "> {}", line)?;
            }
        } else {
            writeln!(f, "(posting disabled)")?;
        }
        writeln!(f, "[back to top: {}]", Route::Home)
    }
}
