use rboard_types::{
    post::{NewPost, Post},
    thread::{NewThread, Thread, ThreadId},
};
use reqwest::Method;
use serde::Serialize;
use tracing::{debug, error};

use super::{endpoint::Endpoint, error::Error, response::ClientResponse};

/// Configuration for the client.
/// base_url: Root of the bulletin-board API, without trailing slash. (default: DEFAULT_BASE_URL)
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub base_url: Option<String>,
}

impl Config {
    pub const DEFAULT_BASE_URL: &'static str = "https://railway.bulletinboard.techtrain.dev";

    pub fn new(base_url: Option<String>) -> Self {
        Config { base_url }
    }

    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or(Self::DEFAULT_BASE_URL)
            .trim_end_matches('/')
    }
}

/// A client for the bulletin-board REST API.
/// Every call is a single request: no retries, no caching and no timeout,
/// so a request the server never answers never resolves.
#[derive(Debug, Clone)]
pub struct Client {
    cfg: Config,
    http: reqwest::Client,
}

impl Client {
    pub fn new(cfg: Option<Config>) -> Self {
        Self {
            cfg: cfg.unwrap_or_default(),
            http: reqwest::Client::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    fn new_request(&self, method: Method, endpoint: &Endpoint) -> Result<reqwest::RequestBuilder, Error> {
        let url = endpoint.url(self.cfg.base_url());
        let url: reqwest::Url = url.parse().map_err(|_| Error::Url(url))?;
        Ok(self.http.request(method, url))
    }

    pub async fn get(&self, endpoint: &Endpoint) -> Result<ClientResponse, Error> {
        debug!("GET {}", endpoint);
        let resp = self.new_request(Method::GET, endpoint)?.send().await?;
        self.handle_response(&Method::GET, endpoint, resp).await
    }

    pub async fn post<B: Serialize + ?Sized>(
        &self,
        endpoint: &Endpoint,
        body: &B,
    ) -> Result<ClientResponse, Error> {
        debug!("POST {}", endpoint);
        let resp = self
            .new_request(Method::POST, endpoint)?
            .json(body)
            .send()
            .await?;
        self.handle_response(&Method::POST, endpoint, resp).await
    }

    pub async fn handle_response(
        &self,
        method: &Method,
        endpoint: &Endpoint,
        resp: reqwest::Response,
    ) -> Result<ClientResponse, Error> {
        match resp.status() {
            status if status.is_success() => {
                debug!("request: {} {} status: {}", method, endpoint, status);
                ClientResponse::parse(method, endpoint, resp).await
            }
            reqwest::StatusCode::NOT_FOUND => {
                debug!("request: {} {} status: NOT_FOUND", method, endpoint);
                Err(Error::NotFound)
            }
            status => {
                error!("request: {} {} status: {}", method, endpoint, status);
                Err(Error::StatusCode(status.as_u16()))
            }
        }
    }

    pub async fn get_threads(&self) -> Result<Vec<Thread>, Error> {
        match self.get(&Endpoint::Threads).await? {
            ClientResponse::Threads(threads) => Ok(threads),
            _ => Err(Error::InvalidResponse),
        }
    }

    pub async fn create_thread(&self, title: &str) -> Result<Thread, Error> {
        let body = NewThread {
            title: title.to_string(),
        };
        match self.post(&Endpoint::Threads, &body).await? {
            ClientResponse::Created(thread) => Ok(thread),
            _ => Err(Error::InvalidResponse),
        }
    }

    pub async fn get_posts(&self, thread: &ThreadId) -> Result<Vec<Post>, Error> {
        match self.get(&Endpoint::Posts(thread.clone())).await? {
            ClientResponse::Posts(posts) => Ok(posts),
            _ => Err(Error::InvalidResponse),
        }
    }

    /// Submit a post. The created post in the response body is not consumed,
    /// callers re-fetch the thread instead.
    pub async fn create_post(&self, thread: &ThreadId, content: &str) -> Result<(), Error> {
        let body = NewPost {
            content: content.to_string(),
        };
        self.post(&Endpoint::Posts(thread.clone()), &body)
            .await
            .map(|_| ())
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new(None)
    }
}
