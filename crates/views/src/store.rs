use std::sync::Arc;

use rboard_api::client::Client;
use rboard_types::thread::{Thread, ThreadId};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, error, info};

use super::error::Error;

pub enum StoreRequest {
    Snapshot(oneshot::Sender<Vec<Thread>>),
    Find(ThreadId, oneshot::Sender<Option<Thread>>),
    Replace(Vec<Thread>),
    Prepend(Thread),
}

/// In-memory mirror of the server's thread list, newest first.
///
/// The collection is owned by a single task; handles talk to it over a
/// channel, so cloning a store shares the same collection. Built once at
/// startup and handed to whatever view needs it.
#[derive(Debug, Clone)]
pub struct ThreadStore {
    http: Arc<Client>,
    sender: mpsc::Sender<StoreRequest>,
}

#[derive(Debug, Default)]
struct StoreInner {
    threads: Vec<Thread>,
}

impl ThreadStore {
    const CHANNEL_CAPACITY: usize = 100;

    pub fn new(http: Arc<Client>) -> Self {
        let (tx, mut rx) = mpsc::channel::<StoreRequest>(Self::CHANNEL_CAPACITY);
        tokio::spawn(async move {
            let mut inner = StoreInner::default();
            while let Some(request) = rx.recv().await {
                inner.handle_request(request);
            }
            debug!("Thread store closed");
        });
        Self { http, sender: tx }
    }

    async fn send(&self, request: StoreRequest) -> Result<(), Error> {
        self.sender
            .send(request)
            .await
            .map_err(|_| Error::StoreClosed)
    }

    /// Replace the collection with the server's thread list.
    /// On failure the collection is left untouched and the error returned.
    pub async fn load(&self) -> Result<usize, Error> {
        let threads = self.http.get_threads().await?;
        let count = threads.len();
        info!("Loaded {} threads", count);
        self.send(StoreRequest::Replace(threads)).await?;
        Ok(count)
    }

    pub async fn threads(&self) -> Result<Vec<Thread>, Error> {
        let (tx, rx) = oneshot::channel();
        self.send(StoreRequest::Snapshot(tx)).await?;
        rx.await.map_err(|_| Error::StoreClosed)
    }

    pub async fn find(&self, id: &ThreadId) -> Result<Option<Thread>, Error> {
        let (tx, rx) = oneshot::channel();
        self.send(StoreRequest::Find(id.clone(), tx)).await?;
        rx.await.map_err(|_| Error::StoreClosed)
    }

    /// Create a thread on the server and put it at the front of the collection.
    pub async fn create_thread(&self, title: &str) -> Result<ThreadId, Error> {
        if title.trim().is_empty() {
            return Err(Error::EmptyInput);
        }
        let thread = self.http.create_thread(title).await.map_err(|e| {
            error!("Error creating thread: {}", e);
            e
        })?;
        let id = thread.id.clone();
        self.send(StoreRequest::Prepend(thread)).await?;
        Ok(id)
    }
}

impl StoreInner {
    fn handle_request(&mut self, request: StoreRequest) {
        match request {
            StoreRequest::Snapshot(tx) => {
                let _ = tx.send(self.threads.clone());
            }
            StoreRequest::Find(id, tx) => {
                let _ = tx.send(self.threads.iter().find(|t| t.id == id).cloned());
            }
            StoreRequest::Replace(threads) => {
                debug!("Replacing {} threads with {}", self.threads.len(), threads.len());
                self.threads = threads;
            }
            StoreRequest::Prepend(thread) => {
                debug!("Prepending thread {}", thread.id);
                self.threads.insert(0, thread);
            }
        }
    }
}
