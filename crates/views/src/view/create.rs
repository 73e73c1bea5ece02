use std::fmt::{Display, Formatter};

use tracing::error;

use super::{write_header, SubmitOutcome};
use crate::{route::Route, store::ThreadStore};

/// Single-field form creating a thread.
#[derive(Debug, Clone, Default)]
pub struct CreateThreadView {
    title: String,
}

impl CreateThreadView {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    pub fn clear(&mut self) {
        self.title.clear();
    }

    pub async fn submit(&mut self, store: &ThreadStore) -> SubmitOutcome {
        let title = self.title.trim();
        if title.is_empty() {
            return SubmitOutcome::Rejected;
        }
        match store.create_thread(title).await {
            Ok(id) => {
                self.title.clear();
                SubmitOutcome::Navigate(Route::Thread(id))
            }
            Err(e) => {
                error!("Error creating thread {:?}: {}", title, e);
                SubmitOutcome::Alert("Could not create the thread".to_string())
            }
        }
    }
}

impl Display for CreateThreadView {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write_header(f)?;
        writeln!(f, "-- New thread --")?;
        writeln!(f, "Title: {}", self.title)?;
        writeln!(f, "[back to top: {}]", Route::Home)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use rboard_api::client::{Client, Config};
    use rboard_types::thread::ThreadId;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn store_for(server: &MockServer) -> ThreadStore {
        ThreadStore::new(Arc::new(Client::new(Some(Config::new(Some(server.uri()))))))
    }

    #[tracing_test::traced_test]
    #[tokio::test]
    async fn test_submit_trims_and_navigates() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/threads"))
            .and(body_json(json!({"title": "Rust"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 8, "title": "Rust"})))
            .expect(1)
            .mount(&server)
            .await;
        let store = store_for(&server);
        let mut view = CreateThreadView::default();
        view.set_title("  Rust ");

        let outcome = view.submit(&store).await;
        assert_eq!(outcome, SubmitOutcome::Navigate(Route::Thread(ThreadId::from("8"))));
        assert_eq!(view.title(), "");
        assert_eq!(store.threads().await.unwrap().len(), 1);
    }

    #[tracing_test::traced_test]
    #[tokio::test]
    async fn test_blank_title_is_rejected_without_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;
        let store = store_for(&server);
        let mut view = CreateThreadView::default();
        view.set_title("   ");

        assert_eq!(view.submit(&store).await, SubmitOutcome::Rejected);
        assert_eq!(view.title(), "   ");
        assert!(store.threads().await.unwrap().is_empty());
    }

    #[tracing_test::traced_test]
    #[tokio::test]
    async fn test_failure_alerts_and_keeps_title() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/threads"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;
        let store = store_for(&server);
        let mut view = CreateThreadView::default();
        view.set_title("Rust");

        assert!(matches!(view.submit(&store).await, SubmitOutcome::Alert(_)));
        assert_eq!(view.title(), "Rust");
        assert!(store.threads().await.unwrap().is_empty());
    }
}
