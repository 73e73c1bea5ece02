use std::sync::Arc;

use rboard_api::client::Client;
use tracing::{info, warn};

use super::{
    error::Error,
    route::Route,
    store::ThreadStore,
    view::{create::CreateThreadView, home::HomeView, thread::ThreadView, SubmitOutcome},
};

#[derive(Debug, Clone)]
pub enum ActiveView {
    Home(HomeView),
    Create(CreateThreadView),
    Thread(ThreadView),
}

/// The running client: shared state, the current route and its view.
/// Activating a route always (re)loads that view's data.
pub struct App {
    http: Arc<Client>,
    store: ThreadStore,
    route: Route,
    view: ActiveView,
    alerts: Vec<String>,
}

impl App {
    /// Build the thread store, fill it once from the server and show `/`.
    /// A failed initial fetch leaves the listing empty.
    pub async fn start(http: Arc<Client>) -> Result<Self, Error> {
        let store = ThreadStore::new(http.clone());
        if let Err(e) = store.load().await {
            warn!("Error loading threads: {}", e);
        }
        let mut app = Self {
            http,
            store,
            route: Route::Home,
            view: ActiveView::Home(HomeView::default()),
            alerts: vec![],
        };
        app.navigate(Route::Home).await?;
        Ok(app)
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn view(&self) -> &ActiveView {
        &self.view
    }

    pub fn store(&self) -> &ThreadStore {
        &self.store
    }

    pub async fn navigate(&mut self, route: Route) -> Result<(), Error> {
        info!("Navigating to {}", route);
        self.view = match &route {
            Route::Home => {
                let mut view = HomeView::default();
                view.activate(&self.store).await?;
                ActiveView::Home(view)
            }
            Route::Create => ActiveView::Create(CreateThreadView::default()),
            Route::Thread(id) => {
                let title = self.store.find(id).await?.map(|t| t.title);
                let mut view = ThreadView::new(id.clone(), title);
                view.load(&self.http).await;
                ActiveView::Thread(view)
            }
        };
        self.route = route;
        Ok(())
    }

    /// Reload the current page. A thread page reloads in place so the
    /// posts already shown survive a failed fetch.
    pub async fn refresh(&mut self) -> Result<(), Error> {
        if let ActiveView::Thread(view) = &mut self.view {
            if matches!(&self.route, Route::Thread(id) if id == view.id()) {
                info!("Reloading {}", self.route);
                view.load(&self.http).await;
                return Ok(());
            }
        }
        self.navigate(self.route.clone()).await
    }

    /// Feed a line of user input to the active form.
    /// Returns false when the active view has no form.
    pub fn input(&mut self, line: &str) -> bool {
        match &mut self.view {
            ActiveView::Home(_) => false,
            ActiveView::Create(view) => {
                view.set_title(line);
                true
            }
            ActiveView::Thread(view) => {
                view.push_line(line);
                true
            }
        }
    }

    pub fn clear_input(&mut self) {
        match &mut self.view {
            ActiveView::Home(_) => {}
            ActiveView::Create(view) => view.clear(),
            ActiveView::Thread(view) => view.clear_draft(),
        }
    }

    /// Submit the active form. Navigation requested by the view is followed
    /// and alerts are queued for `take_alerts`.
    pub async fn submit(&mut self) -> Result<SubmitOutcome, Error> {
        let outcome = match &mut self.view {
            ActiveView::Home(_) => SubmitOutcome::Rejected,
            ActiveView::Create(view) => view.submit(&self.store).await,
            ActiveView::Thread(view) => view.submit(&self.http).await,
        };
        match &outcome {
            SubmitOutcome::Navigate(route) => self.navigate(route.clone()).await?,
            SubmitOutcome::Alert(message) => self.alerts.push(message.clone()),
            SubmitOutcome::Rejected | SubmitOutcome::Posted => {}
        }
        Ok(outcome)
    }

    pub fn take_alerts(&mut self) -> Vec<String> {
        std::mem::take(&mut self.alerts)
    }

    pub fn render(&self) -> String {
        match &self.view {
            ActiveView::Home(view) => view.to_string(),
            ActiveView::Create(view) => view.to_string(),
            ActiveView::Thread(view) => view.to_string(),
        }
    }
}
