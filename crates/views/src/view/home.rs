use std::fmt::{Display, Formatter};

use rboard_types::thread::Thread;

use super::{write_header, LOADING};
use crate::{error::Error, route::Route, store::ThreadStore};

/// Thread listing. A failed initial fetch simply shows an empty list.
#[derive(Debug, Clone, Default)]
pub struct HomeView {
    threads: Option<Vec<Thread>>,
}

impl HomeView {
    pub async fn activate(&mut self, store: &ThreadStore) -> Result<(), Error> {
        self.threads = Some(store.threads().await?);
        Ok(())
    }

    pub fn threads(&self) -> &[Thread] {
        self.threads.as_deref().unwrap_or_default()
    }
}

impl Display for HomeView {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write_header(f)?;
        writeln!(f, "-- Latest threads --")?;
        match &self.threads {
            None => writeln!(f, "{}", LOADING),
            Some(threads) if threads.is_empty() => writeln!(f, "(no threads yet)"),
            Some(threads) => {
                for thread in threads {
                    writeln!(f, "  {}  -> {}", thread.title, Route::Thread(thread.id.clone()))?;
                }
                Ok(())
            }
        }
    }
}
