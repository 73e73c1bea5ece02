/// Outcome of loading remote data for a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState<T> {
    Loading,
    Loaded(T),
    NotFound,
    /// The request failed for another reason. `stale` is the last data the
    /// view knew about and keeps being shown.
    Failed { detail: String, stale: T },
}

impl<T> LoadState<T> {
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Loaded(data) | Self::Failed { stale: data, .. } => Some(data),
            Self::Loading | Self::NotFound => None,
        }
    }

    pub fn into_data(self) -> Option<T> {
        match self {
            Self::Loaded(data) | Self::Failed { stale: data, .. } => Some(data),
            Self::Loading | Self::NotFound => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Failed { detail, .. } => Some(detail),
            _ => None,
        }
    }
}

impl<T: Default> LoadState<T> {
    /// Transition to `Failed`, carrying over whatever data is currently known.
    pub fn fail(self, detail: impl Into<String>) -> Self {
        Self::Failed {
            detail: detail.into(),
            stale: self.into_data().unwrap_or_default(),
        }
    }
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        Self::Loading
    }
}
