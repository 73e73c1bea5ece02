#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Rboard API error: {0}")]
    RboardApi(#[from] rboard_api::error::Error),

    #[error("Thread store is closed")]
    StoreClosed,

    #[error("Empty input")]
    EmptyInput,

    #[error("Unknown route: {0}")]
    UnknownRoute(String),
}
