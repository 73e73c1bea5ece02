pub mod create;
pub mod home;
pub mod thread;

use super::route::Route;

pub const LOADING: &str = "Loading...";

/// What happened when a view's form was submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank input or a disabled form. Nothing was sent.
    Rejected,
    /// The post was accepted and the thread re-fetched.
    Posted,
    Navigate(Route),
    /// Something the user has to be told about.
    Alert(String),
}

/// Header shared by every page.
fn write_header(f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    writeln!(f, "== Bulletin board ==  [new thread: {}]", Route::Create)
}
