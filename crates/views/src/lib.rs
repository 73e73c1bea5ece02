pub mod app;
pub mod error;
pub mod load_state;
pub mod route;
pub mod store;
pub mod view;
