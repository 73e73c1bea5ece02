pub mod post;
pub mod thread;
