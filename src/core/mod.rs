//! Core types shared across the codebase.

mod driver;
mod reply;
mod state;

pub use driver::BuildMode;
pub use reply::Reply;
pub use state::{is_shutdown, register_server, setup_shutdown_handler};
