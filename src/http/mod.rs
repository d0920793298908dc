//! HTTP serving: the server wrapper and termination signal handling.

pub mod server;
pub mod shutdown;

pub use server::{HttpServer, ServerError};
