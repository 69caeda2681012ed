//! Per-connection view synchronization: turns world events into client
//! packets and client requests into actor calls.

pub mod chunk_view;
pub mod config;
pub mod entity;
pub mod error;
pub mod event;
pub mod loader;
pub mod registry;
pub mod session;
pub mod viewer;
pub mod writer;

mod handlers;

#[cfg(test)]
mod test_support;

pub use config::SessionConfig;
pub use error::{ConfigError, SessionError};
pub use registry::{EntityRegistry, SELF_RUNTIME_ID};
pub use session::Session;
pub use viewer::Viewer;
