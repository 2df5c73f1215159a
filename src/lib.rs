//! In-Memory Contact Directory
//!
//! This library crate holds everything the service binary (`main.rs`) runs.
//!
//! ## Modules
//! - **`contacts`**: The contact record, its repository, and the HTTP handlers that
//!   dispatch `/contacts` requests by method.
//! - **`server`**: Listener configuration, router assembly, and the serve loop.

pub mod contacts;
pub mod server;
