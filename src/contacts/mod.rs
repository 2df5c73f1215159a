//! Contact Directory Module
//!
//! CRUD over an in-memory set of contacts, exposed on a single HTTP route.
//!
//! ## Submodules
//! - **`types`**: The `Contact` record and the `id` query parameter.
//! - **`store`**: The `ContactRepository` seam and its in-memory implementation.
//! - **`error`**: Failure taxonomy and its mapping onto HTTP status codes.
//! - **`handlers`**: Axum handlers, one per HTTP method on `/contacts`.

pub mod error;
pub mod handlers;
pub mod store;
pub mod types;
