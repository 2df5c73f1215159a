//! HTTP Server
//!
//! Wires a contact repository into the `/contacts` route and runs it on a listener.

use crate::contacts::handlers::{
    handle_create_contact, handle_delete_contact, handle_get_contacts, handle_method_not_allowed,
    handle_update_contact,
};
use crate::contacts::store::ContactRepository;

use anyhow::{Context, Result};
use axum::extract::Extension;
use axum::routing::get;
use axum::Router;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

/// The only route the directory serves.
pub const CONTACTS_PATH: &str = "/contacts";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
        }
    }
}

impl ServerConfig {
    /// Builds the config from command line arguments (program name excluded).
    ///
    /// `--bind <addr:port>` overrides the listen address; anything else is ignored.
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            if arg == "--bind" {
                let value = args.next().context("--bind requires <addr:port>")?;
                config.bind_addr = value
                    .parse()
                    .with_context(|| format!("invalid --bind address: {}", value))?;
            }
        }

        Ok(config)
    }
}

pub fn build_router<R>(store: Arc<R>) -> Router
where
    R: ContactRepository,
{
    Router::new()
        .route(
            CONTACTS_PATH,
            get(handle_get_contacts::<R>)
                .post(handle_create_contact::<R>)
                .put(handle_update_contact::<R>)
                .delete(handle_delete_contact::<R>)
                .head(handle_method_not_allowed)
                .fallback(handle_method_not_allowed),
        )
        .layer(Extension(store))
}

/// Serves the directory on `listener` until `shutdown` resolves.
pub async fn serve<R, F>(listener: TcpListener, store: Arc<R>, shutdown: F) -> Result<()>
where
    R: ContactRepository,
    F: Future<Output = ()> + Send + 'static,
{
    let app = build_router(store);

    tracing::info!("HTTP server listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("HTTP server stopped");
    Ok(())
}
