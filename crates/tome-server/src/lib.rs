//! HTTP server for Tome documentation content.
//!
//! This crate provides a native Rust HTTP server using axum, serving:
//! - LLM export endpoints (`/llms.txt`, `/llms-full.txt`, `/llms.mdx/{*path}`)
//! - JSON API endpoints for a documentation frontend
//! - A revalidation endpoint the CMS pings after content changes
//!
//! # Quick Start
//!
//! ```ignore
//! use std::path::PathBuf;
//! use tome_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         host: "127.0.0.1".to_string(),
//!         port: 7878,
//!         source_dir: PathBuf::from("content"),
//!         base_path: "/docs".to_string(),
//!         title: "Documentation".to_string(),
//!         version: "1.0.0".to_string(),
//!     };
//!
//!     run_server(config).await.unwrap();
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! Client ──HTTP──► Rust axum server (tome-server)
//!                       │
//!                       ├─► Export routes ──► Site snapshot (tome-site)
//!                       │
//!                       ├─► API routes ─────► Site snapshot (tome-site)
//!                       │
//!                       └─► POST /api/revalidate ──► Site::invalidate
//! ```

mod app;
mod error;
mod handlers;
mod middleware;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use tome_content::JsonStore;
use tome_site::{Site, SiteConfig};

use state::AppState;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Content snapshot directory.
    pub source_dir: PathBuf,
    /// URL prefix for page links.
    pub base_path: String,
    /// Site title, used as the link index header.
    pub title: String,
    /// Application version (for `ETag` computation).
    pub version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7878,
            source_dir: PathBuf::from("content"),
            base_path: "/docs".to_owned(),
            title: "Documentation".to_owned(),
            version: String::new(),
        }
    }
}

/// Run the server.
///
/// # Arguments
///
/// * `config` - Server configuration
///
/// # Errors
///
/// Returns an error if the server fails to start.
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    // Create shared content store
    let store: Arc<dyn tome_content::ContentStore> =
        Arc::new(JsonStore::new(config.source_dir.clone()));

    // Create site over the store
    let site_config = SiteConfig {
        base_path: config.base_path.clone(),
        title: config.title.clone(),
    };
    let site = Arc::new(Site::new(store, site_config));

    // Create app state
    let state = Arc::new(AppState {
        site,
        version: config.version.clone(),
    });

    // Create router
    let app = app::create_router(state);

    // Bind and run server
    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(address = %addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from Tome config.
///
/// # Arguments
///
/// * `config` - Tome configuration
/// * `version` - Application version
#[must_use]
pub fn server_config_from_config(config: &tome_config::Config, version: String) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        source_dir: config.content_resolved.source_dir.clone(),
        base_path: config.site.base_path.clone(),
        title: config.site.title.clone(),
        version,
    }
}
