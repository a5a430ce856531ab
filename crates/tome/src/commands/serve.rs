//! `tome serve` command implementation.

use std::path::PathBuf;

use clap::Args;
use tome_config::{CliSettings, Config};
use tome_server::{run_server, server_config_from_config};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    /// Path to configuration file (default: auto-discover tome.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Content snapshot directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Host to bind to (overrides config).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long)]
    port: Option<u16>,

    /// URL prefix for page links (overrides config).
    #[arg(long)]
    base_path: Option<String>,

    /// Enable verbose output (show request and reload logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the server fails to start.
    pub(crate) async fn execute(self, version: &str) -> Result<(), CliError> {
        let output = Output::new();

        // Build CLI settings from args
        let cli_settings = CliSettings {
            host: self.host,
            port: self.port,
            source_dir: self.source_dir,
            base_path: self.base_path,
            out_dir: None,
        };

        // Load config
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let server_config = server_config_from_config(&config, version.to_owned());

        output.highlight(&format!("Tome v{version}"));
        output.info(&format!(
            "Content: {}",
            server_config.source_dir.display()
        ));
        output.info(&format!(
            "Listening on http://{}:{}",
            server_config.host, server_config.port
        ));

        run_server(server_config)
            .await
            .map_err(|e| CliError::Server(e.to_string()))
    }
}
