//! `tome export` command implementation.
//!
//! Writes the full export set to the output directory ahead of time:
//! `llms.txt`, `llms-full.txt`, and one `llms.mdx/{category}/{path}.txt`
//! file per page, mirroring the server routes.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Args;
use tome_config::{CliSettings, Config};
use tome_content::{ContentStore, JsonStore};
use tome_site::{Site, SiteConfig};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the export command.
#[derive(Args)]
pub(crate) struct ExportArgs {
    /// Path to configuration file (default: auto-discover tome.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Content snapshot directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Output directory (overrides config).
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// URL prefix for page links (overrides config).
    #[arg(long)]
    base_path: Option<String>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl ExportArgs {
    /// Execute the export command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or files can't be written.
    pub(crate) fn execute(self, version: &str) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            host: None,
            port: None,
            source_dir: self.source_dir,
            base_path: self.base_path,
            out_dir: self.out_dir,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let store: Arc<dyn ContentStore> =
            Arc::new(JsonStore::new(config.content_resolved.source_dir.clone()));
        let site = Site::new(
            store,
            SiteConfig {
                base_path: config.site.base_path.clone(),
                title: config.site.title.clone(),
            },
        );
        let snapshot = site.snapshot();

        output.highlight(&format!("Tome v{version}"));
        if snapshot.pages().is_empty() {
            output.warning(&format!(
                "No pages found in {}",
                config.content_resolved.source_dir.display()
            ));
        }

        let out_dir = &config.export_resolved.out_dir;
        fs::create_dir_all(out_dir)?;

        fs::write(out_dir.join("llms.txt"), snapshot.link_index(&config.site.title))?;
        fs::write(out_dir.join("llms-full.txt"), snapshot.full_text())?;
        let mut written = 2usize;
        let mut skipped = 0usize;

        for params in snapshot.param_sets() {
            let Some((category, segments)) = params.split_first() else {
                continue;
            };
            let doc_path = segments.join("/");
            let Some(page) = snapshot.page(category, &doc_path) else {
                // Categories without an index doc enumerate but have no page.
                skipped += 1;
                continue;
            };

            let file_path = export_file_path(out_dir, &params);
            if let Some(parent) = file_path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&file_path, page.llm_text())?;
            written += 1;
        }

        output.success(&format!(
            "Exported {written} files to {}",
            out_dir.display()
        ));
        if skipped > 0 {
            output.warning(&format!("Skipped {skipped} paths with no matching page"));
        }

        Ok(())
    }
}

/// Per-page export file path: `{out}/llms.mdx/{segments...}.txt`.
///
/// The `.txt` suffix is appended rather than set as an extension so slugs
/// containing dots keep their full name.
fn export_file_path(out_dir: &Path, params: &[String]) -> PathBuf {
    let mut path = out_dir.join("llms.mdx");
    if let Some((last, rest)) = params.split_last() {
        for segment in rest {
            path.push(segment);
        }
        path.push(format!("{last}.txt"));
    }
    path
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_export_file_path_bare_category() {
        let path = export_file_path(Path::new("dist"), &["guides".to_owned()]);

        assert_eq!(path, Path::new("dist/llms.mdx/guides.txt"));
    }

    #[test]
    fn test_export_file_path_nested() {
        let path = export_file_path(
            Path::new("dist"),
            &["guides".to_owned(), "setup".to_owned(), "install".to_owned()],
        );

        assert_eq!(path, Path::new("dist/llms.mdx/guides/setup/install.txt"));
    }
}
