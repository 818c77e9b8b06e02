use config::{Config, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub mod validator;
pub mod watcher;

use blockform_core::Block;

use crate::cli::Cli;

/// Directory, relative to the config root, holding one page per file
pub const PAGES_DIR: &str = "config/pages";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    /// Pages declared inline in the main config file, followed by the ones
    /// loaded from `config/pages`
    #[serde(default)]
    pub pages: Vec<PageDocument>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

/// A page as handed over by the editor: a name and its ordered blocks
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct PageDocument {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Vec<Block>,
}

impl PageDocument {
    /// Document title; falls back to the page name
    pub fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(&self.name)
    }
}

impl Settings {
    pub fn new() -> Result<Self, anyhow::Error> {
        Self::from_root(".")
    }

    /// Create settings from CLI arguments (config file plus CLI overrides)
    pub fn new_with_cli(cli: &Cli) -> Result<Self, anyhow::Error> {
        let mut settings = Self::load(&cli.config)?;

        // CLI > env vars > config file
        settings.apply_cli_overrides(cli);
        settings.load_pages_from_dir(&cli.root().join(PAGES_DIR))?;
        settings.validate()?;

        Ok(settings)
    }

    pub fn from_root(root: &str) -> Result<Self, anyhow::Error> {
        let root = Path::new(root);
        let mut settings = Self::load(&root.join("blockform"))?;

        settings.load_pages_from_dir(&root.join(PAGES_DIR))?;
        settings.validate()?;

        Ok(settings)
    }

    fn load(config_path: &Path) -> Result<Self, anyhow::Error> {
        let s = Config::builder()
            .add_source(File::from(config_path).required(false))
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .build()?;

        Ok(s.try_deserialize()?)
    }

    fn apply_cli_overrides(&mut self, cli: &Cli) {
        if let Some(host) = &cli.host {
            self.server.host = host.clone();
        }
        if let Some(port) = cli.port {
            self.server.port = port;
        }
    }

    fn validate(&self) -> Result<(), anyhow::Error> {
        validator::ConfigValidator::validate(self).map_err(|errors| {
            let error_messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            anyhow::anyhow!(
                "Configuration validation failed:\n{}",
                error_messages.join("\n")
            )
        })
    }

    pub fn page(&self, name: &str) -> Option<&PageDocument> {
        self.pages.iter().find(|p| p.name == name)
    }

    /// Paths whose changes should trigger a reload
    pub fn watch_paths(config_file: &Path, root: &Path) -> Vec<PathBuf> {
        vec![config_file.to_path_buf(), root.join(PAGES_DIR)]
    }

    fn load_pages_from_dir(&mut self, path: &Path) -> Result<(), anyhow::Error> {
        let pattern = format!("{}/*", path.display());
        let mut entries: Vec<PathBuf> = Vec::new();
        for entry in glob::glob(&pattern)? {
            match entry {
                Ok(path) => entries.push(path),
                Err(e) => tracing::warn!("Failed to read glob entry: {}", e),
            }
        }
        // deterministic page order regardless of directory listing order
        entries.sort();

        for path in entries {
            if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
                if matches!(ext, "json" | "yaml" | "yml" | "toml") {
                    let content = std::fs::read_to_string(&path)?;
                    let page: PageDocument = match ext {
                        "json" => serde_json::from_str(&content)?,
                        "toml" => toml::from_str(&content)?,
                        _ => serde_yaml::from_str(&content)?,
                    };
                    tracing::debug!("Loaded page '{}' from {}", page.name, path.display());
                    self.pages.push(page);
                }
            }
        }
        Ok(())
    }
}
