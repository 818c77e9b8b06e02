use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Blockform - preview and export page-builder blocks
#[derive(Parser, Debug, Clone)]
#[command(name = "blockform", version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, env = "BLOCKFORM_CONFIG", default_value = "blockform.toml")]
    pub config: PathBuf,

    /// Server host address
    #[arg(long, env = "BLOCKFORM_HOST")]
    pub host: Option<String>,

    /// Server port
    #[arg(long, env = "BLOCKFORM_PORT")]
    pub port: Option<u16>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Serve page previews over HTTP (default)
    Serve,
    /// Print the HTML of one page to stdout
    Render {
        /// Page name
        page: String,
    },
    /// Print the block schema consumed by editor hosts
    Schema,
}

impl Cli {
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Serve)
    }

    /// Directory the configuration file lives in; pages load relative to it
    pub fn root(&self) -> PathBuf {
        match self.config.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["blockform"]);
        assert_eq!(cli.config, PathBuf::from("blockform.toml"));
        assert!(cli.host.is_none());
        assert!(cli.port.is_none());
        assert_eq!(cli.command(), Command::Serve);
        assert_eq!(cli.root(), PathBuf::from("."));
    }

    #[test]
    fn test_cli_with_args() {
        let cli = Cli::parse_from([
            "blockform",
            "--config",
            "site/custom.toml",
            "--host",
            "0.0.0.0",
            "--port",
            "8080",
            "render",
            "contact",
        ]);
        assert_eq!(cli.config, PathBuf::from("site/custom.toml"));
        assert_eq!(cli.host, Some("0.0.0.0".to_string()));
        assert_eq!(cli.port, Some(8080));
        assert_eq!(cli.command(), Command::Render { page: "contact".to_string() });
        assert_eq!(cli.root(), PathBuf::from("site"));
    }

    #[test]
    fn test_schema_command() {
        let cli = Cli::parse_from(["blockform", "schema"]);
        assert_eq!(cli.command(), Command::Schema);
    }
}
