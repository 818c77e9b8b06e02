use blockform::adapters::page_renderer;
use blockform::cli::{Cli, Command};
use blockform::config::{watcher::ConfigWatcher, Settings};
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command() {
        Command::Schema => {
            println!("{}", blockform_core::page_config().to_json()?);
            Ok(())
        }
        Command::Render { page } => {
            let settings = Settings::new_with_cli(&cli)?;
            println!("{}", page_renderer::render_named(&settings, &page)?);
            Ok(())
        }
        Command::Serve => serve(cli).await,
    }
}

async fn serve(cli: Cli) -> anyhow::Result<()> {
    let settings = Settings::new_with_cli(&cli)?;
    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    info!("Loaded {} pages", settings.pages.len());

    // Wrap settings in Arc<RwLock> for live reload
    let settings = Arc::new(RwLock::new(settings));

    let settings_for_watcher = settings.clone();
    let cli_for_watcher = cli.clone();
    let _watcher = ConfigWatcher::new(
        Settings::watch_paths(&cli.config, &cli.root()),
        move || match Settings::new_with_cli(&cli_for_watcher) {
            Ok(new_settings) => {
                let pages = new_settings.pages.len();
                *settings_for_watcher.blocking_write() = new_settings;
                info!("Pages reloaded ({} pages)", pages);
            }
            Err(e) => error!("Failed to reload configuration: {}", e),
        },
    )?;

    let app = blockform::create_app(settings);

    info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
