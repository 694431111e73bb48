use anyhow::{Context, Result};
use boletim::app::App;
use boletim::cli::Cli;
use boletim::config::Config;
use boletim::theme::Theme;
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logging goes to a file; stderr would corrupt the alternate screen
    init_tracing(cli.debug)?;

    let mut config = Config::load(cli.config_dir.as_deref())
        .context("failed to load configuration")?;
    cli.apply_to(&mut config);

    let theme = if cli.light {
        Theme::light()
    } else {
        Theme::dark()
    };

    // Create and run the application
    let mut app = App::new(config, theme)?;
    app.run().await?;

    Ok(())
}

fn init_tracing(debug: bool) -> Result<()> {
    let log_dir = dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("boletim");
    fs::create_dir_all(&log_dir)?;
    let log_file = fs::File::create(log_dir.join("boletim.log"))?;

    let default_directive = if debug { "boletim=debug" } else { "boletim=info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .init();

    Ok(())
}
