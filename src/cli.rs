use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::Config;
use crate::tea::message::LayoutMode;

/// Boletim - terminal post and comment browser
#[derive(Parser, Debug)]
#[command(name = "boletim")]
#[command(about = "A TUI-based post and comment browser")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Configuration directory path
    #[arg(long)]
    pub config_dir: Option<PathBuf>,

    /// How many posts to request (1-100)
    #[arg(long, short = 'n')]
    pub limit: Option<u16>,

    /// Layout presentation to start in
    #[arg(long, value_enum)]
    pub layout: Option<LayoutArg>,

    /// Base URL of the post service
    #[arg(long)]
    pub base_url: Option<String>,

    /// Auxiliary endpoint serving the status banner
    #[arg(long)]
    pub service_url: Option<String>,

    /// Use the light theme
    #[arg(long)]
    pub light: bool,
}

/// Layout choice on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LayoutArg {
    Cards,
    List,
}

impl From<LayoutArg> for LayoutMode {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::Cards => LayoutMode::Cards,
            LayoutArg::List => LayoutMode::List,
        }
    }
}

impl Cli {
    /// Overlay command-line flags onto the loaded configuration
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(limit) = self.limit {
            config.ui.post_limit = limit;
        }
        if let Some(layout) = self.layout {
            config.ui.layout = layout.into();
        }
        if let Some(base_url) = &self.base_url {
            config.api.base_url = base_url.clone();
        }
        if let Some(service_url) = &self.service_url {
            config.api.service_url = Some(service_url.clone());
        }
    }
}
