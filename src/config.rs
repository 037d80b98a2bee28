use crate::logging::LogFormat;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "melbourne-dashboard")]
#[command(about = "Interactive dashboard over the Melbourne housing dataset.")]
pub struct Config {
    /// Listings CSV, loaded once at startup
    #[arg(long, env = "DASHBOARD_DATA", default_value = "data/cleaned_melbourne_housing.csv")]
    pub data: PathBuf,

    /// Image shown at the top of the Home page
    #[arg(long, env = "DASHBOARD_BANNER", default_value = "assets/banner.svg")]
    pub banner: PathBuf,

    #[arg(long, env = "DASHBOARD_BIND", default_value = "127.0.0.1:3000")]
    pub bind: SocketAddr,

    /// Upper bound on request worker threads
    #[arg(long, env = "DASHBOARD_WORKERS", default_value_t = 8)]
    pub workers: usize,

    #[arg(long, env = "DASHBOARD_LOG_FORMAT", value_enum, default_value = "pretty")]
    pub log_format: LogFormat,
}

impl Config {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
