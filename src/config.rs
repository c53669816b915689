#![cfg(feature = "web")]

use crate::compare::DEFAULT_MAX_CELLS;
use clap::Parser;
use std::net::SocketAddr;

/// Web server settings. Every flag can also come from the environment.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "website", version, about = "Compare two spreadsheets cell by cell using fuzzy logic")]
pub struct Config {
    /// Address to listen on
    #[arg(long, env = "FUZZY_DIFF_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(long, short, env = "FUZZY_DIFF_PORT", default_value_t = 3000)]
    pub port: u16,

    /// Largest accepted request body, in megabytes
    #[arg(long, env = "FUZZY_DIFF_MAX_UPLOAD_MB", default_value_t = 25)]
    pub max_upload_mb: usize,

    /// Most cell positions one comparison may cover (rows x columns)
    #[arg(long, env = "FUZZY_DIFF_MAX_CELLS", default_value_t = DEFAULT_MAX_CELLS)]
    pub max_cells: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: "127.0.0.1".to_string(),
            port: 3000,
            max_upload_mb: 25,
            max_cells: DEFAULT_MAX_CELLS,
        }
    }
}

impl Config {
    pub fn socket_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_mb.saturating_mul(1024 * 1024)
    }
}
