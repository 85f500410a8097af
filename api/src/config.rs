use clap::Parser;
use std::{net::SocketAddr, path::PathBuf, time::Duration};

#[derive(Clone, Debug, Parser)]
#[command(
    name = "keysmith-api",
    version,
    about = "Issue RSA keys and certificate signing requests over HTTP"
)]
pub struct KeysmithApiConfig {
    #[clap(
        short,
        long,
        env = "KEYSMITH_API_BIND_ADDR",
        default_value = "0.0.0.0:4000"
    )]
    pub bind_addr: SocketAddr,

    /// Port to listen on. Overrides the port of `bind_addr` when set, which
    /// lets the server run on platforms that only hand out `PORT`.
    #[clap(long, env = "PORT")]
    pub port: Option<u16>,

    /// Directory of static files served for any path without a route.
    #[clap(long, env = "KEYSMITH_API_ASSETS_DIR", default_value = "public/assets")]
    pub assets_dir: PathBuf,

    /// Origins allowed to call the API from a browser. When empty, any
    /// origin is allowed.
    #[clap(
        long = "cors-origin",
        env = "KEYSMITH_API_CORS_ORIGINS",
        value_delimiter = ','
    )]
    pub cors_origins: Vec<String>,

    /// Upper bound on issuances running at the same time. Key generation is
    /// CPU-bound, so this should not exceed the number of cores available.
    #[clap(
        long,
        env = "KEYSMITH_API_MAX_CONCURRENT_ISSUANCES",
        default_value_t = 4,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub max_concurrent_issuances: u32,

    /// Deadline for a single issuance, including time spent waiting for a
    /// free issuance slot.
    #[clap(
        long,
        env = "KEYSMITH_API_ISSUE_TIMEOUT_SECS",
        default_value_t = 30,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub issue_timeout_secs: u64,

    #[clap(long, default_value_t = false)]
    pub dump_openapi: bool,
}

impl KeysmithApiConfig {
    /// The address to listen on, with `port` applied.
    pub fn listen_addr(&self) -> SocketAddr {
        let mut addr = self.bind_addr;
        if let Some(port) = self.port {
            addr.set_port(port);
        }
        addr
    }

    pub fn issue_timeout(&self) -> Duration {
        Duration::from_secs(self.issue_timeout_secs)
    }
}
