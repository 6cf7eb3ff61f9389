use std::path::PathBuf;

use clap::Parser;

use winget_src::config::{DEFAULT_PORT, LogFormat, ServerConfig, default_package_list_path};

#[derive(Parser)]
#[command(name = "winget-src")]
#[command(version, about = "winget REST source backed by GitHub and GitLab releases")]
struct Cli {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// YAML package list to serve
    #[arg(long, env = "PACKAGE_LIST")]
    package_list: Option<PathBuf>,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = winget_src::logging::init_tracing(cli.log_format);

    let package_list = cli.package_list.unwrap_or_else(default_package_list_path);
    let config = ServerConfig::new(cli.port, package_list);

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(winget_src::server::run_server(config))
}
