mod platform;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = platform::config::Cli::parse();
    let config = platform::config::resolve(cli)?;
    platform::logging::initialize(&config.log);
    platform::run_app(config)
}
