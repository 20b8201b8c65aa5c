use assetbook_cli::{config::Config, init_tracing, run, Cli};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;
    init_tracing(config.log_format);
    let output = run(cli, &config)?;
    println!("{output}");
    Ok(())
}
