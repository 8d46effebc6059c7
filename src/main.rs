use anyhow::Result;
use bulletin::{
    cli::{BulletinCommand, Cli},
    config::TomlConfig,
    printer::StdoutPrinter,
};
use clap::Parser;
use env_logger::Env;
use log::debug;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    debug!("cli matched args: {cli:?}");

    let mut printer = StdoutPrinter::new(cli.output, cli.color);

    match cli.command {
        BulletinCommand::Test(cmd) => {
            let config = TomlConfig::from_some_path_or_default(cli.config.as_deref())?;
            cmd.execute(&mut printer, &config).await
        }
        BulletinCommand::Send(cmd) => {
            let config = TomlConfig::from_some_path_or_default(cli.config.as_deref())?;
            cmd.execute(&mut printer, &config).await
        }
        BulletinCommand::Manual(cmd) => cmd.execute(&mut printer).await,
        BulletinCommand::Completion(cmd) => cmd.execute().await,
    }
}
