use anyhow::{Context, Result};
use bellows::cli::Cli;
use bellows::config::BellowsConfig;
use bellows::repl::Repl;
use bellows::session::Session;
use bellows::wiki::HttpSource;
use clap::Parser;
use tracing::Level;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    let config = BellowsConfig::load(cli.config.as_deref())
        .context("Failed to load bellows configuration")?
        .with_base_url(cli.base_url);

    let source = HttpSource::new(&config.wiki)?;
    let session = Session::new(source, config.wiki.base_url.clone());

    let mut repl = Repl::new(session, config.chat.greeting_pause());
    repl.run(cli.topic.as_deref()).await
}
