use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bellows")]
#[command(about = "Chat with a Wikipedia article: ask questions, get its most relevant sentence")]
pub struct Cli {
    /// Topic to load before the prompt opens.
    #[arg(long)]
    pub topic: Option<String>,

    /// Article base URL, e.g. https://de.wikipedia.org/wiki/
    #[arg(long)]
    pub base_url: Option<String>,

    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub debug: bool,
}
