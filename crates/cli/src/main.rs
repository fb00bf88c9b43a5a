use anyhow::Result;
use clap::Parser;
use cli::menu;
use cli::prompt::Prompter;
use content_core::config;
use std::io;
use tracing::{debug, Level};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let cfg = config::load(cli.config.as_deref(), cli.data_dir.as_deref())?;
    debug!("data directory: {}", cfg.data.dir);

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    menu::run(&mut prompter, &cfg.data_dir())
}

#[derive(Parser)]
#[command(name = "content-manager")]
#[command(about = "Add books, projects, articles and links to the site's JSON data")]
#[command(long_about = "Add books, projects, articles and links to the site's JSON data.\n\n\
Runs an interactive menu on stdin; answer 1-5 (surrounding spaces are ignored).")]
struct Cli {
    /// Path to config TOML
    #[arg(short, long)]
    config: Option<String>,

    /// Override the data directory holding the JSON files
    #[arg(long)]
    data_dir: Option<String>,

    /// Log debug output to stderr
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}
