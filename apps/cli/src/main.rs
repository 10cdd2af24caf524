use std::{
    io::{self, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use captioner_core::AppConfig;
use clap::Parser;
use console::style;

use crate::{
    app::{App, Flow},
    commands::{Command, parse_command},
};

mod app;
mod commands;
mod confirm;
mod logger;
mod notifier;
mod player;
mod trace;

#[derive(Parser)]
#[command(name = "captioner")]
#[command(about = "Attach timed captions to a video and preview them during playback")]
struct Cli {
    /// Video URL to open
    url: Option<String>,

    /// Media duration in seconds, as the player would report it on load
    #[arg(short, long)]
    duration: Option<f64>,

    /// Config file (JSON). Defaults to <config dir>/captioner/config.json when present.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Replace captions with an identical interval without asking
    #[arg(short, long)]
    yes: bool,

    /// Print every session event as JSON
    #[arg(long)]
    events: bool,

    /// Debug logging (RUST_LOG still wins for other targets)
    #[arg(short, long)]
    verbose: bool,
}

fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", style("Error:").red().bold(), err);
    for cause in err.chain().skip(1) {
        eprintln!("    {}", cause);
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init_logger(cli.verbose);

    let config = AppConfig::load_or_default(cli.config.as_deref())
        .context("Failed to load configuration")?;
    let mut app = App::new(&config, cli.yes, cli.events)?;

    println!(
        "\n{}  {}\n",
        style("captioner").cyan().bold(),
        style("Caption Editor").dim()
    );

    let startup = cli
        .url
        .map(Command::Url)
        .into_iter()
        .chain(cli.duration.map(Command::Duration));
    for command in startup {
        if let Err(err) = app.execute(command).await {
            print_error(&err);
        }
    }
    println!("{}", style("Type 'help' for commands.").dim());

    let stdin = io::stdin();
    loop {
        print!("{} ", style(">").cyan().bold());
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line).context("Failed to read from stdin")? == 0 {
            break;
        }

        let result = match parse_command(&line) {
            Ok(Some(command)) => app.execute(command).await,
            Ok(None) => continue,
            Err(err) => Err(err),
        };
        match result {
            Ok(Flow::Quit) => break,
            Ok(Flow::Continue) => {}
            Err(err) => print_error(&err),
        }
    }

    Ok(())
}
