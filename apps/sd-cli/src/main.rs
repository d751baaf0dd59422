use clap::Parser;
use std::path::PathBuf;
use tracing::Level;

use sd_dict::{DictOptions, DictResult, Dictionary};

mod prompt;
mod session;
mod wizard;

use prompt::{Prompter, StdioPrompter};
use session::Session;

#[derive(Parser)]
#[command(name = "sd-cli")]
#[command(about = "Personal synonym dictionary", long_about = None)]
struct Cli {
    /// Import a dictionary file before the session starts
    #[arg(long)]
    load: Option<PathBuf>,

    /// Format of the file given with --load (gob, csv or csvc)
    #[arg(long, default_value = "gob")]
    format: String,

    /// Write a UTF-8 byte order mark when exporting text formats
    #[arg(long)]
    bom: bool,

    /// Log debug events to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> DictResult<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    let mut dict = Dictionary::with_options(DictOptions { write_bom: cli.bom });
    if let Some(path) = &cli.load {
        dict.import(path, &cli.format)?;
    }

    let mut prompter = StdioPrompter::stdin();
    prompter.say(&[
        "welcome to the synonym dictionary!".to_string(),
        "type \"help\" to list commands, \"done\" to stop".to_string(),
    ]);
    Session::new(dict).run(&mut prompter);
    Ok(())
}
