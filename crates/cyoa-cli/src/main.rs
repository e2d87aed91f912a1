//! Terminal reader for choose-your-own-adventure stories.

mod error;
mod logging;

use std::io::{self, BufWriter};
use std::path::PathBuf;

use clap::Parser;
use cyoa_core::{PageNumber, StoryConfig};
use cyoa_reader::{LineInput, ReadConfig, ReadSession};
use tracing::info;

use crate::error::CliError;

#[derive(Parser)]
#[command(
    name = "cyoa",
    about = "Read a choose-your-own-adventure story in the terminal",
    version
)]
struct Cli {
    /// Story file (YAML)
    story: PathBuf,

    /// Page to start reading from
    #[arg(long, default_value_t = PageNumber::FIRST)]
    start: PageNumber,

    /// Reject stories in which two pages share a number
    #[arg(long)]
    strict: bool,

    /// Log more detail to stderr (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> miette::Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            return Err(CliError::Usage(e.render().to_string().trim_end().to_string()).into());
        }
    };

    logging::init(cli.verbose);
    read(&cli)?;
    Ok(())
}

fn read(cli: &Cli) -> Result<(), CliError> {
    let story = StoryConfig::new(cli.story.clone()).with_strict(cli.strict);
    let book = cyoa_core::load(&story)?;

    let config = ReadConfig::default().with_first_page(cli.start);
    let input = LineInput::new(io::stdin().lock());
    let out = BufWriter::new(io::stdout().lock());

    let journey = ReadSession::begin(&book, &config, input, out)?.run()?;
    info!(
        pages = journey.pages.len(),
        rejected = journey.rejected,
        "reached an ending"
    );
    Ok(())
}
