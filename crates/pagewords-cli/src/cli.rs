use std::path::PathBuf;

use clap::Parser;
use pagewords_core::scan::DEFAULT_LONG_TOKEN_THRESHOLD;

/// Word and item-type reports for a directory of wiki pages
#[derive(Parser, Debug)]
#[command(name = "pagewords")]
#[command(version, about = "Word and item-type reports for a directory of wiki pages")]
pub struct Cli {
    /// Wiki directory containing a `pages` subdirectory
    pub wiki_dir: PathBuf,

    /// Directory the reports are written to
    #[arg(short, long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Log tokens longer than this many characters
    #[arg(long, default_value_t = DEFAULT_LONG_TOKEN_THRESHOLD)]
    pub long_token_threshold: usize,

    /// Enable verbose (debug) logging
    #[arg(long)]
    pub verbose: bool,
}

impl Cli {
    pub fn pages_dir(&self) -> PathBuf {
        self.wiki_dir.join("pages")
    }
}
