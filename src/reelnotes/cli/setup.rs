use clap::{ArgGroup, Parser, Subcommand};
use reelnotes::model::ReviewId;
use std::path::PathBuf;
use std::sync::OnceLock;

/// "0.3.1" for releases, "0.3.1@abc1234" for everything else.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    static VERSION_STRING: OnceLock<String> = OnceLock::new();
    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "reelnotes", bin_name = "reelnotes", version = get_version())]
#[command(about = "Keep a short list of movie reviews", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding the review list and config (overrides REELNOTES_HOME)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all reviews
    #[command(alias = "ls")]
    List,

    /// Add a review
    #[command(alias = "a")]
    Add {
        /// Movie title
        title: String,

        /// Your review
        review: String,
    },

    /// Change the title and/or text of a review
    #[command(alias = "e")]
    #[command(group(ArgGroup::new("fields").required(true).multiple(true).args(["title", "review"])))]
    Edit {
        /// Id of the review (see `reelnotes list`)
        id: ReviewId,

        /// New title
        #[arg(short, long)]
        title: Option<String>,

        /// New review text
        #[arg(short, long)]
        review: Option<String>,
    },

    /// Delete one or more reviews
    #[command(alias = "rm")]
    Delete {
        /// Ids of the reviews
        #[arg(required = true, num_args = 1..)]
        ids: Vec<ReviewId>,
    },

    /// Interactive session: add, edit and delete reviews line by line
    Shell,

    /// Get or set configuration
    Config {
        /// Configuration key (storage-key, reseed-when-empty)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Print the path of the file holding the reviews
    Path,
}
