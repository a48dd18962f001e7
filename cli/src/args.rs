use clap::{Parser, Subcommand};
use sixdegrees_core::SearchConfig;
use sixdegrees_core::search_config::DEFAULT_MAX_HOPS;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sixdegrees")]
#[command(about = "Find the shortest chain of shared films between any two actors")]
pub struct Args {
    /// Directory holding the actordata and moviedata files
    #[arg(short, long, value_name = "DIR", default_value = "data", global = true)]
    pub data: PathBuf,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Verbose mode - show search info, statistics and debug logs
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Find the shortest path between two actors
    Path {
        /// First actor, exactly as credited
        from: String,

        /// Second actor, exactly as credited
        to: String,

        #[command(flatten)]
        search: SearchArgs,

        /// Print the result as JSON
        #[arg(short, long)]
        json: bool,

        /// Quiet mode - only show the path flow
        #[arg(short, long)]
        quiet: bool,
    },

    /// Keep asking for pairs of actors until an empty name is entered
    Interactive {
        #[command(flatten)]
        search: SearchArgs,
    },

    /// Build actordata and moviedata from a tab-separated credits file
    Build {
        /// Lines of actor<TAB>title<TAB>year
        input: PathBuf,

        /// Directory to write the data files into
        output: PathBuf,
    },

    /// Show record counts and check the data files
    Stats,
}

#[derive(clap::Args, Debug, Clone)]
pub struct SearchArgs {
    /// Longest chain of connections to search for
    #[arg(short = 'm', long, value_name = "HOPS", default_value_t = DEFAULT_MAX_HOPS)]
    pub max_hops: usize,

    /// Always search from the first actor instead of the one with fewer credits
    #[arg(long)]
    pub no_swap: bool,
}

impl SearchArgs {
    pub fn config(&self) -> SearchConfig {
        SearchConfig::new(self.max_hops, !self.no_swap)
    }
}
