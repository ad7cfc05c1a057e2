use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Shortest paths over weighted digraphs and shortest word ladders
#[derive(Parser, Debug)]
#[command(name = "pathladder", version, about)]
pub(crate) struct Cli {
    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub(crate) verbose: bool,

    /// Log filter (e.g. `debug`, or a full directive like `pathladder=trace`)
    #[arg(long, global = true, value_name = "LEVEL")]
    pub(crate) log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub(crate) log_json: bool,

    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Print the shortest path from a source vertex to every vertex of a graph file
    Paths(PathsArgs),

    /// Find a shortest word ladder between two words
    Ladder(LadderArgs),
}

#[derive(Args, Debug, Clone)]
pub(crate) struct PathsArgs {
    /// Graph file: one `source destination weight` edge per line
    pub(crate) graph: PathBuf,

    /// Source vertex
    #[arg(long, short, default_value_t = 0)]
    pub(crate) source: u32,
}

#[derive(Args, Debug, Clone)]
pub(crate) struct LadderArgs {
    /// Word list file (whitespace separated)
    #[arg(long, short, env = "PATHLADDER_DICTIONARY", default_value = "words.txt")]
    pub(crate) dictionary: PathBuf,

    /// Start word (prompted for when omitted)
    pub(crate) start: Option<String>,

    /// End word (prompted for when omitted)
    pub(crate) end: Option<String>,
}
