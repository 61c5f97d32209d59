use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(version, about = "Shortest path between two nodes of a weighted adjacency matrix", long_about = None)]
struct Cli {
    /// Source node, given by label or index
    source: String,

    /// Destination node, given by label or index. Prints the whole shortest
    /// path tree if omitted
    destination: Option<String>,

    /// Path to the matrix .csv file (header row of labels, one row of weights
    /// per node, 0 = no edge). The built-in airport graph is used if omitted
    #[arg(short, long, value_name = "file")]
    matrix: Option<PathBuf>,

    /// Print the raw parent array
    #[arg(short, long)]
    parents: bool,
}

#[derive(Debug, Clone)]
pub struct Cfg {
    pub matrix_file: Option<PathBuf>,
    pub source: String,
    pub destination: Option<String>,
    pub print_parents: bool,
}

pub fn parse() -> Cfg {
    into_cfg(Cli::parse())
}

/// Parses `args` like the command line, the first item is the binary name.
pub fn parse_from<I, T>(args: I) -> Result<Cfg, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args).map(into_cfg)
}

fn into_cfg(cli: Cli) -> Cfg {
    Cfg {
        matrix_file: cli.matrix,
        source: cli.source,
        destination: cli.destination,
        print_parents: cli.parents,
    }
}
