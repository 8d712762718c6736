use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::common::{CycleDisplayArgs, FormatArgs, InputArgs};

#[derive(Parser)]
#[command(
    name = "elementary-cycles",
    about = "🔁 Enumerate every elementary cycle of a directed graph",
    long_about = "elementary-cycles reads named directed graphs from a TOML file and lists \
                  every elementary cycle of each graph exactly once. Graphs are split into \
                  strongly connected components with Tarjan's algorithm, and each component \
                  is searched with the Szwarcfiter-Lauer backtracking algorithm.",
    version
)]
pub struct Cli {
    /// Log debug diagnostics to stderr
    #[arg(short, long, global = true, env = "ELEMENTARY_CYCLES_VERBOSE")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every elementary cycle of each graph
    ///
    /// Each cycle is printed once, as a closed vertex sequence such as
    /// `a -> b -> a`.
    #[command(
        long_about = "Enumerate the elementary cycles of every graph in the input file. A cycle \
                      is elementary when no vertex repeats except the first, which closes it. \
                      Rotations of the same cycle are reported only once."
    )]
    Enumerate {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        format: FormatArgs,

        #[command(flatten)]
        cycle_display: CycleDisplayArgs,

        /// Exit with error code if cycles found
        #[arg(long, env = "ELEMENTARY_CYCLES_ERROR_ON_CYCLES")]
        error_on_cycles: bool,

        /// Search strongly connected components in parallel
        #[arg(long, env = "ELEMENTARY_CYCLES_PARALLEL")]
        parallel: bool,

        /// Abort a graph's enumeration after this many milliseconds
        #[arg(long, value_name = "MS", env = "ELEMENTARY_CYCLES_TIMEOUT_MS")]
        timeout_ms: Option<u64>,
    },

    /// Show the strongly connected components of each graph
    ///
    /// Components with more than one vertex, or a single vertex with a
    /// self-loop, are the only places cycles can live.
    Components {
        #[command(flatten)]
        input: InputArgs,

        /// Output format
        #[arg(
            short,
            long,
            value_enum,
            default_value = crate::constants::output::DEFAULT_FORMAT,
            env = "ELEMENTARY_CYCLES_FORMAT"
        )]
        format: ListFormat,
    },

    /// Render a graph with its cycles highlighted
    #[command(
        long_about = "Render a graph as an ASCII tree, a Mermaid diagram or a Graphviz DOT file. \
                      Vertices and edges lying on at least one elementary cycle are highlighted. \
                      Mermaid and DOT output describe a single graph, so pick one with --graph \
                      when the file declares several."
    )]
    Render {
        #[command(flatten)]
        input: InputArgs,

        /// Graph format
        #[arg(
            short,
            long,
            value_enum,
            default_value = crate::constants::output::DEFAULT_GRAPH_FORMAT,
            env = "ELEMENTARY_CYCLES_GRAPH_FORMAT"
        )]
        format: GraphFormat,

        /// Output file (stdout if not specified)
        #[arg(short, long, env = "ELEMENTARY_CYCLES_OUTPUT")]
        output: Option<PathBuf>,

        /// Highlight cycles in the graph
        #[arg(
            long,
            default_value_t = true,
            action = clap::ArgAction::Set,
            env = "ELEMENTARY_CYCLES_HIGHLIGHT_CYCLES"
        )]
        highlight_cycles: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
    Junit,
    #[value(name = "github")]
    GitHub,
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum ListFormat {
    Human,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum GraphFormat {
    Ascii,
    Mermaid,
    Dot,
}
