//! # Elementary Cycles - Enumerate Every Simple Cycle of a Directed Graph
//!
//! This crate lists each elementary cycle of a directed graph exactly once.
//! A cycle is elementary when no vertex repeats except the first, which
//! closes it.
//!
//! The graph is first split into strongly connected components with
//! Tarjan's algorithm. Components that cannot hold a cycle are skipped, and
//! each remaining one is searched with the Szwarcfiter–Lauer backtracking
//! algorithm. Its edge blocking and restoration avoid exploring the same
//! dead ends over and over, and a stack-position threshold keeps rotations
//! of a cycle from being reported twice.
//!
//! ## Main Components
//!
//! - **Graph**: the immutable [`GraphModel`](graph::GraphModel) and its
//!   renderers
//! - **Detector**: component decomposition, the cycle search and the
//!   [`enumerate`](detector::enumerate) entry point
//! - **TOML parser**: named graphs from a `[graphs]` table
//! - **Reports**: human-readable and machine-readable output
//!
//! ## Usage
//!
//! ### Enumerating Cycles
//!
//! ```
//! use elementary_cycles::detector::enumerate;
//! use elementary_cycles::graph::GraphModel;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let graph = GraphModel::from_adjacency([
//!     ("1", vec!["2"]),
//!     ("2", vec!["1", "3"]),
//!     ("3", vec!["4", "5"]),
//!     ("4", vec!["5"]),
//!     ("5", vec!["3", "6"]),
//!     ("6", vec![]),
//! ])?;
//!
//! let cycles = enumerate(&graph);
//! let paths: Vec<String> = cycles.iter().map(|c| c.to_path_string()).collect();
//! assert_eq!(paths, ["5 -> 3 -> 4 -> 5", "5 -> 3 -> 5", "2 -> 1 -> 2"]);
//! # Ok(())
//! # }
//! ```
//!
//! ### Reading Graphs From TOML
//!
//! ```
//! use elementary_cycles::detector::{DetectorOptions, detect};
//! use elementary_cycles::graph::DanglingEdgePolicy;
//! use elementary_cycles::reports::{HumanReportGenerator, ReportGenerator};
//! use elementary_cycles::toml_parser::GraphsFile;
//!
//! # fn main() -> miette::Result<()> {
//! let file = GraphsFile::parse_str(
//!     r#"
//! [graphs.pipeline]
//! parse = ["check"]
//! check = ["parse", "emit"]
//! emit = []
//! "#,
//!     "inline.toml",
//! )?;
//!
//! let mut results = Vec::new();
//! for definition in file.graphs() {
//!     let graph = definition.to_named_graph(DanglingEdgePolicy::Reject)?;
//!     results.push(detect(&graph, DetectorOptions::default())?);
//! }
//!
//! let report = HumanReportGenerator::new(None).generate_report(&results)?;
//! assert!(report.contains("Total Unique Elementary Cycles: 1"));
//! assert!(report.contains("Cycle 1: check -> parse -> check"));
//! # Ok(())
//! # }
//! ```
//!
//! ### Searching Large Graphs
//!
//! ```no_run
//! use std::time::Duration;
//!
//! use elementary_cycles::detector::{CycleDetector, DetectorOptions};
//! use elementary_cycles::toml_parser::GraphsFile;
//! use elementary_cycles::graph::DanglingEdgePolicy;
//!
//! # fn main() -> miette::Result<()> {
//! let file = GraphsFile::parse_file("large.toml".as_ref())?;
//! let definition = &file.graphs()[0];
//! let graph = definition.to_named_graph(DanglingEdgePolicy::Drop)?;
//!
//! // Components are searched on the rayon pool; give up after ten seconds
//! let mut detector = CycleDetector::with_options(DetectorOptions {
//!     parallel: true,
//!     deadline: Some(Duration::from_secs(10)),
//! });
//! detector.detect_cycles(&graph.model)?;
//!
//! println!("{} cycles in {}", detector.cycle_count(), graph.name);
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod progress;
mod utils;

// Public modules
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod detector;
pub mod error;
pub mod executors;
pub mod graph;
pub mod logging;
pub mod reports;
pub mod toml_parser;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    execute_command(cli.command)
}
