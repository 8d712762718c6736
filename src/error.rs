use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid TOML syntax in '{file}'")]
#[diagnostic(
    code(elementary_cycles::toml_parse_error),
    help("Check the TOML syntax near the highlighted position")
)]
pub struct TomlParseError {
    pub file: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("syntax error here")]
    pub span: Option<SourceSpan>,
    #[source]
    pub source: toml::de::Error,
}

#[derive(Error, Debug, Diagnostic)]
pub enum CyclesError {
    #[error("Failed to read file '{path}'")]
    #[diagnostic(
        code(elementary_cycles::io_error),
        help("Check if the file exists and you have read permissions")
    )]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    TomlParseError(Box<TomlParseError>),

    #[error("JSON serialization error")]
    #[diagnostic(
        code(elementary_cycles::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(elementary_cycles::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("IO error")]
    #[diagnostic(
        code(elementary_cycles::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(elementary_cycles::config_error),
        help("Graphs are read from a top-level [graphs] table whose sub-tables map a vertex to an array of successors")
    )]
    ConfigurationError { message: String },

    #[error("Graph '{graph}' has an edge {from} -> {to}, but '{to}' is not a vertex of the graph")]
    #[diagnostic(
        code(elementary_cycles::dangling_edge),
        help("Declare '{to}' as a vertex (for example `{to} = []`) or pass --dangling drop to ignore such edges")
    )]
    DanglingEdge {
        graph: String,
        from: String,
        to: String,
    },

    #[error("Cycle enumeration exceeded its time limit of {limit_ms} ms")]
    #[diagnostic(
        code(elementary_cycles::deadline_exceeded),
        help("Raise --timeout-ms or restrict the run to fewer graphs with --graph")
    )]
    DeadlineExceeded { limit_ms: u128 },
}
