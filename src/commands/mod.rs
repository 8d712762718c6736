//! Command implementations for the elementary-cycles CLI
//!
//! This module contains the implementations for each CLI command:
//! - enumerate: list every elementary cycle of each graph
//! - components: show the strongly connected components of each graph
//! - render: draw a graph with its cycles highlighted

pub mod components;
pub mod enumerate;
pub mod render;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Enumerate { .. } => enumerate::execute_enumerate_command(command),
        Commands::Components { .. } => components::execute_components_command(command),
        Commands::Render { .. } => render::execute_render_command(command),
    }
}
