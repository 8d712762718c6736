use std::path::Path;

use console::{Term, style};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

use crate::constants::progress::{SPINNER_FRAMES, TICK_INTERVAL};
use crate::utils::string::pluralize;

// Progress bar style templates as constants
const PROGRESS_BAR_TEMPLATE: &str =
    "{msg} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {per_sec}";
const SPINNER_TEMPLATE: &str = "{spinner:.cyan} {msg}";

/// Interactive status output on stderr
pub struct ProgressReporter {
    term: Term,
    multi_progress: MultiProgress,
    current_bar: Option<ProgressBar>,
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
            multi_progress: MultiProgress::new(),
            current_bar: None,
        }
    }

    /// A reporter when stderr is a terminal, `None` otherwise
    pub fn for_terminal() -> Option<Self> {
        Term::stderr().is_term().then(Self::new)
    }

    pub fn create_progress_bar(&mut self, len: u64, message: &str) -> ProgressBar {
        let pb = self.multi_progress.add(ProgressBar::new(len));
        let bar_style = ProgressStyle::default_bar()
            .template(PROGRESS_BAR_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▉▊▋▌▍▎▏ ");
        pb.set_style(bar_style);
        pb.set_message(message.to_string());
        pb.enable_steady_tick(TICK_INTERVAL);
        pb
    }

    pub fn create_spinner(&mut self, message: &str) -> ProgressBar {
        let pb = self.multi_progress.add(ProgressBar::new_spinner());
        let spinner_style = ProgressStyle::default_spinner()
            .template(SPINNER_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(SPINNER_FRAMES);
        pb.set_style(spinner_style);
        pb.set_message(message.to_string());
        pb.enable_steady_tick(TICK_INTERVAL);
        pb
    }

    pub fn start_loading(&mut self, path: &Path) {
        let _ = self.term.clear_line();
        let spinner = self.create_spinner(&format!("Reading graphs from {}...", path.display()));
        self.current_bar = Some(spinner);
    }

    pub fn finish_loading(&mut self, count: usize) {
        if let Some(pb) = self.current_bar.take() {
            pb.finish_and_clear();
        }
        let _ = self.term.clear_line();
        if count == 0 {
            eprintln!("\r{} No graphs selected", style("✗").red());
        } else {
            eprintln!(
                "\r{} Loaded {} {}",
                style("✓").green(),
                style(count).yellow().bold(),
                pluralize("graph", count)
            );
        }
    }

    pub fn start_enumeration(&mut self, total_graphs: usize) {
        let pb = self.create_progress_bar(total_graphs as u64, "Enumerating cycles");
        self.current_bar = Some(pb);
    }

    pub fn update_enumeration(&self, graph_name: &str) {
        if let Some(ref pb) = self.current_bar {
            pb.set_message(format!("Searching graph: {graph_name}"));
            pb.inc(1);
        }
    }

    pub fn finish_enumeration(&mut self, cycles_found: usize) {
        if let Some(pb) = self.current_bar.take() {
            pb.finish_and_clear();
        }
        if cycles_found == 0 {
            eprintln!(
                "{} No cycles found! {}",
                style("✓").green().bold(),
                style("🎉").dim()
            );
        } else {
            eprintln!(
                "{} Found {} elementary {}",
                style("⚠").yellow().bold(),
                style(cycles_found).red().bold(),
                pluralize("cycle", cycles_found)
            );
        }
    }
}
