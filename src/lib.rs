#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod app;
pub mod config;
pub mod domain;
pub mod engine;
pub mod ui;
pub mod utils;

// Re-export commonly used types outside of crate
pub use app::{App, Route};
pub use engine::TerminalEngine;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Page to open on: "/", "/docs" or "/terminal". Anything else opens "/".
    #[arg(long, default_value = "/")]
    pub route: String,

    /// Seed for the simulated metrics and message ids (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            route: Route::Home.path().to_string(),
            seed: None,
        }
    }
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}

#[cfg(test)]
mod tests {
    use {super::*, clap::Parser};

    #[test]
    fn cli_defaults_to_home_and_random_seed() {
        let cli = Cli::parse_from(["verbot-terminal"]);
        assert_eq!(Route::resolve(&cli.route), Route::Home);
        assert_eq!(cli.seed, None);
    }

    #[test]
    fn cli_accepts_route_and_seed() {
        let cli = Cli::parse_from(["verbot-terminal", "--route", "/terminal", "--seed", "42"]);
        assert_eq!(Route::resolve(&cli.route), Route::Terminal);
        assert_eq!(cli.seed, Some(42));
    }
}
