//! CLI argument definitions.
//!
//! The entire surface is a list of positional package names: the packages
//! that should be held after the run. Everything else currently held gets
//! unheld; no arguments at all clears every hold.

use clap::Parser;

/// PKGkeeper - keep apt hold markers in sync with a declared package list.
#[derive(Debug, Parser)]
#[command(name = "pkgkeeper")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Packages to hold; any other held package is unheld.
    /// With no packages given, all holds are cleared.
    #[arg(value_name = "PACKAGE")]
    pub packages: Vec<String>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_package_names() {
        let cli = Cli::parse_from(["pkgkeeper", "nginx", "curl"]);
        assert_eq!(cli.packages, vec!["nginx".to_string(), "curl".to_string()]);
        assert!(!cli.debug);
    }

    #[test]
    fn parses_no_arguments_as_clear_all() {
        let cli = Cli::parse_from(["pkgkeeper"]);
        assert!(cli.packages.is_empty());
    }

    #[test]
    fn parses_debug_flag() {
        let cli = Cli::parse_from(["pkgkeeper", "--debug", "vim"]);
        assert!(cli.debug);
        assert_eq!(cli.packages, vec!["vim".to_string()]);
    }
}
