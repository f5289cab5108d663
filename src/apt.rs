//! External package-manager collaborators.
//!
//! PKGkeeper never touches dpkg state itself; everything goes through two
//! fixed external tools:
//!
//! - `dpkg-query` answers "is this package installed?"
//! - `apt-mark` reads (`showhold`) and mutates (`hold`/`unhold`) the hold set
//!
//! The [`PackageBackend`] trait is the seam between the synchronization logic
//! and those tools; [`SystemApt`] is the real implementation. Tests swap in
//! an in-memory backend.

use std::collections::BTreeSet;
use std::process::Command;

use crate::error::{PkgkeeperError, Result};

/// Substring of the dpkg status field that marks an installed package.
const INSTALLED_MARKER: &str = "ok installed";

/// Read and mutate package hold state.
///
/// All methods are blocking; each maps to a single child-process invocation
/// in the real implementation. No method retries.
pub trait PackageBackend {
    /// Whether the package is currently installed.
    ///
    /// An unknown package is `Ok(false)`; only a failure to run the query
    /// itself is an error.
    fn package_installed(&self, name: &str) -> Result<bool>;

    /// The set of packages currently marked hold.
    fn held_packages(&self) -> Result<BTreeSet<String>>;

    /// Mark a package hold.
    fn hold(&self, name: &str) -> Result<()>;

    /// Clear the hold marker from a package.
    fn unhold(&self, name: &str) -> Result<()>;
}

/// [`PackageBackend`] backed by the system `dpkg-query` and `apt-mark` tools.
///
/// Tool names are resolved through `PATH` at invocation time.
pub struct SystemApt {
    dpkg_query: String,
    apt_mark: String,
}

impl Default for SystemApt {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemApt {
    /// Create a backend using the standard tool names.
    pub fn new() -> Self {
        Self {
            dpkg_query: "dpkg-query".to_string(),
            apt_mark: "apt-mark".to_string(),
        }
    }

    /// Override the tool names (used by tests to point at stubs).
    pub fn with_tools(dpkg_query: &str, apt_mark: &str) -> Self {
        Self {
            dpkg_query: dpkg_query.to_string(),
            apt_mark: apt_mark.to_string(),
        }
    }

    /// Run `apt-mark <action> <name>`, discarding output.
    ///
    /// Only a spawn failure is an error; apt-mark's own exit status is not
    /// inspected.
    fn mark(&self, name: &str, action: &str) -> Result<()> {
        Command::new(&self.apt_mark)
            .args([action, name])
            .output()
            .map_err(|e| PkgkeeperError::MutationFailed {
                package: name.to_string(),
                message: e.to_string(),
            })?;
        Ok(())
    }
}

impl PackageBackend for SystemApt {
    fn package_installed(&self, name: &str) -> Result<bool> {
        let output = Command::new(&self.dpkg_query)
            .args(["-W", "-f=${Status}", name])
            .output()
            .map_err(|e| PkgkeeperError::QueryFailed {
                command: format!("{} -W {}", self.dpkg_query, name),
                message: e.to_string(),
            })?;

        // dpkg-query exits non-zero for unknown packages; that is "not
        // installed", not a query failure.
        let status = String::from_utf8_lossy(&output.stdout);
        Ok(status.contains(INSTALLED_MARKER))
    }

    fn held_packages(&self) -> Result<BTreeSet<String>> {
        let command = format!("{} showhold", self.apt_mark);
        let output = Command::new("sh")
            .args(["-c", &command])
            .output()
            .map_err(|e| PkgkeeperError::QueryFailed {
                command: command.clone(),
                message: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(PkgkeeperError::QueryFailed {
                command,
                message: format!(
                    "exit code {:?}: {}",
                    output.status.code(),
                    String::from_utf8_lossy(&output.stderr).trim()
                ),
            });
        }

        Ok(parse_hold_list(&String::from_utf8_lossy(&output.stdout)))
    }

    fn hold(&self, name: &str) -> Result<()> {
        self.mark(name, "hold")
    }

    fn unhold(&self, name: &str) -> Result<()> {
        self.mark(name, "unhold")
    }
}

/// Parse `apt-mark showhold` output: one package name per line.
pub fn parse_hold_list(output: &str) -> BTreeSet<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hold_list_splits_lines() {
        let holds = parse_hold_list("nginx\ncurl\n");
        assert_eq!(holds.len(), 2);
        assert!(holds.contains("nginx"));
        assert!(holds.contains("curl"));
    }

    #[test]
    fn parse_hold_list_empty_output() {
        assert!(parse_hold_list("").is_empty());
        assert!(parse_hold_list("\n\n").is_empty());
    }

    #[test]
    fn parse_hold_list_trims_whitespace() {
        let holds = parse_hold_list("  nginx  \n\tcurl\n");
        assert!(holds.contains("nginx"));
        assert!(holds.contains("curl"));
    }

    #[test]
    fn parse_hold_list_collapses_duplicates() {
        let holds = parse_hold_list("nginx\nnginx\n");
        assert_eq!(holds.len(), 1);
    }

    #[test]
    fn missing_query_tool_is_query_failure() {
        let apt = SystemApt::with_tools("this-command-does-not-exist-12345", "apt-mark");
        let err = apt.package_installed("nginx").unwrap_err();
        assert!(matches!(err, PkgkeeperError::QueryFailed { .. }));
    }

    #[test]
    fn missing_mark_tool_is_mutation_failure() {
        let apt = SystemApt::with_tools("dpkg-query", "this-command-does-not-exist-12345");
        let err = apt.hold("nginx").unwrap_err();
        assert!(matches!(
            err,
            PkgkeeperError::MutationFailed { ref package, .. } if package == "nginx"
        ));
    }

    #[test]
    fn failing_showhold_is_query_failure() {
        // `false` exists everywhere and exits 1 with no output.
        let apt = SystemApt::with_tools("dpkg-query", "false");
        let err = apt.held_packages().unwrap_err();
        assert!(matches!(err, PkgkeeperError::QueryFailed { .. }));
    }
}
