//! Hold-marker synchronization.
//!
//! A run is a single pass: validate the requested packages, read the current
//! hold set, diff, apply. Validation happens in full before any mutation, so
//! an uninstalled package aborts the run with the hold set untouched. Once
//! the apply phase starts there is no rollback: a failure partway leaves the
//! already-issued holds/unholds in effect.

use std::collections::BTreeSet;

use crate::apt::PackageBackend;
use crate::error::{PkgkeeperError, Result};

/// Hold changes needed to move the current set to the desired set.
///
/// `add` and `remove` are disjoint by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerDiff {
    /// Packages to put on hold.
    pub add: Vec<String>,

    /// Packages to release from hold.
    pub remove: Vec<String>,
}

impl MarkerDiff {
    /// Whether the current set already equals the desired set.
    pub fn is_empty(&self) -> bool {
        self.add.is_empty() && self.remove.is_empty()
    }
}

/// Outcome of a synchronization run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Current hold set already matched the desired set.
    Unchanged,

    /// Hold changes were applied.
    Applied(MarkerDiff),
}

/// Build the desired hold set from the requested package names.
///
/// Fails fast on the first name that is not installed; duplicates collapse
/// into the set silently.
pub fn desired_markers<B: PackageBackend>(
    backend: &B,
    requested: &[String],
) -> Result<BTreeSet<String>> {
    let mut desired = BTreeSet::new();
    for name in requested {
        if backend.package_installed(name)? {
            desired.insert(name.clone());
        } else {
            return Err(PkgkeeperError::PackageNotInstalled {
                package: name.clone(),
            });
        }
    }
    Ok(desired)
}

/// Compute the hold changes between the current and desired sets.
pub fn diff_markers(current: &BTreeSet<String>, desired: &BTreeSet<String>) -> MarkerDiff {
    MarkerDiff {
        add: desired.difference(current).cloned().collect(),
        remove: current.difference(desired).cloned().collect(),
    }
}

/// Synchronize the system hold set with the requested package list.
///
/// An empty `requested` list clears all holds.
pub fn synchronize<B: PackageBackend>(backend: &B, requested: &[String]) -> Result<SyncOutcome> {
    let desired = desired_markers(backend, requested)?;
    let current = backend.held_packages()?;

    tracing::debug!(?current, ?desired, "hold sets read");

    let diff = diff_markers(&current, &desired);
    if diff.is_empty() {
        tracing::debug!("hold set already in sync, nothing to do");
        return Ok(SyncOutcome::Unchanged);
    }

    for name in &diff.add {
        tracing::debug!(package = %name, "marking hold");
        backend.hold(name)?;
    }
    for name in &diff.remove {
        tracing::debug!(package = %name, "clearing hold");
        backend.unhold(name)?;
    }

    Ok(SyncOutcome::Applied(diff))
}
