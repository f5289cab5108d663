//! PKGkeeper - apt hold-marker synchronization.
//!
//! PKGkeeper makes the set of held packages on a Debian-based system match
//! the package list it is invoked with: requested packages get held, every
//! other held package gets unheld. Running it twice with the same arguments
//! changes nothing the second time.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`apt`] - External `dpkg-query` / `apt-mark` collaborators
//! - [`sync`] - Desired-set validation, diff computation, apply loop
//!
//! # Example
//!
//! ```
//! use std::collections::BTreeSet;
//! use pkgkeeper::sync::diff_markers;
//!
//! let current: BTreeSet<String> = ["nginx".to_string()].into_iter().collect();
//! let desired: BTreeSet<String> = ["vim".to_string()].into_iter().collect();
//! let diff = diff_markers(&current, &desired);
//! assert_eq!(diff.add, vec!["vim".to_string()]);
//! assert_eq!(diff.remove, vec!["nginx".to_string()]);
//! ```

pub mod apt;
pub mod cli;
pub mod error;
pub mod sync;

pub use error::{PkgkeeperError, Result};
