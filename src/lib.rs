//! # fresheye - interactive confirmation for the Fresh Eye style checker
//!
//! Fresh Eye checks Russian prose for words that sound too close to each
//! other within a short context. This crate holds its interactive side: the
//! single-keystroke confirmation prompt and the command line that configures
//! a checking run.
//!
//! ## Architecture
//!
//! - [`error`] - Centralized error types and handling
//! - [`input`] - Decision keys, Cyrillic aliases, and the line-draining key reader
//! - [`prompt`] - Query engine with a sticky default answer
//! - [`config`] - Checker settings and codepage names
//! - [`cli`] - Command-line parsing into a [`Config`]
//! - [`review`] - Per-file confirmation loop used by the binary
//!
//! ## Example
//!
//! ```
//! use fresheye::{DecisionKey, KeySet, Prompter, StickyAnswer};
//!
//! let mut prompter = Prompter::new(&b"n\n\n"[..], Vec::new());
//! let mut sticky = StickyAnswer::new();
//!
//! let first = prompter.ask(&mut sticky, Some("Replace"), KeySet::ALL).unwrap();
//! let second = prompter.ask(&mut sticky, Some("Replace"), KeySet::ALL).unwrap();
//! assert_eq!(first, Some(DecisionKey::No));
//! assert_eq!(second, Some(DecisionKey::No));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod prompt;
pub mod review;

pub use config::{Codepage, Config};
pub use error::{FreshEyeError, Result};
pub use input::{DecisionKey, KeyRead, KeyReader, KeySet};
pub use prompt::{Prompter, StickyAnswer};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
