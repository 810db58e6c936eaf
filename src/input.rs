//! Input subsystem: decision keys and the console key reader.
//!
//! [`keys`] holds the pure classification logic (case folding and the Cyrillic
//! alias table); [`reader`] applies it to a live byte stream.

pub mod keys;
pub mod reader;

// Modules outside this crate should prefer importing from `crate::input`
// rather than reaching into submodules.
pub use keys::{classify, fold_case, DecisionKey, KeySet, ALIAS_TABLE};
pub use reader::{KeyRead, KeyReader};
