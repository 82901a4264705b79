//! # sigsplit
//!
//! Two small text utilities: a parser that turns Java-like method
//! declarations into structured descriptors, and a splitter that tokenizes
//! strings on a class of delimiter characters.

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Runtime settings read from the environment
pub mod config;
/// For all parsers used
pub mod parsers;
/// Method signature parsing
pub mod signature;
/// Delimiter based string splitting
pub mod splitter;
/// Data model shared by the parsers
pub mod types;

pub use signature::{SignatureError, SignatureParser, parse_signature};
pub use splitter::{DelimiterSplitter, split_by_delimiters};
pub use types::{AccessModifier, Argument, MethodDescriptor, UnknownAccessModifier};
