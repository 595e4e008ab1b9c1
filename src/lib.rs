//! json-node - JSON value model with a recursive descent parser and a
//! canonical printer.
//!
//! The crate is a round-trip codec between JSON text and an in-memory
//! [`Node`] tree: [`load_str`] parses, [`to_json_string`] / [`print`]
//! serialize, and `load_str(&to_json_string(&v))` gives back `v` for any
//! value without floating point numbers.
//!
//! # Architecture
//!
//! - [`json`] - value model, parser and printer
//! - [`error`] - `ParsingError`, `TypeMismatch` and the crate `Error`
//! - [`conformance`] - corpus-driven conformance runner
//!
//! # Example
//!
//! ```
//! use json_node::{load_str, Node};
//!
//! let doc = load_str("[1, 2.5, \"three\"]").unwrap();
//! let items = doc.root().as_array().unwrap();
//!
//! assert!(items[0].is_int());
//! assert!(items[1].is_pure_double());
//! assert_eq!(items[2].as_string().unwrap(), "three");
//! assert!(Node::Int(1).as_string().is_err());
//! ```

// Library code reports every failure through Result.
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(missing_docs)]

pub mod conformance;
pub mod error;
pub mod json;

// Re-export commonly used types
pub use error::{Error, ParseResult, ParsingError, Result, TypeMismatch};
pub use json::{
    load, load_str, load_str_with_options, load_with_options, print, to_json_string, Array,
    Dict, Document, Node, ParseOptions,
};
