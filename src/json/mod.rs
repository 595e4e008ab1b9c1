//! JSON value model, parser and printer.
//!
//! # Architecture
//!
//! - [`node`] - `Node` tagged union and `Document` wrapper
//! - [`options`] - parser strictness and nesting limits
//! - [`reader`] - character cursor with one character of putback
//! - [`parser`] - recursive descent parser
//! - [`printer`] - canonical text output
//!
//! # Limitations
//!
//! Unicode escapes (`\uXXXX`) are not supported and fail with
//! [`ParsingError::InvalidEscape`](crate::ParsingError::InvalidEscape).
//! Numbers are limited to `i32` and finite `f64`; a double literal that
//! overflows fails with
//! [`ParsingError::InvalidNumber`](crate::ParsingError::InvalidNumber).
//! Stream input must be UTF-8, otherwise loading fails with
//! [`ParsingError::InvalidUtf8`](crate::ParsingError::InvalidUtf8).
//!
//! # Example
//!
//! ```
//! use json_node::json::{load_str, to_json_string, Node};
//!
//! let doc = load_str("{\"b\": [1, 2.5], \"a\": \"x\"}").unwrap();
//! assert!(doc.root().get("b").unwrap().is_array());
//!
//! // Keys print in sorted order
//! assert_eq!(
//!     to_json_string(doc.root()),
//!     "{ \"a\" : \"x\", \"b\" : [1,2.5]}"
//! );
//! assert_eq!(doc.root().get("a"), Some(&Node::from("x")));
//! ```

pub mod node;
pub mod options;
pub mod parser;
pub mod printer;
pub mod reader;

pub use node::{Array, Dict, Document, Node};
pub use options::ParseOptions;
pub use parser::{load, load_str, load_str_with_options, load_with_options, Parser};
pub use printer::{print, to_json_string, NodePrinter};
