//! Canonical JSON text output.
//!
//! Every node has exactly one textual form:
//!
//! - objects print as `{ "a" : 1, "b" : 2}`, keys in map order
//! - arrays print as `[1,2,3]`
//! - strings escape only `\n`, `\r`, `\t`, `"` and `\`
//! - doubles use the shortest representation that reads back to the same
//!   `f64`, with a `.0` suffix on integral values so they stay doubles
//!
//! Output never ends with a newline.

use std::fmt::{self, Write};
use std::io;

use log::debug;

use super::node::{Array, Dict, Document, Node};

/// Writes nodes to a `fmt::Write` sink.
pub struct NodePrinter<'w, W: Write> {
    out: &'w mut W,
}

impl<'w, W: Write> NodePrinter<'w, W> {
    /// Create a printer over the given sink.
    pub fn new(out: &'w mut W) -> Self {
        Self { out }
    }

    /// Print a node and all of its descendants.
    pub fn print(&mut self, node: &Node) -> fmt::Result {
        match node {
            Node::Null => self.out.write_str("null"),
            Node::Bool(true) => self.out.write_str("true"),
            Node::Bool(false) => self.out.write_str("false"),
            Node::Int(n) => write!(self.out, "{}", n),
            Node::Double(d) => write!(self.out, "{:?}", d),
            Node::String(s) => self.print_string(s),
            Node::Array(arr) => self.print_array(arr),
            Node::Object(map) => self.print_object(map),
        }
    }

    fn print_string(&mut self, s: &str) -> fmt::Result {
        self.out.write_char('"')?;
        for ch in s.chars() {
            match ch {
                '\n' => self.out.write_str("\\n")?,
                '\r' => self.out.write_str("\\r")?,
                '\t' => self.out.write_str("\\t")?,
                '"' => self.out.write_str("\\\"")?,
                '\\' => self.out.write_str("\\\\")?,
                c => self.out.write_char(c)?,
            }
        }
        self.out.write_char('"')
    }

    fn print_array(&mut self, arr: &Array) -> fmt::Result {
        self.out.write_char('[')?;
        for (i, value) in arr.iter().enumerate() {
            if i > 0 {
                self.out.write_char(',')?;
            }
            self.print(value)?;
        }
        self.out.write_char(']')
    }

    fn print_object(&mut self, map: &Dict) -> fmt::Result {
        self.out.write_char('{')?;
        for (i, (key, value)) in map.iter().enumerate() {
            if i > 0 {
                self.out.write_char(',')?;
            }
            self.out.write_char(' ')?;
            self.print_string(key)?;
            self.out.write_str(" : ")?;
            self.print(value)?;
        }
        self.out.write_char('}')
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        NodePrinter::new(f).print(self)
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.root(), f)
    }
}

/// Serialize a node to its canonical text.
pub fn to_json_string(node: &Node) -> String {
    node.to_string()
}

/// Write the canonical text of a document to an output stream.
pub fn print<W: io::Write>(doc: &Document, output: &mut W) -> io::Result<()> {
    let text = doc.to_string();
    output.write_all(text.as_bytes())?;
    debug!("printed {} bytes", text.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_primitives() {
        assert_eq!(to_json_string(&Node::Null), "null");
        assert_eq!(to_json_string(&Node::Bool(true)), "true");
        assert_eq!(to_json_string(&Node::Bool(false)), "false");
        assert_eq!(to_json_string(&Node::Int(42)), "42");
        assert_eq!(to_json_string(&Node::Int(-7)), "-7");
    }

    #[test]
    fn test_print_doubles() {
        assert_eq!(to_json_string(&Node::Double(3.14)), "3.14");
        assert_eq!(to_json_string(&Node::Double(3.0)), "3.0");
        assert_eq!(to_json_string(&Node::Double(-0.5)), "-0.5");
        assert_eq!(to_json_string(&Node::Double(1e20)), "1e20");
    }

    #[test]
    fn test_print_string_escapes() {
        assert_eq!(to_json_string(&Node::from("a\nb")), "\"a\\nb\"");
        assert_eq!(to_json_string(&Node::from("a\tb\rc")), "\"a\\tb\\rc\"");
        assert_eq!(to_json_string(&Node::from("a\"b")), "\"a\\\"b\"");
        assert_eq!(to_json_string(&Node::from("a\\b")), "\"a\\\\b\"");
    }

    #[test]
    fn test_other_control_chars_verbatim() {
        assert_eq!(to_json_string(&Node::from("\x08\x0C")), "\"\x08\x0C\"");
    }

    #[test]
    fn test_print_array() {
        let arr = Node::Array(vec![Node::Int(1), Node::Int(2), Node::Int(3)]);
        assert_eq!(to_json_string(&arr), "[1,2,3]");
        assert_eq!(to_json_string(&Node::Array(vec![])), "[]");
    }

    #[test]
    fn test_print_object_sorted_keys() {
        let mut obj = Dict::new();
        obj.insert("b".to_string(), Node::Int(1));
        obj.insert("a".to_string(), Node::Int(2));
        assert_eq!(to_json_string(&Node::Object(obj)), "{ \"a\" : 2, \"b\" : 1}");
        assert_eq!(to_json_string(&Node::Object(Dict::new())), "{}");
    }

    #[test]
    fn test_print_object_escapes_keys() {
        let mut obj = Dict::new();
        obj.insert("q\"k".to_string(), Node::Null);
        assert_eq!(to_json_string(&Node::Object(obj)), "{ \"q\\\"k\" : null}");
    }

    #[test]
    fn test_print_nested() {
        let mut inner = Dict::new();
        inner.insert("x".to_string(), Node::Int(1));

        let mut outer = Dict::new();
        outer.insert("arr".to_string(), Node::Array(vec![Node::Int(1)]));
        outer.insert("obj".to_string(), Node::Object(inner));

        assert_eq!(
            to_json_string(&Node::Object(outer)),
            "{ \"arr\" : [1], \"obj\" : { \"x\" : 1}}"
        );
    }

    #[test]
    fn test_print_to_stream() {
        let doc = Document::new(Node::Array(vec![Node::Null, Node::Bool(true)]));
        let mut out = Vec::new();
        print(&doc, &mut out).unwrap();
        assert_eq!(out, b"[null,true]");
    }

    #[test]
    fn test_display_matches_printer() {
        let doc = Document::new(Node::from("x"));
        assert_eq!(doc.to_string(), "\"x\"");
        assert_eq!(format!("{}", doc.root()), to_json_string(doc.root()));
    }
}
